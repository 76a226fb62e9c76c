use serde::Serialize;
use std::ops::RangeInclusive;

/// Vehicle categories reported by an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    Car,
    Bus,
    Truck,
    Motorcycle,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 4] = [
        VehicleClass::Car,
        VehicleClass::Bus,
        VehicleClass::Truck,
        VehicleClass::Motorcycle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VehicleClass::Car => "car",
            VehicleClass::Bus => "bus",
            VehicleClass::Truck => "truck",
            VehicleClass::Motorcycle => "motorcycle",
        }
    }

    /// Inclusive range the mock analyzer draws this class's count from
    pub fn count_range(self) -> RangeInclusive<u32> {
        match self {
            VehicleClass::Car => 50..=200,
            VehicleClass::Bus => 5..=20,
            VehicleClass::Truck => 10..=30,
            VehicleClass::Motorcycle => 20..=50,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VehicleCounts {
    pub car: u32,
    pub bus: u32,
    pub truck: u32,
    pub motorcycle: u32,
}

impl VehicleCounts {
    pub fn get(&self, class: VehicleClass) -> u32 {
        match class {
            VehicleClass::Car => self.car,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck,
            VehicleClass::Motorcycle => self.motorcycle,
        }
    }

    pub fn set(&mut self, class: VehicleClass, count: u32) {
        match class {
            VehicleClass::Car => self.car = count,
            VehicleClass::Bus => self.bus = count,
            VehicleClass::Truck => self.truck = count,
            VehicleClass::Motorcycle => self.motorcycle = count,
        }
    }

    pub fn total(&self) -> u32 {
        VehicleClass::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficDensity {
    Low,
    Medium,
    High,
}

impl TrafficDensity {
    pub const ALL: [TrafficDensity; 3] = [
        TrafficDensity::Low,
        TrafficDensity::Medium,
        TrafficDensity::High,
    ];
}

/// A detour suggestion attached to a track point. `points` holds `[lat, lng]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeRoute {
    pub name: String,
    pub density: TrafficDensity,
    pub points: [[f64; 2]; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// km/h
    pub speed: f64,
    pub road_name: String,
    pub traffic_density: TrafficDensity,
    pub alternative_routes: Vec<AlternativeRoute>,
}

/// Document handed back to the process that requested the analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub counts: VehicleCounts,
    pub processed_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub gps_points: Vec<GpsPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accessors_cover_every_class() {
        let mut counts = VehicleCounts::default();
        for (i, class) in VehicleClass::ALL.iter().enumerate() {
            counts.set(*class, (i as u32 + 1) * 10);
        }
        assert_eq!(counts.car, 10);
        assert_eq!(counts.motorcycle, 40);
        assert_eq!(counts.get(VehicleClass::Truck), 30);
        assert_eq!(counts.total(), 100);
    }

    #[test]
    fn test_result_serializes_caller_key_names() {
        let result = AnalysisResult {
            counts: VehicleCounts { car: 1, bus: 2, truck: 3, motorcycle: 4 },
            processed_url: None,
            thumbnail_url: None,
            gps_points: vec![GpsPoint {
                latitude: 1.0,
                longitude: 2.0,
                speed: 42.5,
                road_name: "Broadway".to_string(),
                traffic_density: TrafficDensity::High,
                alternative_routes: Vec::new(),
            }],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.starts_with(r#"{"counts":{"car":1,"bus":2,"truck":3,"motorcycle":4}"#));
        assert!(json.contains(r#""processedUrl":null"#));
        assert!(json.contains(r#""thumbnailUrl":null"#));
        assert!(json.contains(r#""gpsPoints":[{"latitude":1.0"#));
        assert!(json.contains(r#""road_name":"Broadway""#));
        assert!(json.contains(r#""traffic_density":"high""#));
        assert!(json.contains(r#""alternative_routes":[]"#));
    }

    #[test]
    fn test_class_names_match_count_keys() {
        let names: Vec<&str> = VehicleClass::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["car", "bus", "truck", "motorcycle"]);
        assert_eq!(VehicleClass::Bus.count_range(), 5..=20);
    }
}

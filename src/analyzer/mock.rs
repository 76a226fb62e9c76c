use anyhow::Result;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::time::Duration;

use super::result::{
    AlternativeRoute, AnalysisResult, GpsPoint, TrafficDensity, VehicleClass, VehicleCounts,
};
use super::{AnalysisRequest, Analyzer};
use crate::shared::constants;
use crate::utils::time_utils;

/// Fabricates counts and a straight-line GPS track without touching the video.
pub struct MockAnalyzer<R: Rng> {
    rng: R,
    latency: Duration,
    gps_points: usize,
}

impl<R: Rng> MockAnalyzer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            latency: Duration::from_millis(constants::DEFAULT_DELAY_MS),
            gps_points: constants::DEFAULT_GPS_POINTS,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_gps_points(mut self, gps_points: usize) -> Self {
        self.gps_points = gps_points;
        self
    }

    fn sample_counts(&mut self) -> VehicleCounts {
        let mut counts = VehicleCounts::default();
        for class in VehicleClass::ALL {
            counts.set(class, self.rng.random_range(class.count_range()));
        }
        counts
    }

    fn sample_origin(&mut self) -> (f64, f64) {
        let jitter = constants::BASE_JITTER_DEG;
        let lat = constants::BASE_LATITUDE + self.rng.random_range(-jitter..=jitter);
        let lng = constants::BASE_LONGITUDE + self.rng.random_range(-jitter..=jitter);
        (lat, lng)
    }

    fn sample_track(&mut self, base_lat: f64, base_lng: f64) -> Vec<GpsPoint> {
        let routes = alternative_routes(base_lat, base_lng);

        (0..self.gps_points)
            .map(|i| {
                let step = i as f64 * constants::TRACK_STEP_DEG;
                let density = *TrafficDensity::ALL
                    .choose(&mut self.rng)
                    .unwrap_or(&TrafficDensity::Low);
                let road = constants::ROAD_NAMES
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(constants::ROAD_NAMES[0]);

                GpsPoint {
                    latitude: base_lat + step,
                    longitude: base_lng + step,
                    speed: self
                        .rng
                        .random_range(constants::SPEED_MIN_KMH..constants::SPEED_MAX_KMH),
                    road_name: road.to_string(),
                    traffic_density: density,
                    alternative_routes: routes.clone(),
                }
            })
            .collect()
    }
}

impl<R: Rng> Analyzer for MockAnalyzer<R> {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn analyze(&mut self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        crate::utils::logger::debug(&format!(
            "mock analysis of {} (id={}), simulating {}ms",
            request.video_path.display(),
            request.video_id,
            self.latency.as_millis()
        ));
        time_utils::simulate_latency(self.latency);

        let counts = self.sample_counts();
        let (base_lat, base_lng) = self.sample_origin();
        let gps_points = self.sample_track(base_lat, base_lng);

        Ok(AnalysisResult {
            counts,
            processed_url: None,
            thumbnail_url: None,
            gps_points,
        })
    }
}

/// The two fixed detours, offset north and south of the track origin.
pub fn alternative_routes(base_lat: f64, base_lng: f64) -> Vec<AlternativeRoute> {
    let offset = constants::ALTERNATE_LATITUDE_OFFSET_DEG;
    let span = constants::ALTERNATE_LONGITUDE_SPAN_DEG;

    vec![
        AlternativeRoute {
            name: constants::SIDE_ROAD_NAME.to_string(),
            density: TrafficDensity::Low,
            points: [
                [base_lat + offset, base_lng],
                [base_lat + offset, base_lng + span],
            ],
        },
        AlternativeRoute {
            name: constants::ALTERNATE_HIGHWAY_NAME.to_string(),
            density: TrafficDensity::Medium,
            points: [
                [base_lat - offset, base_lng],
                [base_lat - offset, base_lng + span],
            ],
        },
    ]
}

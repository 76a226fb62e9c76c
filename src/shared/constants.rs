pub const APP_NAME: &str = "roadcount";

pub const MISSING_ARGUMENTS_MESSAGE: &str = "Missing arguments";

pub const DEFAULT_DELAY_MS: u64 = 2000;
pub const DEFAULT_GPS_POINTS: usize = 20;

// Track origin (lower Manhattan) and per-point step in degrees
pub const BASE_LATITUDE: f64 = 40.7128;
pub const BASE_LONGITUDE: f64 = -74.0060;
pub const BASE_JITTER_DEG: f64 = 0.01;
pub const TRACK_STEP_DEG: f64 = 0.001;

pub const SPEED_MIN_KMH: f64 = 30.0;
pub const SPEED_MAX_KMH: f64 = 80.0;

pub const ROAD_NAMES: &[&str] = &["Main St", "Broadway", "Oak Ave", "Highway 101"];

pub const SIDE_ROAD_NAME: &str = "Side Road A";
pub const ALTERNATE_HIGHWAY_NAME: &str = "Alternate Highway";
pub const ALTERNATE_LATITUDE_OFFSET_DEG: f64 = 0.002;
pub const ALTERNATE_LONGITUDE_SPAN_DEG: f64 = 0.01;

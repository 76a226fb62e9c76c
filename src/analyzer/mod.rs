pub mod capabilities;
pub mod mock;
pub mod result;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;

pub use capabilities::Capabilities;
pub use mock::MockAnalyzer;
pub use result::AnalysisResult;

/// One video to analyze, as named by the caller
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub video_path: PathBuf,
    pub video_id: String,
}

/// Turns a video into counts and a GPS track
pub trait Analyzer {
    fn name(&self) -> &'static str;
    fn analyze(&mut self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}

/// Knobs that shape an analyzer, resolved from the command line
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub seed: Option<u64>,
    pub latency: Duration,
    pub gps_points: usize,
}

/// Pick the analyzer for this run. Only the mock exists, so a detected
/// vision backend is reported and otherwise ignored.
pub fn select_analyzer(caps: &Capabilities, settings: &AnalyzerSettings) -> Box<dyn Analyzer> {
    if caps.vision_backend {
        crate::utils::logger::info("vision backend available but no detection pipeline is wired; using mock");
    } else {
        crate::utils::logger::info("no vision backend; using mock");
    }

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Box::new(
        MockAnalyzer::new(rng)
            .with_latency(settings.latency)
            .with_gps_points(settings.gps_points),
    )
}

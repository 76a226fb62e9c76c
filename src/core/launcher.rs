use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::analyzer::result::VehicleClass;
use crate::analyzer::{self, AnalysisRequest, AnalyzerSettings, Capabilities};
use crate::core::error::AnalysisError;
use crate::output;
use crate::utils::logger;
use crate::utils::time_utils::Timer;

/// Everything one invocation needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub video_path: Option<PathBuf>,
    pub video_id: Option<String>,
    pub settings: AnalyzerSettings,
}

impl RunConfig {
    fn request(&self) -> Option<AnalysisRequest> {
        Some(AnalysisRequest {
            video_path: self.video_path.clone()?,
            video_id: self.video_id.clone()?,
        })
    }
}

pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let Some(request) = config.request() else {
        logger::error("expected <video_path> <video_id>");
        output::emit_missing_arguments(out).context("Failed to write error document")?;
        return Err(AnalysisError::MissingArguments.into());
    };

    let caps = Capabilities::detect();
    logger::debug(&format!("capabilities: {}", caps.summary()));

    let mut analyzer = analyzer::select_analyzer(&caps, &config.settings);
    let timer = Timer::new();
    let result = analyzer
        .analyze(&request)
        .with_context(|| format!("{} analysis failed for {}", analyzer.name(), request.video_id))?;

    let breakdown: Vec<String> = VehicleClass::ALL
        .iter()
        .map(|c| format!("{}={}", c.name(), result.counts.get(*c)))
        .collect();
    logger::info(&format!(
        "video {} analyzed in {}ms: {} vehicles ({}), {} gps points",
        request.video_id,
        timer.elapsed_ms(),
        result.counts.total(),
        breakdown.join(" "),
        result.gps_points.len()
    ));

    output::emit(out, &result).context("Failed to write analysis result")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(video_path: Option<&str>, video_id: Option<&str>) -> RunConfig {
        RunConfig {
            video_path: video_path.map(PathBuf::from),
            video_id: video_id.map(str::to_string),
            settings: AnalyzerSettings { seed: Some(1), latency: Duration::ZERO, gps_points: 20 },
        }
    }

    #[test]
    fn test_missing_id_writes_error_document() {
        let mut out = Vec::new();
        let err = run(&config(Some("foo.mp4"), None), &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::MissingArguments)
        ));
        assert_eq!(String::from_utf8(out).unwrap(), "{\"error\": \"Missing arguments\"}\n");
    }

    #[test]
    fn test_success_writes_single_json_line() {
        let mut out = Vec::new();
        run(&config(Some("foo.mp4"), Some("abc123")), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let doc: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        for key in ["counts", "processedUrl", "thumbnailUrl", "gpsPoints"] {
            assert!(doc.get(key).is_some(), "missing {}", key);
        }
        assert!(doc["processedUrl"].is_null());
        assert_eq!(doc["gpsPoints"].as_array().unwrap().len(), 20);
    }

    #[test]
    fn test_nonexistent_video_is_not_opened() {
        let mut out = Vec::new();
        run(&config(Some("/definitely/not/here.mp4"), Some("x")), &mut out).unwrap();
        assert!(!out.is_empty());
    }
}

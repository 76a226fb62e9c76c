mod analyzer;
mod core;
mod output;
mod shared;
mod utils;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use crate::analyzer::AnalyzerSettings;
use crate::core::error::AnalysisError;
use crate::core::launcher::{self, RunConfig};
use crate::shared::constants;
use crate::utils::logger::{self, LogSink};

/// Analyze a traffic video and print vehicle counts and a GPS track as JSON
#[derive(Parser)]
#[command(name = constants::APP_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Video file to analyze
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    video_path: Option<PathBuf>,
    /// Identifier the caller uses for this video
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    video_id: Option<String>,
    /// Ignored trailing arguments
    #[arg(hide = true, allow_hyphen_values = true, allow_negative_numbers = true)]
    extra: Vec<String>,
    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = constants::DEFAULT_DELAY_MS, help = "Simulated processing time in milliseconds")]
    delay_ms: u64,
    #[arg(long, default_value_t = constants::DEFAULT_GPS_POINTS, help = "Number of points in the generated track")]
    gps_points: usize,
    /// Append diagnostics to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log informational and debug lines, not only errors
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            video_path: self.video_path.clone(),
            video_id: self.video_id.clone(),
            settings: AnalyzerSettings {
                seed: self.seed,
                latency: Duration::from_millis(self.delay_ms),
                gps_points: self.gps_points,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let sink = match &cli.log_file {
        Some(path) => LogSink::File(path.clone()),
        None => LogSink::Stderr,
    };
    logger::init(sink, cli.verbose);
    if !cli.extra.is_empty() {
        logger::debug(&format!("ignoring {} extra argument(s)", cli.extra.len()));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match launcher::run(&cli.run_config(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !matches!(e.downcast_ref::<AnalysisError>(), Some(AnalysisError::MissingArguments)) {
                logger::error(&format!("{:#}", e));
            }
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_two_seconds() {
        let cli = Cli::parse_from(["roadcount", "a.mp4", "b"]);
        assert_eq!(cli.delay_ms, 2000);
        assert_eq!(cli.run_config().settings.latency, Duration::from_secs(2));
        assert_eq!(cli.gps_points, 20);
    }

    #[test]
    fn test_hyphen_leading_positionals_are_values() {
        let cli = Cli::parse_from(["roadcount", "--delay-ms", "0", "foo.mp4", "-1"]);
        assert_eq!(cli.delay_ms, 0);
        assert_eq!(cli.video_path, Some(PathBuf::from("foo.mp4")));
        assert_eq!(cli.video_id.as_deref(), Some("-1"));

        let cli = Cli::parse_from(["roadcount", "-clip.mp4", "7"]);
        assert_eq!(cli.video_path, Some(PathBuf::from("-clip.mp4")));
        assert_eq!(cli.video_id.as_deref(), Some("7"));
    }

    #[test]
    fn test_options_still_parse_before_positionals() {
        let cli = Cli::parse_from(["roadcount", "--seed", "9", "-v", "clip.mp4", "x"]);
        assert_eq!(cli.seed, Some(9));
        assert!(cli.verbose);
        assert_eq!(cli.video_id.as_deref(), Some("x"));
    }
}

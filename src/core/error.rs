use std::fmt;

#[derive(Debug)]
pub enum AnalysisError {
    /// Fewer than two positional arguments
    MissingArguments,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::MissingArguments => write!(f, "missing arguments"),
            AnalysisError::IoError(e) => write!(f, "output error: {}", e),
            AnalysisError::JsonError(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::MissingArguments => None,
            AnalysisError::IoError(e) => Some(e),
            AnalysisError::JsonError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::IoError(err)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::JsonError(err)
    }
}

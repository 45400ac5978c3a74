use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid domain input: {message}")]
    InvalidInput { message: String },

    #[error("Scoring method {method} returned {actual} results for {expected} domains")]
    ResultCountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("Structural integrity violation for candidate cluster {number}: {detail}")]
    StructuralIntegrity { number: u32, detail: String },

    #[error("Results for method {method} were already recorded")]
    DuplicateMethodResults { method: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    ManifestError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

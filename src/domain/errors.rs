use thiserror::Error;

/// Fixed message shown for every insight action when no credential is configured.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "GenAI service not configured. API key missing.";

/// Errors raised by the prediction pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Prediction models unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error("Prediction error: {reason}")]
    PredictionFailed { reason: String },
}

/// Errors related to loading or invoking model artifacts
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read artifact {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to deserialize artifact {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    Dimension { expected: usize, actual: usize },

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Errors returned by a text-completion backend
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Request to text-completion service failed: {0}")]
    Transport(String),

    #[error("Text-completion service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode text-completion response: {0}")]
    Decode(String),

    #[error("Text-completion service returned no content")]
    EmptyResponse,
}

/// Errors raised when requesting a generated insight
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("No prediction available. Run a prediction first.")]
    NoPrediction,

    #[error("{}", SERVICE_UNAVAILABLE_MESSAGE)]
    ServiceUnavailable,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Errors raised while rendering or saving a report document
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while ingesting an uploaded dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {reason}")]
    Read { reason: String },

    #[error("Dataset is missing required column '{column}'")]
    MissingColumn { column: String },
}

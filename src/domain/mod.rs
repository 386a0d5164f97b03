// Uploaded data and aggregate totals
pub mod dataset;

// Domain-specific error types
pub mod errors;

// Insight kinds and responses
pub mod insight;

// Feature encoding
pub mod ml;

// Port interfaces
pub mod ports;

// Prediction inputs and results
pub mod prediction;

pub mod dataset;
pub mod genai;
pub mod mock;
pub mod ml;
pub mod report;

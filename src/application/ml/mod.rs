pub mod orchestrator;

pub use orchestrator::PredictionOrchestrator;

// Dataset KPIs and group-by totals
pub mod analytics;

// Generated insights: prompts and dispatch
pub mod insights;

// Prediction pipeline
pub mod ml;

// Per-user state
pub mod session;

// Service wiring
pub mod system;

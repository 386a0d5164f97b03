pub mod smartcore_store;

pub use smartcore_store::{SmartcoreModelStore, StandardScalerParams, load_models};

use crate::domain::prediction::PredictionInput;

pub const FEATURE_COUNT: usize = 5;

/// Ordered list of feature names.
/// This order MUST match exactly the column order the scaler was fit on.
/// Any change here is a breaking change for the model artifacts.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["Quantity", "Discount", "Year", "Month", "Quarter"];

/// Position of each feature inside a `FeatureVector`.
pub mod index {
    pub const QUANTITY: usize = 0;
    pub const DISCOUNT: usize = 1;
    pub const YEAR: usize = 2;
    pub const MONTH: usize = 3;
    pub const QUARTER: usize = 4;
}

/// Year baked into every prediction; the artifacts were trained against it.
pub const FIXED_YEAR: u32 = 2024;

/// Fixed-order numeric encoding consumed by the scaler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| self.0[i])
    }
}

/// Encodes an already range-checked input.
pub fn encode(input: &PredictionInput) -> FeatureVector {
    let mut values = [0.0; FEATURE_COUNT];
    values[index::QUANTITY] = f64::from(input.quantity);
    values[index::DISCOUNT] = input.discount;
    values[index::YEAR] = f64::from(FIXED_YEAR);
    values[index::MONTH] = f64::from(input.month);
    values[index::QUARTER] = f64::from(input.quarter);
    FeatureVector(values)
}

use crate::domain::errors::PredictionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 100;

/// The four user-supplied prediction parameters.
/// The year is not user-supplied; see `feature_registry::FIXED_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub quantity: u32,
    pub discount: f64, // 0.0..=1.0
    pub month: u32,
    pub quarter: u32,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            quantity: 5,
            discount: 0.1,
            month: 6,
            quarter: 2,
        }
    }
}

impl PredictionInput {
    /// Range-checks every field. No partial predictions: the first
    /// offending field is reported.
    pub fn validate(&self) -> Result<(), PredictionError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&self.quantity) {
            return Err(PredictionError::InvalidInput {
                field: "quantity",
                reason: format!(
                    "must be between {} and {}, got {}",
                    MIN_QUANTITY, MAX_QUANTITY, self.quantity
                ),
            });
        }

        if !self.discount.is_finite() || !(0.0..=1.0).contains(&self.discount) {
            return Err(PredictionError::InvalidInput {
                field: "discount",
                reason: format!("must be between 0.0 and 1.0, got {}", self.discount),
            });
        }

        if !(1..=12).contains(&self.month) {
            return Err(PredictionError::InvalidInput {
                field: "month",
                reason: format!("must be between 1 and 12, got {}", self.month),
            });
        }

        if !(1..=4).contains(&self.quarter) {
            return Err(PredictionError::InvalidInput {
                field: "quarter",
                reason: format!("must be between 1 and 4, got {}", self.quarter),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitCategory {
    High,
    Low,
}

impl ProfitCategory {
    /// Classifier label 1 means High, any other label means Low.
    pub fn from_label(label: i64) -> Self {
        if label == 1 { Self::High } else { Self::Low }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::High => "High Profit",
            Self::Low => "Low Profit",
        }
    }
}

impl fmt::Display for ProfitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Raw regression output. Not clamped: negative values are passed through.
    pub sales_estimate: f64,
    pub profit_category: ProfitCategory,
}

impl PredictionResult {
    pub fn is_negative_estimate(&self) -> bool {
        self.sales_estimate < 0.0
    }
}

/// A successful prediction together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub input: PredictionInput,
    pub result: PredictionResult,
    pub predicted_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(input: PredictionInput, result: PredictionResult) -> Self {
        Self {
            input,
            result,
            predicted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(quantity: u32, discount: f64, month: u32, quarter: u32) -> PredictionInput {
        PredictionInput {
            quantity,
            discount,
            month,
            quarter,
        }
    }

    #[test]
    fn test_default_input_is_valid() {
        assert!(PredictionInput::default().validate().is_ok());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(input(1, 0.0, 1, 1).validate().is_ok());
        assert!(input(100, 1.0, 12, 4).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let cases = [
            (input(0, 0.1, 6, 2), "quantity"),
            (input(101, 0.1, 6, 2), "quantity"),
            (input(5, -0.01, 6, 2), "discount"),
            (input(5, 1.5, 6, 2), "discount"),
            (input(5, f64::NAN, 6, 2), "discount"),
            (input(5, 0.1, 0, 2), "month"),
            (input(5, 0.1, 13, 2), "month"),
            (input(5, 0.1, 6, 0), "quarter"),
            (input(5, 0.1, 6, 5), "quarter"),
        ];

        for (candidate, expected_field) in cases {
            match candidate.validate() {
                Err(PredictionError::InvalidInput { field, .. }) => {
                    assert_eq!(field, expected_field, "input {:?}", candidate)
                }
                other => panic!("expected InvalidInput for {:?}, got {:?}", candidate, other),
            }
        }
    }

    #[test]
    fn test_profit_category_from_label() {
        assert_eq!(ProfitCategory::from_label(1), ProfitCategory::High);
        assert_eq!(ProfitCategory::from_label(0), ProfitCategory::Low);
        assert_eq!(ProfitCategory::from_label(-1), ProfitCategory::Low);
        assert_eq!(ProfitCategory::from_label(2), ProfitCategory::Low);
        assert_eq!(ProfitCategory::High.to_string(), "High");
        assert_eq!(ProfitCategory::Low.display_name(), "Low Profit");
    }

    #[test]
    fn test_negative_estimate_flag() {
        let result = PredictionResult {
            sales_estimate: -12.5,
            profit_category: ProfitCategory::Low,
        };
        assert!(result.is_negative_estimate());
    }
}

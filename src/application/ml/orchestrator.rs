use crate::application::session::SessionState;
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::feature_registry;
use crate::domain::ports::{LoadedModels, ModelStore};
use crate::domain::prediction::{
    PredictionInput, PredictionRecord, PredictionResult, ProfitCategory,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{info, warn};

/// Runs validated inputs through the scaler and both predictors.
#[derive(Debug, Clone)]
pub struct PredictionOrchestrator {
    models: LoadedModels,
}

impl PredictionOrchestrator {
    pub fn new(models: LoadedModels) -> Self {
        if let LoadedModels::Unavailable { reason } = &models {
            warn!("Prediction disabled for this session: {}", reason);
        }
        Self { models }
    }

    pub fn with_store(store: Arc<dyn ModelStore>) -> Self {
        Self::new(LoadedModels::Ready(store))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.models, LoadedModels::Ready(_))
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.models {
            LoadedModels::Ready(_) => None,
            LoadedModels::Unavailable { reason } => Some(reason),
        }
    }

    /// Pure prediction: validate, encode, scale, regress, classify.
    /// Input validation happens before any model is touched.
    pub fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, PredictionError> {
        input.validate()?;

        let features = feature_registry::encode(input);

        let models = match &self.models {
            LoadedModels::Ready(store) => store,
            LoadedModels::Unavailable { reason } => {
                return Err(PredictionError::ModelUnavailable {
                    reason: reason.clone(),
                });
            }
        };

        let scaled = guarded("scaler", || models.transform(&features))?;
        let sales_estimate = guarded("regression model", || models.predict_regression(&scaled))?;
        if !sales_estimate.is_finite() {
            return Err(PredictionError::PredictionFailed {
                reason: format!("regression model returned non-finite value {}", sales_estimate),
            });
        }
        let label = guarded("classification model", || {
            models.predict_classification(&scaled)
        })?;

        Ok(PredictionResult {
            sales_estimate,
            profit_category: ProfitCategory::from_label(label),
        })
    }

    /// Predicts and, on success, replaces the session's current prediction.
    /// A failure leaves the previous prediction untouched.
    pub fn run<'s>(
        &self,
        session: &'s mut SessionState,
        input: PredictionInput,
    ) -> Result<&'s PredictionRecord, PredictionError> {
        match self.predict(&input) {
            Ok(result) => {
                info!(
                    "Prediction: sales={:.2} profit={} (qty={}, discount={}, month={}, quarter={})",
                    result.sales_estimate,
                    result.profit_category,
                    input.quantity,
                    input.discount,
                    input.month,
                    input.quarter
                );
                if result.is_negative_estimate() {
                    warn!(
                        "Regression model returned a negative sales estimate ({:.2})",
                        result.sales_estimate
                    );
                }
                Ok(session.record_prediction(input, result))
            }
            Err(e) => {
                warn!("Prediction rejected: {}", e);
                Err(e)
            }
        }
    }
}

/// Invokes one model stage, converting both errors and panics into
/// `PredictionFailed`.
fn guarded<T>(
    stage: &str,
    call: impl FnOnce() -> Result<T, ModelError>,
) -> Result<T, PredictionError> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(PredictionError::PredictionFailed {
            reason: format!("{}: {}", stage, e),
        }),
        Err(payload) => Err(PredictionError::PredictionFailed {
            reason: format!("{} panicked: {}", stage, panic_message(payload.as_ref())),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock::StubModelStore;

    #[test]
    fn test_unavailable_models_fail_after_validation() {
        let orchestrator = PredictionOrchestrator::new(LoadedModels::Unavailable {
            reason: "scaler.json not found".to_string(),
        });
        assert!(!orchestrator.is_ready());

        match orchestrator.predict(&PredictionInput::default()) {
            Err(PredictionError::ModelUnavailable { reason }) => {
                assert!(reason.contains("scaler.json"))
            }
            other => panic!("expected ModelUnavailable, got {:?}", other),
        }

        // Invalid input is still reported as such, even without models
        let bad = PredictionInput {
            month: 13,
            ..PredictionInput::default()
        };
        assert!(matches!(
            orchestrator.predict(&bad),
            Err(PredictionError::InvalidInput { field: "month", .. })
        ));
    }

    #[test]
    fn test_non_finite_regression_output_is_failure() {
        let store = Arc::new(StubModelStore::new(f64::NAN, 1));
        let orchestrator = PredictionOrchestrator::with_store(store);
        assert!(matches!(
            orchestrator.predict(&PredictionInput::default()),
            Err(PredictionError::PredictionFailed { .. })
        ));
    }

    #[test]
    fn test_negative_estimate_passed_through() {
        let store = Arc::new(StubModelStore::new(-42.0, 0));
        let orchestrator = PredictionOrchestrator::with_store(store);
        let result = orchestrator.predict(&PredictionInput::default()).unwrap();
        assert_eq!(result.sales_estimate, -42.0);
        assert!(result.is_negative_estimate());
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}

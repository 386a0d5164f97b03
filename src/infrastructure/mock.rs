use crate::domain::errors::{ModelError, ServiceError};
use crate::domain::ml::feature_registry::FeatureVector;
use crate::domain::ports::{ModelStore, TextCompletionService};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a `StubModelStore` should misbehave.
#[derive(Debug, Clone)]
pub enum StubFailure {
    ScalerError(String),
    RegressionError(String),
    ClassificationPanic(String),
}

/// Deterministic stand-in for the serialized artifacts.
/// The scaler is the identity; both predictors return fixed values.
pub struct StubModelStore {
    sales_estimate: f64,
    label: i64,
    failure: Option<StubFailure>,
    calls: AtomicUsize,
    last_features: Mutex<Option<Vec<f64>>>,
}

impl StubModelStore {
    pub fn new(sales_estimate: f64, label: i64) -> Self {
        Self {
            sales_estimate,
            label,
            failure: None,
            calls: AtomicUsize::new(0),
            last_features: Mutex::new(None),
        }
    }

    pub fn failing(failure: StubFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(0.0, 0)
        }
    }

    /// Number of model-stage invocations (scaler, regression, classification).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Feature vector most recently handed to the scaler.
    pub fn last_features(&self) -> Option<Vec<f64>> {
        self.last_features.lock().ok().and_then(|g| g.clone())
    }
}

impl ModelStore for StubModelStore {
    fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_features.lock() {
            *last = Some(features.to_vec());
        }
        if let Some(StubFailure::ScalerError(msg)) = &self.failure {
            return Err(ModelError::Inference(msg.clone()));
        }
        Ok(features.to_vec())
    }

    fn predict_regression(&self, _scaled: &[f64]) -> Result<f64, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(StubFailure::RegressionError(msg)) = &self.failure {
            return Err(ModelError::Inference(msg.clone()));
        }
        Ok(self.sales_estimate)
    }

    fn predict_classification(&self, _scaled: &[f64]) -> Result<i64, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(StubFailure::ClassificationPanic(msg)) = &self.failure {
            panic!("{}", msg);
        }
        Ok(self.label)
    }

    fn name(&self) -> &str {
        "Stub Models"
    }
}

/// Canned text-completion backend that records every prompt it receives.
pub struct StubCompletionService {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletionService {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            reply: Err(reason.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TextCompletionService for StubCompletionService {
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone().map_err(ServiceError::Transport)
    }

    fn name(&self) -> &str {
        "Stub Completion"
    }
}

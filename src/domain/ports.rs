use crate::domain::errors::{ExportError, ModelError, ServiceError};
use crate::domain::ml::feature_registry::FeatureVector;
use async_trait::async_trait;
use std::sync::Arc;

/// Capability over the three pre-trained artifacts.
/// Implementations are read-only after construction and may be shared freely.
pub trait ModelStore: Send + Sync {
    /// Applies the fitted scaler.
    fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError>;

    fn predict_regression(&self, scaled: &[f64]) -> Result<f64, ModelError>;

    /// Returns the raw class label (1 = high profit).
    fn predict_classification(&self, scaled: &[f64]) -> Result<i64, ModelError>;

    fn name(&self) -> &str;
}

/// Outcome of loading the artifacts at startup. A failed load is a valid,
/// non-fatal state that makes every prediction fail with `ModelUnavailable`.
#[derive(Clone)]
pub enum LoadedModels {
    Ready(Arc<dyn ModelStore>),
    Unavailable { reason: String },
}

impl std::fmt::Debug for LoadedModels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(store) => f.debug_tuple("Ready").field(&store.name()).finish(),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Opaque single-shot text generation.
#[async_trait]
pub trait TextCompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError>;

    fn name(&self) -> &str;
}

/// Renders a block of text into a downloadable document.
pub trait ReportExporter: Send + Sync {
    fn render(&self, text: &str) -> Result<Vec<u8>, ExportError>;

    fn export_to_file(&self, text: &str, path: &std::path::Path) -> Result<(), ExportError> {
        let bytes = self.render(text)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

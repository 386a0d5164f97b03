use crate::application::analytics::AnalyzedDataset;
use crate::domain::dataset::DatasetAggregate;
use crate::domain::prediction::{PredictionInput, PredictionRecord, PredictionResult};

/// In-memory state for one user session. Owned by the interface layer and
/// passed explicitly into the orchestrator and dispatcher.
#[derive(Debug, Default)]
pub struct SessionState {
    dataset: Option<AnalyzedDataset>,
    prediction: Option<PredictionRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> Option<&AnalyzedDataset> {
        self.dataset.as_ref()
    }

    pub fn set_dataset(&mut self, dataset: AnalyzedDataset) {
        self.dataset = Some(dataset);
    }

    pub fn aggregate(&self) -> Option<DatasetAggregate> {
        self.dataset.as_ref().map(|d| d.aggregate())
    }

    pub fn prediction(&self) -> Option<&PredictionRecord> {
        self.prediction.as_ref()
    }

    /// Replaces any previous prediction. No history is kept.
    pub fn record_prediction(
        &mut self,
        input: PredictionInput,
        result: PredictionResult,
    ) -> &PredictionRecord {
        self.prediction.insert(PredictionRecord::new(input, result))
    }
}

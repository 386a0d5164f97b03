use crate::application::insights::prompts::InsightRequest;
use crate::domain::dataset::DatasetAggregate;
use crate::domain::errors::InsightError;
use crate::domain::insight::{
    InsightKind, InsightResponse, ReportArtifact, missing_report_sections,
};
use crate::domain::ports::{ReportExporter, TextCompletionService};
use crate::domain::prediction::PredictionRecord;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Turns the current prediction into one of the three generated insights.
///
/// Whether a completion backend exists is decided once, at construction.
/// Without one every dispatch returns `InsightError::ServiceUnavailable`
/// and no request is attempted.
#[derive(Clone)]
pub struct InsightDispatcher {
    service: Option<Arc<dyn TextCompletionService>>,
    exporter: Arc<dyn ReportExporter>,
}

impl InsightDispatcher {
    pub fn new(
        service: Option<Arc<dyn TextCompletionService>>,
        exporter: Arc<dyn ReportExporter>,
    ) -> Self {
        match &service {
            Some(s) => info!("Insight dispatcher using {}", s.name()),
            None => warn!("No text-completion service configured; insights disabled"),
        }
        Self { service, exporter }
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }

    /// Single blocking round trip: no retry, no streaming.
    pub async fn dispatch(
        &self,
        kind: InsightKind,
        prediction: Option<&PredictionRecord>,
        aggregate: &DatasetAggregate,
    ) -> Result<InsightResponse, InsightError> {
        let record = prediction.ok_or(InsightError::NoPrediction)?;

        let Some(service) = &self.service else {
            return Err(InsightError::ServiceUnavailable);
        };

        let request = InsightRequest::build(kind, record, aggregate);
        info!("Requesting '{}' insight from {}", kind, service.name());

        let text = service.complete(&request.prompt()).await.map_err(|e| {
            error!("'{}' insight request failed: {}", kind, e);
            InsightError::from(e)
        })?;

        let artifact = match kind {
            InsightKind::Report => Some(self.render_report(&text)),
            InsightKind::Explain | InsightKind::Recommend => None,
        };

        Ok(InsightResponse {
            kind,
            tone: kind.tone(),
            text,
            artifact,
        })
    }

    fn render_report(&self, text: &str) -> ReportArtifact {
        let missing = missing_report_sections(text);
        if !missing.is_empty() {
            warn!("Generated report is missing sections: {}", missing.join(", "));
        }

        match self.exporter.render(text) {
            Ok(bytes) => {
                info!("Rendered report document ({} bytes)", bytes.len());
                ReportArtifact::Ready(bytes)
            }
            Err(e) => {
                error!("Failed to render report document: {}", e);
                ReportArtifact::Failed(e.to_string())
            }
        }
    }
}

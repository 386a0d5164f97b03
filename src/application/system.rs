use std::sync::Arc;
use tracing::info;

use crate::application::insights::InsightDispatcher;
use crate::application::ml::PredictionOrchestrator;
use crate::config::Config;
use crate::domain::ports::{LoadedModels, ReportExporter, TextCompletionService};
use crate::infrastructure::genai::GroqCompletionService;
use crate::infrastructure::ml::load_models;
use crate::infrastructure::report::PdfReportExporter;

/// Process-wide services. Models are loaded once and shared read-only;
/// per-user state lives in `SessionState`, owned by the interface layer.
#[derive(Clone)]
pub struct Application {
    pub config: Config,
    pub orchestrator: PredictionOrchestrator,
    pub dispatcher: InsightDispatcher,
    pub exporter: Arc<dyn ReportExporter>,
}

impl Application {
    /// Never fails: missing models or credentials degrade the matching
    /// features instead of aborting startup.
    pub fn build(config: Config) -> Self {
        info!("Building Salescope Application (models: {:?})...", config.model_dir);

        let models = load_models(&config.model_dir);
        let service = GroqCompletionService::from_config(&config.genai)
            .map(|s| Arc::new(s) as Arc<dyn TextCompletionService>);

        Self::with_components(config, models, service)
    }

    pub fn with_components(
        config: Config,
        models: LoadedModels,
        service: Option<Arc<dyn TextCompletionService>>,
    ) -> Self {
        let exporter: Arc<dyn ReportExporter> = Arc::new(PdfReportExporter::new());

        Self {
            orchestrator: PredictionOrchestrator::new(models),
            dispatcher: InsightDispatcher::new(service, exporter.clone()),
            exporter,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_build_degrades_without_models_or_key() {
        let config = Config {
            model_dir: PathBuf::from("missing-model-dir"),
            ..Config::default()
        };

        let app = Application::build(config);
        assert!(!app.orchestrator.is_ready());
        assert!(!app.dispatcher.is_configured());
    }
}

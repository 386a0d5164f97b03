use crate::application::analytics::AnalyzedDataset;
use crate::application::session::SessionState;
use crate::application::system::Application;
use crate::domain::errors::InsightError;
use crate::domain::insight::{InsightKind, InsightResponse};
use crate::domain::prediction::PredictionInput;
use crate::infrastructure::dataset::{load_csv, read_csv};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::views;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use tracing::{debug, error, info};

const MAX_LOG_LINES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Upload,
    Eda,
    MlGenAi,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Upload, Self::Eda, Self::MlGenAi];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upload => "📤 Upload Data",
            Self::Eda => "📈 EDA Dashboard",
            Self::MlGenAi => "🤖 ML + GenAI",
        }
    }
}

type InsightOutcome = Result<InsightResponse, InsightError>;

/// Outcome tagged with the prediction generation it was requested for.
type TaggedOutcome = (u64, InsightKind, InsightOutcome);

/// Dashboard state for a single user session.
pub struct DashboardApp {
    pub app: Application,
    pub session: SessionState,
    runtime: tokio::runtime::Handle,

    // UI State
    pub section: Section,
    pub form: PredictionInput,
    pub csv_path: String,
    pub upload_status: Option<Result<String, String>>,
    pub prediction_error: Option<String>,
    pub insights: HashMap<InsightKind, InsightOutcome>,
    pub pending_insight: Option<InsightKind>,
    pub report_path: String,
    pub report_status: Option<Result<String, String>>,
    /// Bumped on every successful prediction.
    prediction_generation: u64,

    insight_tx: Sender<TaggedOutcome>,
    insight_rx: Receiver<TaggedOutcome>,
    log_rx: Receiver<String>,
    pub logs: VecDeque<String>,
}

impl DashboardApp {
    pub fn new(app: Application, runtime: tokio::runtime::Handle, log_rx: Receiver<String>) -> Self {
        let (insight_tx, insight_rx) = crossbeam_channel::unbounded();
        let report_path = app.config.report_output_path.display().to_string();

        Self {
            app,
            session: SessionState::new(),
            runtime,
            section: Section::Upload,
            form: PredictionInput::default(),
            csv_path: String::new(),
            upload_status: None,
            prediction_error: None,
            insights: HashMap::new(),
            pending_insight: None,
            report_path,
            report_status: None,
            prediction_generation: 0,
            insight_tx,
            insight_rx,
            log_rx,
            logs: VecDeque::new(),
        }
    }

    /// Loads a CSV from disk into the session.
    pub fn load_dataset_from_path(&mut self, path: &Path) {
        let name = path.display().to_string();
        let outcome = load_csv(path).map_err(|e| e.to_string()).and_then(|dataset| {
            AnalyzedDataset::analyze(name.clone(), dataset).map_err(|e| e.to_string())
        });
        self.apply_dataset(name, outcome);
    }

    /// Loads a CSV delivered as bytes (drag-and-drop on platforms without paths).
    pub fn load_dataset_from_bytes(&mut self, name: String, bytes: &[u8]) {
        let outcome = read_csv(bytes).map_err(|e| e.to_string()).and_then(|dataset| {
            AnalyzedDataset::analyze(name.clone(), dataset).map_err(|e| e.to_string())
        });
        self.apply_dataset(name, outcome);
    }

    fn apply_dataset(&mut self, name: String, outcome: Result<AnalyzedDataset, String>) {
        match outcome {
            Ok(analyzed) => {
                self.session.set_dataset(analyzed);
                self.upload_status = Some(Ok(format!("✅ Dataset '{}' loaded successfully!", name)));
            }
            Err(e) => {
                error!("Failed to load dataset '{}': {}", name, e);
                self.upload_status = Some(Err(format!("❌ {}", e)));
            }
        }
    }

    /// Runs the prediction pipeline on the current form values.
    /// Ignored while an insight request is in flight.
    pub fn submit_prediction(&mut self) {
        if let Some(kind) = self.pending_insight {
            debug!("Prediction ignored: '{}' insight still running", kind);
            return;
        }

        match self.app.orchestrator.run(&mut self.session, self.form) {
            Ok(_) => {
                self.prediction_generation += 1;
                self.prediction_error = None;
                // Old insights describe the previous prediction
                self.insights.clear();
                self.report_status = None;
            }
            Err(e) => self.prediction_error = Some(format!("❌ {}", e)),
        }
    }

    /// Dispatches an insight request on the runtime. One request at a time.
    pub fn request_insight(&mut self, kind: InsightKind, ctx: &egui::Context) {
        if self.pending_insight.is_some() {
            return;
        }

        let record = self.session.prediction().cloned();
        let aggregate = self.session.aggregate().unwrap_or_default();
        let generation = self.prediction_generation;
        let dispatcher = self.app.dispatcher.clone();
        let tx = self.insight_tx.clone();
        let ctx = ctx.clone();

        self.pending_insight = Some(kind);
        self.insights.remove(&kind);
        info!("User requested '{}' insight", kind);

        self.runtime.spawn(async move {
            let outcome = dispatcher.dispatch(kind, record.as_ref(), &aggregate).await;
            let _ = tx.send((generation, kind, outcome));
            ctx.request_repaint();
        });
    }

    /// Writes the rendered report document to `report_path`.
    pub fn save_report(&mut self, bytes: &[u8]) {
        let path = self.report_path.trim().to_string();
        self.report_status = Some(match std::fs::write(&path, bytes) {
            Ok(()) => {
                info!("Saved PDF report to {}", path);
                Ok(format!("⬇️ Report saved to {}", path))
            }
            Err(e) => {
                error!("Failed to save PDF report to {}: {}", path, e);
                Err(format!("❌ Failed to save report: {}", e))
            }
        });
    }

    /// Drains background results, log lines and dropped files.
    fn poll_background(&mut self, ctx: &egui::Context) {
        while let Ok((generation, kind, outcome)) = self.insight_rx.try_recv() {
            if self.pending_insight == Some(kind) {
                self.pending_insight = None;
            }
            if generation != self.prediction_generation {
                debug!("Dropping '{}' insight for a superseded prediction", kind);
                continue;
            }
            self.insights.insert(kind, outcome);
        }

        while let Ok(line) = self.log_rx.try_recv() {
            self.logs.push_back(line);
        }
        while self.logs.len() > MAX_LOG_LINES {
            self.logs.pop_front();
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = &file.path {
                self.csv_path = path.display().to_string();
                self.load_dataset_from_path(path);
            } else if let Some(bytes) = &file.bytes {
                self.load_dataset_from_bytes(file.name.clone(), bytes);
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        self.poll_background(ctx);

        // --- Sidebar: Navigation ---
        egui::SidePanel::left("nav_panel")
            .default_width(230.0)
            .resizable(false)
            .frame(egui::Frame::NONE.fill(DesignSystem::BG_PANEL).inner_margin(egui::Margin::same(12)))
            .show(ctx, |ui| {
                ui.heading("🧭 Navigation");
                ui.add_space(DesignSystem::SPACING_SMALL);
                for section in Section::ALL {
                    if ui
                        .selectable_label(self.section == section, section.label())
                        .clicked()
                    {
                        self.section = section;
                    }
                }

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.separator();
                ui.heading("ℹ️ About");
                ui.label(
                    egui::RichText::new(
                        "This platform combines exploratory data analysis, machine learning \
                         predictions, and generative AI insights to help you make data-driven \
                         business decisions.",
                    )
                    .color(DesignSystem::TEXT_SECONDARY),
                );
            });

        // --- Bottom: Activity Log ---
        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(110.0)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Activity").strong().color(DesignSystem::TEXT_SECONDARY));
                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for line in &self.logs {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_MUTED
                            };
                            ui.label(egui::RichText::new(line.trim_end()).monospace().size(11.0).color(color));
                        }
                    });
            });

        // --- Central Panel ---
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    views::render_header(ui);
                    match self.section {
                        Section::Upload => views::upload::render_upload_view(ui, self),
                        Section::Eda => views::eda::render_eda_view(ui, self),
                        Section::MlGenAi => views::ml_genai::render_ml_genai_view(ui, self),
                    }
                    views::render_footer(ui);
                });
        });
    }
}

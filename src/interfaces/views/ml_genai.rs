use crate::domain::errors::InsightError;
use crate::domain::insight::{
    InsightKind, InsightResponse, InsightTone, ReportArtifact, missing_report_sections,
};
use crate::domain::prediction::{MAX_QUANTITY, MIN_QUANTITY, ProfitCategory};
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{
    CalloutKind, render_callout, render_result_card, render_section_header,
};
use crate::interfaces::dashboard::DashboardApp;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::views::format_currency;
use eframe::egui;

/// User intents collected while the insight columns hold borrows on the app.
enum InsightAction {
    Request(InsightKind),
    SaveReport(Vec<u8>),
}

/// Renders the ML + GenAI section
pub fn render_ml_genai_view(ui: &mut egui::Ui, app: &mut DashboardApp) {
    render_section_header(ui, "Machine Learning Predictions");

    if app.session.dataset().is_none() {
        render_callout(
            ui,
            CalloutKind::Warning,
            "⚠️ Please upload a dataset first in the 'Upload Data' section.",
        );
        return;
    }

    if let Some(reason) = app.app.orchestrator.unavailable_reason() {
        render_callout(
            ui,
            CalloutKind::Error,
            &format!("⚠️ ML models not loaded. Predictions are disabled. ({})", reason),
        );
    }

    render_prediction_form(ui, app);

    if let Some(err) = &app.prediction_error {
        render_callout(ui, CalloutKind::Error, err);
    }

    render_prediction_result(ui, app);

    if app.session.prediction().is_some() {
        render_insights(ui, app);
    }
}

fn render_prediction_form(ui: &mut egui::Ui, app: &mut DashboardApp) {
    let mut submitted = false;

    ui.columns(2, |cols| {
        Card::new().title("Input Parameters").show(&mut cols[0], |ui| {
            egui::Grid::new("prediction_form")
                .num_columns(2)
                .spacing([24.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Quantity");
                    ui.add(
                        egui::DragValue::new(&mut app.form.quantity)
                            .range(MIN_QUANTITY..=MAX_QUANTITY)
                            .speed(0.2),
                    );
                    ui.end_row();

                    ui.label("Month");
                    ui.add(egui::Slider::new(&mut app.form.month, 1..=12));
                    ui.end_row();

                    ui.label("Discount");
                    ui.add(
                        egui::Slider::new(&mut app.form.discount, 0.0..=1.0)
                            .step_by(0.05)
                            .fixed_decimals(2),
                    );
                    ui.end_row();

                    ui.label("Quarter");
                    ui.add(egui::Slider::new(&mut app.form.quarter, 1..=4));
                    ui.end_row();
                });

            ui.add_space(DesignSystem::SPACING_SMALL);
            let button = egui::Button::new(egui::RichText::new("🚀 Run Prediction").strong())
                .min_size(egui::vec2(ui.available_width(), 36.0));
            let idle = app.pending_insight.is_none();
            if ui.add_enabled(idle, button).clicked() {
                submitted = true;
            }
            if !idle {
                ui.label(
                    egui::RichText::new("Waiting for the current insight request to finish...")
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
        });

        Card::new().title("💡 Prediction Tips").show(&mut cols[1], |ui| {
            for tip in [
                "Higher quantities typically increase sales",
                "Discounts can boost volume but may reduce profit",
                "Seasonal patterns affect sales (Q4 is often strongest)",
                "Experiment with different combinations",
            ] {
                ui.label(format!("• {}", tip));
            }
        });
    });

    if submitted {
        app.submit_prediction();
    }
}

fn render_prediction_result(ui: &mut egui::Ui, app: &DashboardApp) {
    let Some(record) = app.session.prediction() else {
        return;
    };
    let result = &record.result;

    render_section_header(ui, "Prediction Results");

    let (icon, category_color) = match result.profit_category {
        ProfitCategory::High => ("🟢", DesignSystem::SUCCESS),
        ProfitCategory::Low => ("🔴", DesignSystem::DANGER),
    };

    ui.columns(2, |cols| {
        render_result_card(
            &mut cols[0],
            "💵",
            "Predicted Sales",
            &format_currency(result.sales_estimate, 2),
            DesignSystem::ACCENT_VALUE,
        );
        render_result_card(
            &mut cols[1],
            icon,
            "Profit Category",
            result.profit_category.display_name(),
            category_color,
        );
    });

    if result.is_negative_estimate() {
        ui.label(
            egui::RichText::new(
                "Note: the regression model produced a negative estimate for these inputs.",
            )
            .size(11.0)
            .color(DesignSystem::WARNING),
        );
    }
    ui.label(
        egui::RichText::new(format!(
            "Predicted at {} for qty={}, discount={:.2}, month={}, quarter={}",
            record.predicted_at.format("%Y-%m-%d %H:%M:%S UTC"),
            record.input.quantity,
            record.input.discount,
            record.input.month,
            record.input.quarter
        ))
        .size(11.0)
        .color(DesignSystem::TEXT_MUTED),
    );
}

fn render_insights(ui: &mut egui::Ui, app: &mut DashboardApp) {
    render_section_header(ui, "AI-Powered Insights");

    if !app.app.dispatcher.is_configured() {
        render_callout(
            ui,
            CalloutKind::Warning,
            &format!("⚠️ {}", InsightError::ServiceUnavailable),
        );
    }

    let pending = app.pending_insight;
    let insights = &app.insights;
    let report_path = &mut app.report_path;
    let report_status = &app.report_status;
    let mut action: Option<InsightAction> = None;

    ui.columns(InsightKind::ALL.len(), |cols| {
        for (col, kind) in cols.iter_mut().zip(InsightKind::ALL) {
            let button = egui::Button::new(kind.button_label())
                .min_size(egui::vec2(col.available_width(), 36.0));
            if col.add_enabled(pending.is_none(), button).clicked() {
                action = Some(InsightAction::Request(kind));
            }

            if pending == Some(kind) {
                col.horizontal(|ui| {
                    ui.spinner();
                    ui.label(kind.progress_label());
                });
            }

            match insights.get(&kind) {
                None => {}
                Some(Err(InsightError::ServiceUnavailable)) => {
                    render_callout(col, CalloutKind::Warning, &InsightError::ServiceUnavailable.to_string())
                }
                Some(Err(e)) => render_callout(col, CalloutKind::Error, &format!("❌ {}", e)),
                Some(Ok(response)) => match response.tone {
                    InsightTone::Info => render_callout(col, CalloutKind::Info, &response.text),
                    InsightTone::Success => {
                        render_callout(col, CalloutKind::Success, &response.text)
                    }
                    InsightTone::Report => {
                        if let Some(save) = render_report(col, response, report_path, report_status)
                        {
                            action = Some(save);
                        }
                    }
                },
            }
        }
    });

    match action {
        Some(InsightAction::Request(kind)) => {
            let ctx = ui.ctx().clone();
            app.request_insight(kind, &ctx);
        }
        Some(InsightAction::SaveReport(bytes)) => app.save_report(&bytes),
        None => {}
    }
}

fn render_report(
    ui: &mut egui::Ui,
    response: &InsightResponse,
    report_path: &mut String,
    report_status: &Option<Result<String, String>>,
) -> Option<InsightAction> {
    let mut action = None;

    Card::new().title("📄 Business Report").show(ui, |ui| {
        let mut text = response.text.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .desired_width(f32::INFINITY)
                .desired_rows(12),
        );

        let missing = missing_report_sections(&response.text);
        if !missing.is_empty() {
            ui.label(
                egui::RichText::new(format!("Missing sections: {}", missing.join(", ")))
                    .size(11.0)
                    .color(DesignSystem::WARNING),
            );
        }

        ui.add_space(DesignSystem::SPACING_SMALL);
        match &response.artifact {
            Some(ReportArtifact::Ready(bytes)) => {
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(report_path).desired_width(160.0));
                    if ui.button("⬇️ Download PDF Report").clicked() {
                        action = Some(InsightAction::SaveReport(bytes.clone()));
                    }
                });
            }
            Some(ReportArtifact::Failed(reason)) => {
                render_callout(ui, CalloutKind::Error, &format!("❌ PDF export failed: {}", reason))
            }
            None => {}
        }

        match report_status {
            Some(Ok(msg)) => render_callout(ui, CalloutKind::Success, msg),
            Some(Err(msg)) => render_callout(ui, CalloutKind::Error, msg),
            None => {}
        }
    });

    action
}

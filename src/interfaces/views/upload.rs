use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{
    CalloutKind, render_callout, render_metric_card, render_section_header,
};
use crate::interfaces::dashboard::DashboardApp;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::views::format_currency;
use eframe::egui;
use std::path::PathBuf;

/// Renders the Upload Data section
pub fn render_upload_view(ui: &mut egui::Ui, app: &mut DashboardApp) {
    render_section_header(ui, "Upload Your Data");

    Card::new().title("Upload Superstore CSV").show(ui, |ui| {
        let mut load_clicked = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut app.csv_path)
                    .hint_text("path/to/superstore.csv")
                    .desired_width(ui.available_width() - 90.0),
            );
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Load").clicked() || enter {
                load_clicked = true;
            }
        });
        ui.label(
            egui::RichText::new("…or drag and drop a CSV file onto this window.")
                .size(11.0)
                .color(DesignSystem::TEXT_MUTED),
        );

        if load_clicked && !app.csv_path.trim().is_empty() {
            let path = PathBuf::from(app.csv_path.trim());
            app.load_dataset_from_path(&path);
        }
    });

    match &app.upload_status {
        Some(Ok(msg)) => render_callout(ui, CalloutKind::Success, msg),
        Some(Err(msg)) => render_callout(ui, CalloutKind::Error, msg),
        None => {}
    }

    let Some(analyzed) = app.session.dataset() else {
        return;
    };
    let summary = &analyzed.summary;

    render_section_header(ui, "Data Overview");

    ui.columns(4, |cols| {
        render_metric_card(
            &mut cols[0],
            "💰",
            "Total Sales",
            &format_currency(summary.total_sales, 0),
            DesignSystem::ACCENT_VALUE,
        );
        render_metric_card(
            &mut cols[1],
            "📈",
            "Total Profit",
            &format_currency(summary.total_profit, 0),
            DesignSystem::ACCENT_VALUE,
        );
        render_metric_card(
            &mut cols[2],
            "📦",
            "Total Orders",
            &format_currency(summary.total_orders as f64, 0).replace('$', ""),
            DesignSystem::ACCENT_VALUE,
        );
        render_metric_card(
            &mut cols[3],
            "🏷️",
            "Avg Discount",
            &format!("{:.1}%", summary.avg_discount * 100.0),
            DesignSystem::ACCENT_VALUE,
        );
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    egui::CollapsingHeader::new("📋 View Data Sample")
        .default_open(false)
        .show(ui, |ui| {
            egui::ScrollArea::horizontal()
                .id_salt("preview_scroll")
                .show(ui, |ui| {
                    egui::Grid::new("preview_grid")
                        .striped(true)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            for header in analyzed.dataset.headers() {
                                ui.strong(header);
                            }
                            ui.end_row();

                            for row in analyzed.preview() {
                                for cell in row {
                                    ui.label(cell);
                                }
                                ui.end_row();
                            }
                        });
                });
        });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.columns(2, |cols| {
        cols[0].strong("Dataset Shape:");
        render_callout(
            &mut cols[0],
            CalloutKind::Info,
            &format!("📊 {} rows × {} columns", summary.rows, summary.columns),
        );

        cols[1].strong("Missing Values:");
        if summary.missing_values == 0 {
            render_callout(&mut cols[1], CalloutKind::Success, "✅ No missing values");
        } else {
            render_callout(
                &mut cols[1],
                CalloutKind::Warning,
                &format!("⚠️ {} missing values found", summary.missing_values),
            );
        }
    });
}

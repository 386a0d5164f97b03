use crate::application::analytics::{GroupTotal, shares};
use crate::interfaces::components::card::Card;
use crate::interfaces::components::charts::{BarOrientation, render_bar_chart, render_share_donut};
use crate::interfaces::components::metrics::{CalloutKind, render_callout, render_section_header};
use crate::interfaces::dashboard::DashboardApp;
use eframe::egui;

/// Renders the EDA Dashboard section
pub fn render_eda_view(ui: &mut egui::Ui, app: &mut DashboardApp) {
    render_section_header(ui, "Exploratory Data Analysis");

    let Some(analyzed) = app.session.dataset() else {
        render_callout(
            ui,
            CalloutKind::Warning,
            "⚠️ Please upload a dataset first in the 'Upload Data' section.",
        );
        return;
    };
    let breakdowns = &analyzed.breakdowns;

    ui.columns(2, |cols| {
        Card::new().title("💼 Sales by Category").show(&mut cols[0], |ui| {
            bar_or_notice(
                ui,
                "sales_by_category",
                "Sales",
                breakdowns.sales_by_category.as_deref(),
                BarOrientation::Vertical,
                "Category",
            );
        });

        Card::new().title("🌍 Profit by Region").show(&mut cols[1], |ui| {
            bar_or_notice(
                ui,
                "profit_by_region",
                "Profit",
                breakdowns.profit_by_region.as_deref(),
                BarOrientation::Vertical,
                "Region",
            );
        });
    });

    ui.add_space(8.0);

    ui.columns(2, |cols| {
        Card::new().title("👥 Sales by Segment").show(&mut cols[0], |ui| {
            match breakdowns.sales_by_segment.as_deref() {
                Some(groups) if !groups.is_empty() => {
                    render_share_donut(ui, &shares(groups), 220.0);
                }
                _ => missing_column_notice(ui, "Segment"),
            }
        });

        Card::new().title("🚚 Sales by Ship Mode").show(&mut cols[1], |ui| {
            bar_or_notice(
                ui,
                "sales_by_ship_mode",
                "Sales",
                breakdowns.sales_by_ship_mode.as_deref(),
                BarOrientation::Horizontal,
                "Ship Mode",
            );
        });
    });
}

fn bar_or_notice(
    ui: &mut egui::Ui,
    id: &str,
    series_name: &str,
    groups: Option<&[GroupTotal]>,
    orientation: BarOrientation,
    column: &str,
) {
    match groups {
        Some(groups) if !groups.is_empty() => {
            render_bar_chart(ui, id, series_name, groups, orientation)
        }
        _ => missing_column_notice(ui, column),
    }
}

fn missing_column_notice(ui: &mut egui::Ui, column: &str) {
    render_callout(
        ui,
        CalloutKind::Info,
        &format!("No '{}' column in this dataset.", column),
    );
}

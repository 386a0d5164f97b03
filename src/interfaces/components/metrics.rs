use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A KPI card: icon, uppercase title, large value.
pub fn render_metric_card(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    value: &str,
    value_color: egui::Color32,
) {
    Card::new()
        .min_height(110.0)
        .show(ui, |ui| metric_body(ui, icon, title, value, value_color));
}

/// A prediction result card, striped and tinted with the outcome colour.
pub fn render_result_card(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    value: &str,
    color: egui::Color32,
) {
    Card::new()
        .min_height(110.0)
        .accent(color)
        .show(ui, |ui| metric_body(ui, icon, title, value, color));
}

fn metric_body(ui: &mut egui::Ui, icon: &str, title: &str, value: &str, value_color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(icon).size(28.0));
        ui.label(
            egui::RichText::new(title.to_uppercase())
                .size(11.0)
                .color(DesignSystem::TEXT_SECONDARY)
                .strong(),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(value)
                .size(26.0)
                .strong()
                .color(value_color),
        );
    });
}

/// Section banner, e.g. "Prediction Results".
pub fn render_section_header(ui: &mut egui::Ui, title: &str) {
    ui.add_space(DesignSystem::SPACING_MEDIUM);
    DesignSystem::section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(title)
                .size(20.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });
    ui.add_space(DesignSystem::SPACING_SMALL);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Info,
    Success,
    Warning,
    Error,
}

impl CalloutKind {
    fn color(&self) -> egui::Color32 {
        match self {
            Self::Info => DesignSystem::INFO,
            Self::Success => DesignSystem::SUCCESS,
            Self::Warning => DesignSystem::WARNING,
            Self::Error => DesignSystem::DANGER,
        }
    }
}

/// A colored message box.
pub fn render_callout(ui: &mut egui::Ui, kind: CalloutKind, text: &str) {
    let color = kind.color();
    DesignSystem::callout_frame(color).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(text).color(DesignSystem::TEXT_PRIMARY));
    });
}

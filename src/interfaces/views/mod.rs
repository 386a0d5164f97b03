pub mod eda;
pub mod ml_genai;
pub mod upload;

use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_header(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .fill(DesignSystem::ACCENT_SECONDARY.linear_multiply(0.5))
        .corner_radius(DesignSystem::ROUNDING_LARGE)
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("📊 AI-Powered Business Intelligence Platform")
                        .size(30.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new("EDA • Machine Learning • Generative AI")
                        .size(14.0)
                        .color(DesignSystem::TEXT_PRIMARY.linear_multiply(0.9)),
                );
            });
        });
}

pub fn render_footer(ui: &mut egui::Ui) {
    ui.add_space(DesignSystem::SPACING_LARGE * 2.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Built with Rust • Machine Learning • GenAI • egui")
                .color(DesignSystem::TEXT_SECONDARY),
        );
    });
}

/// `1234567.891` with 0 decimals -> `"$1,234,568"`.
pub fn format_currency(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{}${}.{}", sign, grouped, frac),
        None => format!("{}${}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2297200.8603, 0), "$2,297,201");
        assert_eq!(format_currency(1234.56, 2), "$1,234.56");
        assert_eq!(format_currency(999.0, 0), "$999");
        assert_eq!(format_currency(-4567.5, 2), "-$4,567.50");
        assert_eq!(format_currency(-0.001, 0), "$0");
    }
}

use eframe::egui;

/// Dark dashboard design system
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(15, 20, 25); // #0F1419
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(26, 31, 46); // #1A1F2E
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(30, 37, 48); // #1E2530
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(37, 45, 61); // #252D3D
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(20, 25, 33);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(102, 126, 234); // #667EEA
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(118, 75, 162); // #764BA2
    pub const ACCENT_VALUE: egui::Color32 = egui::Color32::from_rgb(79, 172, 254); // #4FACFE

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(67, 233, 123); // #43E97B
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(250, 112, 154); // #FA709A
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(254, 225, 64); // #FEE140
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(79, 172, 254);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(139, 146, 167); // #8B92A7
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(100);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    /// Bar and slice colours, cycled per group.
    pub const CHART_PALETTE: [egui::Color32; 8] = [
        egui::Color32::from_rgb(102, 126, 234),
        egui::Color32::from_rgb(118, 75, 162),
        egui::Color32::from_rgb(240, 147, 251),
        egui::Color32::from_rgb(79, 172, 254),
        egui::Color32::from_rgb(0, 242, 254),
        egui::Color32::from_rgb(67, 233, 123),
        egui::Color32::from_rgb(250, 112, 154),
        egui::Color32::from_rgb(254, 225, 64),
    ];

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const ROUNDING_LARGE: f32 = 12.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.weak_bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.6);
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.weak_bg_fill = Self::ACCENT_SECONDARY;
        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    pub fn palette(index: usize) -> egui::Color32 {
        Self::CHART_PALETTE[index % Self::CHART_PALETTE.len()]
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_LARGE)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Gradient-less stand-in for the section header banner.
    pub fn section_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::ACCENT_PRIMARY.linear_multiply(0.35))
            .corner_radius(Self::ROUNDING_MEDIUM)
            .inner_margin(egui::Margin::symmetric(16, 10))
    }

    /// Colored message box used for info / success / warning / error notes.
    pub fn callout_frame(color: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(color.linear_multiply(0.12))
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.6)))
            .inner_margin(egui::Margin::same(12))
    }
}

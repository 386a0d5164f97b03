use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

const ACCENT_STRIPE_WIDTH: f32 = 4.0;

/// Dashboard panel: optional caption line, optional coloured left stripe.
#[derive(Debug, Clone, Default)]
pub struct Card {
    title: Option<String>,
    min_height: f32,
    accent: Option<egui::Color32>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    /// Paints a stripe down the left edge, e.g. green/red on prediction results.
    pub fn accent(mut self, color: egui::Color32) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let Self {
            title,
            min_height,
            accent,
        } = self;

        let mut frame = DesignSystem::card_frame();
        if accent.is_some() {
            // Keep content clear of the stripe
            frame = frame.inner_margin(egui::Margin {
                left: (DesignSystem::SPACING_MEDIUM + ACCENT_STRIPE_WIDTH) as i8,
                right: DesignSystem::SPACING_MEDIUM as i8,
                top: DesignSystem::SPACING_MEDIUM as i8,
                bottom: DesignSystem::SPACING_MEDIUM as i8,
            });
        }

        let inner = frame.show(ui, |ui| {
            ui.set_min_height(min_height);

            if let Some(title) = title {
                ui.label(
                    egui::RichText::new(title)
                        .size(12.0)
                        .color(DesignSystem::TEXT_SECONDARY)
                        .strong(),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            add_contents(ui)
        });

        if let Some(color) = accent {
            let rect = inner.response.rect;
            let stripe = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(ACCENT_STRIPE_WIDTH, rect.height()),
            );
            let radius = DesignSystem::ROUNDING_LARGE as u8;
            ui.painter().rect_filled(
                stripe,
                egui::CornerRadius {
                    nw: radius,
                    sw: radius,
                    ne: 0,
                    se: 0,
                },
                color,
            );
        }

        inner
    }
}

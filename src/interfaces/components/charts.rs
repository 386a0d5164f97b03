use crate::application::analytics::GroupTotal;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOrientation {
    Vertical,
    Horizontal,
}

/// Renders one bar per group with the group labels on the category axis.
pub fn render_bar_chart(
    ui: &mut egui::Ui,
    id: &str,
    series_name: &str,
    groups: &[GroupTotal],
    orientation: BarOrientation,
) {
    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();
    let bars: Vec<Bar> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new(i as f64, g.value)
                .name(&g.label)
                .width(0.6)
                .fill(DesignSystem::palette(i))
        })
        .collect();

    let mut chart = BarChart::new(series_name, bars);
    if orientation == BarOrientation::Horizontal {
        chart = chart.horizontal();
    }

    let label_for = move |value: f64| -> String {
        let idx = value.round();
        if (value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    };

    let plot = Plot::new(id)
        .height(280.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_grid([orientation == BarOrientation::Horizontal, orientation == BarOrientation::Vertical]);

    let plot = match orientation {
        BarOrientation::Vertical => plot.x_axis_formatter(move |mark, _range| label_for(mark.value)),
        BarOrientation::Horizontal => plot.y_axis_formatter(move |mark, _range| label_for(mark.value)),
    };

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(chart);
    });
}

/// Renders a segmented donut with a legend of percentage shares.
pub fn render_share_donut(ui: &mut egui::Ui, shares: &[(String, f64)], size: f32) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

        // Background track
        ui.painter().circle_stroke(
            rect.center(),
            size / 2.0 - 10.0,
            egui::Stroke::new(18.0, DesignSystem::BORDER_SUBTLE),
        );

        use egui::epaint::{PathShape, Stroke};
        use std::f32::consts::PI;

        let center = rect.center();
        let radius = size / 2.0 - 10.0;
        // Start at the top, like a pie with startangle=90
        let mut start_angle = -PI / 2.0;

        for (i, (_, pct)) in shares.iter().enumerate() {
            if *pct <= 0.0 {
                continue;
            }
            let sweep_angle = 2.0 * PI * (*pct as f32 / 100.0);
            let steps = ((sweep_angle / (2.0 * PI)) * 64.0).ceil().max(2.0) as usize;

            let points: Vec<egui::Pos2> = (0..=steps)
                .map(|s| {
                    let angle = start_angle + sweep_angle * (s as f32 / steps as f32);
                    egui::pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
                })
                .collect();

            ui.painter().add(PathShape::line(
                points,
                Stroke::new(18.0, DesignSystem::palette(i)),
            ));
            start_angle += sweep_angle;
        }

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.vertical(|ui| {
            for (i, (label, pct)) in shares.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("■").color(DesignSystem::palette(i)));
                    ui.label(format!("{} ({:.1}%)", label, pct));
                });
            }
        });
    });
}

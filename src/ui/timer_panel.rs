use std::f32::consts::TAU;
use std::time::Instant;

use egui::{Align2, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use super::theme::DisplayTheme;
use crate::services::countdown::{
    format_remaining, is_warning, progress_fraction, CountdownEngine,
};

/// Ring stroke width relative to the ring diameter.
const RING_STROKE_RATIO: f32 = 0.045;
/// Segments for a full-circle arc; partial arcs use a proportional share.
const ARC_SEGMENTS: f32 = 128.0;
/// Vertical room reserved under the ring for the control buttons.
const CONTROLS_HEIGHT: f32 = 64.0;

/// Countdown card: progress ring, `MM:SS` readout, session status, and
/// the start/pause + reset controls.
pub fn render_timer_panel(ui: &mut egui::Ui, engine: &mut CountdownEngine, theme: &DisplayTheme) {
    let remaining = engine.remaining_seconds();
    let warning = is_warning(remaining);
    let fraction = progress_fraction(remaining, engine.total_seconds());
    let readout = format_remaining(remaining);

    ui.vertical_centered(|ui| {
        let available = ui.available_size();
        let ring_size = available
            .x
            .min(available.y - CONTROLS_HEIGHT)
            .max(160.0);
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(ring_size), Sense::hover());
        paint_ring(ui, rect, fraction, warning, &readout, engine.is_running(), theme);

        ui.add_space(10.0);
        render_controls(ui, engine);
    });
}

fn paint_ring(
    ui: &egui::Ui,
    rect: Rect,
    fraction: f32,
    warning: bool,
    readout: &str,
    running: bool,
    theme: &DisplayTheme,
) {
    let painter = ui.painter();
    let center = rect.center();
    let stroke_width = rect.width() * RING_STROKE_RATIO;
    let radius = rect.width() / 2.0 - stroke_width;

    // Background track
    painter.circle_stroke(center, radius, Stroke::new(stroke_width, theme.border));

    // Progress arc, swept clockwise from 12 o'clock
    if fraction > f32::EPSILON {
        let color = if warning { theme.danger } else { theme.primary };
        painter.add(egui::Shape::line(
            arc_points(center, radius, fraction),
            Stroke::new(stroke_width, color),
        ));
    }

    let badge_color = if warning { theme.danger } else { theme.primary };
    painter.text(
        center - Vec2::new(0.0, radius * 0.42),
        Align2::CENTER_CENTER,
        "TIME REMAINING",
        FontId::proportional(13.0),
        badge_color,
    );

    let readout_color = if warning { theme.danger } else { theme.text_primary };
    painter.text(
        center,
        Align2::CENTER_CENTER,
        readout,
        FontId::proportional(radius * 0.45),
        readout_color,
    );

    let (status, status_color) = if running {
        ("● Session Active", theme.accent)
    } else {
        ("Session Paused", theme.text_muted)
    };
    painter.text(
        center + Vec2::new(0.0, radius * 0.42),
        Align2::CENTER_CENTER,
        status,
        FontId::proportional(15.0),
        status_color,
    );
}

/// Polyline approximation of an arc covering `fraction` of the circle,
/// starting at 12 o'clock.
fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let fraction = fraction.clamp(0.0, 1.0);
    let sweep = fraction * TAU;
    let start = -TAU / 4.0;
    let steps = (ARC_SEGMENTS * fraction).ceil().max(2.0) as usize;

    (0..=steps)
        .map(|i| {
            let angle = start + sweep * i as f32 / steps as f32;
            Pos2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

fn render_controls(ui: &mut egui::Ui, engine: &mut CountdownEngine) {
    ui.horizontal(|ui| {
        let button_size = Vec2::new(110.0, 40.0);
        let total_width = button_size.x * 2.0 + ui.spacing().item_spacing.x;
        let indent = (ui.available_width() - total_width).max(0.0) / 2.0;
        ui.add_space(indent);

        let toggle_label = if engine.is_running() { "Pause" } else { "Start" };
        if ui
            .add_sized(button_size, egui::Button::new(RichText::new(toggle_label).size(17.0)))
            .clicked()
        {
            engine.toggle(Instant::now());
        }

        if ui
            .add_sized(button_size, egui::Button::new(RichText::new("Reset").size(17.0)))
            .clicked()
        {
            engine.reset();
        }
    });
}

use chrono::Local;
use egui::{Align, Layout, Margin, RichText, Stroke};

use super::theme::DisplayTheme;

pub const SCHOOL_NAME: &str = "MEIS – Al Muruj";
pub const SCHOOL_SUBTITLE: &str = "EXAM CONTROL CENTER";

/// Top strip: school brand on the left, exam title card in the middle,
/// live date/clock on the right. The clock reads wall time on every
/// repaint; the app schedules a periodic repaint to keep it current.
pub fn render_header(ui: &mut egui::Ui, exam_title: &str, theme: &DisplayTheme) {
    let now = Local::now();

    ui.columns(3, |columns| {
        columns[0].vertical(|ui| {
            ui.label(
                RichText::new(SCHOOL_NAME)
                    .size(26.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.label(
                RichText::new(SCHOOL_SUBTITLE)
                    .size(12.0)
                    .strong()
                    .color(theme.text_muted),
            );
        });

        columns[1].vertical_centered(|ui| {
            egui::Frame::none()
                .fill(theme.surface)
                .stroke(Stroke::new(2.0, theme.primary))
                .rounding(14.0)
                .inner_margin(Margin::symmetric(20.0, 10.0))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(exam_title)
                            .size(28.0)
                            .strong()
                            .color(theme.primary),
                    );
                });
        });

        columns[2].with_layout(Layout::top_down(Align::Max), |ui| {
            ui.label(
                RichText::new(now.format("%A, %B %-d, %Y").to_string())
                    .size(14.0)
                    .strong()
                    .color(theme.text_muted),
            );
            ui.label(
                RichText::new(now.format("%H:%M").to_string())
                    .size(36.0)
                    .strong()
                    .color(theme.text_primary),
            );
        });
    });
}

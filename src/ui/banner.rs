use egui::{Margin, RichText, Stroke};

use super::theme::DisplayTheme;

pub const ARABIC_DUA: &str =
    "اللهم لا سهل إلا ما جعلته سهلا، وأنت تجعل الصعب إن شئت سهلا";

/// Du'a banner rendered between the header and the main grid.
pub fn render_banner(ui: &mut egui::Ui, theme: &DisplayTheme) {
    egui::Frame::none()
        .fill(theme.surface)
        .stroke(Stroke::new(2.0, theme.accent))
        .rounding(12.0)
        .inner_margin(Margin::symmetric(16.0, 10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(ARABIC_DUA)
                        .size(22.0)
                        .color(theme.text_primary),
                );
            });
        });
}

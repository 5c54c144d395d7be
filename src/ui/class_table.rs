use egui::RichText;
use egui_extras::{Column, TableBuilder};

use super::theme::DisplayTheme;
use crate::models::ClassEntry;

/// Roster table: class group / subject / duration, in config order.
pub fn render_class_table(ui: &mut egui::Ui, classes: &[ClassEntry], theme: &DisplayTheme) {
    ui.label(
        RichText::new("Class Details")
            .size(16.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(140.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .header(26.0, |mut header| {
            for title in ["CLASS GROUP", "SUBJECT", "DURATION"] {
                header.col(|ui| {
                    ui.label(
                        RichText::new(title)
                            .size(11.0)
                            .strong()
                            .color(theme.text_muted),
                    );
                });
            }
        })
        .body(|mut body| {
            for entry in classes {
                body.row(30.0, |mut row| {
                    row.col(|ui| {
                        ui.label(
                            RichText::new(entry.name.clone())
                                .strong()
                                .color(theme.text_primary),
                        );
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(entry.subject.clone()).color(theme.primary));
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!("{}m", entry.duration_minutes))
                                .color(theme.text_muted),
                        );
                    });
                });
            }
        });
}

use egui::RichText;

use super::theme::DisplayTheme;
use crate::models::config::parse_minutes;
use crate::models::{ClassEntry, ExamConfig};

/// Draft state backing the configuration dialog.
///
/// Edits land in a copy of the live configuration; nothing reaches the
/// display until Apply replaces the whole record. Numeric fields are
/// edited as free text and coerced on Apply.
pub struct SettingsDialogState {
    draft: ExamConfig,
    duration_input: String,
    /// Text buffers parallel to `draft.classes`.
    class_duration_inputs: Vec<String>,
    next_class_id: u64,
}

impl SettingsDialogState {
    pub fn new(current: &ExamConfig) -> Self {
        let next_class_id = current
            .classes
            .iter()
            .filter_map(|entry| entry.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            duration_input: current.timer_duration_minutes.to_string(),
            class_duration_inputs: current
                .classes
                .iter()
                .map(|entry| entry.duration_minutes.to_string())
                .collect(),
            draft: current.clone(),
            next_class_id,
        }
    }

    fn add_class(&mut self) {
        let id = self.next_class_id.to_string();
        self.next_class_id += 1;
        self.draft
            .classes
            .push(ClassEntry::new(id, "New Class", "Subject", 60));
        self.class_duration_inputs.push("60".to_string());
    }

    fn remove_class(&mut self, index: usize) {
        self.draft.classes.remove(index);
        self.class_duration_inputs.remove(index);
    }

    /// Coerce the numeric buffers and produce the replacement record.
    fn applied_config(&self) -> ExamConfig {
        let mut config = self.draft.clone();
        config.timer_duration_minutes = parse_minutes(&self.duration_input);
        for (entry, input) in config.classes.iter_mut().zip(&self.class_duration_inputs) {
            entry.duration_minutes = parse_minutes(input);
        }
        config
    }
}

pub struct SettingsDialogResponse {
    /// Full replacement configuration when Apply was pressed.
    pub applied: Option<ExamConfig>,
}

/// Render the configuration dialog
pub fn render_settings_dialog(
    ctx: &egui::Context,
    state: &mut SettingsDialogState,
    show_dialog: &mut bool,
) -> SettingsDialogResponse {
    let mut applied = None;
    let mut close_requested = false;
    let mut dialog_open = *show_dialog;

    egui::Window::new("Dashboard Configuration")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(true)
        .default_width(580.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(460.0).show(ui, |ui| {
                let label_width = 170.0;

                ui.heading("General Settings");
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.allocate_ui_with_layout(
                        egui::Vec2::new(label_width, 20.0),
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.label("Exam title:");
                        },
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.draft.exam_title)
                            .desired_width(320.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.allocate_ui_with_layout(
                        egui::Vec2::new(label_width, 20.0),
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.label("Timer duration (minutes):");
                        },
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.duration_input).desired_width(80.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.allocate_ui_with_layout(
                        egui::Vec2::new(label_width, 20.0),
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.label("Theme:");
                        },
                    );
                    let selected_name = DisplayTheme::preset(&state.draft.theme).name;
                    egui::ComboBox::from_id_source("theme_combo")
                        .selected_text(selected_name)
                        .show_ui(ui, |ui| {
                            for preset in DisplayTheme::presets() {
                                ui.selectable_value(
                                    &mut state.draft.theme,
                                    preset.id.clone(),
                                    preset.name,
                                );
                            }
                        });
                });

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.heading("Active Classes");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Add Class").clicked() {
                            state.add_class();
                        }
                    });
                });
                ui.add_space(4.0);

                let mut remove_index = None;
                for index in 0..state.draft.classes.len() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{}", index + 1)).strong());
                        ui.add(
                            egui::TextEdit::singleline(&mut state.draft.classes[index].name)
                                .hint_text("Class Name")
                                .desired_width(170.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.draft.classes[index].subject)
                                .hint_text("Subject")
                                .desired_width(140.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.class_duration_inputs[index])
                                .hint_text("Mins")
                                .desired_width(50.0),
                        );
                        if ui.button("Delete").clicked() {
                            remove_index = Some(index);
                        }
                    });
                }
                if let Some(index) = remove_index {
                    state.remove_class(index);
                }
            });

            ui.add_space(8.0);
            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("Apply Changes").strong())
                    .clicked()
                {
                    applied = Some(state.applied_config());
                    close_requested = true;
                }
                if ui.button("Cancel").clicked() {
                    close_requested = true;
                }
            });
        });

    *show_dialog = dialog_open && !close_requested;
    SettingsDialogResponse { applied }
}

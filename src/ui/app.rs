use std::time::{Duration, Instant};

use egui::{Margin, RichText, Stroke, Vec2};

use super::settings_dialog::{render_settings_dialog, SettingsDialogState};
use super::theme::DisplayTheme;
use super::{banner, class_table, header, instructions, timer_panel};
use crate::models::ExamConfig;
use crate::services::countdown::CountdownEngine;

/// Repaint cadence for the header clock when no tick is pending.
const CLOCK_REFRESH: Duration = Duration::from_millis(500);

/// Share of the main grid given to the timer card.
const TIMER_COLUMN_RATIO: f32 = 0.42;

pub struct ExamDisplayApp {
    /// Live configuration record, replaced wholesale on Apply
    config: ExamConfig,
    /// Countdown state machine, holding its own duration snapshot
    engine: CountdownEngine,
    /// Currently applied theme colors
    active_theme: DisplayTheme,
    show_settings_dialog: bool,
    /// Draft edits while the dialog is open; dropped on Cancel
    settings_state: Option<SettingsDialogState>,
}

impl eframe::App for ExamDisplayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the countdown from the monotonic clock, then schedule the
        // next wakeup. The header clock needs a periodic repaint even when
        // the countdown is not running.
        match self.engine.poll(Instant::now()) {
            Some(next_tick) => ctx.request_repaint_after(next_tick),
            None => ctx.request_repaint_after(CLOCK_REFRESH),
        }

        egui::TopBottomPanel::top("header_panel")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                header::render_header(ui, &self.config.exam_title, &self.active_theme);
                ui.add_space(8.0);
                banner::render_banner(ui, &self.active_theme);
                ui.add_space(4.0);
            });

        egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("DEVELOPED BY MEIS ICT DEPARTMENT")
                        .size(11.0)
                        .strong()
                        .color(self.active_theme.text_muted),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.show_settings_dialog = true;
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let full = ui.available_size();
            let timer_width = full.x * TIMER_COLUMN_RATIO;

            ui.horizontal(|ui| {
                ui.allocate_ui_with_layout(
                    Vec2::new(timer_width, full.y),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        card_frame(&self.active_theme).show(ui, |ui| {
                            ui.set_min_size(ui.available_size());
                            timer_panel::render_timer_panel(
                                ui,
                                &mut self.engine,
                                &self.active_theme,
                            );
                        });
                    },
                );

                ui.vertical(|ui| {
                    card_frame(&self.active_theme).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        class_table::render_class_table(
                            ui,
                            &self.config.classes,
                            &self.active_theme,
                        );
                    });
                    ui.add_space(10.0);
                    card_frame(&self.active_theme).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        instructions::render_instructions(ui, &self.active_theme);
                    });
                });
            });
        });

        if self.show_settings_dialog {
            self.render_settings(ctx);
        }
    }
}

impl ExamDisplayApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ExamConfig::default();
        let engine = CountdownEngine::new(config.timer_duration_minutes);
        let active_theme = DisplayTheme::preset(&config.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        log::info!(
            "Configured display: {} classes, {} minute timer, theme '{}'",
            config.classes.len(),
            config.timer_duration_minutes,
            config.theme
        );

        Self {
            config,
            engine,
            active_theme,
            show_settings_dialog: false,
            settings_state: None,
        }
    }

    /// Replace the configuration wholesale on Apply.
    ///
    /// The countdown holds a snapshot of its duration, so it is
    /// reinitialized only when the applied duration differs; any other
    /// edit leaves an in-progress countdown untouched.
    fn apply_config(&mut self, ctx: &egui::Context, new_config: ExamConfig) {
        if new_config.timer_duration_minutes != self.config.timer_duration_minutes {
            self.engine
                .set_duration_minutes(new_config.timer_duration_minutes);
            log::info!(
                "Timer duration changed to {} minutes, countdown reset",
                new_config.timer_duration_minutes
            );
        }

        if new_config.theme != self.config.theme {
            self.active_theme = DisplayTheme::preset(&new_config.theme);
            self.active_theme.apply_to_context(ctx);
        }

        self.config = new_config;
    }

    fn render_settings(&mut self, ctx: &egui::Context) {
        let config = &self.config;
        let state = self
            .settings_state
            .get_or_insert_with(|| SettingsDialogState::new(config));

        let response = render_settings_dialog(ctx, state, &mut self.show_settings_dialog);

        if let Some(new_config) = response.applied {
            self.apply_config(ctx, new_config);
        }
        if !self.show_settings_dialog {
            // Dialog closed; discard the draft
            self.settings_state = None;
        }
    }
}

fn card_frame(theme: &DisplayTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.surface)
        .stroke(Stroke::new(1.0, theme.border))
        .rounding(16.0)
        .inner_margin(Margin::same(16.0))
}

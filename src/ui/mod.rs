mod app;
mod banner;
mod class_table;
mod header;
pub mod instructions;
mod settings_dialog;
pub mod theme;
mod theme_presets;
mod timer_panel;

pub use app::ExamDisplayApp;

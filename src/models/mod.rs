// Module exports for models

pub mod class_entry;
pub mod config;

pub use class_entry::ClassEntry;
pub use config::ExamConfig;

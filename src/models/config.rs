use serde::{Deserialize, Serialize};

use super::class_entry::ClassEntry;

/// The in-memory configuration record for the running display.
///
/// One instance exists for the lifetime of the process; the settings dialog
/// replaces it wholesale on Apply. Nothing is persisted across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamConfig {
    pub exam_title: String,
    /// Roster rows in display order.
    pub classes: Vec<ClassEntry>,
    /// Countdown duration handed to the engine at (re)initialization.
    pub timer_duration_minutes: u32,
    /// Theme identifier; unknown ids fall back to the default preset.
    pub theme: String,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            exam_title: "First Semester Final Exam".to_string(),
            classes: vec![
                ClassEntry::new("1", "Grade 9 - Section A", "Mathematics", 90),
                ClassEntry::new("2", "Grade 9 - Section B", "Mathematics", 90),
            ],
            timer_duration_minutes: 90,
            theme: "classic-light".to_string(),
        }
    }
}

/// Coerce free-form minutes input to a safe value.
///
/// Non-numeric or negative input collapses to zero, which the countdown
/// engine treats as an immediately expired timer. Invalid input is never
/// surfaced as an error.
pub fn parse_minutes(input: &str) -> u32 {
    input.trim().parse::<u32>().unwrap_or(0)
}

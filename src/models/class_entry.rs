use serde::{Deserialize, Serialize};

/// One roster row shown in the class table.
///
/// Entries are owned exclusively by [`ExamConfig::classes`](crate::models::ExamConfig);
/// the list order is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Opaque unique identifier, stable across form edits.
    pub id: String,
    pub name: String,
    pub subject: String,
    pub duration_minutes: u32,
}

impl ClassEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subject: impl Into<String>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subject: subject.into(),
            duration_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_entry_serialization() {
        let entry = ClassEntry::new("1", "Grade 9 - Section A", "Mathematics", 90);
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: ClassEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }
}

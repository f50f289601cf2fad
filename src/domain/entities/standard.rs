use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardId(pub String);

impl From<&str> for StandardId {
    fn from(value: &str) -> Self {
        StandardId(value.to_string())
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeacherId(pub String);

impl From<&str> for TeacherId {
    fn from(value: &str) -> Self {
        TeacherId(value.to_string())
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single curriculum requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standard {
    pub id: StandardId,
    pub description: String,
    pub subject: String,
    pub grade_level: String,
    pub category: String,
}

impl Standard {
    pub fn new(
        id: &str,
        description: &str,
        subject: &str,
        grade_level: &str,
        category: &str,
    ) -> Self {
        Self {
            id: StandardId::from(id),
            description: description.to_string(),
            subject: subject.to_string(),
            grade_level: grade_level.to_string(),
            category: category.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub department: String,
    pub campus: String,
}

impl Teacher {
    pub fn new(id: &str, name: &str, department: &str, campus: &str) -> Self {
        Self {
            id: TeacherId::from(id),
            name: name.to_string(),
            department: department.to_string(),
            campus: campus.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub count: u32,
}

/// How often one teacher addressed one standard, and in which lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageFact {
    pub standard_id: StandardId,
    pub teacher_id: TeacherId,
    pub count: u32,
    pub last_taught: NaiveDate,
    pub lessons: Vec<String>,
    /// Oldest first; the last point always carries `count`.
    pub trend: Vec<TrendPoint>,
}

/// Numeric part of each lesson reference, in order. References without
/// any digit are skipped.
pub fn lesson_numbers(lessons: &[String]) -> Vec<u32> {
    lessons
        .iter()
        .filter_map(|lesson| {
            let digits: String = lesson.chars().filter(char::is_ascii_digit).collect();
            digits.parse::<u32>().ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_numbers_keeps_digits_and_skips_unparsable() {
        let lessons = vec![
            "L12".to_string(),
            "intro".to_string(),
            "L-0907".to_string(),
            "".to_string(),
        ];

        assert_eq!(lesson_numbers(&lessons), vec![12, 907]);
    }

    #[test]
    fn ids_display_as_raw_text() {
        assert_eq!(StandardId::from("3.1A").to_string(), "3.1A");
        assert_eq!(TeacherId::from("T1").to_string(), "T1");
    }
}

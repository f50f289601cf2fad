use crate::domain::entities::standard::{CoverageFact, Standard, StandardId, Teacher, TeacherId};

/// Optional exact-match constraints; empty or `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardFilter {
    pub grade_level: Option<String>,
    pub subject: Option<String>,
    pub category: Option<String>,
}

impl StandardFilter {
    pub fn accepts(&self, standard: &Standard) -> bool {
        field_matches(self.grade_level.as_deref(), &standard.grade_level)
            && field_matches(self.subject.as_deref(), &standard.subject)
            && field_matches(self.category.as_deref(), &standard.category)
    }
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None | Some("") => true,
        Some(value) => value == actual,
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Read-only source of standards, teachers and coverage facts.
pub trait CoverageCatalog: Send + Sync {
    fn standards(&self) -> &[Standard];
    fn teachers(&self) -> &[Teacher];
    fn coverage(&self, standard_id: &StandardId, teacher_id: &TeacherId)
        -> Option<&CoverageFact>;

    fn standard_by_id(&self, id: &StandardId) -> Option<&Standard> {
        self.standards().iter().find(|s| s.id == *id)
    }

    fn teacher_by_id(&self, id: &TeacherId) -> Option<&Teacher> {
        self.teachers().iter().find(|t| t.id == *id)
    }

    fn grade_levels(&self) -> Vec<String> {
        distinct(self.standards().iter().map(|s| s.grade_level.as_str()))
    }

    fn subjects(&self) -> Vec<String> {
        distinct(self.standards().iter().map(|s| s.subject.as_str()))
    }

    fn categories(&self) -> Vec<String> {
        distinct(self.standards().iter().map(|s| s.category.as_str()))
    }

    fn filter_standards(&self, filter: &StandardFilter) -> Vec<Standard> {
        self.standards()
            .iter()
            .filter(|s| filter.accepts(s))
            .cloned()
            .collect()
    }
}

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::standard::{
    CoverageFact, Standard, StandardId, Teacher, TeacherId, TrendPoint,
};
use crate::usecase::ports::catalog::CoverageCatalog;

const MAX_COUNT: u32 = 10;
const LAST_TAUGHT_WINDOW_DAYS: i64 = 30;
const LESSON_ID_RANGE: u32 = 1000;
/// Month label and exclusive upper bound for the generated history.
const TREND_HISTORY: [(&str, u32); 4] = [("Jan", 3), ("Feb", 3), ("Mar", 4), ("Apr", 5)];
const TREND_CURRENT_MONTH: &str = "May";

pub fn fixture_standards() -> Vec<Standard> {
    vec![
        Standard::new("3.1A", "Apply mathematics to problems arising in everyday life", "Math", "3", "Numbers"),
        Standard::new("3.1B", "Use problem-solving models", "Math", "3", "Numbers"),
        Standard::new("3.2A", "Compose and decompose numbers", "Math", "3", "Numbers"),
        Standard::new("3.3A", "Represent fractions with denominators", "Math", "3", "Fractions"),
        Standard::new("3.3B", "Determine the fraction that corresponds to a specific point", "Math", "3", "Fractions"),
        Standard::new("3.4A", "Solve with automaticity multiplication facts", "Math", "3", "Operations"),
        Standard::new("3.4B", "Determine products using properties of operations", "Math", "3", "Operations"),
        Standard::new("3.5A", "Represent one- and two-step problems", "Math", "3", "Problems"),
        Standard::new("3.6A", "Classify two-dimensional figures", "Math", "3", "Geometry"),
        Standard::new("3.6B", "Determine the area of rectangles", "Math", "3", "Geometry"),
        Standard::new("4.1A", "Apply mathematics to solve problems", "Math", "4", "Numbers"),
        Standard::new("4.1B", "Use mathematical relationships to make predictions", "Math", "4", "Numbers"),
        Standard::new("4.2A", "Interpret the value of each digit in decimals", "Math", "4", "Numbers"),
        Standard::new("4.3A", "Represent a fraction on a number line", "Math", "4", "Fractions"),
        Standard::new("4.3B", "Decompose a fraction as a sum of fractions", "Math", "4", "Fractions"),
    ]
}

pub fn fixture_teachers() -> Vec<Teacher> {
    vec![
        Teacher::new("T1", "Alice Johnson", "Math", "Lincoln Elementary"),
        Teacher::new("T2", "Bob Smith", "Math", "Lincoln Elementary"),
        Teacher::new("T3", "Carol Davis", "Math", "Washington Middle"),
        Teacher::new("T4", "Dave Wilson", "Math", "Washington Middle"),
        Teacher::new("T5", "Eve Brown", "Math", "Jefferson High"),
    ]
}

/// In-memory catalog. Coverage is sparse: a pair may have no fact at all.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    standards: Vec<Standard>,
    teachers: Vec<Teacher>,
    coverage: HashMap<(StandardId, TeacherId), CoverageFact>,
}

impl MockCatalog {
    /// Later facts for the same pair replace earlier ones.
    pub fn from_parts(
        standards: Vec<Standard>,
        teachers: Vec<Teacher>,
        facts: Vec<CoverageFact>,
    ) -> Self {
        let coverage = facts
            .into_iter()
            .map(|fact| ((fact.standard_id.clone(), fact.teacher_id.clone()), fact))
            .collect();
        Self {
            standards,
            teachers,
            coverage,
        }
    }

    /// Fixture standards and teachers with one seeded fact per pair.
    pub fn seeded(seed: u64, anchor: NaiveDate) -> Self {
        let standards = fixture_standards();
        let teachers = fixture_teachers();
        let facts = generate_coverage(&standards, &teachers, seed, anchor);
        tracing::debug!(
            seed,
            %anchor,
            standards = standards.len(),
            teachers = teachers.len(),
            facts = facts.len(),
            "generated mock coverage"
        );
        Self::from_parts(standards, teachers, facts)
    }

    #[cfg(test)]
    pub fn fact_count(&self) -> usize {
        self.coverage.len()
    }
}

pub fn generate_coverage(
    standards: &[Standard],
    teachers: &[Teacher],
    seed: u64,
    anchor: NaiveDate,
) -> Vec<CoverageFact> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut facts = Vec::with_capacity(standards.len() * teachers.len());
    for standard in standards {
        for teacher in teachers {
            let count = rng.gen_range(0..=MAX_COUNT);
            let days_ago = rng.gen_range(0..LAST_TAUGHT_WINDOW_DAYS);
            let lessons = (0..count)
                .map(|_| format!("L{}", rng.gen_range(0..LESSON_ID_RANGE)))
                .collect();
            let mut trend: Vec<TrendPoint> = TREND_HISTORY
                .iter()
                .map(|&(month, bound)| TrendPoint {
                    month,
                    count: rng.gen_range(0..bound),
                })
                .collect();
            trend.push(TrendPoint {
                month: TREND_CURRENT_MONTH,
                count,
            });

            facts.push(CoverageFact {
                standard_id: standard.id.clone(),
                teacher_id: teacher.id.clone(),
                count,
                last_taught: anchor - Duration::days(days_ago),
                lessons,
                trend,
            });
        }
    }
    facts
}

impl CoverageCatalog for MockCatalog {
    fn standards(&self) -> &[Standard] {
        &self.standards
    }

    fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    fn coverage(
        &self,
        standard_id: &StandardId,
        teacher_id: &TeacherId,
    ) -> Option<&CoverageFact> {
        self.coverage
            .get(&(standard_id.clone(), teacher_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap_or_default()
    }

    #[test]
    fn seeded_catalog_is_deterministic() {
        let a = MockCatalog::seeded(7, anchor());
        let b = MockCatalog::seeded(7, anchor());

        for standard in a.standards() {
            for teacher in a.teachers() {
                assert_eq!(
                    a.coverage(&standard.id, &teacher.id),
                    b.coverage(&standard.id, &teacher.id)
                );
            }
        }
    }

    #[test]
    fn seeded_catalog_has_one_consistent_fact_per_pair() {
        let catalog = MockCatalog::seeded(42, anchor());

        assert_eq!(catalog.fact_count(), 15 * 5);
        for standard in catalog.standards() {
            for teacher in catalog.teachers() {
                let fact = catalog
                    .coverage(&standard.id, &teacher.id)
                    .expect("every fixture pair should have a fact");
                assert!(fact.count <= MAX_COUNT);
                assert_eq!(fact.lessons.len(), fact.count as usize);
                assert!(fact.lessons.iter().all(|l| l.starts_with('L')));
                assert!(fact.last_taught <= anchor());
                assert!(fact.last_taught > anchor() - Duration::days(LAST_TAUGHT_WINDOW_DAYS));
                assert_eq!(fact.trend.len(), 5);
                assert_eq!(fact.trend.last().map(|p| p.count), Some(fact.count));
            }
        }
    }

    #[test]
    fn missing_pair_is_absent_not_zero() {
        let standards = fixture_standards();
        let teachers = fixture_teachers();
        let zero = CoverageFact {
            standard_id: standards[0].id.clone(),
            teacher_id: teachers[0].id.clone(),
            count: 0,
            last_taught: anchor(),
            lessons: Vec::new(),
            trend: Vec::new(),
        };
        let catalog = MockCatalog::from_parts(standards.clone(), teachers.clone(), vec![zero]);

        let present = catalog.coverage(&standards[0].id, &teachers[0].id);
        let absent = catalog.coverage(&standards[0].id, &teachers[1].id);

        assert_eq!(present.map(|f| f.count), Some(0));
        assert!(absent.is_none());
    }
}

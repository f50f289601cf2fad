use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::dismissal::{ScrollSignal, ScrollSubscription};
use crate::domain::entities::coverage::CoverageLevel;
use crate::domain::entities::selection::{CellKey, SelectedCell};
use crate::domain::entities::standard::{CoverageFact, Standard, StandardId, TeacherId};
use crate::domain::interaction::{group_by_category, HeatmapInteraction};
use crate::infra::mock::catalog::{fixture_standards, fixture_teachers, MockCatalog};
use crate::usecase::ports::catalog::StandardFilter;
use crate::usecase::services::query_service::QueryService;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 31).expect("valid fixture date")
}

fn seeded_service() -> QueryService {
    QueryService::new(Arc::new(MockCatalog::seeded(1, anchor())))
}

fn ids(standards: &[Standard]) -> Vec<&str> {
    standards.iter().map(|s| s.id.0.as_str()).collect()
}

fn filter(grade: &str, subject: &str, category: &str) -> StandardFilter {
    let field = |value: &str| Some(value.to_string());
    StandardFilter {
        grade_level: field(grade),
        subject: field(subject),
        category: field(category),
    }
}

/// Mirrors the grid hook: one shared state, one scroll subscription.
fn mounted_grid(signal: &ScrollSignal) -> (Rc<RefCell<HeatmapInteraction>>, ScrollSubscription) {
    let state = Rc::new(RefCell::new(HeatmapInteraction::default()));
    let subscription = {
        let state = state.clone();
        signal.subscribe(move || state.borrow_mut().dismiss())
    };
    (state, subscription)
}

#[test]
fn unconstrained_filter_returns_full_catalog_in_order() {
    let service = seeded_service();

    let all = service.filter_standards(&StandardFilter::default());
    let empty_strings = service.filter_standards(&filter("", "", ""));

    assert_eq!(all, fixture_standards());
    assert_eq!(empty_strings, all);
}

#[test]
fn unmatched_grade_returns_nothing() {
    let service = seeded_service();

    let result = service.filter_standards(&StandardFilter {
        grade_level: Some("12".to_string()),
        ..StandardFilter::default()
    });

    assert!(result.is_empty());
}

#[test]
fn filters_combine_conjunctively() {
    let service = seeded_service();

    let result = service.filter_standards(&filter("4", "Math", "Fractions"));

    assert_eq!(ids(&result), vec!["4.3A", "4.3B"]);

    let mismatch = service.filter_standards(&filter("4", "Science", "Fractions"));
    assert!(mismatch.is_empty());
}

#[test]
fn filter_options_are_distinct_in_catalog_order() {
    let options = seeded_service().filter_options();

    assert_eq!(options.grade_levels, vec!["3", "4"]);
    assert_eq!(options.subjects, vec!["Math"]);
    assert_eq!(
        options.categories,
        vec!["Numbers", "Fractions", "Operations", "Problems", "Geometry"]
    );
}

#[test]
fn grouping_filtered_catalog_keeps_first_seen_categories() {
    let service = seeded_service();
    let standards = service.filter_standards(&StandardFilter::default());

    let grouped = group_by_category(&standards);

    assert_eq!(
        grouped.categories(),
        vec!["Numbers", "Fractions", "Operations", "Problems", "Geometry"]
    );
    let numbers = grouped.get("Numbers").map(ids).unwrap_or_default();
    assert_eq!(numbers, vec!["3.1A", "3.1B", "3.2A", "4.1A", "4.1B", "4.2A"]);
    assert_eq!(grouped.total_standards(), standards.len());
}

#[test]
fn absent_fact_differs_from_zero_count() {
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
    let service = QueryService::new(Arc::new(MockCatalog::from_parts(
        standards.clone(),
        teachers.clone(),
        vec![zero],
    )));

    let present = service
        .coverage(&standards[0].id, &teachers[0].id)
        .map(|fact| CoverageLevel::from_count(fact.count));

    assert_eq!(present, Some(CoverageLevel::Never));
    assert_eq!(service.coverage(&standards[0].id, &teachers[1].id), None);
}

#[test]
fn lookups_resolve_fixture_records() {
    let service = seeded_service();

    let teacher = service.teacher(&TeacherId::from("T3")).map(|t| t.name);
    let standard = service
        .standard(&StandardId::from("3.6B"))
        .map(|s| s.description);

    assert_eq!(teacher.as_deref(), Some("Carol Davis"));
    assert_eq!(standard.as_deref(), Some("Determine the area of rectangles"));
    assert!(service.teacher(&TeacherId::from("T9")).is_none());
}

#[test]
fn close_reported_by_any_cell_clears_selection() {
    let mut state = HeatmapInteraction::default();
    state.on_cell_clicked(StandardId::from("A"), TeacherId::from("T1"));

    state.on_tooltip_open_changed(false, StandardId::from("B"), TeacherId::from("T2"));

    assert_eq!(state.selection(), &SelectedCell::Closed);
}

#[test]
fn scroll_clears_selection_while_mounted() {
    let signal = ScrollSignal::default();
    let (state, _subscription) = mounted_grid(&signal);

    state
        .borrow_mut()
        .on_cell_clicked(StandardId::from("3.1A"), TeacherId::from("T1"));
    signal.emit();
    assert_eq!(state.borrow().selection(), &SelectedCell::Closed);

    signal.emit();
    assert_eq!(state.borrow().selection(), &SelectedCell::Closed);
}

#[test]
fn scroll_after_unmount_changes_nothing() {
    let signal = ScrollSignal::default();
    let (state, subscription) = mounted_grid(&signal);
    state
        .borrow_mut()
        .on_cell_clicked(StandardId::from("3.1A"), TeacherId::from("T1"));

    drop(subscription);
    signal.emit();

    assert_eq!(signal.listener_count(), 0);
    assert_eq!(
        state.borrow().selection(),
        &SelectedCell::OpenFor(CellKey::new(
            StandardId::from("3.1A"),
            TeacherId::from("T1")
        ))
    );
}

#[test]
fn remounting_does_not_leak_subscriptions() {
    let signal = ScrollSignal::default();

    for _ in 0..3 {
        let (_state, subscription) = mounted_grid(&signal);
        assert_eq!(signal.listener_count(), 1);
        drop(subscription);
    }

    assert_eq!(signal.listener_count(), 0);
}

#[test]
fn interleaved_events_are_last_write_wins() {
    let signal = ScrollSignal::default();
    let (state, _subscription) = mounted_grid(&signal);
    let a = (StandardId::from("3.1A"), TeacherId::from("T1"));
    let b = (StandardId::from("3.1B"), TeacherId::from("T2"));

    {
        let mut s = state.borrow_mut();
        s.on_cell_clicked(a.0.clone(), a.1.clone());
        s.set_hovered_row(Some(b.0.clone()));
        s.on_tooltip_open_changed(true, b.0.clone(), b.1.clone());
        s.set_hovered_row(None);
    }

    assert!(state.borrow().is_selected(&b.0, &b.1));
    assert!(!state.borrow().is_selected(&a.0, &a.1));
}

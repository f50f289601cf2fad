use dioxus::prelude::*;

use crate::domain::dismissal::ScrollSignal;
use crate::domain::entities::coverage::CoverageLevel;
use crate::domain::entities::selection::SelectedCell;
use crate::domain::entities::standard::{Standard, Teacher, TeacherId};
use crate::ui::components::heatmap_cell::HeatmapCell;
use crate::ui::components::tooltip::CoverageTooltip;
use crate::ui::state::dashboard_state::ViewMode;
use crate::ui::state::heatmap_state::{use_heatmap_state, HeatmapState};
use crate::usecase::services::query_service::QueryService;

/// Fixed sample columns for the views that have no backing data yet.
const DEPARTMENT_PLACEHOLDERS: [(&str, u32); 3] =
    [("Math Dept", 5), ("Science Dept", 2), ("English Dept", 0)];
const WEEK_PLACEHOLDERS: [(&str, u32); 4] =
    [("Week 1", 1), ("Week 2", 3), ("Week 3", 0), ("Week 4", 7)];

const HEAD_CELL_STYLE: &str = "min-width: 128px; text-align: center; padding: 8px; font-weight: 500; border-bottom: 1px solid #e4e4e7; transition: background 200ms;";

fn close_open_tooltip(mut state: HeatmapState) {
    if let SelectedCell::OpenFor(key) = state.selection() {
        state.on_tooltip_open_changed(false, key.standard_id, key.teacher_id);
    }
}

#[component]
fn HeatmapHeader(view_mode: ViewMode, teachers: Vec<Teacher>, mut state: HeatmapState) -> Element {
    let hovered_column = state.hovered_column();
    let placeholders: Vec<&'static str> = match view_mode {
        ViewMode::Teachers => Vec::new(),
        ViewMode::Departments => DEPARTMENT_PLACEHOLDERS.iter().map(|(label, _)| *label).collect(),
        ViewMode::Weeks => WEEK_PLACEHOLDERS.iter().map(|(label, _)| *label).collect(),
    };

    rsx! {
        thead {
            style: "position: sticky; top: 0; background: #fff; z-index: 10;",
            tr {
                th { style: "width: 192px; text-align: left; padding: 8px; border-bottom: 1px solid #e4e4e7;", "TEKS Standard" }
                if view_mode == ViewMode::Teachers {
                    {teachers.into_iter().map(|teacher| {
                        let background = if hovered_column.as_ref() == Some(&teacher.id) {
                            "rgba(244,244,245,0.6)"
                        } else {
                            "transparent"
                        };
                        let enter_id: TeacherId = teacher.id.clone();
                        let teacher_key = teacher.id.to_string();
                        rsx!(
                            th {
                                key: "{teacher_key}",
                                style: "{HEAD_CELL_STYLE} background: {background};",
                                onmouseenter: move |_| state.set_hovered_column(Some(enter_id.clone())),
                                onmouseleave: move |_| state.set_hovered_column(None),
                                div { "{teacher.name}" }
                                div { style: "font-size: 12px; color: #71717a; font-weight: 400;", "{teacher.campus}" }
                            }
                        )
                    })}
                }
                {placeholders.into_iter().map(|label| rsx!(
                    th { key: "{label}", style: "{HEAD_CELL_STYLE}", "{label}" }
                ))}
            }
        }
    }
}

#[component]
fn CategoryRow(category: String, col_span: usize) -> Element {
    rsx! {
        tr {
            style: "background: rgba(244,244,245,0.5);",
            td {
                colspan: "{col_span}",
                style: "padding: 8px; font-weight: 500;",
                div {
                    style: "display: flex; align-items: center;",
                    div { style: "width: 4px; height: 16px; background: #18181b; margin-right: 8px; border-radius: 9999px;" }
                    "{category}"
                }
            }
        }
    }
}

#[component]
fn PlaceholderCell(count: u32) -> Element {
    let level = CoverageLevel::from_count(count);
    let background = level.background();
    let foreground = level.foreground();
    rsx! {
        td { style: "text-align: center; padding: 16px; background: {background}; color: {foreground};", "{count}" }
    }
}

#[component]
fn StandardRow(
    standard: Standard,
    teachers: Vec<Teacher>,
    view_mode: ViewMode,
    mut state: HeatmapState,
) -> Element {
    let query = use_context::<QueryService>();
    let is_hovered = state.hovered_row().as_ref() == Some(&standard.id);
    let row_background = if is_hovered { "rgba(244,244,245,0.3)" } else { "transparent" };
    let enter_id = standard.id.clone();

    rsx! {
        tr {
            style: "background: {row_background}; transition: background 200ms;",
            onmouseenter: move |_| state.set_hovered_row(Some(enter_id.clone())),
            onmouseleave: move |_| state.set_hovered_row(None),
            td {
                style: "font-family: monospace; padding: 8px;",
                div {
                    style: "display: flex; align-items: center;",
                    div { style: "font-weight: 700; margin-right: 4px;", "{standard.id}:" }
                    div { style: "font-size: 14px;", "{standard.description}" }
                }
            }
            {match view_mode {
                ViewMode::Teachers => rsx! {
                    {teachers.into_iter().map(|teacher| {
                        let teacher_key = teacher.id.to_string();
                        match query.coverage(&standard.id, &teacher.id) {
                            Some(fact) => rsx!(
                                HeatmapCell {
                                    key: "{teacher_key}",
                                    standard: standard.clone(),
                                    teacher,
                                    fact,
                                    state,
                                }
                            ),
                            None => rsx!(td { key: "{teacher_key}" }),
                        }
                    })}
                },
                ViewMode::Departments => rsx! {
                    {DEPARTMENT_PLACEHOLDERS.iter().map(|(label, count)| rsx!(
                        PlaceholderCell { key: "{label}", count: *count }
                    ))}
                },
                ViewMode::Weeks => rsx! {
                    {WEEK_PLACEHOLDERS.iter().map(|(label, count)| rsx!(
                        PlaceholderCell { key: "{label}", count: *count }
                    ))}
                },
            }}
        }
    }
}

/// The popover for the selected cell, outside the scroll container so the
/// container never clips it.
#[component]
fn SelectedPopover(mut state: HeatmapState) -> Element {
    let query = use_context::<QueryService>();
    let SelectedCell::OpenFor(key) = state.selection() else {
        return rsx! {};
    };
    let (Some(standard), Some(teacher), Some(fact)) = (
        query.standard(&key.standard_id),
        query.teacher(&key.teacher_id),
        query.coverage(&key.standard_id, &key.teacher_id),
    ) else {
        tracing::debug!(standard_id = %key.standard_id, teacher_id = %key.teacher_id, "selected cell has no coverage record");
        return rsx! {};
    };

    rsx! {
        CoverageTooltip {
            standard,
            teacher,
            fact,
            anchor: state.popover_anchor(),
            on_close: move |_| {
                let key = key.clone();
                state.on_tooltip_open_changed(false, key.standard_id, key.teacher_id);
            },
        }
    }
}

/// Category-grouped coverage table with one shared detail popover.
#[component]
pub fn HeatmapGrid(
    standards: Memo<Vec<Standard>>,
    teachers: Vec<Teacher>,
    view_mode: ViewMode,
) -> Element {
    let state = use_heatmap_state(standards);
    let scroll = use_context::<ScrollSignal>();
    let groups = state.grouped_standards();
    let col_span = view_mode.column_span(teachers.len());

    rsx! {
        div {
            style: "border: 1px solid #e4e4e7; border-radius: 6px; outline: none;",
            tabindex: "0",
            onkeydown: move |event| {
                if event.key() == Key::Escape {
                    close_open_tooltip(state);
                }
            },
            div {
                style: "overflow: auto; max-height: calc(100vh - 300px);",
                onscroll: move |_| scroll.emit(),
                table {
                    style: "width: 100%; border-collapse: collapse;",
                    HeatmapHeader { view_mode, teachers: teachers.clone(), state }
                    tbody {
                        for group in groups.iter() {
                            CategoryRow {
                                key: "category-{group.category}",
                                category: group.category.clone(),
                                col_span,
                            }
                            for standard in group.standards.iter() {
                                StandardRow {
                                    key: "{standard.id}",
                                    standard: standard.clone(),
                                    teachers: teachers.clone(),
                                    view_mode,
                                    state,
                                }
                            }
                        }
                    }
                }
            }
            SelectedPopover { state }
        }
    }
}

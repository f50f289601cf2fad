use dioxus::prelude::*;

use crate::domain::entities::coverage::CoverageLevel;
use crate::domain::entities::standard::{CoverageFact, Standard, Teacher};
use crate::ui::state::heatmap_state::HeatmapState;

pub fn cell_emphasis(is_selected: bool, is_highlighted: bool) -> &'static str {
    if is_selected {
        "outline: 2px solid #18181b; outline-offset: 2px; z-index: 20;"
    } else if is_highlighted {
        "opacity: 0.9; transform: scale(1.02);"
    } else {
        ""
    }
}

#[component]
pub fn HeatmapCell(
    standard: Standard,
    teacher: Teacher,
    fact: CoverageFact,
    mut state: HeatmapState,
) -> Element {
    let level = CoverageLevel::from_count(fact.count);
    let background = level.background();
    let foreground = level.foreground();
    let is_selected = state.is_selected(&standard.id, &teacher.id);
    let emphasis = cell_emphasis(is_selected, state.is_highlighted(&standard.id, &teacher.id));
    let count = fact.count;

    let click_ids = (standard.id.clone(), teacher.id.clone());

    rsx! {
        td {
            "data-level": level.as_str(),
            style: "position: relative; text-align: center; padding: 0; cursor: pointer; border: 2px solid transparent; background: {background}; color: {foreground}; transition: all 200ms ease-in-out; {emphasis}",
            onclick: move |event| {
                event.stop_propagation();
                let point = event.client_coordinates();
                state.set_popover_anchor(point.x, point.y);
                let (standard_id, teacher_id) = click_ids.clone();
                let was_selected = state.is_selected(&standard_id, &teacher_id);
                state.on_cell_clicked(standard_id.clone(), teacher_id.clone());
                if was_selected {
                    state.on_tooltip_open_changed(false, standard_id, teacher_id);
                }
            },
            div { style: "padding: 16px; font-weight: 700; font-size: 18px;", "{count}" }
        }
    }
}

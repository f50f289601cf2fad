use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::dismissal::{BackdropSignal, ScrollSignal};
use crate::domain::entities::selection::SelectedCell;
use crate::domain::entities::standard::{Standard, StandardId, TeacherId};
use crate::domain::interaction::{group_by_category, GroupedStandards, HeatmapInteraction};

/// Handle returned by [`use_heatmap_state`]. Copy it freely into event
/// closures; all writes go through the handlers below.
#[derive(Clone, Copy, PartialEq)]
pub struct HeatmapState {
    interaction: Signal<HeatmapInteraction>,
    groups: Memo<GroupedStandards>,
    popover_anchor: Signal<(f64, f64)>,
}

impl HeatmapState {
    pub fn grouped_standards(&self) -> GroupedStandards {
        self.groups.read().clone()
    }

    pub fn hovered_row(&self) -> Option<StandardId> {
        self.interaction.read().hovered_row().cloned()
    }

    pub fn hovered_column(&self) -> Option<TeacherId> {
        self.interaction.read().hovered_column().cloned()
    }

    pub fn selection(&self) -> SelectedCell {
        self.interaction.read().selection().clone()
    }

    pub fn is_selected(&self, standard_id: &StandardId, teacher_id: &TeacherId) -> bool {
        self.interaction.read().is_selected(standard_id, teacher_id)
    }

    pub fn is_highlighted(&self, standard_id: &StandardId, teacher_id: &TeacherId) -> bool {
        self.interaction.read().is_highlighted(standard_id, teacher_id)
    }

    /// Viewport point of the click that last opened or toggled a cell.
    pub fn popover_anchor(&self) -> (f64, f64) {
        (self.popover_anchor)()
    }

    pub fn set_popover_anchor(&mut self, x: f64, y: f64) {
        self.popover_anchor.set((x, y));
    }

    pub fn set_hovered_row(&mut self, row: Option<StandardId>) {
        self.interaction.write().set_hovered_row(row);
    }

    pub fn set_hovered_column(&mut self, column: Option<TeacherId>) {
        self.interaction.write().set_hovered_column(column);
    }

    pub fn on_cell_clicked(&mut self, standard_id: StandardId, teacher_id: TeacherId) {
        tracing::debug!(%standard_id, %teacher_id, "cell clicked");
        self.interaction
            .write()
            .on_cell_clicked(standard_id, teacher_id);
    }

    pub fn on_tooltip_open_changed(
        &mut self,
        open: bool,
        standard_id: StandardId,
        teacher_id: TeacherId,
    ) {
        tracing::debug!(open, %standard_id, %teacher_id, "tooltip open changed");
        self.interaction
            .write()
            .on_tooltip_open_changed(open, standard_id, teacher_id);
    }
}

/// Clears an open selection. Closed stays untouched so an idle scroll
/// does not re-render the grid.
fn dismiss_if_open(mut interaction: Signal<HeatmapInteraction>) {
    let open = interaction
        .try_peek()
        .map(|state| *state.selection() != SelectedCell::Closed)
        .unwrap_or(false);
    if !open {
        return;
    }
    if let Ok(mut state) = interaction.try_write() {
        tracing::debug!("selection dismissed");
        state.dismiss();
    }
}

/// Hover/selection state for one mounted grid.
///
/// Grouping is recomputed whenever `standards` changes. Scroll and backdrop
/// subscriptions are taken on mount and released on unmount.
pub fn use_heatmap_state(standards: Memo<Vec<Standard>>) -> HeatmapState {
    let interaction = use_signal(HeatmapInteraction::default);
    let groups = use_memo(move || group_by_category(&standards.read()));
    let popover_anchor = use_signal(|| (0.0, 0.0));

    let scroll = use_context::<ScrollSignal>();
    let backdrop = use_context::<BackdropSignal>();
    let subscriptions = use_hook(move || {
        Rc::new([
            scroll.subscribe(move || dismiss_if_open(interaction)),
            backdrop.subscribe(move || dismiss_if_open(interaction)),
        ])
    });
    use_drop(move || {
        for subscription in subscriptions.iter() {
            subscription.unsubscribe();
        }
    });

    HeatmapState {
        interaction,
        groups,
        popover_anchor,
    }
}

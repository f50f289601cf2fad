//! Hover and selection state for the heatmap grid.
//!
//! Every handler is total and synchronous. Callers replay UI events in
//! delivery order and the last write wins.

use crate::domain::entities::selection::{CellKey, HoverState, SelectedCell};
use crate::domain::entities::standard::{Standard, StandardId, TeacherId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub standards: Vec<Standard>,
}

/// Standards bucketed by category, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedStandards {
    groups: Vec<CategoryGroup>,
}

impl GroupedStandards {
    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }

    #[cfg(test)]
    pub fn categories(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.category.as_str()).collect()
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<&[Standard]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.standards.as_slice())
    }

    #[cfg(test)]
    pub fn total_standards(&self) -> usize {
        self.groups.iter().map(|g| g.standards.len()).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn group_by_category(standards: &[Standard]) -> GroupedStandards {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for standard in standards {
        match groups.iter_mut().find(|g| g.category == standard.category) {
            Some(group) => group.standards.push(standard.clone()),
            None => groups.push(CategoryGroup {
                category: standard.category.clone(),
                standards: vec![standard.clone()],
            }),
        }
    }
    GroupedStandards { groups }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeatmapInteraction {
    hover: HoverState,
    selection: SelectedCell,
}

impl HeatmapInteraction {
    pub fn hovered_row(&self) -> Option<&StandardId> {
        self.hover.row.as_ref()
    }

    pub fn hovered_column(&self) -> Option<&TeacherId> {
        self.hover.column.as_ref()
    }

    pub fn selection(&self) -> &SelectedCell {
        &self.selection
    }

    pub fn is_selected(&self, standard_id: &StandardId, teacher_id: &TeacherId) -> bool {
        self.selection.is_open_for(standard_id, teacher_id)
    }

    /// Row hover, column hover or selection.
    pub fn is_highlighted(&self, standard_id: &StandardId, teacher_id: &TeacherId) -> bool {
        self.hover.row.as_ref() == Some(standard_id)
            || self.hover.column.as_ref() == Some(teacher_id)
            || self.is_selected(standard_id, teacher_id)
    }

    pub fn set_hovered_row(&mut self, row: Option<StandardId>) {
        self.hover.row = row;
    }

    pub fn set_hovered_column(&mut self, column: Option<TeacherId>) {
        self.hover.column = column;
    }

    pub fn on_cell_clicked(&mut self, standard_id: StandardId, teacher_id: TeacherId) {
        if self.selection.is_open_for(&standard_id, &teacher_id) {
            self.selection.close();
        } else {
            self.selection.open(CellKey::new(standard_id, teacher_id));
        }
    }

    /// A close from any cell clears the shared selection, not just its own.
    pub fn on_tooltip_open_changed(
        &mut self,
        open: bool,
        standard_id: StandardId,
        teacher_id: TeacherId,
    ) {
        if open {
            self.selection.open(CellKey::new(standard_id, teacher_id));
        } else {
            self.selection.close();
        }
    }

    pub fn dismiss(&mut self) {
        self.selection.close();
    }
}

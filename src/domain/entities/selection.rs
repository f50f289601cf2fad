use crate::domain::entities::standard::{StandardId, TeacherId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub standard_id: StandardId,
    pub teacher_id: TeacherId,
}

impl CellKey {
    pub fn new(standard_id: StandardId, teacher_id: TeacherId) -> Self {
        Self {
            standard_id,
            teacher_id,
        }
    }

    pub fn matches(&self, standard_id: &StandardId, teacher_id: &TeacherId) -> bool {
        self.standard_id == *standard_id && self.teacher_id == *teacher_id
    }
}

/// The one detail popover shared by every cell in the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectedCell {
    #[default]
    Closed,
    OpenFor(CellKey),
}

impl SelectedCell {
    pub fn open(&mut self, key: CellKey) {
        *self = SelectedCell::OpenFor(key);
    }

    pub fn close(&mut self) {
        *self = SelectedCell::Closed;
    }

    pub fn key(&self) -> Option<&CellKey> {
        match self {
            SelectedCell::Closed => None,
            SelectedCell::OpenFor(key) => Some(key),
        }
    }

    pub fn is_open_for(&self, standard_id: &StandardId, teacher_id: &TeacherId) -> bool {
        self.key()
            .is_some_and(|key| key.matches(standard_id, teacher_id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    pub row: Option<StandardId>,
    pub column: Option<TeacherId>,
}

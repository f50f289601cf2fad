use std::time::Duration;

use dioxus::prelude::*;

use crate::usecase::ports::catalog::StandardFilter;

pub const ALL_OPTION_VALUE: &str = "";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Teachers,
    Departments,
    Weeks,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Teachers, ViewMode::Departments, ViewMode::Weeks];

    pub fn value(self) -> &'static str {
        match self {
            ViewMode::Teachers => "teachers",
            ViewMode::Departments => "departments",
            ViewMode::Weeks => "weeks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Teachers => "Teachers",
            ViewMode::Departments => "Departments",
            ViewMode::Weeks => "Weeks",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.value() == value)
    }

    /// Columns spanned by a category row, including the standard column.
    pub fn column_span(self, teacher_count: usize) -> usize {
        match self {
            ViewMode::Teachers => teacher_count + 1,
            ViewMode::Departments => 4,
            ViewMode::Weeks => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

fn non_empty(value: String) -> Option<String> {
    if value == ALL_OPTION_VALUE {
        None
    } else {
        Some(value)
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct DashboardState {
    pub grade_level: Signal<String>,
    pub subject: Signal<String>,
    pub category: Signal<String>,
    pub view_mode: Signal<ViewMode>,
    pub toasts: Signal<Vec<Toast>>,
    pub next_toast_id: Signal<u64>,
    pub toast_lifetime: Duration,
}

impl DashboardState {
    pub fn new(toast_lifetime: Duration) -> Self {
        Self {
            grade_level: use_signal(String::new),
            subject: use_signal(String::new),
            category: use_signal(String::new),
            view_mode: use_signal(ViewMode::default),
            toasts: use_signal(Vec::<Toast>::new),
            next_toast_id: use_signal(|| 0_u64),
            toast_lifetime,
        }
    }

    pub fn filter(&self) -> StandardFilter {
        StandardFilter {
            grade_level: non_empty((self.grade_level)()),
            subject: non_empty((self.subject)()),
            category: non_empty((self.category)()),
        }
    }

    /// Shows `message` and schedules its removal.
    pub fn push_toast(&mut self, message: String) {
        let id = (self.next_toast_id)();
        self.next_toast_id.set(id + 1);
        self.toasts.write().push(Toast { id, message });

        let mut toasts = self.toasts;
        let lifetime = self.toast_lifetime;
        spawn(async move {
            tokio::time::sleep(lifetime).await;
            if let Ok(mut list) = toasts.try_write() {
                list.retain(|t| t.id != id);
            }
        });
    }
}

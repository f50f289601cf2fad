use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::dismissal::BackdropSignal;
use crate::infra::mock::catalog::MockCatalog;
use crate::platform::desktop::scroll::use_window_scroll_signal;
use crate::ui::components::dropdown::DropdownId;
use crate::ui::components::filter_panel::FilterPanel;
use crate::ui::components::header::DashboardHeader;
use crate::ui::components::heatmap_grid::HeatmapGrid;
use crate::ui::components::toast::ToastStack;
use crate::ui::state::dashboard_state::{DashboardState, ViewMode};
use crate::usecase::services::export_service::{ExportFormat, ExportService};
use crate::usecase::services::query_service::QueryService;

#[component]
pub fn App() -> Element {
    let config = use_context::<DashboardConfig>();

    let query_service = use_context_provider({
        let seed = config.coverage_seed;
        move || {
            let catalog = MockCatalog::seeded(seed, Local::now().date_naive());
            QueryService::new(Arc::new(catalog))
        }
    });
    use_window_scroll_signal();
    let backdrop = use_context_provider(BackdropSignal::default);

    let dashboard = DashboardState::new(config.toast_lifetime);
    let DashboardState {
        mut grade_level,
        mut subject,
        mut category,
        mut view_mode,
        toasts,
        ..
    } = dashboard;

    let export_service = ExportService::new(config.export_delay);
    let options = use_hook({
        let query_service = query_service.clone();
        move || query_service.filter_options()
    });
    let teachers = use_hook({
        let query_service = query_service.clone();
        move || query_service.teachers()
    });

    let query_for_filter = query_service.clone();
    let filtered = use_memo(move || query_for_filter.filter_standards(&dashboard.filter()));

    let mut open_dropdown = use_signal(|| None::<DropdownId>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    let has_results = !filtered.read().is_empty();

    rsx! {
        div {
            onclick: move |_| {
                open_dropdown.set(None);
                backdrop.emit();
            },
            style: "font-family: 'Inter', sans-serif; max-width: 1280px; margin: 0 auto; padding: 32px 16px; display: flex; flex-direction: column; gap: 24px; background: #fff; min-height: 100vh; box-sizing: border-box;",

            DashboardHeader {
                title: config.title.clone(),
                description: config.description.clone(),
            }

            FilterPanel {
                options: options.clone(),
                grade_level: grade_level(),
                subject: subject(),
                category: category(),
                view_mode: view_mode(),
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_grade_level_change: move |value: String| {
                    tracing::info!(grade_level = %value, "grade filter changed");
                    grade_level.set(value);
                },
                on_subject_change: move |value: String| {
                    tracing::info!(subject = %value, "subject filter changed");
                    subject.set(value);
                },
                on_category_change: move |value: String| {
                    tracing::info!(category = %value, "category filter changed");
                    category.set(value);
                },
                on_view_mode_change: move |mode: ViewMode| {
                    tracing::info!(view_mode = mode.value(), "view mode changed");
                    view_mode.set(mode);
                },
                on_export: move |format: ExportFormat| {
                    let mut dashboard = dashboard;
                    spawn(async move {
                        export_service
                            .export(format, |notice| dashboard.push_toast(notice.message()))
                            .await;
                    });
                },
            }

            if has_results {
                HeatmapGrid {
                    standards: filtered,
                    teachers: teachers.clone(),
                    view_mode: view_mode(),
                }
            } else {
                div {
                    style: "text-align: center; padding: 64px 0;",
                    h3 { style: "font-size: 20px; font-weight: 500; color: #52525b; margin: 0;", "No TEKS standards match the selected filters" }
                    p { style: "color: #71717a; margin-top: 8px;", "Try adjusting your filter criteria" }
                }
            }

            ToastStack { toasts: toasts() }
        }
    }
}

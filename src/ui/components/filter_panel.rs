use dioxus::prelude::*;

use crate::ui::components::dropdown::{DropdownId, DropdownOption, DropdownSelect};
use crate::ui::state::dashboard_state::{ViewMode, ALL_OPTION_VALUE};
use crate::usecase::services::export_service::ExportFormat;
use crate::usecase::services::query_service::FilterOptions;

fn with_all_option(
    all_label: &str,
    values: &[String],
    label: impl Fn(&str) -> String,
) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption::new(ALL_OPTION_VALUE, all_label))
        .chain(values.iter().map(|v| DropdownOption::new(v.as_str(), label(v))))
        .collect()
}

#[component]
pub fn FilterPanel(
    options: FilterOptions,
    grade_level: String,
    subject: String,
    category: String,
    view_mode: ViewMode,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
    on_grade_level_change: EventHandler<String>,
    on_subject_change: EventHandler<String>,
    on_category_change: EventHandler<String>,
    on_view_mode_change: EventHandler<ViewMode>,
    on_export: EventHandler<ExportFormat>,
) -> Element {
    let grade_options = with_all_option("All Grades", &options.grade_levels, |g| {
        format!("Grade {g}")
    });
    let subject_options = with_all_option("All Subjects", &options.subjects, str::to_string);
    let category_options =
        with_all_option("All Categories", &options.categories, str::to_string);
    let view_options: Vec<DropdownOption> = ViewMode::ALL
        .into_iter()
        .map(|mode| DropdownOption::new(mode.value(), mode.label()))
        .collect();

    rsx! {
        div {
            style: "background: #fff; padding: 24px; border-radius: 8px; border: 1px solid #e4e4e7; display: flex; flex-direction: column; gap: 24px;",
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                h3 { style: "font-size: 18px; font-weight: 500; margin: 0;", "Filters" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    DropdownSelect {
                        id: DropdownId::GradeLevel,
                        label: "Grade Level",
                        placeholder: "Select grade",
                        options: grade_options,
                        selected: grade_level,
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                        on_select: move |value: String| on_grade_level_change.call(value),
                    }
                    DropdownSelect {
                        id: DropdownId::Subject,
                        label: "Subject",
                        placeholder: "Select subject",
                        options: subject_options,
                        selected: subject,
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                        on_select: move |value: String| on_subject_change.call(value),
                    }
                    DropdownSelect {
                        id: DropdownId::Category,
                        label: "Category",
                        placeholder: "Select category",
                        options: category_options,
                        selected: category,
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                        on_select: move |value: String| on_category_change.call(value),
                    }
                    DropdownSelect {
                        id: DropdownId::ViewMode,
                        label: "View By",
                        placeholder: "Select view",
                        options: view_options,
                        selected: view_mode.value().to_string(),
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                        on_select: move |value: String| {
                            if let Some(mode) = ViewMode::from_value(&value) {
                                on_view_mode_change.call(mode);
                            }
                        },
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                h3 { style: "font-size: 18px; font-weight: 500; margin: 0;", "Export" }
                div {
                    style: "display: flex; gap: 8px;",
                    {ExportFormat::ALL.into_iter().map(|format| {
                        let label = format.label();
                        rsx!(
                            button {
                                key: "{label}",
                                style: "border: 1px solid #d4d4d8; background: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;",
                                onclick: move |event| {
                                    event.stop_propagation();
                                    on_export.call(format);
                                },
                                "{label}"
                            }
                        )
                    })}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_option_leads_the_list() {
        let values = vec!["3".to_string(), "4".to_string()];

        let options = with_all_option("All Grades", &values, |g| format!("Grade {g}"));

        assert_eq!(options[0], DropdownOption::new("", "All Grades"));
        assert_eq!(options[1], DropdownOption::new("3", "Grade 3"));
        assert_eq!(options.len(), 3);
    }
}

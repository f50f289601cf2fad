use dioxus::prelude::*;

use crate::domain::entities::coverage::CoverageLevel;
use crate::domain::entities::standard::{lesson_numbers, CoverageFact, Standard, Teacher, TrendPoint};

pub const MAX_LESSON_TAGS: usize = 5;
const TREND_CHART_HEIGHT_PX: u32 = 64;
const POPOVER_WIDTH_PX: u32 = 320;
const POPOVER_OFFSET_PX: f64 = 12.0;
const VIEWPORT_MARGIN_PX: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonTags {
    pub shown: Vec<u32>,
    pub hidden: usize,
}

pub fn lesson_tags(lessons: &[String], limit: usize) -> LessonTags {
    let numbers = lesson_numbers(lessons);
    let hidden = numbers.len().saturating_sub(limit);
    LessonTags {
        shown: numbers.into_iter().take(limit).collect(),
        hidden,
    }
}

/// Bar heights scaled so the tallest bar fills the chart.
pub fn trend_bar_heights(trend: &[TrendPoint], chart_height: u32) -> Vec<u32> {
    let max = trend.iter().map(|p| p.count).max().unwrap_or(0);
    trend
        .iter()
        .map(|p| {
            if max == 0 {
                0
            } else {
                let scaled = u64::from(p.count) * u64::from(chart_height) / u64::from(max);
                u32::try_from(scaled).unwrap_or(chart_height)
            }
        })
        .collect()
}

/// Viewport-fixed placement just past the click point. CSS clamps keep the
/// panel on screen near the right and bottom edges.
pub fn popover_placement(anchor: (f64, f64)) -> String {
    let left = (anchor.0.max(0.0) + POPOVER_OFFSET_PX).round();
    let top = (anchor.1.max(0.0) + POPOVER_OFFSET_PX).round();
    let reserved = POPOVER_WIDTH_PX + VIEWPORT_MARGIN_PX;
    format!(
        "position: fixed; left: max({VIEWPORT_MARGIN_PX}px, min({left}px, calc(100vw - {reserved}px))); \
         top: max({VIEWPORT_MARGIN_PX}px, min({top}px, calc(100vh - 480px))); \
         width: {POPOVER_WIDTH_PX}px; max-height: calc(100vh - {double}px); overflow-y: auto;",
        double = VIEWPORT_MARGIN_PX * 2,
    )
}

#[component]
fn MetadataGrid(teacher: Teacher, count: u32, last_taught: String) -> Element {
    let entries = [
        ("Teacher", teacher.name.clone()),
        ("Campus", teacher.campus.clone()),
        ("Times Taught", count.to_string()),
        ("Last Taught", last_taught),
    ];
    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; font-size: 12px;",
            {entries.into_iter().map(|(label, value)| rsx!(
                div {
                    key: "{label}",
                    p { style: "color: #71717a; margin: 0;", "{label}" }
                    p { style: "font-weight: 500; margin: 0;", "{value}" }
                }
            ))}
        }
    }
}

#[component]
fn TrendChart(trend: Vec<TrendPoint>, color: &'static str) -> Element {
    let heights = trend_bar_heights(&trend, TREND_CHART_HEIGHT_PX);
    let chart_height = TREND_CHART_HEIGHT_PX + 16;
    rsx! {
        div {
            style: "padding-top: 4px;",
            p { style: "font-size: 12px; font-weight: 500; margin: 0 0 4px;", "Coverage Trend" }
            div {
                style: "display: flex; align-items: flex-end; gap: 8px; height: {chart_height}px;",
                {trend.iter().zip(heights).map(|(point, height)| {
                    let month = point.month;
                    rsx!(
                        div {
                            key: "{month}",
                            style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: flex-end; height: 100%;",
                            div { style: "width: 100%; height: {height}px; background: {color}; border-radius: 4px 4px 0 0;" }
                            span { style: "font-size: 10px; color: #71717a;", "{month}" }
                        }
                    )
                })}
            }
        }
    }
}

#[component]
fn LessonTagList(lessons: Vec<String>) -> Element {
    let tags = lesson_tags(&lessons, MAX_LESSON_TAGS);
    if tags.shown.is_empty() {
        return rsx! {};
    }
    let hidden = tags.hidden;
    rsx! {
        div {
            p { style: "font-size: 12px; font-weight: 500; margin: 0 0 4px;", "Lessons" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px;",
                {tags.shown.iter().enumerate().map(|(idx, lesson)| rsx!(
                    span {
                        key: "{idx}",
                        style: "border-radius: 9999px; padding: 2px 10px; font-size: 12px; font-weight: 600; background: #18181b; color: #fff;",
                        "Lesson {lesson}"
                    }
                ))}
                if hidden > 0 {
                    span {
                        style: "border-radius: 9999px; padding: 2px 10px; font-size: 12px; font-weight: 600; background: #f4f4f5; color: #18181b;",
                        "+{hidden} more"
                    }
                }
            }
        }
    }
}

/// Detail popover for the selected cell.
#[component]
pub fn CoverageTooltip(
    standard: Standard,
    teacher: Teacher,
    fact: CoverageFact,
    anchor: (f64, f64),
    on_close: EventHandler<()>,
) -> Element {
    let placement = popover_placement(anchor);
    let level = CoverageLevel::from_count(fact.count);
    let tint = level.background();
    let last_taught = fact.last_taught.format("%Y-%m-%d").to_string();
    let status = level.status_label();

    rsx! {
        div {
            style: "{placement} z-index: 50; background: #fff; border: 1px solid #e4e4e7; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); text-align: left; cursor: default;",
            onclick: move |event| event.stop_propagation(),
            div {
                style: "padding: 16px; border-bottom: 1px solid #e4e4e7; background: {tint}4d; display: flex; justify-content: space-between; gap: 8px;",
                h4 { style: "font-size: 14px; font-weight: 600; margin: 0; color: #18181b;", "{standard.id}: {standard.description}" }
                button {
                    style: "border: none; background: transparent; cursor: pointer; font-size: 14px; color: #18181b;",
                    onclick: move |event| {
                        event.stop_propagation();
                        on_close.call(());
                    },
                    "✕"
                }
            }
            div {
                style: "padding: 16px; display: flex; flex-direction: column; gap: 12px; color: #18181b; font-weight: 400;",
                MetadataGrid { teacher: teacher.clone(), count: fact.count, last_taught }
                p { style: "font-size: 12px; margin: 0;", "Coverage Status: {status}" }
                TrendChart { trend: fact.trend.clone(), color: tint }
                LessonTagList { lessons: fact.lessons.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lessons(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn lesson_tags_cap_and_count_overflow() {
        let tags = lesson_tags(
            &lessons(&["L1", "L2", "x", "L3", "L4", "L5", "L6", "L7"]),
            MAX_LESSON_TAGS,
        );

        assert_eq!(tags.shown, vec![1, 2, 3, 4, 5]);
        assert_eq!(tags.hidden, 2);
    }

    #[test]
    fn lesson_tags_without_numbers_are_empty() {
        let tags = lesson_tags(&lessons(&["intro", "review"]), MAX_LESSON_TAGS);

        assert!(tags.shown.is_empty());
        assert_eq!(tags.hidden, 0);
    }

    #[test]
    fn trend_bars_scale_to_tallest_point() {
        let trend = vec![
            TrendPoint { month: "Jan", count: 0 },
            TrendPoint { month: "Feb", count: 2 },
            TrendPoint { month: "Mar", count: 4 },
        ];

        assert_eq!(trend_bar_heights(&trend, 64), vec![0, 32, 64]);
    }

    #[test]
    fn huge_counts_scale_without_overflow() {
        let trend = vec![
            TrendPoint { month: "Apr", count: u32::MAX / 2 },
            TrendPoint { month: "May", count: u32::MAX },
        ];

        assert_eq!(trend_bar_heights(&trend, 64), vec![31, 64]);
    }

    #[test]
    fn popover_is_fixed_beside_the_click() {
        let style = popover_placement((100.0, 200.4));

        assert!(style.starts_with("position: fixed;"));
        assert!(style.contains("min(112px, calc(100vw - 328px))"));
        assert!(style.contains("min(212px, calc(100vh - 480px))"));
        assert!(style.contains("width: 320px;"));
    }

    #[test]
    fn popover_ignores_negative_click_points() {
        let style = popover_placement((-40.0, -5.0));

        assert!(style.contains("min(12px,"));
        assert!(!style.contains("min(-"));
    }

    #[test]
    fn flat_zero_trend_has_no_bars() {
        let trend = vec![TrendPoint { month: "May", count: 0 }];

        assert_eq!(trend_bar_heights(&trend, 64), vec![0]);
    }
}

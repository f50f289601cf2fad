use dioxus::prelude::*;

use crate::domain::entities::coverage::CoverageLevel;

#[component]
pub fn DashboardHeader(title: String, description: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            div {
                style: "display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 16px;",
                div {
                    h1 { style: "font-size: 24px; font-weight: 700; margin: 0;", "{title}" }
                    p { style: "color: #71717a; margin: 4px 0 0;", "{description}" }
                }
                button {
                    style: "background: #18181b; color: #fff; border: none; padding: 8px 16px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| tracing::info!("report generation is not available in this build"),
                    "Generate New Report"
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 16px; margin-top: 16px; font-size: 14px;",
                h3 { style: "font-weight: 500; font-size: 14px; margin: 0;", "Legend:" }
                {CoverageLevel::ALL.into_iter().map(|level| {
                    let swatch = level.background();
                    let label = level.legend_label();
                    rsx!(
                        div {
                            key: "{label}",
                            style: "display: flex; align-items: center; gap: 8px;",
                            div { style: "width: 16px; height: 16px; border-radius: 4px; background: {swatch};" }
                            span { "{label}" }
                        }
                    )
                })}
            }
        }
    }
}

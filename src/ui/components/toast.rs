use dioxus::prelude::*;

use crate::ui::state::dashboard_state::Toast;

#[component]
pub fn ToastStack(toasts: Vec<Toast>) -> Element {
    rsx! {
        div {
            style: "position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1500;",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    style: "background: #fff; border: 1px solid #e4e4e7; border-left: 4px solid #16a34a; border-radius: 8px; padding: 12px 16px; box-shadow: 0 6px 16px rgba(0,0,0,0.12); font-size: 14px; min-width: 220px;",
                    "{toast.message}"
                }
            }
        }
    }
}

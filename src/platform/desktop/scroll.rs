use dioxus::prelude::*;

use crate::domain::dismissal::ScrollSignal;

/// Capturing listener, so scrolls inside nested containers are seen too.
/// Stays installed until the Rust side sends the teardown message.
const SCROLL_BRIDGE_JS: &str = r#"
const forward = () => dioxus.send(true);
window.addEventListener("scroll", forward, true);
await dioxus.recv();
window.removeEventListener("scroll", forward, true);
"#;

/// Provides the app-wide [`ScrollSignal`] and feeds it from the webview.
pub fn use_window_scroll_signal() -> ScrollSignal {
    let signal = use_context_provider(ScrollSignal::default);

    let bridge = use_hook(|| {
        tracing::info!("installing scroll dismissal bridge");
        document::eval(SCROLL_BRIDGE_JS)
    });

    use_hook({
        let signal = signal.clone();
        let mut bridge = bridge.clone();
        move || {
            spawn(async move {
                while bridge.recv::<bool>().await.is_ok() {
                    signal.emit();
                }
                tracing::debug!("scroll dismissal bridge closed");
            })
        }
    });

    use_drop(move || {
        if let Err(err) = bridge.send(true) {
            tracing::warn!("failed to remove scroll listener: {err}");
        }
        tracing::info!("scroll dismissal bridge removed");
    });

    signal
}

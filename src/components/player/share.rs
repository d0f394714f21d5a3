use crate::components::Icon;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

const COPIED_MESSAGE: &str = "Song URL copied!";

/// Copies the track permalink and shows a short-lived confirmation.
#[component]
pub(super) fn ShareButton(permalink_url: String, tooltip_ms: u32) -> Element {
    let mut copied = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);

    let on_share = move |_| {
        copy_to_clipboard(&permalink_url);
        copied.set(true);

        // Only the latest click hides the tooltip.
        let ticket = generation() + 1;
        generation.set(ticket);
        let mut copied = copied;
        spawn(async move {
            delay_ms(tooltip_ms).await;
            if *generation.peek() == ticket {
                copied.set(false);
            }
        });
    };

    rsx! {
        div { class: "player-share",
            a {
                id: "share-btn",
                class: "player-content-link",
                role: "button",
                aria_label: "Copy song URL",
                onclick: on_share,
                Icon { class: "fa fa-share".to_string() }
            }
            if copied() {
                div { class: "player-tooltip", role: "status",
                    p { "{COPIED_MESSAGE}" }
                }
            }
        }
    }
}

fn copy_to_clipboard(text: &str) {
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    debug!(url = text, "copying permalink");
    let _ = document::eval(&format!(
        r#"(function () {{
            if (navigator.clipboard && navigator.clipboard.writeText) {{
                navigator.clipboard.writeText({payload}).catch(() => {{}});
            }}
        }})();"#
    ));
}

#[cfg(target_arch = "wasm32")]
async fn delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn delay_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

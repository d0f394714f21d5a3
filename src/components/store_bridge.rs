//! Bridge to the surrounding web client's store.
//!
//! Snapshots arrive as the `detail` of `cloudsound:snapshot` window events and
//! intents leave as `cloudsound:intent` events. `cloudsound:ready` is fired
//! once the listener is in place so the client can push its current state.

use crate::store::{PlayerIntent, StoreSnapshot};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

pub const SNAPSHOT_EVENT: &str = "cloudsound:snapshot";
pub const INTENT_EVENT: &str = "cloudsound:intent";
pub const READY_EVENT: &str = "cloudsound:ready";

fn subscribe_script() -> String {
    format!(
        r#"window.addEventListener("{SNAPSHOT_EVENT}", (event) => {{
            dioxus.send(event.detail ?? {{}});
        }});
        window.dispatchEvent(new CustomEvent("{READY_EVENT}"));
        await new Promise(() => {{}});"#
    )
}

/// Script publishing `intent`, `None` if it cannot be serialized.
pub fn intent_event_script(intent: &PlayerIntent) -> Option<String> {
    let payload = serde_json::to_string(intent).ok()?;
    Some(format!(
        r#"window.dispatchEvent(new CustomEvent("{INTENT_EVENT}", {{ detail: {payload} }}));"#
    ))
}

pub fn publish_intent(intent: &PlayerIntent) {
    let Some(script) = intent_event_script(intent) else {
        warn!(?intent, "intent could not be serialized");
        return;
    };
    let _ = document::eval(&script);
}

/// Keep `store` in step with the snapshots the client publishes.
pub fn use_store_bridge(mut store: Signal<StoreSnapshot>) {
    use_future(move || async move {
        let mut eval = document::eval(&subscribe_script());
        loop {
            match eval.recv::<serde_json::Value>().await {
                Ok(value) => match serde_json::from_value::<StoreSnapshot>(value) {
                    Ok(snapshot) => {
                        debug!(
                            active_track = ?snapshot.player.active_track_id,
                            is_playing = snapshot.player.is_playing,
                            "store snapshot received"
                        );
                        store.set(snapshot);
                    }
                    Err(err) => warn!(error = %err, "ignoring malformed store snapshot"),
                },
                Err(err) => {
                    warn!(error = ?err, "store bridge closed");
                    break;
                }
            }
        }
    });
}

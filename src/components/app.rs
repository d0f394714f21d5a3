use crate::components::{publish_intent, use_store_bridge, Player};
use crate::db::{initialize_database, load_settings, save_settings, PlayerSettings};
use crate::store::{Dispatcher, PlayerIntent, StoreSnapshot};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

const MIN_TOOLTIP_MS: u32 = 250;
const MAX_TOOLTIP_MS: u32 = 10_000;

fn normalize_settings(mut settings: PlayerSettings) -> PlayerSettings {
    settings.share_tooltip_ms = settings.share_tooltip_ms.clamp(MIN_TOOLTIP_MS, MAX_TOOLTIP_MS);
    settings.client_id = settings.client_id.trim().to_string();
    settings.access_token = settings
        .access_token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    settings
}

/// Owns the store snapshot, settings and dispatcher the player reads from context.
#[component]
pub fn AppShell() -> Element {
    let store = use_signal(StoreSnapshot::default);
    let mut settings = use_signal(PlayerSettings::default);
    let dispatcher = Dispatcher(use_callback(move |intent: PlayerIntent| {
        info!(?intent, "dispatching intent");
        publish_intent(&intent);
    }));

    use_context_provider(|| store);
    use_context_provider(|| settings);
    use_context_provider(|| dispatcher);

    use_store_bridge(store);

    // Initialize database and load saved settings on mount
    use_effect(move || {
        spawn(async move {
            if let Err(e) = initialize_database().await {
                warn!(error = %e, "failed to initialize settings storage");
                return;
            }

            match load_settings().await {
                Ok(loaded) => {
                    let normalized = normalize_settings(loaded.clone());
                    settings.set(normalized.clone());
                    if normalized != loaded {
                        if let Err(e) = save_settings(normalized).await {
                            warn!(error = %e, "failed to save normalized settings");
                        }
                    }
                }
                Err(e) => warn!(error = %e, "failed to load settings, using defaults"),
            }
        });
    });

    rsx! {
        div { class: "app-shell", Player {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_tooltip_and_trims_credentials() {
        let settings = normalize_settings(PlayerSettings {
            client_id: "  abc ".into(),
            access_token: Some("   ".into()),
            share_tooltip_ms: 0,
        });
        assert_eq!(settings.client_id, "abc");
        assert_eq!(settings.access_token, None);
        assert_eq!(settings.share_tooltip_ms, MIN_TOOLTIP_MS);
    }

    #[test]
    fn defaults_are_already_normal() {
        assert_eq!(
            normalize_settings(PlayerSettings::default()),
            PlayerSettings::default()
        );
    }
}

use crate::components::media_sync::{use_media_sync, SyncProps, AUDIO_ELEMENT_ID, STATUS_BAR_ID};
use crate::components::Icon;
use crate::db::PlayerSettings;
use crate::store::{Dispatcher, PlayerIntent, PlayerProjection, StoreSnapshot};
use dioxus::prelude::*;

mod controls;
mod share;
mod view_model;

pub use controls::PlayerControl;
pub use view_model::PlayerViewModel;

use controls::ControlButton;
use share::ShareButton;

/// Player bound to the store snapshot and dispatcher found in context.
#[component]
pub fn Player() -> Element {
    let store = use_context::<Signal<StoreSnapshot>>();
    let settings = use_context::<Signal<PlayerSettings>>();
    let dispatcher = use_context::<Dispatcher>();

    let projection = PlayerProjection::from_snapshot(&store.read(), &settings.read());
    let share_tooltip_ms = settings.read().share_tooltip_ms;

    rsx! {
        PlayerView {
            projection,
            share_tooltip_ms,
            ondispatch: move |intent: PlayerIntent| dispatcher.dispatch(intent),
        }
    }
}

#[component]
pub fn PlayerView(
    projection: PlayerProjection,
    #[props(default = 1500)] share_tooltip_ms: u32,
    ondispatch: EventHandler<PlayerIntent>,
) -> Element {
    let view = PlayerViewModel::derive(&projection);
    let mut audio_node = use_signal(|| None);
    let mut status_node = use_signal(|| None);

    use_media_sync(
        audio_node,
        status_node,
        SyncProps {
            track_id: projection.active_track_id(),
            is_playing: projection.is_playing,
            volume: projection.volume,
        },
    );

    let Some(active) = projection.active.clone() else {
        return rsx! {
            div { class: "{view.player_class}" }
        };
    };

    let intent = |control: PlayerControl| control.intent(&projection);
    let title = &active.track.title;
    let username = &active.username;
    let playlist_len = projection.playlist_len;
    let signed_in = projection.current_user.is_some();

    rsx! {
        div { class: "{view.player_class}",
            div { class: "player-container",
                div { class: "player-status",
                    div {
                        id: STATUS_BAR_ID,
                        class: "player-status-bar",
                        onmounted: move |evt| status_node.set(Some(evt.data())),
                    }
                }
                div { class: "player-content",
                    div { class: "player-content-action",
                        ControlButton {
                            control: PlayerControl::Previous,
                            intent: intent(PlayerControl::Previous),
                            ondispatch: ondispatch,
                            Icon { class: "fa fa-step-backward".to_string() }
                        }
                    }
                    div { class: "player-content-action",
                        ControlButton {
                            control: PlayerControl::TogglePlay,
                            intent: intent(PlayerControl::TogglePlay),
                            ondispatch: ondispatch,
                            Icon { class: view.play_icon_class.clone() }
                        }
                    }
                    div { class: "player-content-action",
                        ControlButton {
                            control: PlayerControl::Next,
                            intent: intent(PlayerControl::Next),
                            ondispatch: ondispatch,
                            Icon { class: "fa fa-step-forward".to_string() }
                        }
                    }
                    div { class: "player-content-name", "{username} - {title}" }
                    div { class: "player-content-action",
                        ControlButton {
                            control: PlayerControl::Playlist,
                            intent: intent(PlayerControl::Playlist),
                            ondispatch: ondispatch,
                            Icon { class: "fa fa-th-list".to_string() }
                            span { class: "player-playlist-count", " {playlist_len}" }
                        }
                    }
                    div { class: "player-content-action",
                        ControlButton {
                            control: PlayerControl::Shuffle,
                            intent: intent(PlayerControl::Shuffle),
                            ondispatch: ondispatch,
                            Icon { class: view.shuffle_icon_class.clone() }
                        }
                    }
                    div { class: "player-content-action",
                        ControlButton {
                            control: PlayerControl::Volume,
                            intent: intent(PlayerControl::Volume),
                            ondispatch: ondispatch,
                            Icon { class: view.mute_icon_class.clone() }
                        }
                    }
                    div { class: "player-content-action",
                        if signed_in {
                            ControlButton {
                                control: PlayerControl::Like,
                                intent: intent(PlayerControl::Like),
                                ondispatch: ondispatch,
                                Icon { class: view.like_icon_class.clone() }
                            }
                        }
                    }
                    div { class: "player-content-action",
                        ShareButton {
                            permalink_url: active.track.permalink_url.clone(),
                            tooltip_ms: share_tooltip_ms,
                        }
                    }
                    audio {
                        id: AUDIO_ELEMENT_ID,
                        src: "{active.stream_url}",
                        preload: "metadata",
                        onmounted: move |evt| audio_node.set(Some(evt.data())),
                    }
                }
            }
        }
    }
}

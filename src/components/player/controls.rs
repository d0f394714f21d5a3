use crate::store::{Direction, PlayerIntent, PlayerProjection, ToggleKind};
use dioxus::prelude::*;

/// The dispatching controls of the player bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerControl {
    Previous,
    TogglePlay,
    Next,
    Playlist,
    Shuffle,
    Volume,
    Like,
}

impl PlayerControl {
    /// Intent dispatched on click. `None` when there is nothing to act on:
    /// no active track, or no signed-in user for `Like`.
    pub fn intent(self, projection: &PlayerProjection) -> Option<PlayerIntent> {
        let active = projection.active.as_ref()?;
        let track_id = active.track.id;

        let intent = match self {
            PlayerControl::Previous => PlayerIntent::ActivateIteratedTrack {
                track_id,
                direction: Direction::Previous,
            },
            PlayerControl::Next => PlayerIntent::ActivateIteratedTrack {
                track_id,
                direction: Direction::Next,
            },
            PlayerControl::TogglePlay => PlayerIntent::TogglePlayTrack {
                is_playing: !projection.is_playing,
            },
            PlayerControl::Playlist => PlayerIntent::SetToggle {
                toggle: ToggleKind::Playlist,
            },
            PlayerControl::Volume => PlayerIntent::SetToggle {
                toggle: ToggleKind::Volume,
            },
            PlayerControl::Shuffle => PlayerIntent::ToggleShuffleMode,
            PlayerControl::Like => {
                projection.current_user.as_ref()?;
                PlayerIntent::Like {
                    track: active.track.clone(),
                }
            }
        };
        Some(intent)
    }

    pub fn element_id(self) -> &'static str {
        match self {
            PlayerControl::Previous => "prev-btn",
            PlayerControl::TogglePlay => "play-pause-btn",
            PlayerControl::Next => "next-btn",
            PlayerControl::Playlist => "playlist-btn",
            PlayerControl::Shuffle => "shuffle-btn",
            PlayerControl::Volume => "volume-btn",
            PlayerControl::Like => "like-btn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerControl::Previous => "Previous track",
            PlayerControl::TogglePlay => "Play or pause",
            PlayerControl::Next => "Next track",
            PlayerControl::Playlist => "Show playlist",
            PlayerControl::Shuffle => "Toggle shuffle",
            PlayerControl::Volume => "Volume",
            PlayerControl::Like => "Like",
        }
    }
}

/// Inline button that hands its precomputed intent to the dispatcher.
#[component]
pub(super) fn ControlButton(
    control: PlayerControl,
    intent: Option<PlayerIntent>,
    ondispatch: EventHandler<PlayerIntent>,
    children: Element,
) -> Element {
    let disabled = intent.is_none();

    rsx! {
        button {
            id: control.element_id(),
            r#type: "button",
            class: "button-inline",
            aria_label: control.label(),
            disabled,
            onclick: move |_| {
                if let Some(intent) = intent.clone() {
                    ondispatch.call(intent);
                }
            },
            {children}
        }
    }
}

//! Read and write contract with the external store.
//!
//! The player never mutates store state. It reads a [`StoreSnapshot`] and
//! expresses every change as a [`PlayerIntent`] handed to the [`Dispatcher`].

use crate::api::{Track, TrackId, User, UserId};
use dioxus::prelude::Callback;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod projection;
#[cfg(test)]
pub(crate) mod fixtures;

pub use projection::*;

/// Playback volume on a 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "u8")]
pub struct Volume(u8);

impl Volume {
    pub const MAX: Volume = Volume(100);
    pub const MUTED: Volume = Volume(0);

    /// Clamps into range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_muted(self) -> bool {
        self.0 == 0
    }

    /// Fraction understood by media elements (0.0..=1.0).
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    #[serde(default)]
    pub active_track_id: Option<TrackId>,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub volume: Volume,
    #[serde(default)]
    pub playlist: Vec<TrackId>,
    #[serde(default)]
    pub is_in_shuffle_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub tracks: HashMap<TrackId, Track>,
    #[serde(default)]
    pub users: HashMap<UserId, User>,
}

/// Everything the player reads from the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub session: Session,
    #[serde(default)]
    pub player: PlaybackState,
    #[serde(default)]
    pub entities: Entities,
}

/// Secondary panels the store knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToggleKind {
    Playlist,
    Volume,
}

/// Step through the playlist; wraparound is the reducer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn step(self) -> i8 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.step()
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Previous),
            1 => Ok(Direction::Next),
            other => Err(format!("direction must be -1 or 1, got {other}")),
        }
    }
}

/// Action requests dispatched to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum PlayerIntent {
    TogglePlayTrack { is_playing: bool },
    SetToggle { toggle: ToggleKind },
    ActivateIteratedTrack { track_id: TrackId, direction: Direction },
    Like { track: Track },
    ToggleShuffleMode,
}

/// Write side of the store, provided through context.
#[derive(Clone, Copy)]
pub struct Dispatcher(pub Callback<PlayerIntent>);

impl Dispatcher {
    pub fn dispatch(&self, intent: PlayerIntent) {
        self.0.call(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_and_normalizes() {
        assert_eq!(Volume::new(250).get(), 100);
        assert_eq!(Volume::MUTED.as_fraction(), 0.0);
        assert_eq!(Volume::MAX.as_fraction(), 1.0);
        assert_eq!(Volume::new(35).as_fraction(), 0.35);
        assert!(Volume::new(0).is_muted());
        assert!(!Volume::new(1).is_muted());
    }

    #[test]
    fn volume_deserializes_out_of_range_values_clamped() {
        let v: Volume = serde_json::from_str("140").unwrap();
        assert_eq!(v, Volume::MAX);
        let v: Volume = serde_json::from_str("-3").unwrap();
        assert_eq!(v, Volume::MUTED);
        let v: Volume = serde_json::from_str("42.4").unwrap();
        assert_eq!(v.get(), 42);
    }

    #[test]
    fn snapshot_reads_store_json() {
        let json = r#"{
            "session": { "user": { "id": 7, "username": "dj" } },
            "player": {
                "activeTrackId": 12,
                "isPlaying": true,
                "volume": 70,
                "playlist": [11, 12, 13],
                "isInShuffleMode": false
            },
            "entities": {
                "tracks": {
                    "12": {
                        "id": 12,
                        "title": "Night Drive",
                        "stream_url": "https://api.example.com/tracks/12/stream",
                        "permalink_url": "https://example.com/dj/night-drive",
                        "user_favorite": true,
                        "user": 7
                    }
                },
                "users": { "7": { "id": 7, "username": "dj" } }
            }
        }"#;

        let snapshot: StoreSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.player.active_track_id, Some(TrackId(12)));
        assert_eq!(snapshot.player.volume.get(), 70);
        assert_eq!(snapshot.player.playlist.len(), 3);
        let track = &snapshot.entities.tracks[&TrackId(12)];
        assert_eq!(track.owner_user_id, UserId(7));
        assert!(track.user_favorite);
        assert_eq!(snapshot.entities.users[&UserId(7)].username, "dj");
    }

    #[test]
    fn empty_snapshot_has_no_active_track() {
        let snapshot: StoreSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.player.active_track_id, None);
        assert_eq!(snapshot.player.volume, Volume::MAX);
    }

    #[test]
    fn intents_serialize_as_tagged_actions() {
        let value = serde_json::to_value(PlayerIntent::ActivateIteratedTrack {
            track_id: TrackId(5),
            direction: Direction::Previous,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "type": "ACTIVATE_ITERATED_TRACK", "trackId": 5, "direction": -1 })
        );

        let value = serde_json::to_value(PlayerIntent::SetToggle {
            toggle: ToggleKind::Volume,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "type": "SET_TOGGLE", "toggle": "VOLUME" }));

        let value = serde_json::to_value(PlayerIntent::ToggleShuffleMode).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "TOGGLE_SHUFFLE_MODE" }));
    }

    #[test]
    fn direction_rejects_other_steps() {
        assert!(serde_json::from_str::<Direction>("2").is_err());
        assert_eq!(serde_json::from_str::<Direction>("1").unwrap(), Direction::Next);
    }
}

use super::{StoreSnapshot, Volume};
use crate::api::{resolve_stream_url, Track, TrackId, User};
use crate::db::PlayerSettings;
use dioxus::logger::tracing::warn;

/// The active track with what the player shows next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTrack {
    pub track: Track,
    /// Owner's username, empty when the owner is not in the entity map.
    pub username: String,
    /// Stream URL with the access credential appended.
    pub stream_url: String,
}

/// Props for the player, projected from a store snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerProjection {
    pub current_user: Option<User>,
    pub active: Option<ActiveTrack>,
    pub is_playing: bool,
    pub volume: Volume,
    pub playlist_len: usize,
    pub is_in_shuffle_mode: bool,
}

impl PlayerProjection {
    pub fn from_snapshot(snapshot: &StoreSnapshot, settings: &PlayerSettings) -> Self {
        let player = &snapshot.player;
        let active = player
            .active_track_id
            .and_then(|id| resolve_active(snapshot, settings, id));

        Self {
            current_user: snapshot.session.user.clone(),
            active,
            is_playing: player.is_playing,
            volume: player.volume,
            playlist_len: player.playlist.len(),
            is_in_shuffle_mode: player.is_in_shuffle_mode,
        }
    }

    pub fn active_track_id(&self) -> Option<TrackId> {
        self.active.as_ref().map(|a| a.track.id)
    }
}

fn resolve_active(
    snapshot: &StoreSnapshot,
    settings: &PlayerSettings,
    id: TrackId,
) -> Option<ActiveTrack> {
    let Some(track) = snapshot.entities.tracks.get(&id) else {
        warn!(track_id = %id, "active track missing from entity store");
        return None;
    };
    let username = snapshot
        .entities
        .users
        .get(&track.owner_user_id)
        .map(|u| u.username.clone())
        .unwrap_or_default();

    Some(ActiveTrack {
        stream_url: resolve_stream_url(&track.stream_url, settings),
        username,
        track: track.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserId;
    use crate::store::fixtures::track;

    fn snapshot_with_active(id: u64) -> StoreSnapshot {
        let mut snapshot = StoreSnapshot::default();
        snapshot.player.active_track_id = Some(TrackId(id));
        snapshot.player.playlist = vec![TrackId(1), TrackId(2)];
        snapshot.entities.tracks.insert(TrackId(1), track(1, 9));
        snapshot.entities.users.insert(
            UserId(9),
            User {
                id: UserId(9),
                username: "owner".into(),
            },
        );
        snapshot
    }

    #[test]
    fn resolves_active_track_with_owner_and_credential() {
        let settings = PlayerSettings {
            client_id: "cid".into(),
            ..PlayerSettings::default()
        };
        let projection = PlayerProjection::from_snapshot(&snapshot_with_active(1), &settings);
        let active = projection.active.expect("active track");
        assert_eq!(active.username, "owner");
        assert_eq!(
            active.stream_url,
            "https://api.example.com/tracks/1/stream?client_id=cid"
        );
        assert_eq!(projection.playlist_len, 2);
    }

    #[test]
    fn unknown_active_track_projects_to_nothing() {
        let projection =
            PlayerProjection::from_snapshot(&snapshot_with_active(42), &PlayerSettings::default());
        assert!(projection.active.is_none());
        assert_eq!(projection.active_track_id(), None);
    }

    #[test]
    fn missing_owner_leaves_username_empty() {
        let mut snapshot = snapshot_with_active(1);
        snapshot.entities.users.clear();
        let projection = PlayerProjection::from_snapshot(&snapshot, &PlayerSettings::default());
        assert_eq!(projection.active.unwrap().username, "");
    }
}

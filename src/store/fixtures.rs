use super::{PlaybackState, Session, StoreSnapshot, Volume};
use crate::api::{Track, TrackId, User, UserId};

pub(crate) fn track(id: u64, owner: u64) -> Track {
    Track {
        id: TrackId(id),
        title: format!("Track {id}"),
        stream_url: format!("https://api.example.com/tracks/{id}/stream"),
        permalink_url: format!("https://example.com/tracks/{id}"),
        user_favorite: false,
        owner_user_id: UserId(owner),
    }
}

pub(crate) fn user(id: u64, username: &str) -> User {
    User {
        id: UserId(id),
        username: username.to_string(),
    }
}

/// Three-track playlist with track 2 active, owned by "artist".
pub(crate) fn snapshot(is_playing: bool, volume: u8, signed_in: bool) -> StoreSnapshot {
    let mut snapshot = StoreSnapshot {
        session: Session {
            user: signed_in.then(|| user(1, "listener")),
        },
        player: PlaybackState {
            active_track_id: Some(TrackId(2)),
            is_playing,
            volume: Volume::new(volume),
            playlist: vec![TrackId(1), TrackId(2), TrackId(3)],
            is_in_shuffle_mode: false,
        },
        ..StoreSnapshot::default()
    };
    for id in 1..=3 {
        snapshot.entities.tracks.insert(TrackId(id), track(id, 50));
    }
    snapshot.entities.users.insert(UserId(50), user(50, "artist"));
    snapshot
}

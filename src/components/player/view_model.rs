use crate::store::PlayerProjection;
use crate::utils::class_names;

/// Presentation values derived from the projection on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerViewModel {
    pub player_class: String,
    pub player_visible: bool,
    pub is_muted: bool,
    pub mute_icon_class: String,
    pub play_icon_class: String,
    pub like_icon_class: String,
    pub shuffle_icon_class: String,
}

impl PlayerViewModel {
    pub fn derive(projection: &PlayerProjection) -> Self {
        let player_visible = projection.active.is_some();
        let is_muted = projection.volume.is_muted();
        let is_favorite = projection
            .active
            .as_ref()
            .map(|a| a.track.user_favorite)
            .unwrap_or(false);

        Self {
            player_class: class_names("player", [("player-visible", player_visible)]),
            player_visible,
            is_muted,
            mute_icon_class: class_names(
                "fa",
                [("fa-volume-up", !is_muted), ("fa-volume-off", is_muted)],
            ),
            play_icon_class: class_names(
                "fa",
                [
                    ("fa-pause", projection.is_playing),
                    ("fa-play", !projection.is_playing),
                ],
            ),
            like_icon_class: class_names("fa fa-heart", [("is-favorite", is_favorite)]),
            shuffle_icon_class: class_names(
                "fa fa-random",
                [("randomSelected", projection.is_in_shuffle_mode)],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::PlayerSettings;
    use crate::store::fixtures::snapshot;
    use crate::store::{PlayerProjection, Volume};

    fn project(is_playing: bool, volume: u8) -> PlayerProjection {
        PlayerProjection::from_snapshot(
            &snapshot(is_playing, volume, true),
            &PlayerSettings::default(),
        )
    }

    #[test]
    fn hidden_without_active_track() {
        let view = PlayerViewModel::derive(&PlayerProjection::default());
        assert!(!view.player_visible);
        assert_eq!(view.player_class, "player");
    }

    #[test]
    fn visible_with_active_track() {
        let view = PlayerViewModel::derive(&project(false, 50));
        assert!(view.player_visible);
        assert_eq!(view.player_class, "player player-visible");
    }

    #[test]
    fn mute_is_derived_from_zero_volume() {
        for v in 0..=100u8 {
            let view = PlayerViewModel::derive(&project(false, v));
            assert_eq!(view.is_muted, v == 0);
            let expected = if v == 0 { "fa fa-volume-off" } else { "fa fa-volume-up" };
            assert_eq!(view.mute_icon_class, expected);
        }
        let mut projection = project(false, 0);
        projection.volume = Volume::MAX;
        assert!(!PlayerViewModel::derive(&projection).is_muted);
    }

    #[test]
    fn play_icon_shows_pause_only_while_playing() {
        assert_eq!(PlayerViewModel::derive(&project(true, 50)).play_icon_class, "fa fa-pause");
        assert_eq!(PlayerViewModel::derive(&project(false, 50)).play_icon_class, "fa fa-play");
    }

    #[test]
    fn favorite_and_shuffle_flags_add_modifiers() {
        let mut projection = project(false, 50);
        assert_eq!(PlayerViewModel::derive(&projection).like_icon_class, "fa fa-heart");
        assert_eq!(PlayerViewModel::derive(&projection).shuffle_icon_class, "fa fa-random");

        projection.is_in_shuffle_mode = true;
        if let Some(active) = projection.active.as_mut() {
            active.track.user_favorite = true;
        }
        let view = PlayerViewModel::derive(&projection);
        assert_eq!(view.like_icon_class, "fa fa-heart is-favorite");
        assert_eq!(view.shuffle_icon_class, "fa fa-random randomSelected");
    }
}

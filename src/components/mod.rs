//! The components module contains the player and the shell hosting it.

mod app;
mod icons;
mod media_sync;
mod player;
mod store_bridge;
#[cfg(test)]
mod test_dom;

pub use app::*;
pub use icons::*;
pub use player::*;
pub use store_bridge::*;

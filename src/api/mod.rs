//! Entity shapes handed over by the external store, and stream URL resolution.

pub mod models;
mod stream;

pub use models::*;
pub use stream::*;

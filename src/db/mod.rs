use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Error type for database operations on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("no data directory available for this platform")]
    NoDataDir,
    #[error("failed to prepare data directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("settings payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "cloudsound.player_settings";

const DEFAULT_SHARE_TOOLTIP_MS: u32 = 1500;

/// Player settings stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Public API client id appended to stream URLs when no token is set.
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub access_token: Option<String>,
    /// How long the "copied" tooltip stays up after sharing.
    #[serde(default = "default_share_tooltip_ms")]
    pub share_tooltip_ms: u32,
}

fn default_share_tooltip_ms() -> u32 {
    DEFAULT_SHARE_TOOLTIP_MS
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            access_token: None,
            share_tooltip_ms: DEFAULT_SHARE_TOOLTIP_MS,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), StorageError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: PlayerSettings) -> Result<(), DbError> {
    let conn = get_db_connection()?;
    let settings_json = serde_json::to_string(&settings)?;
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('player_settings', ?1)",
        [&settings_json],
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: PlayerSettings) -> Result<(), StorageError> {
    LocalStorage::set(SETTINGS_KEY, settings)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<PlayerSettings, DbError> {
    let conn = get_db_connection()?;
    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM settings WHERE key = 'player_settings'",
        [],
        |row: &rusqlite::Row| row.get(0),
    );

    match result {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(PlayerSettings::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<PlayerSettings, StorageError> {
    match LocalStorage::get(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(_) => Ok(PlayerSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    let data_dir = dirs::data_dir().ok_or(DbError::NoDataDir)?.join("cloudsound");
    std::fs::create_dir_all(&data_dir)?;
    Ok(rusqlite::Connection::open(data_dir.join("cloudsound.db"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: PlayerSettings = serde_json::from_str(r#"{"client_id":"abc"}"#).unwrap();
        assert_eq!(settings.client_id, "abc");
        assert_eq!(settings.access_token, None);
        assert_eq!(settings.share_tooltip_ms, DEFAULT_SHARE_TOOLTIP_MS);
    }

    #[test]
    fn empty_object_is_default() {
        let settings: PlayerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, PlayerSettings::default());
    }
}

//! JSON persistence for the ~/.parlor/ config directory.
//!
//! Settings are the only on-disk state; game sessions stay in memory by
//! design.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Resolve a file inside ~/.parlor/, creating the directory if needed.
pub fn config_path(filename: &str) -> io::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home.join(".parlor");
    fs::create_dir_all(&dir)?;
    Ok(dir.join(filename))
}

/// Load a JSON file from the config directory, falling back to
/// `T::default()` when the file is missing or does not parse.
pub fn load_json_or_default<T>(filename: &str) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    config_path(filename)
        .and_then(|path| fs::read_to_string(path))
        .ok()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Write a value as pretty-printed JSON into the config directory.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(config_path(filename)?, json)
}

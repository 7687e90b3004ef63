//! Filesystem locations for durable data.
//!
//! This module resolves where the favorites slot lives when the caller does
//! not configure an explicit path.

use std::path::PathBuf;

/// Returns the data directory for mealdex storage.
///
/// Resolves to `<platform local data dir>/mealdex`, for example
/// `~/.local/share/mealdex` on Linux. Falls back to the current directory
/// when the platform reports no data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mealdex")
}

/// Returns the default path of the favorites slot.
///
/// The JSON favorites file `favorites.json` lives directly inside the data
/// directory.
#[must_use]
pub fn default_favorites_path() -> PathBuf {
    get_data_dir().join("favorites.json")
}

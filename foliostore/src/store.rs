//! JSON-file-backed image slot mapping.
//!
//! `ImageMapStore` persists a flat map from slot name (e.g. "hero") to a
//! web-servable path in a single pretty-printed JSON file. The store gives
//! no transactional guarantees: `write` overwrites the whole file in place
//! and concurrent read-modify-write sequences are last-writer-wins on the
//! entire map. Callers that need stronger guarantees must add locking or an
//! atomic-rename write themselves.
//!
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

/// Persisted mapping from slot name to web-servable path.
pub type ImageMap = HashMap<String, String>;

/// File-backed store for the image slot mapping.
pub struct ImageMapStore {
    /// Location of the mapping file, supplied by the caller
    path: PathBuf,
}

impl ImageMapStore {
    /// Create a store bound to the given mapping file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing mapping file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the mapping from disk.
    ///
    /// Any failure (missing file, unreadable file, invalid JSON) yields an
    /// empty map; values are not validated. A file truncated by a crashed
    /// `write` therefore reads as "no mappings".
    pub fn read(&self) -> ImageMap {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Overwrite the mapping file with the full map, pretty-printed.
    ///
    /// Creates the containing directory on first use. Not atomic: a crash
    /// mid-write can leave a corrupt file behind.
    pub fn write(&self, map: &ImageMap) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(map).map_err(io::Error::other)?;
        fs::write(&self.path, content)
    }
}

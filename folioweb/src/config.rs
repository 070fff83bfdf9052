//! Configuration loader and defaults for the folioweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads the listening port
//! from the environment (default 3000) and carries the asset and data
//! locations, resolved relative to the server's working directory, that
//! handlers inject into the store and renderer.
//!
use std::{env, path::PathBuf};

use once_cell::sync::Lazy;

/// Default listening port when `PORT` is unset or unparsable
const DEFAULT_PORT: u16 = 3000;

/// Servable static asset root; uploads land in `uploads/` beneath it
const PUBLIC_DIR: &str = "public";

/// Mapping file recording slot name to uploaded web path
const DATA_FILE: &str = "data/images.json";

/// Application configuration containing the listening port and data paths
pub struct Config {
    /// HTTP listening port
    pub port: u16,
    /// Static asset root directory
    pub public_dir: PathBuf,
    /// Image slot mapping file
    pub data_file: PathBuf,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    port: env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),
    public_dir: PathBuf::from(PUBLIC_DIR),
    data_file: PathBuf::from(DATA_FILE),
});

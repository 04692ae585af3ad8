// std imports
use std::path::PathBuf;

// third-party imports
use once_cell::sync::{Lazy, OnceCell};

// local imports
use crate::{
    error::Result,
    settings::{Settings, SourceFile},
};

// ---

pub const APP_NAME: &str = "bmatch";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the settings initialized with [`global::initialize`] or the defaults.
pub fn get() -> &'static Settings {
    global::get().unwrap_or(&DEFAULT)
}

/// Loads settings from the given file or from the default location if there is no file given.
///
/// A file given explicitly must exist, the file at the default location is optional.
pub fn load(path: Option<PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load([SourceFile::new(path)]),
        None => Settings::load(default_path().map(|path| SourceFile::new(path).required(false))),
    }
}

/// Returns the path to the configuration file in the platform specific configuration directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

// ---

pub mod global {
    use super::*;

    static GLOBAL: OnceCell<Settings> = OnceCell::new();

    /// Sets the process-wide settings, only the first call has an effect.
    pub fn initialize(settings: Settings) {
        if GLOBAL.set(settings).is_err() {
            log::debug!("global settings are already initialized");
        }
    }

    pub(super) fn get() -> Option<&'static Settings> {
        GLOBAL.get()
    }
}

// ---

// std imports
use std::{include_str, path::PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::{error::Result, matcher::DEFAULT_MAX_DEPTH};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub max_depth: usize,
    pub lower: bool,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid with the given files, in order.
    pub fn load<I>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for file in files {
            log::debug!("load settings from {:?} (required: {})", file.path, file.required);
            builder = builder.add_source(File::from(file.path.as_path()).required(file.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            lower: false,
        }
    }
}

// ---

/// A settings file, its format is detected by the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

// ---

//! Configuration of a cleaning run.
//!
//! Values come from an optional TOML file; the command line overrides them. Every key is optional:
//!
//! ```toml
//! input = "maps.zip"
//! workspace = "temp"
//! output = "output"
//! background = true
//! diagnostics = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CleanError, IoResultExt, Result};

/// Configuration of a cleaning run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The outer archive holding one `.osz` per beatmap.
    pub input: PathBuf,
    /// The staging directory. Emptied at the start of each run.
    pub workspace: PathBuf,
    /// The directory receiving the cleaned archives. Emptied at the start of each run.
    pub output: PathBuf,
    /// Keeps the background image, renamed to `background.<ext>`.
    pub background: bool,
    /// Renders descriptor warnings as annotated source reports.
    pub diagnostics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("maps.zip"),
            workspace: PathBuf::from("temp"),
            output: PathBuf::from("output"),
            background: false,
            diagnostics: false,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or unknown keys.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).at_path(path)?;
        Self::from_toml(&text).map_err(|source| CleanError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Where the outer archive is unpacked.
    #[must_use]
    pub fn unpacked_dir(&self) -> PathBuf {
        self.workspace.join("unpacked")
    }

    /// Where each beatmap archive is unpacked, one subdirectory per archive.
    #[must_use]
    pub fn maps_dir(&self) -> PathBuf {
        self.workspace.join("osz")
    }
}

//! Errors and faults of a cleaning run.
//!
//! [`CleanError`] aborts the whole batch: the archives could not be read or written. [`MapFault`] is recorded against one beatmap and never stops the batch; the cleaned archive is still written, possibly degraded.

use std::path::PathBuf;

use thiserror::Error;

use crate::asset::AudioFormat;

/// A structural failure which aborts the run.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CleanError {
    /// Reading or writing a file failed.
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        /// The file or directory in question.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// An archive was malformed or could not be written.
    #[error("archive error on `{}`: {source}", path.display())]
    Zip {
        /// The archive in question.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: zip::result::ZipError,
    },
    /// The configuration file could not be parsed.
    #[error("invalid configuration `{}`: {source}", path.display())]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: toml::de::Error,
    },
    /// The batch report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

/// type alias of `core::result::Result<T, CleanError>`
pub type Result<T> = core::result::Result<T, CleanError>;

/// Attaches a path to I/O errors.
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| CleanError::Io {
            path: path.into(),
            source,
        })
    }
}

/// A fault of a single beatmap. The batch goes on.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, serde::Serialize)]
pub enum MapFault {
    /// The descriptor's `AudioFilename` has no recognizable extension.
    #[error("unresolved audio extension in `{descriptor}` at line {line}")]
    UnresolvedAudioExtension {
        /// The descriptor entry name.
        descriptor: String,
        /// The line number, starts with 1.
        line: usize,
    },
    /// An accepted track has a bitrate out of policy.
    #[error("`{file}` has bitrate {bitrate} bps, out of policy for {format}")]
    AudioBitrate {
        /// The audio entry name.
        file: String,
        /// The container format.
        format: AudioFormat,
        /// The bitrate in bits per second. Zero when unknown.
        bitrate: u32,
    },
    /// A candidate track could not be decoded.
    #[error("`{file}` could not be probed: {reason}")]
    AudioProbe {
        /// The audio entry name.
        file: String,
        /// Why probing failed.
        reason: String,
    },
    /// The number of accepted tracks was not exactly one.
    #[error("expected exactly one audio track, accepted {0}")]
    AudioCount(usize),
    /// The number of descriptors was not exactly one.
    #[error("expected exactly one descriptor, found {0}")]
    DescriptorCount(usize),
}

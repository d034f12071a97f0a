//! Validation of beatmap audio tracks.
//!
//! Hit sounds are often mp3 or ogg too, so any candidate of 30 seconds or less is skipped silently. The accepted track is checked against the bitrate policy:
//!
//! - mp3 must be exactly 192 kbps.
//! - ogg must be within 128 to 192 kbps.
//!
//! Violations are reported as [`MapFault`]s and the track is kept anyway.

use std::{io::Cursor, time::Duration};

use lofty::{file::AudioFile, probe::Probe};
use thiserror::Error;

use crate::{asset::AudioFormat, error::MapFault};

/// Tracks this long or shorter are treated as hit sounds.
pub const MIN_TRACK_DURATION: Duration = Duration::from_secs(30);
/// The only bitrate accepted for mp3.
pub const MP3_BITRATE: u32 = 192_000;
/// The bitrate range accepted for ogg.
pub const OGG_BITRATE: std::ops::RangeInclusive<u32> = 128_000..=192_000;

/// Properties read from an audio container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioProperties {
    /// Play length.
    pub duration: Duration,
    /// Audio bitrate in bits per second, if the container tells.
    pub bitrate: Option<u32>,
}

/// An error occurred when probing an audio container.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProbeError(pub String);

/// Reads duration and bitrate out of audio bytes.
pub trait AudioProbe {
    /// Probes the bytes.
    ///
    /// # Errors
    ///
    /// Fails when the bytes are not a decodable audio container.
    fn probe(&self, bytes: &[u8]) -> Result<AudioProperties, ProbeError>;
}

/// [`AudioProbe`] backed by `lofty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LoftyProbe;

impl AudioProbe for LoftyProbe {
    fn probe(&self, bytes: &[u8]) -> Result<AudioProperties, ProbeError> {
        let tagged = Probe::new(Cursor::new(bytes))
            .guess_file_type()
            .map_err(|e| ProbeError(e.to_string()))?
            .read()
            .map_err(|e| ProbeError(e.to_string()))?;
        let properties = tagged.properties();
        Ok(AudioProperties {
            duration: properties.duration(),
            // lofty reports kbps.
            bitrate: properties.audio_bitrate().map(|kbps| kbps.saturating_mul(1000)),
        })
    }
}

/// The decision on one candidate track.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AudioVerdict {
    /// Too short to be the track.
    Rejected {
        /// The probed duration.
        duration: Duration,
    },
    /// The track. It is renamed to `canonical_name` even when it has faults.
    Accepted {
        /// `audio.<ext>`
        canonical_name: &'static str,
        /// Policy violations of the track.
        faults: Vec<MapFault>,
    },
}

/// Checks candidate tracks with an [`AudioProbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioValidator<P> {
    probe: P,
}

impl<P: AudioProbe> AudioValidator<P> {
    /// Creates a validator using the probe.
    pub const fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Validates a candidate named `file` with its content.
    ///
    /// # Errors
    ///
    /// Returns [`MapFault::AudioProbe`] when the content cannot be probed.
    pub fn validate(
        &self,
        file: &str,
        format: AudioFormat,
        bytes: &[u8],
    ) -> Result<AudioVerdict, MapFault> {
        let AudioProperties { duration, bitrate } =
            self.probe.probe(bytes).map_err(|e| MapFault::AudioProbe {
                file: file.to_string(),
                reason: e.to_string(),
            })?;
        if duration <= MIN_TRACK_DURATION {
            return Ok(AudioVerdict::Rejected { duration });
        }
        let bitrate = bitrate.unwrap_or(0);
        let in_policy = match format {
            AudioFormat::Mp3 => bitrate == MP3_BITRATE,
            AudioFormat::Ogg => OGG_BITRATE.contains(&bitrate),
        };
        let faults = if in_policy {
            vec![]
        } else {
            vec![MapFault::AudioBitrate {
                file: file.to_string(),
                format,
                bitrate,
            }]
        };
        Ok(AudioVerdict::Accepted {
            canonical_name: format.canonical_name(),
            faults,
        })
    }
}

/// Checks the number of accepted tracks of a map.
#[must_use]
pub const fn check_accepted_count(accepted: usize) -> Option<MapFault> {
    if accepted == 1 {
        None
    } else {
        Some(MapFault::AudioCount(accepted))
    }
}

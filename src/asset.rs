//! Classification of the files inside a beatmap archive.
//!
//! Each file is sniffed by its magic bytes with `infer`. A file without a recognizable binary signature is plain text, and the `.osu` descriptor is picked among those by extension.

use std::path::Path;

/// The audio containers accepted as the beatmap track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum AudioFormat {
    /// MPEG-1 Layer III.
    Mp3,
    /// Ogg Vorbis.
    Ogg,
}

impl AudioFormat {
    /// The file extension without dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
        }
    }

    /// The canonical file name of the track, `audio.<ext>`.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Mp3 => "audio.mp3",
            Self::Ogg => "audio.ogg",
        }
    }

    /// Parses a sniffed extension.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "ogg" => Some(Self::Ogg),
            _ => None,
        }
    }

    /// Finds the format mentioned as `.mp3` or `.ogg` in the text, case-insensitively. `.mp3` takes precedence.
    #[must_use]
    pub fn find_in(text: &str) -> Option<Self> {
        let lower = text.to_ascii_lowercase();
        [Self::Mp3, Self::Ogg]
            .into_iter()
            .find(|format| lower.contains(&format!(".{}", format.extension())))
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// The image formats a background may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ImageFormat {
    /// JPEG, as `.jpg` or `.jpeg`.
    Jpeg,
    /// PNG.
    Png,
}

impl ImageFormat {
    /// Parses a sniffed extension.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Broad category of a sniffed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum MimeCategory {
    /// `audio/*`
    Audio,
    /// `image/*`
    Image,
    /// Anything else with a binary signature.
    Other,
}

/// The type of a file detected from its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SniffedType {
    /// The conventional extension, such as `mp3`.
    pub extension: String,
    /// The MIME type, such as `audio/mpeg`.
    pub mime_type: String,
    /// The broad category.
    pub category: MimeCategory,
}

impl From<infer::Type> for SniffedType {
    fn from(ty: infer::Type) -> Self {
        let category = match ty.matcher_type() {
            infer::MatcherType::Audio => MimeCategory::Audio,
            infer::MatcherType::Image => MimeCategory::Image,
            _ => MimeCategory::Other,
        };
        Self {
            extension: ty.extension().to_string(),
            mime_type: ty.mime_type().to_string(),
            category,
        }
    }
}

/// Detects the type of the file from its magic bytes. `Ok(None)` means plain text or unknown.
///
/// # Errors
///
/// Fails when the file cannot be read.
pub fn sniff_type(path: impl AsRef<Path>) -> std::io::Result<Option<SniffedType>> {
    Ok(infer::get_from_path(path)?.map(SniffedType::from))
}

/// What a file in the beatmap archive is used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum AssetKind {
    /// The `.osu` descriptor.
    Descriptor,
    /// A candidate of the beatmap track.
    Audio(AudioFormat),
    /// A candidate of the background image.
    Image(ImageFormat),
    /// Hit sounds in other formats, videos, storyboards and so on.
    Ignored,
}

/// Extension of the descriptor file.
const DESCRIPTOR_EXTENSION: &str = "osu";

/// Decides the kind of an archive entry from its name and sniffed type.
///
/// A file that is not sniffed counts as the descriptor only when its extension is `.osu`, in any case.
#[must_use]
pub fn classify(entry_name: &str, sniffed: Option<&SniffedType>) -> AssetKind {
    let Some(sniffed) = sniffed else {
        let is_descriptor = Path::new(entry_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DESCRIPTOR_EXTENSION));
        return if is_descriptor {
            AssetKind::Descriptor
        } else {
            AssetKind::Ignored
        };
    };
    match sniffed.category {
        MimeCategory::Audio => {
            AudioFormat::from_extension(&sniffed.extension).map_or(AssetKind::Ignored, AssetKind::Audio)
        }
        MimeCategory::Image => {
            ImageFormat::from_extension(&sniffed.extension).map_or(AssetKind::Ignored, AssetKind::Image)
        }
        MimeCategory::Other => AssetKind::Ignored,
    }
}

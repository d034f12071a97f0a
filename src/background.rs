//! Matching of the background declaration against the image files of the archive.

use std::path::PathBuf;

use crate::{asset::ImageFormat, descriptor::event::BackgroundRef};

/// An image file of the archive, a background candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageCandidate {
    /// The entry name in the archive.
    pub entry_name: String,
    /// The sniffed format.
    pub format: ImageFormat,
    /// Where the file is staged.
    pub path: PathBuf,
}

/// The image chosen as the background.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedBackground<'a> {
    /// The matched image.
    pub image: &'a ImageCandidate,
    /// The name to store it under, `background.<ext>`.
    pub canonical_name: &'a str,
}

fn normalize(name: &str) -> String {
    name.trim().replace('\\', "/")
}

/// Finds the image the declaration refers to. Backslash separators are treated as `/`.
///
/// `None` means the declared file is missing, and the background is simply omitted.
#[must_use]
pub fn resolve_background<'a>(
    reference: &'a BackgroundRef,
    images: &'a [ImageCandidate],
) -> Option<ResolvedBackground<'a>> {
    let wanted = normalize(&reference.filename);
    images
        .iter()
        .find(|image| normalize(&image.entry_name) == wanted)
        .map(|image| ResolvedBackground {
            image,
            canonical_name: &reference.canonical_name,
        })
}

//! Records of `[Events]` and the background declaration.

use std::path::Path;

use itertools::Itertools;

/// Event type of a background declaration.
const BACKGROUND_EVENT: &str = "0";
/// Index of the filename field of a background declaration.
const FILENAME: usize = 2;

/// The comment lines written after the `[Events]` header, in order.
pub const EVENTS_BOILERPLATE: [&str; 8] = [
    "//Background and Video events",
    "//Break Periods",
    "//Storyboard Layer 0 (Background)",
    "//Storyboard Layer 1 (Fail)",
    "//Storyboard Layer 2 (Pass)",
    "//Storyboard Layer 3 (Foreground)",
    "//Storyboard Layer 4 (Overlay)",
    "//Storyboard Sound Samples",
];

/// A background image declared in `[Events]` such as `0,0,"bg.jpg",0,0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct BackgroundRef {
    /// The filename as written in the declaration, without quotes.
    pub filename: String,
    /// The name the image is renamed to, `background.<ext>`.
    pub canonical_name: String,
    /// The declaration rewritten to point at `canonical_name`.
    pub declaration: String,
}

impl BackgroundRef {
    /// Reads a background declaration from an `[Events]` line.
    ///
    /// Returns `None` for other events and for declarations whose filename is empty, still quoted after stripping, or has no extension.
    #[must_use]
    pub fn from_event_line(line: &str) -> Option<Self> {
        let mut fields: Vec<String> = line.split(',').map(str::to_string).collect();
        if fields.first()?.trim() != BACKGROUND_EVENT {
            return None;
        }
        let raw = fields.get_mut(FILENAME)?;
        let filename = strip_quotes(raw)?.to_string();
        let extension = Path::new(&filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())?
            .to_ascii_lowercase();
        let canonical_name = format!("background.{extension}");
        *raw = raw.replacen(&filename, &canonical_name, 1);
        Some(Self {
            filename,
            canonical_name,
            declaration: fields.iter().join(","),
        })
    }
}

fn strip_quotes(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    (!unquoted.is_empty() && !unquoted.contains('"')).then_some(unquoted)
}

//! Section tracking of the descriptor.
//!
//! Sections are introduced by bracketed headers such as `[Events]` and run until a header that is allowed to close them. Headers are detected by substring containment, so a line holding the token anywhere counts as that header.
//!
//! Closing rules:
//!
//! - `[General]`, `[Editor]`, `[Metadata]`, `[Difficulty]` and the preamble before any header are closed by any recognized header.
//! - `[Events]` is closed by `[TimingPoints]`, `[Colours]` or `[HitObjects]`. Other headers inside it are scrubbed with the rest of its body.
//! - `[TimingPoints]` is closed by `[Events]`, `[Colours]` or `[HitObjects]`.
//! - `[Colours]` is closed only by `[HitObjects]`. Everything up to there is scrubbed, `[Events]` included.
//! - `[HitObjects]` runs to the end of the file.

/// A section of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Lines before the first recognized header, such as `osu file format v14`.
    #[default]
    Preamble,
    /// `[General]`
    General,
    /// `[Editor]`
    Editor,
    /// `[Metadata]`
    Metadata,
    /// `[Difficulty]`
    Difficulty,
    /// `[Events]`
    Events,
    /// `[TimingPoints]`
    TimingPoints,
    /// `[Colours]`
    Colours,
    /// `[HitObjects]`
    HitObjects,
}

/// Every section which has a header, in canonical file order.
pub const HEADED_SECTIONS: [Section; 8] = [
    Section::General,
    Section::Editor,
    Section::Metadata,
    Section::Difficulty,
    Section::Events,
    Section::TimingPoints,
    Section::Colours,
    Section::HitObjects,
];

impl Section {
    /// The header token of the section, or `None` for the preamble.
    #[must_use]
    pub const fn header(self) -> Option<&'static str> {
        Some(match self {
            Self::Preamble => return None,
            Self::General => "[General]",
            Self::Editor => "[Editor]",
            Self::Metadata => "[Metadata]",
            Self::Difficulty => "[Difficulty]",
            Self::Events => "[Events]",
            Self::TimingPoints => "[TimingPoints]",
            Self::Colours => "[Colours]",
            Self::HitObjects => "[HitObjects]",
        })
    }

    /// The sections whose header closes this section, in the order they are checked.
    #[must_use]
    pub const fn closed_by(self) -> &'static [Self] {
        match self {
            Self::Preamble | Self::General | Self::Editor | Self::Metadata | Self::Difficulty => {
                &HEADED_SECTIONS
            }
            Self::Events => &[Self::TimingPoints, Self::Colours, Self::HitObjects],
            Self::TimingPoints => &[Self::Events, Self::Colours, Self::HitObjects],
            Self::Colours => &[Self::HitObjects],
            Self::HitObjects => &[],
        }
    }

    /// Whether the fixed-key field rules apply to plain lines of this section.
    #[must_use]
    pub const fn has_fields(self) -> bool {
        matches!(
            self,
            Self::Preamble
                | Self::General
                | Self::Editor
                | Self::Metadata
                | Self::Difficulty
                | Self::TimingPoints
        )
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.header() {
            Some(header) => f.write_str(header),
            None => f.write_str("(preamble)"),
        }
    }
}

/// What a line is, relative to the section structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRole {
    /// The line is a header which opened the section.
    Header(Section),
    /// The line belongs to the body of the section.
    Body(Section),
}

/// Keeps the current section while walking the descriptor lines in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionTracker {
    current: Section,
}

impl SectionTracker {
    /// Creates a tracker positioned at the preamble.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Section::Preamble,
        }
    }

    /// Returns the current section.
    #[must_use]
    pub const fn current(&self) -> Section {
        self.current
    }

    /// Classifies the line and moves into the next section if the line is a header closing the current one.
    pub fn advance(&mut self, line: &str) -> LineRole {
        let next = self.current.closed_by().iter().copied().find(|section| {
            section
                .header()
                .is_some_and(|header| line.contains(header))
        });
        match next {
            Some(section) => {
                self.current = section;
                LineRole::Header(section)
            }
            None => LineRole::Body(self.current),
        }
    }
}

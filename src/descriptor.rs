//! Rewriter of the `.osu` beatmap descriptor.
//!
//! The descriptor is a line-oriented text grouped into bracketed sections. [`rewrite_descriptor`] walks it once, from top to bottom:
//!
//! - Fixed keys of `[General]`, `[Editor]`, `[Metadata]` and `[Difficulty]` are reset to neutral values or cleared (see [`field`]).
//! - `[Events]` is emptied except for its header, which receives fixed comment lines and optionally the background declaration (see [`event`]).
//! - `[TimingPoints]` loses inherited points, and the kept ones get neutral sample and effect settings (see [`timing`]).
//! - `[Colours]` and `[HitObjects]` are removed together with their headers.
//!
//! The grammar is loose, so the rewriter never fails: anything it does not recognize is kept as is, and only an unresolvable audio filename is reported as a [`RewriteWarning`].
//!
//! # Example
//!
//! ```
//! use osz_cleaner::descriptor::{RewriteOptions, rewrite_descriptor};
//!
//! let source = "[General]\r\nAudioFilename: My Song.mp3\r\nPreviewTime: 12345\r\n";
//! let output = rewrite_descriptor(source, RewriteOptions::default());
//! assert_eq!(output.text, "[General]\r\nAudioFilename: audio.mp3\r\nPreviewTime: -1\r\n");
//! assert!(output.warnings.is_empty());
//! ```

mod cursor;
pub mod event;
pub mod field;
pub mod line;
pub mod section;
pub mod timing;

use thiserror::Error;

use crate::mixin::{SourceRangeMixin, SourceRangeMixinExt};

use self::{
    cursor::{LineCursor, SourceLine},
    event::BackgroundRef,
    field::{FieldOutcome, rewrite_field},
    line::{EditedLine, LineEdit, render},
    section::{LineRole, Section, SectionTracker},
    timing::{TimingPointEdit, TimingPointRecord},
};

/// An anomaly found while rewriting. The output is still produced.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, serde::Serialize)]
pub enum RewriteWarning {
    /// `AudioFilename` mentions neither `.mp3` nor `.ogg`, so the canonical name could not be chosen.
    #[error("audio file extension not resolved from `AudioFilename` at line {line}")]
    UnresolvedAudioExtension {
        /// The line number, starts with 1.
        line: usize,
    },
}

/// A rewrite warning with position information.
pub type RewriteWarningWithRange = SourceRangeMixin<RewriteWarning>;

/// Options of [`rewrite_descriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RewriteOptions {
    /// Keeps the background declaration of `[Events]`, pointing it at `background.<ext>`.
    pub preserve_background: bool,
}

/// Output of [`rewrite_descriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RewriteOutput {
    /// The cleaned descriptor, CRLF terminated.
    pub text: String,
    /// The background declaration, captured only when preserving backgrounds.
    pub background: Option<BackgroundRef>,
    /// Warnings that occurred during rewriting.
    pub warnings: Vec<RewriteWarningWithRange>,
}

/// Rewrites the descriptor source into its cleaned form.
pub fn rewrite_descriptor(source: &str, options: RewriteOptions) -> RewriteOutput {
    let mut tracker = SectionTracker::new();
    let mut lines = vec![];
    let mut background = None;
    let mut warnings = vec![];

    for SourceLine { line, text, range } in LineCursor::new(source) {
        let edit = match tracker.advance(text) {
            LineRole::Header(Section::Events) => LineEdit::EventsHeader,
            LineRole::Header(Section::Colours | Section::HitObjects)
            | LineRole::Body(Section::Colours | Section::HitObjects) => LineEdit::Drop,
            LineRole::Header(_) => LineEdit::Keep,
            LineRole::Body(Section::Events) => {
                if options.preserve_background
                    && let Some(found) = BackgroundRef::from_event_line(text)
                {
                    background = Some(found);
                }
                LineEdit::Drop
            }
            LineRole::Body(Section::TimingPoints) if text.contains(',') => {
                match TimingPointRecord::parse(text).normalize() {
                    TimingPointEdit::Keep => LineEdit::Keep,
                    TimingPointEdit::Drop => LineEdit::Drop,
                    TimingPointEdit::Replace(record) => LineEdit::Replace(record),
                }
            }
            LineRole::Body(section) => {
                debug_assert!(section.has_fields());
                match rewrite_field(text) {
                    None => LineEdit::Keep,
                    Some(FieldOutcome::Replace(replaced)) => LineEdit::Replace(replaced),
                    Some(FieldOutcome::Drop) => LineEdit::Drop,
                    Some(FieldOutcome::UnresolvedAudio) => {
                        warnings.push(
                            RewriteWarning::UnresolvedAudioExtension { line }
                                .into_wrapper_range(range),
                        );
                        LineEdit::Keep
                    }
                }
            }
        };
        lines.push(EditedLine { source: text, edit });
    }

    RewriteOutput {
        text: render(&lines, background.as_ref()),
        background,
        warnings,
    }
}

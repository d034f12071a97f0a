//! Fixed-key field rules of `[General]`, `[Editor]`, `[Metadata]` and `[Difficulty]`.
//!
//! A rule matches when the line contains its `Key:` pattern anywhere. Rules are grouped by the section they come from; inside a group the first matching rule wins, and a match in a later group overrides a match in an earlier one. Lines matching no rule are left untouched.

use crate::asset::AudioFormat;

/// What to do with a line matched by a [`FieldRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldAction {
    /// Replaces the whole line with the literal.
    Replace(&'static str),
    /// Removes the line.
    Drop,
    /// Points the line at the canonical audio file, keeping the extension found in the line.
    CanonicalAudio,
}

/// A rule for a single field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRule {
    /// The `Key:` pattern searched in the line.
    pub pattern: &'static str,
    /// The action taken on match.
    pub action: FieldAction,
}

impl FieldRule {
    const fn replace(pattern: &'static str, line: &'static str) -> Self {
        Self {
            pattern,
            action: FieldAction::Replace(line),
        }
    }

    const fn drop(pattern: &'static str) -> Self {
        Self {
            pattern,
            action: FieldAction::Drop,
        }
    }
}

/// Rules for `[General]`.
pub const GENERAL_RULES: &[FieldRule] = &[
    FieldRule {
        pattern: "AudioFilename:",
        action: FieldAction::CanonicalAudio,
    },
    FieldRule::replace("AudioLeadIn:", "AudioLeadIn: 0"),
    FieldRule::replace("PreviewTime:", "PreviewTime: -1"),
    FieldRule::replace("Countdown:", "Countdown: 0"),
    FieldRule::replace("SampleSet:", "SampleSet: Soft"),
    FieldRule::replace("StackLeniency:", "StackLeniency: 0.7"),
    FieldRule::replace("Mode:", "Mode: 0"),
    FieldRule::replace("LetterboxInBreaks:", "LetterboxInBreaks: 0"),
    FieldRule::drop("SpecialStyle:"),
    FieldRule::replace("WidescreenStoryboard:", "WidescreenStoryboard: 0"),
];

/// Rules for `[Editor]`.
pub const EDITOR_RULES: &[FieldRule] = &[
    FieldRule::drop("Bookmarks:"),
    FieldRule::replace("DistanceSpacing:", "DistanceSpacing: 1.0"),
    FieldRule::replace("BeatDivisor:", "BeatDivisor: 4"),
    FieldRule::replace("GridSize:", "GridSize: 32"),
    FieldRule::replace("TimelineZoom:", "TimelineZoom: 1"),
];

/// Rules for `[Metadata]`.
pub const METADATA_RULES: &[FieldRule] = &[
    FieldRule::replace("Creator:", "Creator:"),
    FieldRule::replace("Version:", "Version:"),
    FieldRule::replace("Source:", "Source:"),
    FieldRule::replace("Tags:", "Tags:"),
    FieldRule::replace("BeatmapID:", "BeatmapID:0"),
    FieldRule::replace("BeatmapSetID:", "BeatmapSetID:-1"),
];

/// Rules for `[Difficulty]`.
pub const DIFFICULTY_RULES: &[FieldRule] = &[
    FieldRule::replace("HPDrainRate:", "HPDrainRate:5"),
    FieldRule::replace("CircleSize:", "CircleSize:5"),
    FieldRule::replace("OverallDifficulty:", "OverallDifficulty:5"),
    FieldRule::replace("ApproachRate:", "ApproachRate:5"),
    FieldRule::replace("SliderMultiplier:", "SliderMultiplier:1.4"),
    FieldRule::replace("SliderTickRate:", "SliderTickRate:1"),
];

/// All rule groups in the order they are evaluated.
pub const FIELD_RULE_GROUPS: [&[FieldRule]; 4] =
    [GENERAL_RULES, EDITOR_RULES, METADATA_RULES, DIFFICULTY_RULES];

/// The result of applying field rules to a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldOutcome {
    /// The line is replaced.
    Replace(String),
    /// The line is removed.
    Drop,
    /// An `AudioFilename` line mentions neither `.mp3` nor `.ogg`. The line is left as is.
    UnresolvedAudio,
}

/// Finds the rule deciding the line, if any.
#[must_use]
pub fn matching_rule(line: &str) -> Option<&'static FieldRule> {
    FIELD_RULE_GROUPS
        .iter()
        .filter_map(|group| group.iter().find(|rule| line.contains(rule.pattern)))
        .last()
}

/// Applies the field rules to the line. `None` means no rule matched.
#[must_use]
pub fn rewrite_field(line: &str) -> Option<FieldOutcome> {
    let rule = matching_rule(line)?;
    Some(match rule.action {
        FieldAction::Replace(replaced) => FieldOutcome::Replace(replaced.to_string()),
        FieldAction::Drop => FieldOutcome::Drop,
        FieldAction::CanonicalAudio => match AudioFormat::find_in(line) {
            Some(format) => {
                FieldOutcome::Replace(format!("AudioFilename: {}", format.canonical_name()))
            }
            None => FieldOutcome::UnresolvedAudio,
        },
    })
}

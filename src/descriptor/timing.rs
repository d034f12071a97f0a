//! Records of `[TimingPoints]`.
//!
//! A record is `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`. Only the last five fields are inspected: the record is removed when `uninherited` is zero or not a number, otherwise the sample and effect fields are reset and the volume is raised to full.

use itertools::Itertools;

/// Index of the `sampleSet` field.
const SAMPLE_SET: usize = 3;
/// Index of the `sampleIndex` field.
const SAMPLE_INDEX: usize = 4;
/// Index of the `volume` field.
const VOLUME: usize = 5;
/// Index of the `uninherited` field.
const UNINHERITED: usize = 6;
/// Index of the `effects` field.
const EFFECTS: usize = 7;

/// The volume every kept timing point is raised to.
pub const FULL_VOLUME: i64 = 100;

/// Reads a leading integer like JavaScript's `parseInt` does: leading whitespace, an optional sign, then as many digits as present. Returns `None` when no digit follows.
///
/// ```
/// use osz_cleaner::descriptor::timing::parse_leading_int;
///
/// assert_eq!(parse_leading_int(" 42ms"), Some(42));
/// assert_eq!(parse_leading_int("-1.5"), Some(-1));
/// assert_eq!(parse_leading_int("x1"), None);
/// ```
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits_len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = digits.get(..digits_len).filter(|d| !d.is_empty())?;
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// A comma-separated line of `[TimingPoints]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimingPointRecord<'a> {
    /// The record has no `uninherited` field, such as old two-field records. It is passed through as is.
    Short,
    /// The record carries the inspected fields.
    Full(FullTimingPoint<'a>),
}

/// A timing point record with all inspected fields present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullTimingPoint<'a> {
    fields: Vec<&'a str>,
}

/// What happens to a timing point record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimingPointEdit {
    /// The record stays as is.
    Keep,
    /// The record is removed.
    Drop,
    /// The record is replaced with the clamped one.
    Replace(String),
}

impl<'a> TimingPointRecord<'a> {
    /// Splits the line into a record.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let fields: Vec<_> = line.split(',').collect();
        if fields.len() <= UNINHERITED {
            return Self::Short;
        }
        Self::Full(FullTimingPoint { fields })
    }

    /// Decides what to do with the record.
    #[must_use]
    pub fn normalize(&self) -> TimingPointEdit {
        match self {
            Self::Short => TimingPointEdit::Keep,
            Self::Full(point) => point.normalize(),
        }
    }
}

impl<'a> FullTimingPoint<'a> {
    fn field(&self, index: usize) -> Option<i64> {
        self.fields.get(index).copied().and_then(parse_leading_int)
    }

    /// Sample set, `0` means the map default.
    #[must_use]
    pub fn sample_set(&self) -> Option<i64> {
        self.field(SAMPLE_SET)
    }

    /// Custom sample index, `0` means the default hit sounds.
    #[must_use]
    pub fn sample_index(&self) -> Option<i64> {
        self.field(SAMPLE_INDEX)
    }

    /// Volume percentage.
    #[must_use]
    pub fn volume(&self) -> Option<i64> {
        self.field(VOLUME)
    }

    /// Uninherited flag. Zero or non-numeric values are treated alike.
    #[must_use]
    pub fn uninherited(&self) -> Option<i64> {
        self.field(UNINHERITED)
    }

    /// Effect bit flags such as kiai. Absent on seven-field records.
    #[must_use]
    pub fn effects(&self) -> Option<i64> {
        self.field(EFFECTS)
    }

    fn normalize(&self) -> TimingPointEdit {
        if self.uninherited().unwrap_or(0) == 0 {
            return TimingPointEdit::Drop;
        }
        let mut fields: Vec<&'a str> = self.fields.clone();
        let mut changed = false;
        let mut clamp = |index: usize, out_of_bound: bool, bound: &'a str| {
            if out_of_bound && let Some(field) = fields.get_mut(index) {
                *field = bound;
                changed = true;
            }
        };
        clamp(SAMPLE_SET, self.sample_set().is_some_and(|v| v > 0), "0");
        clamp(SAMPLE_INDEX, self.sample_index().is_some_and(|v| v > 0), "0");
        clamp(VOLUME, self.volume().is_some_and(|v| v < FULL_VOLUME), "100");
        clamp(EFFECTS, self.effects().is_some_and(|v| v > 0), "0");
        if changed {
            TimingPointEdit::Replace(fields.iter().join(","))
        } else {
            TimingPointEdit::Keep
        }
    }
}

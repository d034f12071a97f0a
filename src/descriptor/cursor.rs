use std::ops::Range;

/// A line of the descriptor source, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceLine<'a> {
    /// The line number, starts with 1.
    pub line: usize,
    /// The line content. A trailing `\r` of a CRLF terminator is excluded.
    pub text: &'a str,
    /// The byte range of `text` in the source.
    pub range: Range<usize>,
}

/// Walks over the lines of a descriptor source, handling both CRLF and LF terminators.
///
/// An empty segment after the final terminator is not yielded as a line.
pub(crate) struct LineCursor<'a> {
    /// The line position of the next line, starts with 1.
    line: usize,
    /// The byte index of the next line.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> LineCursor<'a> {
    pub(crate) const fn new(source: &'a str) -> Self {
        Self {
            line: 1,
            index: 0,
            source,
        }
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.source.get(self.index..).filter(|rest| !rest.is_empty())?;
        let (line_len, advance) = remaining
            .find('\n')
            .map_or((remaining.len(), remaining.len()), |lf| (lf, lf + 1));
        let raw = remaining.get(..line_len)?;
        let text = raw.strip_suffix('\r').unwrap_or(raw);

        let start = self.index;
        let line = self.line;
        self.index += advance;
        self.line += 1;
        Some(SourceLine {
            line,
            text,
            range: start..start + text.len(),
        })
    }
}

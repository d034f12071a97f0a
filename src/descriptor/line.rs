//! Per-line edits and reconstruction of the descriptor text.

use super::event::{BackgroundRef, EVENTS_BOILERPLATE};

/// The line terminator of the output.
pub const CRLF: &str = "\r\n";

/// What happens to a single source line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LineEdit {
    /// The line is written unchanged.
    Keep,
    /// The line is omitted.
    Drop,
    /// The line is written as the given text.
    Replace(String),
    /// The `[Events]` header, written with the boilerplate comments and the background declaration if any.
    EventsHeader,
}

/// A source line paired with its edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditedLine<'a> {
    /// The original line without its terminator.
    pub source: &'a str,
    /// The edit decided for the line.
    pub edit: LineEdit,
}

/// Joins the surviving lines with CRLF, terminating every one of them.
#[must_use]
pub fn render(lines: &[EditedLine<'_>], background: Option<&BackgroundRef>) -> String {
    let mut text = String::new();
    let mut push_line = |line: &str| {
        text.push_str(line);
        text.push_str(CRLF);
    };
    for EditedLine { source, edit } in lines {
        match edit {
            LineEdit::Keep => push_line(*source),
            LineEdit::Drop => {}
            LineEdit::Replace(replaced) => push_line(replaced.as_str()),
            LineEdit::EventsHeader => {
                push_line(*source);
                for (i, comment) in EVENTS_BOILERPLATE.into_iter().enumerate() {
                    push_line(comment);
                    if i == 0
                        && let Some(bg) = background
                    {
                        push_line(bg.declaration.as_str());
                    }
                }
                push_line("");
            }
        }
    }
    text
}

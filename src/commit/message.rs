// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Raw commit message text and its line view.

/// A proposed commit message, exactly as it was retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    text: String,
    lines: Vec<String>,
}

impl CommitMessage {
    /// Wrap raw message text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = split_lines(&text);
        Self { text, lines }
    }

    /// The full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message split into lines, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the message has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The first line, if any.
    pub fn subject(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Whether `needle` occurs anywhere in the text.
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}

impl From<&str> for CommitMessage {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CommitMessage {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Split on `\n`, `\r\n` and lone `\r`. A final terminator does not start a
/// new line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

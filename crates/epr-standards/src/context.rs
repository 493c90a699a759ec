//! Source excerpts for parse diagnostics.

use std::fmt;

/// Lines shown before the failing line.
pub const LINES_BEFORE: usize = 2;
/// Lines shown after the failing line.
pub const LINES_AFTER: usize = 1;
/// Prefix of the failing line.
pub const ERROR_MARKER: &str = ">>>";
const PLAIN_MARKER: &str = "   ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    /// 1-based line number.
    pub number: usize,
    /// Line text with trailing whitespace removed.
    pub text: String,
    pub is_error: bool,
}

/// A small window of source text centred on a failing line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceContext {
    pub lines: Vec<ContextLine>,
}

impl SourceContext {
    /// Collect the lines around `error_line` (1-based), clipped to the text.
    ///
    /// End-of-input errors point one line past the last line; those mark the
    /// last line instead.
    pub fn around(source: &str, error_line: usize) -> Self {
        let all: Vec<&str> = source.lines().collect();
        if all.is_empty() {
            return Self::default();
        }
        let marked = error_line.clamp(1, all.len());
        let start = marked.saturating_sub(LINES_BEFORE + 1);
        let end = (marked + LINES_AFTER).min(all.len());
        let lines = (start..end)
            .map(|index| ContextLine {
                number: index + 1,
                text: all[index].trim_end().to_string(),
                is_error: index + 1 == marked,
            })
            .collect();
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of the marked line, if any line was collected.
    pub fn error_line(&self) -> Option<usize> {
        self.lines
            .iter()
            .find(|line| line.is_error)
            .map(|line| line.number)
    }
}

impl fmt::Display for ContextLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_error {
            ERROR_MARKER
        } else {
            PLAIN_MARKER
        };
        write!(f, "{marker} {}: {}", self.number, self.text)
    }
}

impl fmt::Display for SourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

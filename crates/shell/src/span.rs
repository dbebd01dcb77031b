// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for interpreter diagnostics.

/// A span representing a byte range in the input line.
///
/// Spans use byte offsets for efficient slicing and work with UTF-8 input.
///
/// # Examples
///
/// ```
/// use minsh_shell::Span;
///
/// let line = "echo hello";
/// let span = Span::new(5, 10);
/// assert_eq!(span.slice(line), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end byte positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text from the input line.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.start..self.end).unwrap_or("")
    }
}

/// Generate a context snippet showing an error location in the input line.
///
/// Returns the relevant portion of the line with a caret row pointing at the
/// span.
///
/// # Arguments
///
/// * `input` - The original input line.
/// * `span` - The span to highlight.
/// * `context_chars` - Number of characters of context to show around the span.
///
/// # Example
///
/// ```text
/// echo hi | cat >
///               ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    // Find context boundaries, respecting UTF-8 character boundaries
    let start = input[..span.start.min(input.len())]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0);

    let end = input[span.start.min(input.len())..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| span.start + i + c.len_utf8())
        .unwrap_or(input.len());

    let snippet = &input[start..end];
    let caret_pos = input[start..span.start.min(input.len())].chars().count();
    let caret_len = span.len().max(1);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;

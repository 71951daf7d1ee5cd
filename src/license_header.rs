//! Locating the leading block comment of a C source file and swapping it for
//! the canonical license header.

use crate::persistence::split_lines;

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// The canonical header, kept as lines with their terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeader {
    lines: Vec<String>,
}

impl LicenseHeader {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(split_lines(text))
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Where the existing header ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpan {
    /// Index of the line that closes the comment
    pub comment_end: usize,
    /// First line kept after the header (blank lines after the comment are
    /// part of the header)
    pub body_start: usize,
}

#[derive(Clone, Copy)]
enum Scan {
    Searching,
    InComment,
    AfterComment { comment_end: usize },
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn closes_comment(line: &str) -> bool {
    line.trim_end().ends_with(COMMENT_CLOSE)
}

/// Find the leading block comment of `lines`.
///
/// Returns `None` when the first non-blank line is not a comment opener, or
/// when the comment is never closed.
#[must_use]
pub fn scan_header<S: AsRef<str>>(lines: &[S]) -> Option<HeaderSpan> {
    let mut state = Scan::Searching;

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        state = match state {
            Scan::Searching if is_blank(line) => Scan::Searching,
            Scan::Searching if line.starts_with(COMMENT_OPEN) => {
                // `/* ... */` on one line; `/*/` opens without closing.
                if line.trim_end().len() >= COMMENT_OPEN.len() + COMMENT_CLOSE.len() && closes_comment(line) {
                    Scan::AfterComment { comment_end: i }
                } else {
                    Scan::InComment
                }
            }
            Scan::Searching => return None,
            Scan::InComment if closes_comment(line) => Scan::AfterComment { comment_end: i },
            Scan::InComment => Scan::InComment,
            Scan::AfterComment { comment_end } if is_blank(line) => Scan::AfterComment { comment_end },
            Scan::AfterComment { comment_end } => {
                return Some(HeaderSpan {
                    comment_end,
                    body_start: i,
                });
            }
        };
    }

    match state {
        Scan::AfterComment { comment_end } => Some(HeaderSpan {
            comment_end,
            body_start: lines.len(),
        }),
        Scan::Searching | Scan::InComment => None,
    }
}

/// Canonical header followed by the file's body.
#[must_use]
pub fn rewrite(header: &LicenseHeader, lines: &[String]) -> Vec<String> {
    let span = scan_header(lines);
    log::debug!("header span: {span:?}");

    let body = match span {
        Some(span) => &lines[span.body_start..],
        None => lines,
    };

    header.lines().iter().chain(body).cloned().collect()
}

//! Line classification for generated idea text
//!
//! The model is asked to answer in a loose markdown-ish shape (one heading,
//! `Title: content` fields, `* ` bullets). This module turns that raw text into
//! an ordered list of [`DisplayLine`]s for a renderer to style. It never fails:
//! a line that fits no category comes back as a plain paragraph.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines shaped like `Industry: Food` or `Key Features:`
static FIELD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+:").unwrap());

/// One classified unit of rendering derived from a single line of response text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    /// `## ` line with the prefix stripped
    Heading(String),
    /// `Title: content` line. A matching line with no `": "` separator keeps
    /// the whole line (colon included) as the title and an empty content.
    Field { title: String, content: String },
    /// `* ` line with the prefix stripped
    Bullet(String),
    /// Everything else, kept verbatim (empty lines included)
    Paragraph(String),
}

/// Split generated text into display lines, one per input line.
///
/// Splits on `'\n'` and keeps every line in order, so text ending in a newline
/// yields a trailing empty paragraph. Classification is first-match-wins:
/// heading, then field, then bullet, then paragraph. Pure and deterministic;
/// the same text always produces the same sequence.
pub fn format_idea(text: &str) -> Vec<DisplayLine> {
    text.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> DisplayLine {
    if let Some(rest) = line.strip_prefix("## ") {
        return DisplayLine::Heading(rest.to_string());
    }
    if FIELD_RE.is_match(line) {
        let (title, content) = match line.split_once(": ") {
            Some((title, content)) => (title.to_string(), content.to_string()),
            None => (line.to_string(), String::new()),
        };
        return DisplayLine::Field { title, content };
    }
    if let Some(rest) = line.strip_prefix("* ") {
        return DisplayLine::Bullet(rest.to_string());
    }
    DisplayLine::Paragraph(line.to_string())
}

//! Shared value types for the pocketnotes application.
//!
//! Holds the crate-wide `Result` alias and the small enums that configuration,
//! the store and the screens all agree on.
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{first_line, NoteError};

/// A specialized Result type for pocketnotes operations.
pub type Result<T> = std::result::Result<T, NoteError>;

/// How the editor text maps onto a note's title and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TitlePolicy {
    /// The whole text is the content; the title is its first line.
    #[default]
    SingleField,
    /// The first line is the title; everything after the first line break is
    /// the content.
    TitleBody,
}

impl TitlePolicy {
    /// Splits editor text into `(title, content)`.
    pub fn compose(&self, text: &str) -> (String, String) {
        match self {
            TitlePolicy::SingleField => (first_line(text).to_string(), text.to_string()),
            TitlePolicy::TitleBody => match text.split_once('\n') {
                Some((title, rest)) => (title.trim_end_matches('\r').to_string(), rest.to_string()),
                None => (text.to_string(), String::new()),
            },
        }
    }

    /// Rebuilds the editor text for a stored title and content.
    pub fn editor_text(&self, title: &str, content: &str) -> String {
        match self {
            TitlePolicy::SingleField => content.to_string(),
            TitlePolicy::TitleBody if content.is_empty() => title.to_string(),
            TitlePolicy::TitleBody => format!("{}\n{}", title, content),
        }
    }
}

/// How a note's date snapshot is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
    /// Absolute calendar date, e.g. `Oct 16, 2026`.
    #[default]
    Calendar,
    /// Day of the week, e.g. `Friday`.
    Weekday,
}

impl DateStyle {
    pub fn format(&self, at: &DateTime<Local>) -> String {
        match self {
            DateStyle::Calendar => at.format("%b %-d, %Y").to_string(),
            DateStyle::Weekday => at.format("%A").to_string(),
        }
    }
}

/// Which note the editor should open.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorTarget {
    /// Start a brand new note; the editor creates its own placeholder.
    Create,
    /// Open the note with this id.
    Existing(String),
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn single_field_keeps_text_verbatim() {
        let (title, content) = TitlePolicy::SingleField.compose("Buy milk\nand eggs");
        assert_eq!(title, "Buy milk");
        assert_eq!(content, "Buy milk\nand eggs");
        assert_eq!(
            TitlePolicy::SingleField.editor_text(&title, &content),
            "Buy milk\nand eggs"
        );
    }

    #[test]
    fn title_body_splits_at_first_break() {
        let (title, content) = TitlePolicy::TitleBody.compose("L1\nL2\nL3");
        assert_eq!(title, "L1");
        assert_eq!(content, "L2\nL3");
        assert_eq!(TitlePolicy::TitleBody.editor_text(&title, &content), "L1\nL2\nL3");
    }

    #[test]
    fn title_body_without_break_adds_no_newline() {
        let (title, content) = TitlePolicy::TitleBody.compose("L1");
        assert_eq!(title, "L1");
        assert_eq!(content, "");
        assert_eq!(TitlePolicy::TitleBody.editor_text(&title, &content), "L1");
    }

    #[test]
    fn title_body_drops_carriage_return() {
        let (title, content) = TitlePolicy::TitleBody.compose("L1\r\nL2");
        assert_eq!(title, "L1");
        assert_eq!(content, "L2");
    }

    #[test]
    fn date_styles() {
        let at = Local.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        assert_eq!(DateStyle::Calendar.format(&at), "Oct 16, 2026");
        assert_eq!(DateStyle::Weekday.format(&at), "Friday");
    }
}

use log::trace;

use crate::{NoteError, Result};

/// True when the text is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// First line of the text, without its line terminator.
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// One-line preview of a note body, cut at `max_len` characters
pub fn content_preview(content: &str, max_len: usize) -> String {
    let first_line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    if first_line.chars().count() <= max_len {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}

// Helper for parsing the 1-based row numbers typed in the shell
pub fn parse_index(arg: Option<&String>, len: usize) -> Result<usize> {
    let raw = arg.ok_or_else(|| NoteError::InvalidCommand {
        message: "Missing item number".to_string(),
    })?;

    let index: usize = raw.parse().map_err(|_| NoteError::InvalidCommand {
        message: format!("Not a number: {}", raw),
    })?;

    if index == 0 || index > len {
        return Err(NoteError::InvalidCommand {
            message: format!("No item {} (there are {})", index, len),
        });
    }

    trace!("Parsed row number {} of {}", index, len);
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn first_line_handles_crlf_and_empty() {
        assert_eq!(first_line("one\r\ntwo"), "one");
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("\nsecond"), "");
    }

    #[test]
    fn preview_skips_blank_lines_and_truncates() {
        assert_eq!(content_preview("\n  \nhello", 10), "hello");
        assert_eq!(content_preview("abcdefgh", 3), "abc...");
    }

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index(Some(&"2".to_string()), 3).unwrap(), 1);
        assert!(parse_index(Some(&"0".to_string()), 3).is_err());
        assert!(parse_index(Some(&"4".to_string()), 3).is_err());
        assert!(parse_index(Some(&"x".to_string()), 3).is_err());
        assert!(parse_index(None, 3).is_err());
    }
}

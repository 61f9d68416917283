// crates/lemmario-core/src/fuse.rs
//
// Buffer-level passes: rebuild logical lines across hyphenation breaks,
// fuse everything into one working buffer, then repair the damage that only
// shows up at buffer level (glued footnote digits, space runs, clipped
// annotation punctuation).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CleanError, Result};

lazy_static! {
    // Footnote marker glued to the following word: "2abbaino" -> "abbaino".
    static ref FOOTNOTE_DIGIT: Regex = Regex::new(r"[0-9]([a-z])").unwrap();
    static ref SPACE_RUN: Regex = Regex::new(r" +").unwrap();
}

/// Rejoin words the extractor broke across lines.
///
/// A trailing `-` marks a mid-word break: the hyphen is dropped and the next
/// line concatenated directly. Anything else starts a new logical line.
pub fn rejoin_hyphenated(lines: &[String]) -> Result<Vec<String>> {
    let mut logical: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        match logical.last_mut() {
            Some(last) if last.ends_with('-') => {
                last.pop();
                last.push_str(line);
            }
            _ => logical.push(line.clone()),
        }
    }
    if logical.is_empty() {
        return Err(CleanError::Validation(
            "no content lines after filtering".into(),
        ));
    }
    Ok(logical)
}

/// Fuse the logical lines into the single working buffer.
pub fn fuse(lines: &[String]) -> String {
    lines.join(" ")
}

/// Delete digits immediately followed by an ASCII lowercase letter, keeping
/// the letter. Single left-to-right pass.
pub fn strip_footnote_digits(buf: &str) -> String {
    FOOTNOTE_DIGIT.replace_all(buf, "$1").into_owned()
}

/// Collapse runs of spaces to a single space. Idempotent.
pub fn collapse_spaces(buf: &str) -> String {
    SPACE_RUN.replace_all(buf, " ").into_owned()
}

/// Drop the two join-artifact characters at the front of the buffer (the
/// masked first heading and its following space) and seed the trailing
/// comma the entry splitter expects after the final entry.
pub fn trim_offset(buf: &str) -> String {
    let mut out: String = buf.chars().skip(2).collect();
    out.push(',');
    out
}

/// Apply the profile's ordered literal repairs.
pub fn apply_repairs(buf: &str, repairs: &[(String, String)]) -> String {
    let mut out = buf.to_string();
    for (pattern, replacement) in repairs {
        out = out.replace(pattern.as_str(), replacement);
    }
    out
}

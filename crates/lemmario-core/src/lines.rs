// crates/lemmario-core/src/lines.rs
//
// Line-level passes over the raw extractor output.
//
// Order matters: the heading swap runs on the already-filtered line list,
// and the single-character masking must run after the swap so the heading
// letters are still recognizable when looking for them.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CleanError, Result};

lazy_static! {
    static ref PAGE_NUMBER: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Normalize CRLF/CR line endings and form-feed page breaks to LF, then
/// split into lines.
///
/// pdftotext separates pages with U+000C; treating it as a line break keeps
/// a page's last entry and the next page's header on separate lines.
pub fn split_lines(raw: &str) -> Vec<String> {
    let mut normalized = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                normalized.push('\n');
            }
            '\u{0C}' => normalized.push('\n'),
            _ => normalized.push(c),
        }
    }
    normalized.split('\n').map(str::to_string).collect()
}

/// Discard the extractor boilerplate at the top of the file.
pub fn strip_preamble(lines: Vec<String>, preamble: usize) -> Vec<String> {
    lines.into_iter().skip(preamble).collect()
}

/// Trim surrounding whitespace from every line and drop the ones left empty.
pub fn drop_blank(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Drop the running page headers.
pub fn drop_headers(lines: Vec<String>, prefix: &str) -> Vec<String> {
    lines.into_iter().filter(|l| !l.starts_with(prefix)).collect()
}

/// Drop lines consisting solely of a page number.
pub fn drop_page_numbers(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|l| !PAGE_NUMBER.is_match(l)).collect()
}

/// Swap each configured heading letter with the line before it.
///
/// The extractor emits a section's entry before the single-letter heading
/// that should precede it:
///
/// ```text
/// hamburger s.m.inv., ...              H
/// H                          ->        hamburger s.m.inv., ...
/// ```
///
/// Each configured letter must occur exactly once, and not as the first
/// remaining line.
pub fn swap_headings(lines: &mut [String], letters: &[String]) -> Result<()> {
    for letter in letters {
        let mut hits = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if line == letter {
                hits.push(i);
            }
        }
        let idx = match hits.as_slice() {
            [i] => *i,
            [] => {
                return Err(CleanError::Validation(format!(
                    "heading '{letter}' not found"
                )))
            }
            _ => {
                return Err(CleanError::Validation(format!(
                    "heading '{letter}' occurs {} times, expected exactly once",
                    hits.len()
                )))
            }
        };
        if idx == 0 {
            return Err(CleanError::Validation(format!(
                "heading '{letter}' has no preceding entry to swap with"
            )));
        }
        lines.swap(idx, idx - 1);
    }
    Ok(())
}

/// Replace the remaining single-character lines (the section headings) with
/// a comma so they act as entry separators once the buffer is fused.
pub fn mask_single_chars(lines: &mut [String]) {
    for line in lines.iter_mut() {
        if line.chars().count() < 2 {
            *line = ",".to_string();
        }
    }
}

use std::path::Path;

use crate::error::{CleanError, Result};
use crate::tags::TagSet;

/// Per-dictionary cleanup constants.
///
/// The built-in profile targets the NVdB PDF as extracted by pdftotext. The
/// tag set and the repair table can be swapped out (see `TagSet::from_path`
/// and `load_repairs`) to point the pipeline at another source dictionary
/// with the same layout problems.
#[derive(Debug, Clone)]
pub struct SourceProfile {
    /// Extractor boilerplate lines discarded from the top of the file.
    pub preamble_lines: usize,
    /// Running page header; lines starting with this prefix are dropped.
    pub header_prefix: String,
    /// Section headings the extractor emits one line too late.
    pub heading_letters: Vec<String>,
    /// Annotations recognized as continuations of the previous entry.
    pub tags: TagSet,
    /// Ordered literal substitutions applied to the fused buffer.
    pub repairs: Vec<(String, String)>,
    /// Ordered literal substitutions undone again after rendering.
    pub restores: Vec<(String, String)>,
}

impl SourceProfile {
    /// Profile for the NVdB print run headed "23 novembre 2016".
    pub fn nvdb() -> Self {
        // In order: collapse the separator sentinel against neighbouring
        // punctuation, then re-dot the annotations the extractor clipped,
        // then close up the tags printed with an internal space so they
        // match the tag set.
        let repairs = [
            (", ,", ","),
            (". ,", ".,"),
            (" comando,", " comando.,"),
            (" s.m,", " s.m.,"),
            (" sigla,", " sigla.,"),
            (" agg. inv.", " agg.inv."),
            (" pron. indef.", " pron.indef."),
            (" pron. interr.", " pron.interr."),
        ];
        // The two tokens above that were dotted only to survive entry
        // splitting; the output restores their printed form.
        let restores = [("sigla.", "sigla"), ("loc. di comando.", "loc. di comando")];
        Self {
            preamble_lines: 8,
            header_prefix: "23 novembre 2016".to_string(),
            heading_letters: ["H", "J", "W", "Y"].iter().map(|l| l.to_string()).collect(),
            tags: TagSet::builtin(),
            repairs: owned_pairs(&repairs),
            restores: owned_pairs(&restores),
        }
    }

    /// Load a repair table from a plain-text file: one
    /// `pattern<TAB>replacement` pair per line, blank lines and `#` comments
    /// ignored. Patterns keep their surrounding spaces.
    pub fn load_repairs(path: &Path) -> Result<Vec<(String, String)>> {
        let text = std::fs::read_to_string(path)?;
        let mut repairs = Vec::new();
        for (no, line) in text.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((pattern, replacement)) = line.split_once('\t') else {
                return Err(CleanError::Profile(format!(
                    "{}:{}: expected pattern<TAB>replacement",
                    path.display(),
                    no + 1
                )));
            };
            if pattern.is_empty() {
                return Err(CleanError::Profile(format!(
                    "{}:{}: empty pattern",
                    path.display(),
                    no + 1
                )));
            }
            repairs.push((pattern.to_string(), replacement.to_string()));
        }
        if repairs.is_empty() {
            return Err(CleanError::Profile(format!(
                "repair table {} contains no pairs",
                path.display()
            )));
        }
        Ok(repairs)
    }
}

impl Default for SourceProfile {
    fn default() -> Self {
        Self::nvdb()
    }
}

fn owned_pairs(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

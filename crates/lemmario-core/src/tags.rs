use std::path::Path;

use crate::error::{CleanError, Result};

// Grammar annotations of the NVdB, in dictionary order. One entry per
// distinct tag; membership decides whether an entry fragment continues the
// previous entry (see entries::merge_tag_fragments).
const NVDB_TAGS: &[&str] = &[
    "agg.",
    "agg.compar.inv.",
    "agg.dimostr.",
    "agg.escl.",
    "agg.indef.",
    "agg.indef.inv.",
    "agg.interr.",
    "agg.inv.",
    "agg.num.pl.",
    "agg.poss. di terza pers.pl.",
    "agg.rel.",
    "art.indet.m.sing.",
    "avv.",
    "cong.",
    "inter.",
    "lat.",
    "loc. di comando.",
    "prep.",
    "pron. dimostr.m.",
    "pron. poss. di prima pers.sing.",
    "pron.dimostr.",
    "pron.dimostr.m.",
    "pron.escl.",
    "pron.indef.",
    "pron.indef.inv.",
    "pron.indef.m.",
    "pron.interr.",
    "pron.pers. di terza pers.f.pl.",
    "pron.pers. di terza pers.f.sing.",
    "pron.poss. di terza pers.sing.",
    "pron.pers. di terza pers.m.sing.",
    "pron.poss. di prima pers.pl.",
    "pron.poss. di prima pers.sing.",
    "pron.poss. di seconda pers.pl.",
    "pron.poss. di seconda pers.sing.",
    "pron.poss. di terza pers.pl.",
    "pron.rel.",
    "pron.rel.indef.",
    "s.f. e m.",
    "s.f. pl.",
    "s.f.",
    "s.f.inv.",
    "s.f.pl.",
    "s.m. e f.",
    "s.m. e f.inv.",
    "s.m.",
    "s.m.inv.",
    "s.m.pl.",
    "simb.",
    "v.intr.",
    "v.tr.",
];

/// Ordered set of known grammar annotations.
#[derive(Debug, Clone)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// The built-in NVdB tag set.
    pub fn builtin() -> Self {
        Self {
            tags: NVDB_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Load a tag set from a plain-text file: one tag per line, blank lines
    /// and `#` comments ignored.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let tags: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
        if tags.is_empty() {
            return Err(CleanError::Profile(format!(
                "tag set {} contains no tags",
                path.display()
            )));
        }
        Ok(Self { tags })
    }

    pub fn contains(&self, s: &str) -> bool {
        self.tags.iter().any(|t| t == s)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self::builtin()
    }
}

// crates/lemmario-core/src/entries.rs
//
// Entry splitting and the grammar-continuation merge.

use crate::error::{CleanError, Result};
use crate::tags::TagSet;

/// Split the fused buffer into entry fragments after each `.,` terminator.
///
/// Fragments keep their terminator; surrounding whitespace is trimmed and
/// empty fragments dropped.
pub fn split_entries(buf: &str) -> Result<Vec<String>> {
    let fragments: Vec<String> = buf
        .split_inclusive(".,")
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();
    if fragments.is_empty() {
        return Err(CleanError::Validation(
            "entry splitting produced no entries".into(),
        ));
    }
    Ok(fragments)
}

/// Merge fragments that are a bare grammar tag into the previous entry.
///
/// An annotation split from its lemma shows up as a fragment like `v.tr.,`;
/// minus the trailing comma it is a tag-set member and belongs to the entry
/// before it.
pub fn merge_tag_fragments(fragments: Vec<String>, tags: &TagSet) -> Vec<String> {
    let mut entries: Vec<String> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let continuation = fragment
            .strip_suffix(',')
            .is_some_and(|tag| tags.contains(tag));
        match entries.last_mut() {
            Some(last) if continuation => {
                last.push(' ');
                last.push_str(&fragment);
            }
            _ => entries.push(fragment),
        }
    }
    entries
}

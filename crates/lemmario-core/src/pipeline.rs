// crates/lemmario-core/src/pipeline.rs
//
// Stage orchestration. The order is fixed and each stage feeds the next;
// no stage reorders lines except the heading swap.

use crate::entries::{merge_tag_fragments, split_entries};
use crate::error::Result;
use crate::profile::SourceProfile;
use crate::render::{render, OutputMode};
use crate::{fuse, lines};

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct CleanOutput {
    /// Rendered output text, written verbatim.
    pub text: String,
    /// Number of output lines (lemmas) produced.
    pub lemmas: usize,
}

/// Produce the merged entry list, in appearance order.
pub fn entries(raw: &str, profile: &SourceProfile) -> Result<Vec<String>> {
    let all = lines::split_lines(raw);
    let all = lines::strip_preamble(all, profile.preamble_lines);
    let all = lines::drop_blank(all);
    let all = lines::drop_headers(all, &profile.header_prefix);
    let mut all = lines::drop_page_numbers(all);
    lines::swap_headings(&mut all, &profile.heading_letters)?;
    lines::mask_single_chars(&mut all);

    let logical = fuse::rejoin_hyphenated(&all)?;
    let buf = fuse::fuse(&logical);
    let buf = fuse::strip_footnote_digits(&buf);
    let buf = fuse::collapse_spaces(&buf);
    let buf = fuse::trim_offset(&buf);
    let buf = fuse::apply_repairs(&buf, &profile.repairs);

    let fragments = split_entries(&buf)?;
    Ok(merge_tag_fragments(fragments, &profile.tags))
}

/// Run the whole pipeline and render the requested output shape.
pub fn clean(raw: &str, profile: &SourceProfile, mode: OutputMode) -> Result<CleanOutput> {
    let merged = entries(raw, profile)?;
    let (text, lemmas) = render(&merged, mode, &profile.restores);
    Ok(CleanOutput { text, lemmas })
}

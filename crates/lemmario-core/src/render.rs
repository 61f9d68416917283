// crates/lemmario-core/src/render.rs
//
// Mode-specific rendering of the merged entry list.

/// Output shapes supported by the pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Entries verbatim, one per line.
    Full,
    /// `lemma<TAB>annotation` columns.
    Split,
    /// Annotation column aligned by space-padding the lemmas.
    SplitJustify,
    /// Lemma column only, adjacent duplicates collapsed.
    WordsOnly,
}

impl OutputMode {
    pub fn label(self) -> &'static str {
        match self {
            OutputMode::Full => "full",
            OutputMode::Split => "split",
            OutputMode::SplitJustify => "split-justify",
            OutputMode::WordsOnly => "words-only",
        }
    }
}

/// Render the entry list in the requested shape.
///
/// Returns the output text and the number of lines it contains. For every
/// mode except words-only the epilogue restores the tokens the repair pass
/// dotted, strips the per-line separator commas, and drops the final
/// sentinel character.
pub fn render(
    entries: &[String],
    mode: OutputMode,
    restores: &[(String, String)],
) -> (String, usize) {
    let lines: Vec<String> = match mode {
        OutputMode::Full => entries.to_vec(),
        OutputMode::Split => split_columns(entries, false),
        OutputMode::SplitJustify => split_columns(entries, true),
        OutputMode::WordsOnly => {
            let mut words: Vec<String> =
                entries.iter().map(|e| lemma_of(e).to_string()).collect();
            // Adjacent collapse only: global uniqueness would sort
            // case-sensitive lemmas away from their dictionary order.
            words.dedup();
            words
        }
    };
    let lemmas = lines.len();

    let mut out = lines.join("\n");
    if mode != OutputMode::WordsOnly {
        for (pattern, replacement) in restores {
            out = out.replace(pattern.as_str(), replacement);
        }
        out = out.replace(",\n", "\n");
        out.pop();
    }
    (out, lemmas)
}

fn lemma_of(entry: &str) -> &str {
    entry
        .split_once(' ')
        .map_or(entry, |(lemma, _)| lemma)
}

fn split_columns(entries: &[String], justify: bool) -> Vec<String> {
    let columns: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| e.split_once(' ').unwrap_or((e.as_str(), "")))
        .collect();
    if justify {
        let width = columns
            .iter()
            .map(|(lemma, _)| lemma.chars().count())
            .max()
            .unwrap_or(0);
        columns
            .iter()
            .map(|&(lemma, annotation)| format!("{lemma:<width$} {annotation}"))
            .collect()
    } else {
        columns
            .iter()
            .map(|&(lemma, annotation)| format!("{lemma}\t{annotation}"))
            .collect()
    }
}

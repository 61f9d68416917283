// crates/lemmario-cli/src/main.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lemmario_core::{clean, OutputMode, SourceProfile, TagSet};

#[derive(Parser)]
#[command(name = "lemmario-cli")]
#[command(
    about = "Clean raw pdftotext output of the NVdB dictionary into a lemma list",
    long_about = None
)]
struct Cli {
    /// Raw text input (pdftotext output)
    input: PathBuf,

    /// Cleaned output path
    output: PathBuf,

    /// Keep only the lemma column, collapsing adjacent duplicates
    #[arg(short = 'w', long)]
    words_only: bool,

    /// Separate lemma and annotation with a tab
    #[arg(short = 's', long)]
    split: bool,

    /// Like --split, with the annotation column aligned by padding lemmas
    #[arg(long)]
    split_justify: bool,

    /// Replace the built-in grammar tag set (one tag per line)
    #[arg(long, value_name = "PATH")]
    tags: Option<PathBuf>,

    /// Replace the built-in punctuation repair table
    /// (one pattern<TAB>replacement pair per line)
    #[arg(long, value_name = "PATH")]
    repairs: Option<PathBuf>,
}

impl Cli {
    // When several mode flags are given: split-justify beats split beats
    // words-only.
    fn mode(&self) -> OutputMode {
        if self.split_justify {
            OutputMode::SplitJustify
        } else if self.split {
            OutputMode::Split
        } else if self.words_only {
            OutputMode::WordsOnly
        } else {
            OutputMode::Full
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut profile = SourceProfile::nvdb();
    if let Some(path) = cli.tags.as_deref() {
        profile.tags = TagSet::from_path(path)
            .with_context(|| format!("loading tag set {}", path.display()))?;
    }
    if let Some(path) = cli.repairs.as_deref() {
        profile.repairs = SourceProfile::load_repairs(path)
            .with_context(|| format!("loading repair table {}", path.display()))?;
    }

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let mode = cli.mode();
    let out = clean(&raw, &profile, mode)?;

    std::fs::write(&cli.output, &out.text)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    eprintln!(
        "clean ok: in_bytes={} lemmas={} mode={} out={}",
        raw.len(),
        out.lemmas,
        mode.label(),
        cli.output.display()
    );

    Ok(())
}

//! Editkit - scriptable text-editor automation.
//!
//! # Usage
//!
//! ```bash
//! editkit notes.txt --script edits.json
//! editkit notes.txt --script edits.json --in-place
//! editkit source.cbl --cursor 12:8 --word
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;

use editkit::editor::Editor;
use editkit::geometry::Position;
use editkit::host::{ActiveEditor, ScratchEditor, ScratchWorkbench};
use editkit::script::Script;

/// Apply scripted edits to a file through the editor facade
#[derive(Parser, Debug)]
#[command(name = "editkit", version, about, long_about = None)]
struct Cli {
    /// File to edit
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// JSON edit script to run against the file
    #[arg(short, long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Initial cursor placement, zero-based LINE:COL
    #[arg(long, value_name = "LINE:COL")]
    cursor: Option<String>,

    /// Print the word at the cursor instead of the buffer
    #[arg(long)]
    word: bool,

    /// Write the edited buffer back to FILE instead of stdout
    #[arg(long)]
    in_place: bool,

    /// Word pattern override (also via EDITKIT_WORD_PATTERN)
    #[arg(long, value_name = "REGEX")]
    word_pattern: Option<String>,
}

fn parse_cursor(spec: &str) -> Result<Position> {
    let (line, character) = spec
        .split_once(':')
        .with_context(|| format!("cursor must be LINE:COL, got {spec:?}"))?;
    Ok(Position::new(
        line.trim().parse().context("cursor line is not a number")?,
        character
            .trim()
            .parse()
            .context("cursor column is not a number")?,
    ))
}

fn word_pattern_override(cli_pattern: Option<&str>) -> Result<Option<Regex>> {
    let source = cli_pattern
        .map(ToOwned::to_owned)
        .or_else(|| std::env::var("EDITKIT_WORD_PATTERN").ok());
    source
        .map(|pattern| {
            Regex::new(&pattern).with_context(|| format!("invalid word pattern {pattern:?}"))
        })
        .transpose()
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    let script = cli
        .script
        .as_deref()
        .map(|path| {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            Script::from_json(&source)
                .with_context(|| format!("Failed to parse script {}", path.display()))
        })
        .transpose()?;

    let pattern = word_pattern_override(cli.word_pattern.as_deref())?;

    let loaded = ScratchEditor::from_file(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let mut bench = ScratchWorkbench::with_editor(loaded);

    {
        let mut editor = Editor::attach(&mut bench).context("no active editor")?;
        if let Some(pattern) = pattern {
            editor = editor.with_word_pattern(pattern);
        }

        if let Some(spec) = cli.cursor.as_deref() {
            editor.set_cursor(parse_cursor(spec)?);
        }

        if let Some(script) = &script {
            script
                .apply(&mut editor)
                .context("Script application failed")?;
        }

        if cli.word {
            println!("{}", editor.current_word());
        }
    }

    let text = bench
        .editor()
        .map(ActiveEditor::text)
        .context("no active editor")?;

    if cli.in_place {
        fs::write(&cli.file, &text)
            .with_context(|| format!("Failed to write {}", cli.file.display()))?;
    } else if !cli.word {
        print!("{text}");
    }

    Ok(())
}

//! JSON edit scripts.
//!
//! A script is a recorded interaction with the facade: an ordered list of
//! commands, one per facade operation, serialized as a JSON array of tagged
//! objects. The `editkit` binary runs scripts against files; tests use them
//! to drive whole interactions in one step.
//!
//! ```json
//! [
//!   { "op": "set-cursor", "line": 2, "character": 0 },
//!   { "op": "goto-column", "column": 7 },
//!   { "op": "insert", "text": "MOVE" }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editor::Editor;
use crate::geometry::{Position, Range};
use crate::host::{ActiveEditor, EditError};

/// One facade operation in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Command {
    /// Insert text at each selection's start.
    Insert { text: String },
    /// Replace each selection's content.
    ReplaceSelections { text: String },
    /// Overwrite the primary selection's lines with text plus a newline.
    SetLine { text: String },
    /// Collapse all selections to a cursor.
    SetCursor { line: usize, character: usize },
    /// Select a single range.
    Select { range: Range },
    /// Expand the primary selection to whole lines.
    SelectWholeLines,
    /// Select the word at the cursor.
    SelectWord,
    /// Go to a column on each selection's line, padding with spaces.
    GotoColumn { column: usize },
    /// Shift all selections one line up.
    MoveUp,
    /// Shift all selections one line down.
    MoveDown,
}

/// Why a script could not be loaded or run.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script source is not valid JSON for the command model.
    #[error("failed to parse edit script: {0}")]
    Parse(#[from] serde_json::Error),
    /// The host rejected one of the script's transactions.
    #[error("edit rejected by host: {0}")]
    Edit(#[from] EditError),
}

/// An ordered list of [`Command`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    /// Build a script from commands.
    pub const fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Parse a script from JSON source.
    pub fn from_json(source: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(source)?)
    }

    /// The commands, in run order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Run every command against the facade, stopping at the first
    /// rejected transaction.
    pub fn apply<E: ActiveEditor>(&self, editor: &mut Editor<'_, E>) -> Result<(), ScriptError> {
        for command in &self.commands {
            tracing::debug!(?command, "applying script command");
            match command {
                Command::Insert { text } => editor.insert_text(text)?,
                Command::ReplaceSelections { text } => editor.replace_selections(text)?,
                Command::SetLine { text } => editor.set_current_line(text)?,
                Command::SetCursor { line, character } => {
                    editor.set_cursor(Position::new(*line, *character));
                }
                Command::Select { range } => editor.set_selection(*range),
                Command::SelectWholeLines => editor.select_whole_lines(),
                Command::SelectWord => editor.select_current_word(),
                Command::GotoColumn { column } => editor.goto_column(*column)?,
                Command::MoveUp => editor.move_up(),
                Command::MoveDown => editor.move_down(),
            }
        }
        Ok(())
    }
}

//! In-memory host editor backed by a rope.
//!
//! [`ScratchEditor`] implements the full [`ActiveEditor`] capability set over
//! a [`ropey::Rope`], so facade code can run without a real host: the test
//! suite drives it directly and the `editkit` binary uses it to edit files
//! on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ropey::Rope;

use super::{ActiveEditor, EditBatch, EditError, EditOp, Workbench};
use crate::geometry::{Position, Range, Selection};

/// A rope-backed editor view with multi-cursor selections.
///
/// Out-of-range positions handed to any method are clamped to the nearest
/// valid document position. The selection list is never empty.
pub struct ScratchEditor {
    rope: Rope,
    path: Option<PathBuf>,
    selections: Vec<Selection>,
    read_only: bool,
}

impl ScratchEditor {
    /// Create an editor over the given text, cursor at the document start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
            selections: vec![Selection::cursor(Position::new(0, 0))],
            read_only: false,
        }
    }

    /// Load an editor from a file, remembering its path.
    pub fn from_file(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let mut editor = Self::from_text(&text);
        editor.path = Some(path);
        Ok(editor)
    }

    /// Associate a path without reading from disk.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Mark the document as rejecting edits.
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Character length of a line, excluding its newline.
    fn line_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, |line| line.chars().count())
    }

    /// Clamp a position to the nearest valid document position.
    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.rope.len_lines().saturating_sub(1));
        let character = pos.character.min(self.line_len(line));
        Position::new(line, character)
    }

    fn clamp_selection(&self, selection: Selection) -> Selection {
        Selection::new(self.clamp(selection.anchor), self.clamp(selection.active))
    }

    /// Rope char index of a position. The position must already be clamped.
    fn char_index(&self, pos: Position) -> usize {
        self.rope.line_to_char(pos.line) + pos.character
    }
}

impl ActiveEditor for ScratchEditor {
    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, index: usize) -> Option<String> {
        if index >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(index).to_string();
        // Strip trailing newline if present
        Some(line.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn text_in(&self, range: Range) -> String {
        let start = self.char_index(self.clamp(range.start()));
        let end = self.char_index(self.clamp(range.end()));
        self.rope.slice(start..end).to_string()
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: &[Selection]) {
        if selections.is_empty() {
            tracing::debug!("empty selection set collapsed to a cursor at the document start");
            self.selections = vec![Selection::cursor(Position::new(0, 0))];
            return;
        }
        self.selections = selections
            .iter()
            .map(|sel| self.clamp_selection(*sel))
            .collect();
    }

    fn apply(&mut self, batch: &EditBatch) -> Result<(), EditError> {
        if self.read_only {
            return Err(EditError::ReadOnly);
        }
        if batch.is_empty() {
            return Ok(());
        }

        // Stable order by pre-batch span keeps same-position inserts in
        // listing order.
        let mut order: Vec<usize> = (0..batch.len()).collect();
        order.sort_by_key(|&i| batch.ops()[i].span());

        // Reject the whole transaction before touching the rope.
        for pair in order.windows(2) {
            let (_, first_end) = batch.ops()[pair[0]].span();
            let (next_start, _) = batch.ops()[pair[1]].span();
            if first_end > next_start {
                return Err(EditError::OverlappingEdits);
            }
        }

        // Applied back to front so every op still sees pre-batch coordinates.
        for &i in order.iter().rev() {
            match &batch.ops()[i] {
                EditOp::Insert { at, text } => {
                    let at = self.char_index(self.clamp(*at));
                    self.rope.insert(at, text);
                }
                EditOp::Replace { range, text } => {
                    let start = self.char_index(self.clamp(range.start()));
                    let end = self.char_index(self.clamp(range.end()));
                    self.rope.remove(start..end);
                    self.rope.insert(start, text);
                }
            }
        }

        let selections = self.selections.clone();
        self.set_selections(&selections);
        Ok(())
    }
}

impl std::fmt::Debug for ScratchEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScratchEditor")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("path", &self.path)
            .field("selections", &self.selections)
            .field("read_only", &self.read_only)
            .finish()
    }
}

/// A workbench holding at most one scratch editor.
#[derive(Debug, Default)]
pub struct ScratchWorkbench {
    editor: Option<ScratchEditor>,
}

impl ScratchWorkbench {
    /// A workbench with nothing focused.
    pub const fn empty() -> Self {
        Self { editor: None }
    }

    /// A workbench with the given editor focused.
    pub const fn with_editor(editor: ScratchEditor) -> Self {
        Self {
            editor: Some(editor),
        }
    }

    /// Read access to the focused editor, if any.
    pub const fn editor(&self) -> Option<&ScratchEditor> {
        self.editor.as_ref()
    }
}

impl Workbench for ScratchWorkbench {
    type Editor = ScratchEditor;

    fn active_editor(&mut self) -> Option<&mut ScratchEditor> {
        self.editor.as_mut()
    }
}

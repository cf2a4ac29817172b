use std::collections::HashSet;

use regex::Regex;

use crate::geometry::{Position, Range, Selection};
use crate::host::{ActiveEditor, EditBatch, EditError, Workbench};
use crate::paths;
use crate::word;

/// Facade over a focused editor view.
///
/// An `Editor` borrows the active view for the duration of a scripted
/// interaction. Queries read host state directly; every mutating operation
/// goes through exactly one [`EditBatch`] transaction, so multi-cursor edits
/// land atomically.
///
/// "Primary selection" below means the first selection the host reports.
#[derive(Debug)]
pub struct Editor<'a, E: ActiveEditor> {
    host: &'a mut E,
    word_pattern: Regex,
}

impl<'a, E: ActiveEditor> Editor<'a, E> {
    /// Wrap an editor view directly.
    pub fn new(host: &'a mut E) -> Self {
        Self {
            host,
            word_pattern: word::DEFAULT_WORD_PATTERN.clone(),
        }
    }

    /// Bind to the workbench's active editor, or `None` when nothing has
    /// focus.
    pub fn attach<W>(workbench: &'a mut W) -> Option<Self>
    where
        W: Workbench<Editor = E>,
    {
        workbench.active_editor().map(Self::new)
    }

    /// Use a custom word pattern instead of
    /// [`word::DEFAULT_WORD_PATTERN`].
    pub fn with_word_pattern(mut self, pattern: Regex) -> Self {
        self.word_pattern = pattern;
        self
    }

    fn primary(&self) -> Selection {
        self.host.selections().into_iter().next().unwrap_or_default()
    }

    // --- Path ---

    /// Display path of the document, separator-normalized. `None` for
    /// untitled buffers.
    pub fn path(&self) -> Option<String> {
        self.host.path().map(paths::display_path)
    }

    /// Whether the document is a Windows batch file.
    pub fn is_bat(&self) -> bool {
        self.host
            .path()
            .is_some_and(|path| paths::has_extension(path, "bat"))
    }

    /// Whether the document is a Ruby file.
    pub fn is_ruby(&self) -> bool {
        self.host
            .path()
            .is_some_and(|path| paths::has_extension(path, "rb"))
    }

    // --- Content ---

    /// The whole document text.
    pub fn text(&self) -> String {
        self.host.text()
    }

    /// Text covered by a range, clamped to the document.
    pub fn text_in(&self, range: Range) -> String {
        self.host.text_in(range)
    }

    /// Text of one line, without its newline. Empty past the end of the
    /// document.
    pub fn line(&self, index: usize) -> String {
        self.host.line(index).unwrap_or_else(|| {
            tracing::debug!(index, "line query past end of document");
            String::new()
        })
    }

    /// Line of the primary selection's start.
    pub fn current_row(&self) -> usize {
        self.primary().start().line
    }

    /// Text of the line the primary selection starts on.
    pub fn current_line(&self) -> String {
        self.line(self.current_row())
    }

    /// Char length of the current line with trailing spaces stripped.
    pub fn current_line_size(&self) -> usize {
        self.current_line().trim_end_matches(' ').chars().count()
    }

    // --- Selections ---

    /// Text of each selection, in host order.
    pub fn selected_texts(&self) -> Vec<String> {
        self.host
            .selections()
            .iter()
            .map(|sel| self.host.text_in(sel.range()))
            .collect()
    }

    /// Range of each selection, in host order.
    pub fn selection_ranges(&self) -> Vec<Range> {
        self.host
            .selections()
            .iter()
            .map(Selection::range)
            .collect()
    }

    /// Replace all selections with a single one covering `range`.
    pub fn set_selection(&mut self, range: Range) {
        self.host.set_selections(&[range.into()]);
    }

    /// Replace all selections, one per given range.
    pub fn set_selections(&mut self, ranges: &[Range]) {
        let selections: Vec<Selection> = ranges.iter().map(|&range| range.into()).collect();
        self.host.set_selections(&selections);
    }

    /// Expand the primary selection to whole lines: from the start of its
    /// first line to the start of the line after its last.
    pub fn select_whole_lines(&mut self) {
        let sel = self.primary();
        self.set_selection(Range::new(
            Position::line_start(sel.start().line),
            Position::line_start(sel.end().line + 1),
        ));
    }

    // --- Cursor ---

    /// Position of the primary selection's start.
    pub fn cursor(&self) -> Position {
        self.primary().start()
    }

    /// Collapse all selections to a single cursor.
    pub fn set_cursor(&mut self, at: Position) {
        self.host.set_selections(&[Selection::cursor(at)]);
    }

    // --- Words ---

    /// The word touching the primary selection's start, or `""` when the
    /// cursor touches no word.
    pub fn current_word(&self) -> String {
        let at = self.primary().start();
        let line = self.line(at.line);
        word::word_span(&line, at.character, &self.word_pattern)
            .map_or_else(String::new, |(start, end)| {
                word::slice_chars(&line, start, end)
            })
    }

    /// Select the word touching the primary selection's start. Leaves the
    /// selection untouched when the cursor touches no word.
    pub fn select_current_word(&mut self) {
        let at = self.primary().start();
        let line = self.line(at.line);
        match word::word_span(&line, at.character, &self.word_pattern) {
            Some((start, end)) => self.set_selection(Range::new(
                Position::new(at.line, start),
                Position::new(at.line, end),
            )),
            None => tracing::debug!(line = at.line, character = at.character, "no word at cursor"),
        }
    }

    // --- Mutation ---

    /// Insert `text` at each selection's start, as one transaction.
    pub fn insert_text(&mut self, text: &str) -> Result<(), EditError> {
        let mut batch = EditBatch::new();
        for sel in self.host.selections() {
            batch.insert(sel.start(), text);
        }
        self.host.apply(&batch)
    }

    /// Replace each selection's content with `text`, as one transaction.
    pub fn replace_selections(&mut self, text: &str) -> Result<(), EditError> {
        let mut batch = EditBatch::new();
        for sel in self.host.selections() {
            batch.replace(sel.range(), text);
        }
        self.host.apply(&batch)
    }

    /// Overwrite the whole lines covered by the primary selection with
    /// `text` plus a trailing newline.
    pub fn set_current_line(&mut self, text: &str) -> Result<(), EditError> {
        let sel = self.primary();
        let block = Range::new(
            Position::line_start(sel.start().line),
            Position::line_start(sel.end().line + 1),
        );
        let mut batch = EditBatch::new();
        batch.replace(block, format!("{text}\n"));
        self.host.apply(&batch)
    }

    /// Place a cursor at `column` on each selection's start line, padding
    /// short lines with spaces up to that column first.
    ///
    /// All pads go into a single transaction; a line shared by several
    /// selections is padded once.
    pub fn goto_column(&mut self, column: usize) -> Result<(), EditError> {
        let selections = self.host.selections();
        let mut batch = EditBatch::new();
        let mut padded: HashSet<usize> = HashSet::new();
        let mut moved: Vec<Selection> = Vec::with_capacity(selections.len());

        for sel in &selections {
            let line_index = sel.start().line;
            let len = self.line(line_index).chars().count();
            if column > len && padded.insert(line_index) {
                batch.insert(Position::new(line_index, len), " ".repeat(column - len));
            }
            moved.push(Selection::cursor(Position::new(line_index, column)));
        }

        if !batch.is_empty() {
            self.host.apply(&batch)?;
        }
        self.host.set_selections(&moved);
        Ok(())
    }

    // --- Vertical movement ---

    /// Shift every selection one line down, keeping character offsets and
    /// selection shape.
    pub fn move_down(&mut self) {
        self.shift_lines(1);
    }

    /// Shift every selection one line up, keeping character offsets and
    /// selection shape. Saturates at the first line.
    pub fn move_up(&mut self) {
        self.shift_lines(-1);
    }

    fn shift_lines(&mut self, delta: isize) {
        let moved: Vec<Selection> = self
            .host
            .selections()
            .into_iter()
            .map(|sel| sel.shifted_lines(delta))
            .collect();
        self.host.set_selections(&moved);
    }
}

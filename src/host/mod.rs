//! Host capability traits and the scratch implementation.
//!
//! The facade never talks to a concrete editor type. It is written against
//! [`ActiveEditor`], the minimal surface a focused editor view must provide:
//! document queries, selection access, and an atomic edit transaction.
//! [`Workbench`] models the layer above that, where an active view may or
//! may not exist.

mod scratch;

pub use scratch::{ScratchEditor, ScratchWorkbench};

use std::path::Path;

use thiserror::Error;

use crate::geometry::{Position, Range, Selection};

/// A single edit, positioned in pre-batch document coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Insert `text` before the character at `at`.
    Insert { at: Position, text: String },
    /// Replace the text covered by `range` with `text`.
    Replace { range: Range, text: String },
}

impl EditOp {
    /// The pre-batch span this op touches. Inserts are zero-width.
    pub(crate) fn span(&self) -> (Position, Position) {
        match self {
            Self::Insert { at, .. } => (*at, *at),
            Self::Replace { range, .. } => (range.start(), range.end()),
        }
    }
}

/// An ordered batch of edits applied as one transaction.
///
/// Every position refers to the document as it was before the batch; the
/// host rebases internally. Ops must not overlap. Two inserts at the same
/// position are allowed and land in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    ops: Vec<EditOp>,
}

impl EditBatch {
    /// Create an empty batch.
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Queue an insertion.
    pub fn insert(&mut self, at: Position, text: impl Into<String>) -> &mut Self {
        self.ops.push(EditOp::Insert {
            at,
            text: text.into(),
        });
        self
    }

    /// Queue a replacement.
    pub fn replace(&mut self, range: Range, text: impl Into<String>) -> &mut Self {
        self.ops.push(EditOp::Replace {
            range,
            text: text.into(),
        });
        self
    }

    /// The queued ops, in listing order.
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Whether the batch contains no ops.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of queued ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

/// Why a host rejected an edit transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// The document does not accept edits.
    #[error("document is read-only")]
    ReadOnly,
    /// Two ops in the batch touch overlapping spans.
    #[error("edit operations overlap")]
    OverlappingEdits,
}

/// The capability set of a focused editor view.
///
/// Positions handed in may lie outside the document; hosts clamp them to
/// the nearest valid position rather than failing.
pub trait ActiveEditor {
    /// Path of the backing file, if the document has one.
    fn path(&self) -> Option<&Path>;

    /// Number of lines in the document. At least 1, even when empty.
    fn line_count(&self) -> usize;

    /// Text of one line without its trailing newline, or `None` past the end.
    fn line(&self, index: usize) -> Option<String>;

    /// The whole document text.
    fn text(&self) -> String;

    /// Text covered by `range`, clamped to the document.
    fn text_in(&self, range: Range) -> String;

    /// Current selections. Never empty: a lone cursor is one selection.
    fn selections(&self) -> Vec<Selection>;

    /// Replace all selections. Positions are clamped; an empty slice
    /// collapses to a single cursor at the document start.
    fn set_selections(&mut self, selections: &[Selection]);

    /// Apply a batch of edits as one transaction, or reject it whole.
    fn apply(&mut self, batch: &EditBatch) -> Result<(), EditError>;
}

/// The host surface above individual views: at most one is focused.
pub trait Workbench {
    /// The editor view type this workbench manages.
    type Editor: ActiveEditor;

    /// The currently focused view, or `None` when no editor has focus.
    fn active_editor(&mut self) -> Option<&mut Self::Editor>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_builder_preserves_listing_order() {
        let mut batch = EditBatch::new();
        batch
            .insert(Position::new(0, 0), "a")
            .replace(Range::new(Position::new(1, 0), Position::new(1, 2)), "b");
        assert_eq!(batch.len(), 2);
        assert!(matches!(batch.ops()[0], EditOp::Insert { .. }));
        assert!(matches!(batch.ops()[1], EditOp::Replace { .. }));
    }

    #[test]
    fn test_empty_batch() {
        assert!(EditBatch::new().is_empty());
    }
}

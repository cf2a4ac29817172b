//! Positions, ranges, and selections.
//!
//! These are the coordinate types the whole crate speaks in. They are plain
//! values: the host editor owns the document they point into, and nothing
//! here checks them against any particular buffer.

use serde::{Deserialize, Serialize};

/// A location in a document as a zero-based (line, character) pair.
///
/// `character` counts Unicode scalar values, not bytes.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character offset within the line.
    pub character: usize,
}

impl Position {
    /// Create a position at the given line and character.
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Create a position at the start of a line.
    pub const fn line_start(line: usize) -> Self {
        Self { line, character: 0 }
    }

    /// The same character offset, shifted by a signed number of lines.
    ///
    /// Saturates at line 0.
    pub const fn shifted_lines(self, delta: isize) -> Self {
        let line = self.line.saturating_add_signed(delta);
        Self {
            line,
            character: self.character,
        }
    }
}

/// An ordered pair of positions delimiting a span of text.
///
/// `start <= end` always holds; [`Range::new`] swaps operands given in
/// reverse order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct Range {
    start: Position,
    end: Position,
}

/// Unvalidated mirror of [`Range`] for deserialization.
#[derive(Deserialize)]
struct RawRange {
    start: Position,
    end: Position,
}

impl From<RawRange> for Range {
    fn from(raw: RawRange) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl Range {
    /// Create a range between two positions, in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Create an empty range at a single position.
    pub const fn empty(at: Position) -> Self {
        Self { start: at, end: at }
    }

    /// The lesser endpoint.
    pub const fn start(&self) -> Position {
        self.start
    }

    /// The greater endpoint.
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Whether the range spans no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Selection> for Range {
    fn from(selection: Selection) -> Self {
        Self::new(selection.anchor, selection.active)
    }
}

/// A range with directionality: `anchor` is where the selection started,
/// `active` is where the cursor sits now.
///
/// A selection whose endpoints coincide is a cursor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// The fixed end of the selection.
    pub anchor: Position,
    /// The moving end of the selection (the cursor).
    pub active: Position,
}

impl Selection {
    /// Create a selection from anchor to active position.
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Create a zero-width selection (a cursor) at a position.
    pub const fn cursor(at: Position) -> Self {
        Self {
            anchor: at,
            active: at,
        }
    }

    /// The lesser endpoint, regardless of direction.
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// The greater endpoint, regardless of direction.
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// The undirected range this selection covers.
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    /// Whether this selection is a cursor.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Whether the active end sits before the anchor.
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// The same selection shifted by a signed number of lines.
    ///
    /// Both endpoints keep their character offsets; lines saturate at 0.
    pub const fn shifted_lines(self, delta: isize) -> Self {
        Self {
            anchor: self.anchor.shifted_lines(delta),
            active: self.active.shifted_lines(delta),
        }
    }
}

impl From<Range> for Selection {
    fn from(range: Range) -> Self {
        Self {
            anchor: range.start(),
            active: range.end(),
        }
    }
}

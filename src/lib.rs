// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. script::ScriptError)
    clippy::module_name_repetitions
)]

//! # Editkit
//!
//! Scriptable text-editor automation.
//!
//! Editkit drives a host text editor through a small capability trait:
//! cursor and selection movement, word lookup at the cursor, line and buffer
//! access, column navigation with space padding, and atomic multi-cursor
//! edits. The same facade runs against a real host binding or against the
//! built-in rope-backed scratch host, which is what the `editkit` binary and
//! the test suite use.
//!
//! ## Architecture
//!
//! - [`host::ActiveEditor`] is the minimal capability set a focused editor
//!   view must provide: document queries, selection access, and an atomic
//!   edit transaction.
//! - [`editor::Editor`] is the facade: it borrows an active editor and
//!   translates intents ("select current word", "go to column N") into host
//!   calls, batching every mutation into a single transaction.
//!
//! ## Modules
//!
//! - [`editor`]: The editing facade
//! - [`geometry`]: Positions, ranges, and selections
//! - [`host`]: Host capability traits and the scratch implementation
//! - [`paths`]: Path display and extension helpers
//! - [`script`]: JSON edit scripts
//! - [`word`]: Word-boundary lookup

pub mod editor;
pub mod geometry;
pub mod host;
pub mod paths;
pub mod script;
pub mod word;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editor::Editor;
    pub use crate::geometry::{Position, Range, Selection};
    pub use crate::host::{ActiveEditor, EditBatch, ScratchEditor, ScratchWorkbench, Workbench};
    pub use crate::script::Script;
}

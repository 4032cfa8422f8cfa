//! Crossword - interactive crossword puzzle core
//!
//! Builds a numbered grid from a flat list of clues and keeps the state of a
//! puzzle being solved: cell values, focus, edit history and the timed
//! reveal pulse. Drawing is left to the host through [`GridRenderer`].

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Percentages and stagger delays
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow clue::ClueDefinition etc
#![allow(clippy::struct_excessive_bools)] // Options and view flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::redundant_closure_for_method_calls)] // Closures read better in iterator chains
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::float_cmp)] // Exact percentages in tests

pub mod cell;
pub mod clue;
pub mod config;
pub mod error;
pub mod event;
pub mod focus;
pub mod grid;
pub mod history;
pub mod input;
pub mod puzzle;
pub mod render;
pub mod reveal;
pub mod toolbar;
pub mod validate;

// Re-export core types at crate root
pub use cell::{Cell, ClueNumbers, Coord};
pub use clue::{ClueDefinition, Direction, NumberedClue};
pub use config::CrosswordOptions;
pub use error::{Error, Result};
pub use event::{LogLevel, WidgetEvent, emit_log, set_log_callback};
pub use grid::Grid;
pub use history::History;
pub use puzzle::Puzzle;
pub use render::{CellView, ClueView, GridRenderer, RenderFrame, TextRenderer};
pub use toolbar::ToolbarAction;
pub use validate::{Diagnostic, Validation};

// Re-export input types
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, KeyOutcome, Propagation};

//! Keyboard and pointer input.
//!
//! Hosts translate their native events (DOM `KeyboardEvent`s, terminal key
//! presses) into [`KeyEvent`]s and hand them to the puzzle. The returned
//! [`KeyOutcome`] says whether the key was handled and how the native event
//! should propagate.

mod command;
mod event;
mod keyboard;

pub use command::{Command, KeyOutcome, Propagation, command_for_key, is_typeable};
pub use event::Event;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

//! Screen controllers.
//!
//! Each screen reads the `NoteStore`, turns user actions into store calls and
//! asks a `Navigator` to move between screens. None of them render anything.

mod editor;
mod folders;
mod notes;

pub use editor::*;
pub use folders::*;
pub use notes::*;

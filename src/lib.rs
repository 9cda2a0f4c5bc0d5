//! In-memory folder and note keeping library
//!
//! This library provides the note store, the three screen controllers
//! (folders, notes, note editor), typed navigation routes, and an interactive
//! terminal shell that drives them.

mod cli;
mod config;
mod errors;
mod helper;
mod navigation;
mod note;
mod screens;
mod storage;
mod types;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use helper::*;
pub use navigation::*;
pub use note::*;
pub use screens::*;
pub use storage::*;
pub use types::*;

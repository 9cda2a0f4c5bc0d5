//! Interactive terminal shell over the screen controllers

mod app;
mod args;

pub use app::*;
pub use args::*;

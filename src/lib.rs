//! Clir: size the user's macOS cache and log directories and, after asking,
//! delete their contents.
//!
//! The run is a single sequential pass: every target is scanned first so the
//! banner can show the total, then each one is reported, confirmed, cleared
//! and rescanned, and finally a summary of what is left is printed.

pub mod app;
pub mod categories;
pub mod clearer;
pub mod confirm;
pub mod output;
pub mod render;
pub mod scanner;
pub mod target;
pub mod utils;

//! Terminal user interface
//!
//! A full-screen rendition of the game: tile grid, clickable on-screen
//! keyboard and a light/dark theme that survives restarts.

mod app;
pub mod keyboard;
mod palette;
mod rendering;

pub use app::{App, Command, run_tui, translate_key};
pub use palette::Palette;

//! Command implementations

pub mod score;
pub mod simple;
pub mod status;

pub use score::{ScoreResult, score_guess};
pub use simple::{play_lines, run_simple};
pub use status::load_status;

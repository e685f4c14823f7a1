//! Ocean Word Splash
//!
//! A terminal client for a daily six-letter word puzzle. Guesses are scored by
//! a remote service; when it cannot be reached the game keeps going with a
//! deterministic local scorer.
//!
//! # Quick Start
//!
//! ```rust
//! use word_splash::game::{GameState, Keystroke};
//! use word_splash::service::OfflineService;
//! use word_splash::core::GameStatus;
//!
//! let mut state = GameState::new();
//! for ch in "ACBACB".chars() {
//!     state.apply(Keystroke::Letter(ch), &OfflineService);
//! }
//! state.apply(Keystroke::Submit, &OfflineService);
//!
//! assert_eq!(state.attempts_used(), 1);
//! assert_eq!(state.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine and fallback scoring
pub mod game;

// Scoring service clients
pub mod service;

// Persisted player settings
pub mod settings;

// File logging
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

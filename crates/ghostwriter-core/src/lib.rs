//! Shared data model, configuration, error taxonomy and mood analytics
//! for the ghostwriter journal workspace.
//!
//! # Key Modules
//!
//! - [`types`] - `Mood`, `JournalEntry` and the enhancement context bag
//! - [`config`] - layered configuration (file, environment, validation)
//! - [`error`] - typed errors shared by the other crates
//! - [`analytics`] - averages, streaks, distribution, trend and insight

pub mod analytics;
pub mod config;
pub mod error;
pub mod types;

pub use error::{GhostwriterError, GhostwriterResult};
pub use types::{EnhanceContext, JournalEntry, Mood};

//! Ghostwriter CLI Library
//!
//! This crate provides the command-line interface for the ghostwriter mood
//! journal: argument parsing, one handler per journal operation, and text or
//! JSON output.
//!
//! # Key Modules
//!
//! - [`cli`] - entry point, configuration overrides and command routing
//! - [`cli_builder`] - the clap command tree
//! - [`commands`] - command handlers for writing, browsing and analysing entries
//! - [`output`] - text and JSON rendering
//! - [`session`] - configuration, journal store and enhancer for one run
//!
//! # Examples
//!
//! ```rust,no_run
//! use ghostwriter_cli::cli::run;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Run the CLI with command line arguments
//! run().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod cli_builder;
pub mod commands;
pub mod error;
pub mod output;
pub mod session;

pub use cli::run;
pub use session::Session;

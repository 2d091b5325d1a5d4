//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - The editing state the selection engine works on
//! - Error types shared by the engine
//! - Settings and CLI handling

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;
pub mod state;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use errors::{Precondition, SelectionError, SelectionResult};
pub use runner::run_app;
pub use state::{FilterState, FontMaster, GlyphLayer};

//! File-based structured logging for the plugin sandbox.
//!
//! Plugins have no terminal of their own to log to, so events go to a
//! rotating file instead. Spans and events emitted through the `tracing`
//! macros are formatted by the subscriber's fmt layer and appended to a
//! size-capped log with backup retention.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → LogWriter → rotating file
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: Events written to `~/.local/share/zellij/zibrary/zibrary.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Level Filtering**: `trace_level` config option, default `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the plugin lifecycle:
//!
//! ```rust
//! use zibrary::observability::init_tracing;
//! use zibrary::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{FileWriter, LogHandle, LogWriter};
pub use init::init_tracing;

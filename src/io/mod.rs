//! Input/output: command line, image codecs, progress display and errors

/// Command-line parsing and per-file orchestration
pub mod cli;
/// Default values and fixed limits
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Image decoding, encoding and output naming
pub mod image;
/// Terminal progress bars
pub mod progress;

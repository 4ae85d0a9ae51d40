//! Input/output boundary: command line, files, images and reports

/// Command-line parsing and batch map processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Map document writer and parser
pub mod document;
/// Error type and context helpers
pub mod error;
/// PNG occupancy loading and preview export
pub mod image;
/// Terminal progress display
pub mod progress;
/// JSON visibility reports
pub mod report;

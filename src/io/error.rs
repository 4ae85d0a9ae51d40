//! Error types and context management for map generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation, classification and I/O operations
#[derive(Debug)]
pub enum MapError {
    /// Failed to load an occupancy image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A cell ran out of tile options during generation
    ///
    /// Terminal for the attempt; a caller may retry with another seed.
    Contradiction {
        /// Grid location (row, col) of the emptied cell
        location: [usize; 2],
        /// Solver iteration when this occurred
        iteration: usize,
    },

    /// An occupied cell has exactly one road neighbor (a dead end)
    UnsupportedPattern {
        /// First dead end found, row-major
        location: [usize; 2],
        /// Total number of dead ends in the bitmap
        dead_ends: usize,
    },

    /// Occupancy input is not a non-empty rectangle
    MalformedGrid {
        /// Description of what's wrong with the shape
        reason: String,
    },

    /// Occupancy value other than 0 or 255
    InvalidOccupancy {
        /// Grid location (row, col) of the value
        location: [usize; 2],
        /// The offending value
        value: u8,
    },

    /// Map document could not be parsed
    Document {
        /// 1-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Visibility report could not be serialized
    Report {
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Numerical or shape computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Contradiction {
                location,
                iteration,
            } => {
                write!(
                    f,
                    "No tiles left at ({}, {}) at iteration {iteration}",
                    location[0], location[1]
                )
            }
            Self::UnsupportedPattern {
                location,
                dead_ends,
            } => {
                write!(
                    f,
                    "Dead end at ({}, {}) cannot be classified ({dead_ends} dead end(s) in total)",
                    location[0], location[1]
                )
            }
            Self::MalformedGrid { reason } => {
                write!(f, "Malformed occupancy grid: {reason}")
            }
            Self::InvalidOccupancy { location, value } => {
                write!(
                    f,
                    "Occupancy value {value} at ({}, {}) is neither 0 nor 255",
                    location[0], location[1]
                )
            }
            Self::Document { line, reason } => {
                write!(f, "Map document line {line}: {reason}")
            }
            Self::Report { source } => {
                write!(f, "Failed to serialize visibility report: {source}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Report { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, MapError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Current solver iteration
    pub iteration: Option<usize>,
    /// Grid indices where the error occurred
    pub grid_position: Option<[usize; 2]>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with solver state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<MapError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                MapError::Contradiction { iteration, .. } => {
                    if let Some(iter) = context.iteration {
                        *iteration = iter;
                    }
                }
                MapError::Computation { operation, .. } => {
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            operation: Some(operation),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for MapError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report { source: err }
    }
}

impl From<ndarray::ShapeError> for MapError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Computation {
            operation: "reshape",
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a document parse error
pub fn document_error(line: usize, reason: &impl ToString) -> MapError {
    MapError::Document {
        line,
        reason: reason.to_string(),
    }
}

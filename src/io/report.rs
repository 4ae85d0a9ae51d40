//! JSON visibility reports

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::document::MapDocument;
use crate::io::error::{MapError, Result};
use crate::map::visibility::VisibilityMap;

/// What one road cell can see
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellReport {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Tile label as written in map documents
    pub label: String,
    /// Names of the visible objects
    pub visible: Vec<String>,
}

/// Visibility of every road cell of a map
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityReport {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// One entry per non-floor cell, row-major
    pub cells: Vec<CellReport>,
}

impl VisibilityReport {
    /// Resolve object indices to document names
    ///
    /// `visibility` must index the document's objects in document order.
    pub fn new(document: &MapDocument, visibility: &VisibilityMap) -> Self {
        let map = document.map();
        let names: Vec<&str> = document
            .objects()
            .iter()
            .map(|named| named.name.as_str())
            .collect();

        let cells = visibility
            .iter()
            .filter_map(|(location, visible)| {
                let label = map.label(location).filter(|label| label.is_road())?;
                Some(CellReport {
                    row: location[0],
                    col: location[1],
                    label: label.to_string(),
                    visible: visible
                        .iter()
                        .filter_map(|&index| names.get(index).map(ToString::to_string))
                        .collect(),
                })
            })
            .collect();

        Self {
            rows: map.rows(),
            cols: map.cols(),
            cells,
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?).map_err(|source| MapError::FileSystem {
            path: path.to_path_buf(),
            operation: "write visibility report",
            source,
        })
    }
}

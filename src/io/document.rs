//! Textual map documents
//!
//! The format is a small YAML subset:
//!
//! ```text
//! tiles:
//!   - [curve_left/W, straight/W, curve_left/S]
//! objects:
//!  sign1:
//!   kind: sign_T_intersect
//!   pos: [1.50, 2.00]
//!   rotate: 90
//!   height: 0.20
//! tile_size: 0.585
//! ```
//!
//! Signs are named `sign1`, `sign2`, ...; decorations are named after their
//! kind with a counter running over all decorations, e.g. `tree1`,
//! `duckie2`. [`MapDocument::parse`] reads exactly what
//! [`MapDocument::render`] writes.

use std::fmt;
use std::path::Path;

use ndarray::Array2;

use crate::io::configuration::TILE_SIZE;
use crate::io::error::{MapError, Result, document_error};
use crate::map::builder::RoadMap;
use crate::map::classifier::ClassifiedMap;
use crate::map::labels::TileLabel;
use crate::map::objects::{ObjectKind, PlacedObject};

/// An object together with its document name
#[derive(Clone, Debug, PartialEq)]
pub struct NamedObject {
    /// Unique name within the document
    pub name: String,
    /// The placed object
    pub object: PlacedObject,
}

/// A map as written to disk
#[derive(Clone, Debug, PartialEq)]
pub struct MapDocument {
    map: ClassifiedMap,
    objects: Vec<NamedObject>,
    tile_size: f64,
}

impl MapDocument {
    /// Name the objects of a road map and wrap it for writing
    pub fn new(road_map: &RoadMap) -> Self {
        Self::from_parts(
            road_map.map().clone(),
            road_map.signs(),
            road_map.decorations(),
        )
    }

    /// Document from a label grid, its signs and its decorations
    pub fn from_parts(
        map: ClassifiedMap,
        signs: &[PlacedObject],
        decorations: &[PlacedObject],
    ) -> Self {
        let signs = signs.iter().enumerate().map(|(index, object)| NamedObject {
            name: format!("sign{}", index + 1),
            object: object.clone(),
        });
        let decorations = decorations
            .iter()
            .enumerate()
            .map(|(index, object)| NamedObject {
                name: format!("{}{}", object.kind().name(), index + 1),
                object: object.clone(),
            });

        Self {
            map,
            objects: signs.chain(decorations).collect(),
            tile_size: TILE_SIZE,
        }
    }

    /// Label grid
    pub const fn map(&self) -> &ClassifiedMap {
        &self.map
    }

    /// Named objects in document order
    pub fn objects(&self) -> &[NamedObject] {
        &self.objects
    }

    /// Tile edge length in meters
    pub const fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Render the document text
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the rendered document to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render()).map_err(|source| MapError::FileSystem {
            path: path.to_path_buf(),
            operation: "write map document",
            source,
        })
    }

    /// Parse document text
    ///
    /// # Errors
    ///
    /// Returns a `Document` error naming the offending line if:
    /// - A line belongs to no known section or field
    /// - A label, kind or number does not parse
    /// - Tile rows differ in length, or there are none
    /// - An object misses one of its fields
    pub fn parse(text: &str) -> Result<Self> {
        let mut section = Section::None;
        let mut rows: Vec<(usize, Vec<TileLabel>)> = Vec::new();
        let mut objects: Vec<NamedObject> = Vec::new();
        let mut pending: Option<PendingObject> = None;
        let mut tile_size = TILE_SIZE;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            if !raw.starts_with(' ') {
                if let Some(object) = pending.take() {
                    objects.push(object.finish()?);
                }
                let (key, value) = raw
                    .split_once(':')
                    .ok_or_else(|| document_error(line, &"expected a section key"))?;
                let value = value.trim();
                section = match key {
                    "tiles" => Section::Tiles,
                    "objects" => Section::Objects,
                    "tile_size" => {
                        tile_size = parse_number(value, line)?;
                        Section::None
                    }
                    _ => return Err(document_error(line, &format!("unknown section '{key}'"))),
                };
                continue;
            }

            match section {
                Section::Tiles => {
                    let list = raw
                        .trim()
                        .strip_prefix('-')
                        .ok_or_else(|| document_error(line, &"expected a tile row"))?;
                    let row = parse_list(list, line)?
                        .into_iter()
                        .map(|label| {
                            label
                                .parse::<TileLabel>()
                                .map_err(|e| document_error(line, &e))
                        })
                        .collect::<Result<Vec<_>>>()?;
                    rows.push((line, row));
                }
                Section::Objects => {
                    let depth = raw.len() - raw.trim_start().len();
                    let content = raw.trim();
                    if depth == 1 {
                        if let Some(object) = pending.take() {
                            objects.push(object.finish()?);
                        }
                        let name = content
                            .strip_suffix(':')
                            .ok_or_else(|| document_error(line, &"expected an object name"))?;
                        pending = Some(PendingObject::new(name, line));
                    } else {
                        let object = pending
                            .as_mut()
                            .ok_or_else(|| document_error(line, &"field outside an object"))?;
                        object.set_field(content, line)?;
                    }
                }
                Section::None => {
                    return Err(document_error(line, &"indented line outside a section"));
                }
            }
        }

        if let Some(object) = pending.take() {
            objects.push(object.finish()?);
        }

        Ok(Self {
            map: labels_to_map(rows, text.lines().count())?,
            objects,
            tile_size,
        })
    }

    /// Read and parse a document file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MapError::FileSystem {
            path: path.to_path_buf(),
            operation: "read map document",
            source,
        })?;
        Self::parse(&text)
    }
}

#[derive(Clone, Copy)]
enum Section {
    None,
    Tiles,
    Objects,
}

struct PendingObject {
    name: String,
    line: usize,
    kind: Option<ObjectKind>,
    position: Option<(f64, f64)>,
    rotation: Option<i32>,
    height: Option<f64>,
}

impl fmt::Display for MapDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tiles:")?;
        for row in self.map.label_rows() {
            let labels: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "  - [{}]", labels.join(", "))?;
        }

        writeln!(f, "objects:")?;
        for NamedObject { name, object } in &self.objects {
            let (x, y) = object.position();
            writeln!(f, " {name}:")?;
            writeln!(f, "  kind: {}", object.kind())?;
            writeln!(f, "  pos: [{x:.2}, {y:.2}]")?;
            writeln!(f, "  rotate: {}", object.rotation())?;
            writeln!(f, "  height: {:.2}", object.height())?;
        }

        writeln!(f, "tile_size: {}", self.tile_size)
    }
}

impl PendingObject {
    fn new(name: &str, line: usize) -> Self {
        Self {
            name: name.to_string(),
            line,
            kind: None,
            position: None,
            rotation: None,
            height: None,
        }
    }

    fn set_field(&mut self, content: &str, line: usize) -> Result<()> {
        let (key, value) = content
            .split_once(':')
            .ok_or_else(|| document_error(line, &"expected 'key: value'"))?;
        let value = value.trim();
        match key {
            "kind" => {
                self.kind = Some(
                    value
                        .parse::<ObjectKind>()
                        .map_err(|e| document_error(line, &e))?,
                );
            }
            "pos" => {
                let coordinates = parse_list(value, line)?;
                let [x, y] = coordinates.as_slice() else {
                    return Err(document_error(line, &"pos needs two coordinates"));
                };
                self.position = Some((parse_number(x, line)?, parse_number(y, line)?));
            }
            "rotate" => {
                self.rotation = Some(value.parse().map_err(|e| {
                    document_error(line, &format!("bad rotation '{value}': {e}"))
                })?);
            }
            "height" => self.height = Some(parse_number(value, line)?),
            _ => return Err(document_error(line, &format!("unknown field '{key}'"))),
        }
        Ok(())
    }

    fn finish(self) -> Result<NamedObject> {
        let missing = |field: &str| {
            document_error(
                self.line,
                &format!("object '{}' has no {field}", self.name),
            )
        };
        let kind = self.kind.ok_or_else(|| missing("kind"))?;
        let position = self.position.ok_or_else(|| missing("pos"))?;
        let rotation = self.rotation.ok_or_else(|| missing("rotate"))?;
        let height = self.height.ok_or_else(|| missing("height"))?;
        Ok(NamedObject {
            object: PlacedObject::new(kind, rotation, position, height),
            name: self.name,
        })
    }
}

fn parse_list(text: &str, line: usize) -> Result<Vec<&str>> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| document_error(line, &"expected a [...] list"))?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(inner.split(',').map(str::trim).collect())
}

fn parse_number(text: &str, line: usize) -> Result<f64> {
    text.parse()
        .map_err(|e| document_error(line, &format!("bad number '{text}': {e}")))
}

fn labels_to_map(rows: Vec<(usize, Vec<TileLabel>)>, last_line: usize) -> Result<ClassifiedMap> {
    let cols = rows.first().map_or(0, |(_, row)| row.len());
    if cols == 0 {
        return Err(document_error(last_line, &"no tiles"));
    }
    if let Some((line, row)) = rows.iter().find(|(_, row)| row.len() != cols) {
        return Err(document_error(
            *line,
            &format!("tile row has {} labels, expected {cols}", row.len()),
        ));
    }

    let height = rows.len();
    let flat: Vec<TileLabel> = rows.into_iter().flat_map(|(_, row)| row).collect();
    let labels = Array2::from_shape_vec((height, cols), flat)?;
    ClassifiedMap::from_labels(labels)
}

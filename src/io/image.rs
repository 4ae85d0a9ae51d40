//! PNG occupancy loading and bitmap preview export

use std::path::Path;

use image::{GrayImage, Luma};

use crate::io::configuration::DEFAULT_PREVIEW_SCALE;
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::map::occupancy::{BitmapSurface, EMPTY, OccupancyGrid, ROAD};

impl BitmapSurface for GrayImage {
    fn size(&self) -> (usize, usize) {
        (self.height() as usize, self.width() as usize)
    }

    fn value(&self, row: usize, col: usize) -> u8 {
        self.get_pixel_checked(col as u32, row as u32)
            .map_or(EMPTY, |pixel| pixel.0[0])
    }
}

/// Load a PNG as an occupancy grid, one pixel per cell
///
/// Color images are converted to 8-bit luma first; every pixel must then be
/// exactly 0 or 255.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded or holds other values
pub fn load_occupancy(path: &Path) -> Result<OccupancyGrid> {
    let image = image::open(path)
        .map_err(|source| MapError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_luma8();
    OccupancyGrid::from_surface(&image)
}

/// How bitmap previews are drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewContext {
    scale: u32,
}

impl Default for PreviewContext {
    fn default() -> Self {
        Self {
            scale: DEFAULT_PREVIEW_SCALE,
        }
    }
}

impl PreviewContext {
    /// Preview drawing each cell as a `scale` x `scale` square
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is zero
    pub fn new(scale: u32) -> Result<Self> {
        if scale == 0 {
            return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
        }
        Ok(Self { scale })
    }

    /// Pixels per cell side
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Render a grid; road is white, empty is black
    pub fn render(&self, grid: &OccupancyGrid) -> GrayImage {
        let width = grid.cols() as u32 * self.scale;
        let height = grid.rows() as u32 * self.scale;
        GrayImage::from_fn(width, height, |x, y| {
            let location = [(y / self.scale) as usize, (x / self.scale) as usize];
            Luma([if grid.is_road(location) { ROAD } else { EMPTY }])
        })
    }
}

/// Write a preview of an occupancy grid as PNG
///
/// At scale 1 the file loads back through [`load_occupancy`] unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_occupancy_png(
    grid: &OccupancyGrid,
    context: &PreviewContext,
    output_path: &Path,
) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    context
        .render(grid)
        .save(output_path)
        .map_err(|e| MapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

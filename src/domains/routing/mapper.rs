use super::types::{GridCell, ImageSize, PixelPoint};
use crate::common::{DomainError, DomainResult};

/// Converts between image pixel space and grid cells for a fixed geometry.
/// Only built through `new`, which rejects empty or degenerate geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    image: ImageSize,
    rows: usize,
    cols: usize,
    cell_width: f64,
    cell_height: f64,
}

impl CoordinateMapper {
    pub fn new(image: ImageSize, rows: usize, cols: usize) -> DomainResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(image.width) || !valid(image.height) || rows == 0 || cols == 0 {
            return Err(DomainError::InvalidImageSize {
                width: image.width,
                height: image.height,
            });
        }
        Ok(Self {
            image,
            rows,
            cols,
            cell_width: image.width / cols as f64,
            cell_height: image.height / rows as f64,
        })
    }

    pub fn image(&self) -> ImageSize {
        self.image
    }

    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_width, self.cell_height)
    }

    /// Cell containing `p`. Each axis is clamped independently, so points
    /// outside the image land on the nearest edge cell.
    pub fn pixel_to_grid(&self, p: PixelPoint) -> GridCell {
        GridCell {
            row: clamp_index(p.y / self.cell_height, self.rows),
            col: clamp_index(p.x / self.cell_width, self.cols),
        }
    }

    /// Center of the cell.
    pub fn grid_to_pixel(&self, c: GridCell) -> PixelPoint {
        PixelPoint {
            x: c.col as f64 * self.cell_width + self.cell_width / 2.0,
            y: c.row as f64 * self.cell_height + self.cell_height / 2.0,
        }
    }

    pub fn cells_to_pixels(&self, cells: &[GridCell]) -> Vec<PixelPoint> {
        cells.iter().map(|c| self.grid_to_pixel(*c)).collect()
    }
}

// NaN clamps to 0: `f64::clamp` keeps NaN and the `as` cast saturates it to 0.
fn clamp_index(scaled: f64, len: usize) -> usize {
    scaled.floor().clamp(0.0, (len - 1) as f64) as usize
}

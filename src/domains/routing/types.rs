use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete grid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A position in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: &PixelPoint) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Entry,
    Classroom,
    Lab,
    Room,
    Restroom,
    Office,
    #[serde(other)]
    Other,
}

/// A named point of interest on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_category")]
    pub category: PoiCategory,
}

fn default_category() -> PoiCategory {
    PoiCategory::Other
}

impl Poi {
    pub fn new(name: impl Into<String>, x: f64, y: f64, category: PoiCategory) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            category,
        }
    }

    pub fn position(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }
}

/// A computed route: the grid cells walked and their pixel-space centers.
/// Both sequences are empty when no route exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub cells: Vec<GridCell>,
    pub points: Vec<PixelPoint>,
}

impl Route {
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn is_unreachable(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

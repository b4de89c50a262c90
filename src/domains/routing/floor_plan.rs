use super::catalog::PoiCatalog;
use super::grid::Grid;
use super::mapper::CoordinateMapper;
use super::pathfinder::find_path;
use super::types::{GridCell, ImageSize, Poi, Route};
use crate::common::DomainResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid layout as stored in a floor-plan document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridSource {
    /// `.` walkable, `#` blocked.
    Ascii(Vec<String>),
    /// `1` walkable, `0` blocked.
    Matrix(Vec<Vec<i64>>),
}

impl GridSource {
    pub fn build(&self) -> DomainResult<Grid> {
        let grid = match self {
            GridSource::Ascii(lines) => Grid::from_ascii(lines)?,
            GridSource::Matrix(rows) => Grid::from_int_rows(rows)?,
        };
        Ok(grid)
    }
}

/// Static floor-plan configuration, as loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlanDocument {
    pub image: ImageSize,
    pub grid: GridSource,
    #[serde(default)]
    pub points: Vec<Poi>,
}

/// Conditions worth surfacing to the user that do not stop routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoutingWarning {
    /// The endpoint's cell is blocked. No snapping is done.
    BlockedEndpoint { poi: String, cell: GridCell },
    /// No walkable connection between the two cells.
    Unreachable {
        origin: String,
        destination: String,
        from: GridCell,
        to: GridCell,
    },
}

impl fmt::Display for RoutingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingWarning::BlockedEndpoint { poi, cell } => {
                write!(f, "{} sits on blocked cell {}", poi, cell)
            }
            RoutingWarning::Unreachable {
                origin,
                destination,
                from,
                to,
            } => write!(
                f,
                "no route found from {} {} to {} {}",
                origin, from, destination, to
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub route: Route,
    pub warnings: Vec<RoutingWarning>,
}

/// Validated, immutable floor plan shared by every session.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    grid: Grid,
    mapper: CoordinateMapper,
    catalog: PoiCatalog,
}

impl FloorPlan {
    pub fn new(grid: Grid, image: ImageSize, points: Vec<Poi>) -> DomainResult<Self> {
        let (rows, cols) = grid.dimensions();
        let mapper = CoordinateMapper::new(image, rows, cols)?;
        let catalog = PoiCatalog::new(points, image)?;
        Ok(Self {
            grid,
            mapper,
            catalog,
        })
    }

    pub fn from_document(doc: FloorPlanDocument) -> DomainResult<Self> {
        let grid = doc.grid.build()?;
        Self::new(grid, doc.image, doc.points)
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        let doc: FloorPlanDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn catalog(&self) -> &PoiCatalog {
        &self.catalog
    }

    /// Map both points to cells, search, and map the cells back to pixel
    /// centers.
    pub fn route(&self, origin: &Poi, destination: &Poi) -> RoutePlan {
        let from = self.mapper.pixel_to_grid(origin.position());
        let to = self.mapper.pixel_to_grid(destination.position());

        let mut warnings = Vec::new();
        for (poi, cell) in [(origin, from), (destination, to)] {
            if !self.grid.is_walkable(cell) {
                warnings.push(RoutingWarning::BlockedEndpoint {
                    poi: poi.name.clone(),
                    cell,
                });
            }
        }

        let cells = find_path(&self.grid, from, to);
        if cells.is_empty() {
            warnings.push(RoutingWarning::Unreachable {
                origin: origin.name.clone(),
                destination: destination.name.clone(),
                from,
                to,
            });
        }
        let points = self.mapper.cells_to_pixels(&cells);

        RoutePlan {
            route: Route { cells, points },
            warnings,
        }
    }
}

use thiserror::Error;

/// Reasons a walkability matrix is refused at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid: matrix has no rows")]
    Empty,

    #[error("Invalid grid: matrix has zero columns")]
    ZeroColumns,

    #[error("Invalid grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid grid: unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol {
        row: usize,
        col: usize,
        symbol: String,
    },

    #[error("Invalid grid: no walkable cell")]
    NoWalkableCell,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    InvalidGrid(#[from] GridError),

    #[error("Invalid image size: {width}x{height}")]
    InvalidImageSize { width: f64, height: f64 },

    #[error("Duplicate point of interest: {name}")]
    DuplicatePoi { name: String },

    #[error("Point of interest {name} at ({x}, {y}) lies outside the image")]
    PoiOutOfBounds { name: String, x: f64, y: f64 },

    #[error("Unknown point of interest: {name}")]
    UnknownPoi { name: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Event store error: {0}")]
    EventStore(String),

    #[error("Session actor error: {0}")]
    SessionActor(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;

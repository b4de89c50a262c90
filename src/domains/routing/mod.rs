pub mod actors;
pub mod catalog;
pub mod events;
pub mod floor_plan;
pub mod grid;
pub mod mapper;
pub mod pathfinder;
pub mod ports;
pub mod projections;
pub mod session;
pub mod types;

pub use actors::*;
pub use catalog::*;
pub use events::*;
pub use floor_plan::*;
pub use grid::*;
pub use mapper::*;
pub use pathfinder::*;
pub use ports::*;
pub use projections::*;
pub use session::*;
pub use types::*;

// Read model handed to the renderer.
use super::session::{SelectionSession, SelectionState};
use super::types::PixelPoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteProjection {
    pub session_id: String,
    pub state: SelectionState,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub polyline: Vec<PixelPoint>,
    pub cell_count: usize,
    pub unreachable: bool,
}

impl RouteProjection {
    pub fn from_session(session: &SelectionSession) -> Self {
        let route = session.current_route();
        Self {
            session_id: session.id().to_string(),
            state: session.state(),
            origin: session.current_origin().map(|p| p.name.clone()),
            destination: session.current_destination().map(|p| p.name.clone()),
            polyline: session.current_path().to_vec(),
            cell_count: route.map_or(0, |r| r.len()),
            unreachable: route.map_or(false, |r| r.is_unreachable()),
        }
    }
}

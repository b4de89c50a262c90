use crate::common::{AggregateRoot, DomainResult};
use crate::domains::logger::DynLogger;
use crate::domains::routing::events::SelectionEvent;
use crate::domains::routing::floor_plan::{FloorPlan, RoutingWarning};
use crate::domains::routing::types::{PixelPoint, Poi, Route};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    Empty,
    OriginSet,
    Complete,
}

/// What a call to [`SelectionSession::select_point`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    OriginSelected,
    /// The current origin was picked again; nothing changed.
    OriginUnchanged,
    RouteFound {
        cells: usize,
        warnings: Vec<RoutingWarning>,
    },
    /// The session is complete but the route is empty.
    NoRoute { warnings: Vec<RoutingWarning> },
    /// A pick on a complete session started a fresh selection.
    Restarted,
}

impl SelectionOutcome {
    pub fn warnings(&self) -> &[RoutingWarning] {
        match self {
            SelectionOutcome::RouteFound { warnings, .. }
            | SelectionOutcome::NoRoute { warnings } => warnings.as_slice(),
            _ => &[],
        }
    }
}

/// Two-click origin/destination selection over a shared floor plan.
///
/// Every transition is recorded as a [`SelectionEvent`]; state only changes
/// through `apply`, so a session can be rebuilt from its history.
#[derive(Clone)]
pub struct SelectionSession {
    pub(super) id: String,
    pub(super) origin: Option<Poi>,
    pub(super) destination: Option<Poi>,
    pub(super) current_path: Option<Route>,
    pub(super) version: u64,
    floor_plan: Arc<FloorPlan>,
    logger: DynLogger,
    pub(super) uncommitted_events: Vec<SelectionEvent>,
}

impl fmt::Debug for SelectionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSession")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("current_path", &self.current_path)
            .field("version", &self.version)
            .finish()
    }
}

impl SelectionSession {
    pub fn new(floor_plan: Arc<FloorPlan>, logger: DynLogger) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), floor_plan, logger)
    }

    pub fn with_id(id: String, floor_plan: Arc<FloorPlan>, logger: DynLogger) -> Self {
        let mut session = Self::blank(id.clone(), floor_plan, logger);
        session.record(SelectionEvent::SessionStarted {
            session_id: id,
            timestamp: Utc::now(),
        });
        session
    }

    /// Rebuild a session from stored events. Routes are taken from the
    /// events, not recomputed.
    pub fn from_history<I>(
        id: String,
        floor_plan: Arc<FloorPlan>,
        logger: DynLogger,
        events: I,
    ) -> DomainResult<Self>
    where
        I: IntoIterator<Item = SelectionEvent>,
    {
        let mut session = Self::blank(id, floor_plan, logger);
        session.replay(events)?;
        Ok(session)
    }

    fn blank(id: String, floor_plan: Arc<FloorPlan>, logger: DynLogger) -> Self {
        Self {
            id,
            origin: None,
            destination: None,
            current_path: None,
            version: 0,
            floor_plan,
            logger,
            uncommitted_events: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn floor_plan(&self) -> &Arc<FloorPlan> {
        &self.floor_plan
    }

    pub fn state(&self) -> SelectionState {
        match (&self.origin, &self.destination) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::OriginSet,
            (Some(_), Some(_)) => SelectionState::Complete,
        }
    }

    pub fn current_origin(&self) -> Option<&Poi> {
        self.origin.as_ref()
    }

    pub fn current_destination(&self) -> Option<&Poi> {
        self.destination.as_ref()
    }

    /// Pixel polyline of the last computed route; empty when there is none.
    pub fn current_path(&self) -> &[PixelPoint] {
        self.current_path
            .as_ref()
            .map(|r| r.points.as_slice())
            .unwrap_or(&[])
    }

    /// `None` until a destination is picked; `Some` with an empty route when
    /// the destination was unreachable.
    pub fn current_route(&self) -> Option<&Route> {
        self.current_path.as_ref()
    }

    pub fn select_point(&mut self, poi: Poi) -> SelectionOutcome {
        let session_id = self.id.clone();
        let timestamp = Utc::now();

        match (self.state(), self.origin.clone()) {
            (SelectionState::Empty, _) => {
                self.logger.info(&format!("session {}: origin {}", session_id, poi.name));
                self.record(SelectionEvent::OriginSelected {
                    session_id,
                    origin: poi,
                    timestamp,
                });
                SelectionOutcome::OriginSelected
            }
            (SelectionState::OriginSet, Some(origin)) if origin.name == poi.name => {
                self.logger.info(&format!(
                    "session {}: {} is already the origin, ignoring",
                    session_id, poi.name
                ));
                SelectionOutcome::OriginUnchanged
            }
            (SelectionState::OriginSet, Some(origin)) => {
                let plan = self.floor_plan.route(&origin, &poi);
                for warning in &plan.warnings {
                    self.logger.warn(&format!("session {}: {}", session_id, warning));
                }
                let cells = plan.route.len();
                self.logger.info(&format!(
                    "session {}: destination {}, route of {} cells",
                    session_id, poi.name, cells
                ));
                self.record(SelectionEvent::DestinationSelected {
                    session_id,
                    destination: poi,
                    route: plan.route,
                    timestamp,
                });
                if cells == 0 {
                    SelectionOutcome::NoRoute {
                        warnings: plan.warnings,
                    }
                } else {
                    SelectionOutcome::RouteFound {
                        cells,
                        warnings: plan.warnings,
                    }
                }
            }
            // Complete (or an origin-less OriginSet, which `state` never yields).
            _ => {
                self.logger.info(&format!(
                    "session {}: restarting selection from {}",
                    session_id, poi.name
                ));
                self.record(SelectionEvent::SelectionRestarted {
                    session_id,
                    origin: poi,
                    timestamp,
                });
                SelectionOutcome::Restarted
            }
        }
    }

    fn record(&mut self, event: SelectionEvent) {
        self.apply_event(&event);
        self.uncommitted_events.push(event);
    }
}

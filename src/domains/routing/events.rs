use super::types::{Poi, Route};
use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SelectionEvent {
    SessionStarted {
        session_id: String,
        timestamp: DateTime<Utc>,
    },
    OriginSelected {
        session_id: String,
        origin: Poi,
        timestamp: DateTime<Utc>,
    },
    /// Carries the computed route so replay never re-runs the search.
    DestinationSelected {
        session_id: String,
        destination: Poi,
        route: Route,
        timestamp: DateTime<Utc>,
    },
    SelectionRestarted {
        session_id: String,
        origin: Poi,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for SelectionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SelectionEvent::SessionStarted { .. } => "SessionStarted",
            SelectionEvent::OriginSelected { .. } => "OriginSelected",
            SelectionEvent::DestinationSelected { .. } => "DestinationSelected",
            SelectionEvent::SelectionRestarted { .. } => "SelectionRestarted",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            SelectionEvent::SessionStarted { session_id, .. }
            | SelectionEvent::OriginSelected { session_id, .. }
            | SelectionEvent::DestinationSelected { session_id, .. }
            | SelectionEvent::SelectionRestarted { session_id, .. } => session_id,
        }
    }

    fn event_version(&self) -> u64 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SelectionEvent::SessionStarted { timestamp, .. }
            | SelectionEvent::OriginSelected { timestamp, .. }
            | SelectionEvent::DestinationSelected { timestamp, .. }
            | SelectionEvent::SelectionRestarted { timestamp, .. } => *timestamp,
        }
    }
}

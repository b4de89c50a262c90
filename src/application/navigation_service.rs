// Navigation service: floor plan + selection session + optional journal
use crate::common::{
    AggregateRoot, ApplicationError, ApplicationResult, DomainError, EventEnvelope, EventMetadata, EventStore,
};
use crate::domains::logger::DynLogger;
use crate::domains::routing::{
    FloorPlan, FloorPlanSource, Poi, RouteProjection, SelectionEvent, SelectionOutcome, SelectionSession,
};
use std::sync::Arc;

pub const AGGREGATE_TYPE: &str = "SelectionSession";

pub struct NavigationService {
    floor_plan: Arc<FloorPlan>,
    session: SelectionSession,
    logger: DynLogger,
    journal: Option<Arc<dyn EventStore>>,
}

impl NavigationService {
    pub fn new(floor_plan: Arc<FloorPlan>, logger: DynLogger, journal: Option<Arc<dyn EventStore>>) -> Self {
        let session = SelectionSession::new(floor_plan.clone(), logger.clone());
        Self {
            floor_plan,
            session,
            logger,
            journal,
        }
    }

    /// Load and validate a floor plan from `source`, then start a fresh session on it.
    pub fn load(
        source: &dyn FloorPlanSource,
        name: &str,
        logger: DynLogger,
        journal: Option<Arc<dyn EventStore>>,
    ) -> ApplicationResult<Self> {
        let document = source.load_document(name)?;
        let floor_plan = FloorPlan::from_document(document)?;
        let (rows, cols) = floor_plan.grid().dimensions();
        logger.info(&format!(
            "loaded floor plan {}: {}x{} grid, {} points",
            name,
            rows,
            cols,
            floor_plan.catalog().len()
        ));
        Ok(Self::new(Arc::new(floor_plan), logger, journal))
    }

    /// Rebuild a session from the journal.
    pub async fn restore(
        floor_plan: Arc<FloorPlan>,
        logger: DynLogger,
        journal: Arc<dyn EventStore>,
        session_id: &str,
    ) -> ApplicationResult<Self> {
        let envelopes = journal
            .load_events(session_id, 0)
            .await
            .map_err(ApplicationError::EventStore)?;
        let events = envelopes
            .iter()
            .map(|e| e.decode::<SelectionEvent>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(DomainError::from)?;
        logger.info(&format!("restoring session {} from {} events", session_id, events.len()));
        let session =
            SelectionSession::from_history(session_id.to_string(), floor_plan.clone(), logger.clone(), events)?;
        Ok(Self {
            floor_plan,
            session,
            logger,
            journal: Some(journal),
        })
    }

    pub fn floor_plan(&self) -> &Arc<FloorPlan> {
        &self.floor_plan
    }

    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    pub fn search(&self, query: &str) -> Vec<&Poi> {
        self.floor_plan.catalog().search(query)
    }

    pub fn projection(&self) -> RouteProjection {
        RouteProjection::from_session(&self.session)
    }

    /// Select a point by name and journal the resulting events.
    pub async fn select(&mut self, name: &str) -> ApplicationResult<SelectionOutcome> {
        let poi = self.floor_plan.catalog().require(name)?.clone();
        let outcome = self.session.select_point(poi);
        self.commit().await?;
        Ok(outcome)
    }

    /// Flush uncommitted session events to the journal, if one is attached.
    pub async fn commit(&mut self) -> ApplicationResult<()> {
        let pending = self.session.uncommitted_events().len() as u64;
        if pending == 0 {
            return Ok(());
        }
        let Some(journal) = self.journal.clone() else {
            self.session.mark_events_as_committed();
            return Ok(());
        };

        let expected_version = self.session.version() - pending;
        let envelopes = self
            .session
            .uncommitted_events()
            .iter()
            .map(|e| EventEnvelope::new(e, AGGREGATE_TYPE, EventMetadata::from_source("floorplan-nav")))
            .collect::<Result<Vec<_>, _>>()
            .map_err(DomainError::from)?;

        if let Err(e) = journal
            .append_events(self.session.id(), expected_version, envelopes)
            .await
        {
            self.logger.error(&format!("journal append failed: {}", e));
            return Err(ApplicationError::EventStore(e));
        }
        self.session.mark_events_as_committed();
        Ok(())
    }
}

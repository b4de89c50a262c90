use super::SelectionSession;
use crate::common::{AggregateRoot, DomainResult};
use crate::domains::routing::events::SelectionEvent;

impl SelectionSession {
	pub(super) fn apply_event(&mut self, event: &SelectionEvent) {
		match event {
			SelectionEvent::SessionStarted { .. } => {}
			SelectionEvent::OriginSelected { origin, .. } | SelectionEvent::SelectionRestarted { origin, .. } => {
				self.origin = Some(origin.clone());
				self.destination = None;
				self.current_path = None;
			}
			SelectionEvent::DestinationSelected { destination, route, .. } => {
				self.destination = Some(destination.clone());
				self.current_path = Some(route.clone());
			}
		}
		self.version += 1;
	}
}

impl AggregateRoot for SelectionSession {
	type Event = SelectionEvent;

	fn aggregate_id(&self) -> &str { &self.id }
	fn version(&self) -> u64 { self.version }
	fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
		self.apply_event(event);
		Ok(())
	}
	fn uncommitted_events(&self) -> &[Self::Event] { &self.uncommitted_events }
	fn mark_events_as_committed(&mut self) { self.uncommitted_events.clear(); }
}

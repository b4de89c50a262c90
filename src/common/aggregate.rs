use crate::common::{DomainEvent, DomainResult};
use serde::{Deserialize, Serialize};

pub trait AggregateRoot: Send + Sync + Clone {
    type Event: DomainEvent + Serialize + for<'de> Deserialize<'de>;

    fn aggregate_id(&self) -> &str;
    fn version(&self) -> u64;

    /// Apply an event to update the aggregate state
    fn apply(&mut self, event: &Self::Event) -> DomainResult<()>;

    fn uncommitted_events(&self) -> &[Self::Event];

    fn mark_events_as_committed(&mut self);

    /// Hand over pending events and clear them in one step.
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event> {
        let events = self.uncommitted_events().to_vec();
        self.mark_events_as_committed();
        events
    }

    /// Replay stored history on top of the current state. Replayed events are
    /// already committed and are not recorded again.
    fn replay<I>(&mut self, events: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = Self::Event>,
    {
        for event in events {
            self.apply(&event)?;
        }
        Ok(())
    }
}

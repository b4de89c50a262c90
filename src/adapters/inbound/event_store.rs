use crate::common::{EventEnvelope, EventStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory selection journal, keyed by session id.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    streams: RwLock<HashMap<String, Vec<EventEnvelope>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn session_count(&self) -> usize {
        self.streams.read().await.len()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append_events(
        &self,
        aggregate_id: &str,
        expected_version: u64,
        events: Vec<EventEnvelope>,
    ) -> Result<(), String> {
        let mut streams = self.streams.write().await;
        let stream = streams.entry(aggregate_id.to_string()).or_default();

        let current = stream.len() as u64;
        if current != expected_version {
            return Err(format!(
                "Version mismatch for {}: expected {}, stream is at {}",
                aggregate_id, expected_version, current
            ));
        }
        stream.extend(events);
        Ok(())
    }

    async fn load_events(
        &self,
        aggregate_id: &str,
        from_version: u64,
    ) -> Result<Vec<EventEnvelope>, String> {
        let streams = self.streams.read().await;
        Ok(streams
            .get(aggregate_id)
            .map(|s| s.iter().skip(from_version as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn load_events_by_type(
        &self,
        event_type: &str,
        from_timestamp: Option<DateTime<Utc>>,
    ) -> Result<Vec<EventEnvelope>, String> {
        let streams = self.streams.read().await;
        let mut matching: Vec<EventEnvelope> = streams
            .values()
            .flatten()
            .filter(|e| e.event_type == event_type)
            .filter(|e| from_timestamp.map_or(true, |ts| e.occurred_at >= ts))
            .cloned()
            .collect();
        matching.sort_by_key(|e| e.occurred_at);
        Ok(matching)
    }
}

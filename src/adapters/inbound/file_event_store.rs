use crate::common::{EventEnvelope, EventStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Selection journal on disk, one JSON Lines file per session.
///
/// Version checks are skipped: a session is owned by a single writer.
pub struct FileEventStore {
    base_path: PathBuf,
}

impl FileEventStore {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn stream_path(&self, session_id: &str) -> PathBuf {
        self.base_path.join(format!("{}.jsonl", session_id))
    }

    async fn ensure_base_dir(&self) -> Result<(), String> {
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| format!("Failed to create journal directory {}: {}", self.base_path.display(), e))
    }

    async fn read_stream(path: &Path) -> Result<Vec<EventEnvelope>, String> {
        let file = File::open(path)
            .await
            .map_err(|e| format!("Failed to open journal {}: {}", path.display(), e))?;
        let mut lines = BufReader::new(file).lines();
        let mut events = Vec::new();
        let mut line_number = 0usize;

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| format!("Failed to read line: {}", e))?
        {
            line_number += 1;
            if line.trim().is_empty() {
                continue;
            }
            let event: EventEnvelope = serde_json::from_str(&line).map_err(|e| {
                format!("Failed to deserialize {} line {}: {}", path.display(), line_number, e)
            })?;
            events.push(event);
        }
        Ok(events)
    }
}

#[async_trait]
impl EventStore for FileEventStore {
    async fn append_events(
        &self,
        aggregate_id: &str,
        _expected_version: u64,
        events: Vec<EventEnvelope>,
    ) -> Result<(), String> {
        self.ensure_base_dir().await?;
        let path = self.stream_path(aggregate_id);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| format!("Failed to open journal {}: {}", path.display(), e))?;

        let mut buffer = String::new();
        for event in &events {
            let line = serde_json::to_string(event)
                .map_err(|e| format!("Failed to serialize event: {}", e))?;
            buffer.push_str(&line);
            buffer.push('\n');
        }
        file.write_all(buffer.as_bytes())
            .await
            .map_err(|e| format!("Failed to write events: {}", e))?;
        file.flush()
            .await
            .map_err(|e| format!("Failed to flush journal: {}", e))
    }

    async fn load_events(
        &self,
        aggregate_id: &str,
        from_version: u64,
    ) -> Result<Vec<EventEnvelope>, String> {
        let path = self.stream_path(aggregate_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let events = Self::read_stream(&path).await?;
        Ok(events.into_iter().skip(from_version as usize).collect())
    }

    async fn load_events_by_type(
        &self,
        event_type: &str,
        from_timestamp: Option<DateTime<Utc>>,
    ) -> Result<Vec<EventEnvelope>, String> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }
        let mut dir = tokio::fs::read_dir(&self.base_path)
            .await
            .map_err(|e| format!("Failed to read journal directory: {}", e))?;

        let mut matching = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| format!("Failed to read directory entry: {}", e))?
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("jsonl") {
                continue;
            }
            matching.extend(
                Self::read_stream(&path)
                    .await?
                    .into_iter()
                    .filter(|e| e.event_type == event_type)
                    .filter(|e| from_timestamp.map_or(true, |ts| e.occurred_at >= ts)),
            );
        }
        matching.sort_by_key(|e| e.occurred_at);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EventMetadata;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn envelope(session_id: &str, event_type: &str) -> EventEnvelope {
        EventEnvelope {
            event_id: Uuid::new_v4(),
            aggregate_id: session_id.to_string(),
            aggregate_type: "SelectionSession".to_string(),
            event_type: event_type.to_string(),
            event_version: 1,
            event_data: serde_json::json!({"name": "Room A"}),
            metadata: EventMetadata::from_source("test"),
            occurred_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_file_event_store_append_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileEventStore::new(temp_dir.path().join("journal"));

        let first = envelope("session-1", "OriginSelected");
        let second = envelope("session-1", "DestinationSelected");
        store
            .append_events("session-1", 0, vec![first.clone(), second.clone()])
            .await
            .unwrap();

        let loaded = store.load_events("session-1", 0).await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].event_id, first.event_id);

        let tail = store.load_events("session-1", 1).await.unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].event_id, second.event_id);

        let by_type = store.load_events_by_type("DestinationSelected", None).await.unwrap();
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].event_id, second.event_id);
    }

    #[tokio::test]
    async fn test_missing_stream_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileEventStore::new(temp_dir.path());
        assert!(store.load_events("nobody", 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_by_type_does_not_create_journal_dir() {
        let temp_dir = TempDir::new().unwrap();
        let journal = temp_dir.path().join("journal");
        let store = FileEventStore::new(&journal);

        let found = store.load_events_by_type("OriginSelected", None).await.unwrap();
        assert!(found.is_empty());
        assert!(!journal.exists());
    }
}

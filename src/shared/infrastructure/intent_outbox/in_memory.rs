use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64)>>,
    is_offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn rows(&self) -> Vec<OutboxRow> {
        self.rows.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Transient("Outbox offline".into()));
        }
        let key = (row.stream_id.clone(), row.stream_version);
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        tracing::debug!(
            topic = %row.topic,
            event_type = %row.event_type,
            stream_id = %row.stream_id,
            stream_version = row.stream_version,
            "outbox row enqueued"
        );
        self.rows.lock().await.push(row);
        Ok(())
    }
}

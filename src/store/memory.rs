use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{
    error::{Error, Result},
    types::MessageRecord,
    MessageStore,
};

/// In-memory message store with the same observable semantics as
/// [`PgStore`](crate::store::PgStore)
///
/// Backs handler and seeder tests that should not touch a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<MessageRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn list_messages(&self) -> Result<Vec<MessageRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn messages_in_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<MessageRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.conversation_id.as_deref() == Some(conversation_id))
            .cloned()
            .collect())
    }

    async fn find_message(&self, id: &str) -> Result<Option<MessageRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn insert_message(&self, record: &MessageRecord) -> Result<()> {
        let id = record.id().ok_or(Error::MissingId)?;

        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == Some(id)) {
            return Err(Error::DuplicateId(id.to_string()));
        }

        records.push(record.clone());
        Ok(())
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<()> {
        if status.is_empty() {
            return Err(Error::MissingStatus);
        }

        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(record) => {
                record.status = Some(status.to_string());
                Ok(())
            }
            None => Err(Error::NotFound(id.to_string())),
        }
    }
}

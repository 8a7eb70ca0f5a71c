use deadpool_postgres::Pool;
use serde_json::Value;
use tokio_postgres::Row;

use crate::store::{
    error::{Error, Result},
    types::MessageRecord,
};

/// Decode the JSONB document column back into a record
pub(crate) fn parse_record_row(row: &Row) -> Result<MessageRecord> {
    let doc: Value = row.get("doc");
    serde_json::from_value(doc)
        .map_err(|e| Error::Serialization(format!("invalid document in store: {}", e)))
}

/// Retrieve every document in the collection
///
/// No filtering, no pagination. Ordering is whatever the store yields for
/// an unordered scan.
pub async fn list_messages(pool: &Pool) -> Result<Vec<MessageRecord>> {
    let conn = pool.get().await?;

    let rows = conn.query("SELECT doc FROM messages", &[]).await?;

    rows.iter().map(parse_record_row).collect()
}

/// Retrieve all documents whose `conversationId` matches exactly
///
/// An unknown conversation yields an empty list, not an error.
pub async fn messages_in_conversation(
    pool: &Pool,
    conversation_id: &str,
) -> Result<Vec<MessageRecord>> {
    let conn = pool.get().await?;

    let rows = conn
        .query(
            "SELECT doc FROM messages WHERE doc->>'conversationId' = $1",
            &[&conversation_id],
        )
        .await?;

    rows.iter().map(parse_record_row).collect()
}

/// Look up a single document by id
pub async fn find_message(pool: &Pool, id: &str) -> Result<Option<MessageRecord>> {
    let conn = pool.get().await?;

    let row = conn
        .query_opt("SELECT doc FROM messages WHERE id = $1", &[&id])
        .await?;

    row.as_ref().map(parse_record_row).transpose()
}

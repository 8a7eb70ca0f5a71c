use deadpool_postgres::Pool;
use tokio_postgres::error::SqlState;

use crate::store::{
    error::{Error, Result},
    types::MessageRecord,
};

/// Insert a new message document
///
/// # Behavior
///
/// 1. A record without an id is rejected before any store access
/// 2. An advisory lookup rejects a known id with [`Error::DuplicateId`]
/// 3. The primary key on `id` closes the race between the lookup and the
///    insert: a concurrent duplicate surfaces as the same error
///
/// # Errors
///
/// * `Error::MissingId` - record has no id
/// * `Error::DuplicateId` - a document with this id already exists
/// * `Error::Database` / `Error::Pool` - store failures
pub async fn insert_message(pool: &Pool, record: &MessageRecord) -> Result<()> {
    let id = record.id().ok_or(Error::MissingId)?;

    let conn = pool.get().await?;

    let existing = conn
        .query_opt("SELECT 1 FROM messages WHERE id = $1", &[&id])
        .await?;
    if existing.is_some() {
        return Err(Error::DuplicateId(id.to_string()));
    }

    let doc = serde_json::to_value(record)?;

    let result = conn
        .execute(
            "INSERT INTO messages (id, doc) VALUES ($1, $2)",
            &[&id, &doc],
        )
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            if let Some(db_error) = e.as_db_error() {
                if db_error.code() == &SqlState::UNIQUE_VIOLATION {
                    return Err(Error::DuplicateId(id.to_string()));
                }
            }
            Err(e.into())
        }
    }
}

/// Apply a partial update to the `status` field of one document
///
/// Every other field is left untouched.
///
/// # Errors
///
/// * `Error::MissingStatus` - empty status value
/// * `Error::NotFound` - no document matches `id`
/// * `Error::Database` / `Error::Pool` - store failures
pub async fn update_status(pool: &Pool, id: &str, status: &str) -> Result<()> {
    if status.is_empty() {
        return Err(Error::MissingStatus);
    }

    let conn = pool.get().await?;

    let updated = conn
        .execute(
            "UPDATE messages SET doc = jsonb_set(doc, '{status}', to_jsonb($2::text)) \
             WHERE id = $1",
            &[&id, &status],
        )
        .await?;

    if updated == 0 {
        return Err(Error::NotFound(id.to_string()));
    }

    Ok(())
}

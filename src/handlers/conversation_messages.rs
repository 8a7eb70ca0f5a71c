// GET /messages/conversation/{conversationId} handler

use std::convert::Infallible;
use std::sync::Arc;

use tracing::error;
use warp::http::StatusCode;

use crate::models::ErrorBody;
use crate::store::MessageStore;

pub async fn conversation_messages_handler(
    conversation_id: String,
    store: Arc<dyn MessageStore>,
) -> Result<impl warp::Reply, Infallible> {
    // An unknown conversation is an empty array, not a 404
    match store.messages_in_conversation(&conversation_id).await {
        Ok(messages) => Ok(warp::reply::with_status(
            warp::reply::json(&messages),
            StatusCode::OK,
        )),
        Err(e) => {
            error!(
                "listing messages for conversation {} failed: {}",
                conversation_id, e
            );
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorBody::new("Failed to fetch messages")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

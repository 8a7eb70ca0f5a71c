// GET /messages handler

use std::convert::Infallible;
use std::sync::Arc;

use tracing::error;
use warp::http::StatusCode;

use crate::models::ErrorBody;
use crate::store::MessageStore;

pub async fn list_messages_handler(
    store: Arc<dyn MessageStore>,
) -> Result<impl warp::Reply, Infallible> {
    match store.list_messages().await {
        Ok(messages) => Ok(warp::reply::with_status(
            warp::reply::json(&messages),
            StatusCode::OK,
        )),
        Err(e) => {
            error!("listing messages failed: {}", e);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorBody::new("Failed to fetch messages")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

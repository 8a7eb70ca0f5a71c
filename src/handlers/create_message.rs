// POST /messages handler

use std::convert::Infallible;
use std::sync::Arc;

use tracing::error;
use warp::http::StatusCode;

use crate::models::{Ack, ErrorBody};
use crate::store::{Error, MessageRecord, MessageStore};

pub async fn create_message_handler(
    record: MessageRecord,
    store: Arc<dyn MessageStore>,
) -> Result<impl warp::Reply, Infallible> {
    match store.insert_message(&record).await {
        Ok(()) => Ok(warp::reply::with_status(
            warp::reply::json(&Ack::new("Message saved successfully")),
            StatusCode::CREATED,
        )),
        Err(Error::MissingId) => Ok(warp::reply::with_status(
            warp::reply::json(&ErrorBody::new("Message ID is required")),
            StatusCode::BAD_REQUEST,
        )),
        Err(Error::DuplicateId(_)) => Ok(warp::reply::with_status(
            warp::reply::json(&ErrorBody::new("Message ID already exists")),
            StatusCode::CONFLICT,
        )),
        Err(e) => {
            error!("saving message failed: {}", e);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorBody::new("Failed to save message")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

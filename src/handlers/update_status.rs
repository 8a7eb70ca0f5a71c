// PUT /messages/status/{id} handler

use std::convert::Infallible;
use std::sync::Arc;

use tracing::error;
use warp::http::StatusCode;

use crate::models::{Ack, ErrorBody, StatusUpdate};
use crate::store::{Error, MessageStore};

pub async fn update_status_handler(
    id: String,
    body: StatusUpdate,
    store: Arc<dyn MessageStore>,
) -> Result<impl warp::Reply, Infallible> {
    // An absent field and an empty value are the same client error
    let status = body.status.unwrap_or_default();

    match store.update_status(&id, &status).await {
        Ok(()) => Ok(warp::reply::with_status(
            warp::reply::json(&Ack::new("Status updated successfully")),
            StatusCode::OK,
        )),
        Err(Error::MissingStatus) => Ok(warp::reply::with_status(
            warp::reply::json(&ErrorBody::new("Status is required in the request body")),
            StatusCode::BAD_REQUEST,
        )),
        Err(Error::NotFound(_)) => Ok(warp::reply::with_status(
            warp::reply::json(&ErrorBody::new("Message not found")),
            StatusCode::NOT_FOUND,
        )),
        Err(e) => {
            error!("updating status for {} failed: {}", id, e);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorBody::new("Failed to update status")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

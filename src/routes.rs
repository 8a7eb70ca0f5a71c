// Route definitions wiring handlers to the injected store

use std::sync::Arc;

use warp::Filter;

use crate::handlers;
use crate::store::MessageStore;

pub fn configure_routes(
    store: Arc<dyn MessageStore>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let store_filter = warp::any().map(move || store.clone());

    // GET /messages
    let list_messages = warp::path("messages")
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handlers::list_messages_handler);

    // GET /messages/conversation/{conversationId}
    let conversation_messages = warp::path("messages")
        .and(warp::path("conversation"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handlers::conversation_messages_handler);

    // POST /messages
    let create_message = warp::path("messages")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(handlers::create_message_handler);

    // PUT /messages/status/{id}
    let update_status = warp::path("messages")
        .and(warp::path("status"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::put())
        .and(warp::body::json())
        .and(store_filter)
        .and_then(handlers::update_status_handler);

    // The frontend is hosted separately and talks to the API cross-origin
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PUT"]);

    // Combine routes
    list_messages
        .or(conversation_messages)
        .or(create_message)
        .or(update_status)
        .with(cors)
}

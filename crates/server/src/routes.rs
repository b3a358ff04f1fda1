pub mod records;

use std::sync::Arc;

use axum::{routing::get, Router};
use service::{EntityStore, Record};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Store handle shared by every handler of one service.
pub type SharedStore<R> = Arc<dyn EntityStore<R>>;

/// Build the router for one record type:
/// `GET /{resource}`, `POST /{resource}` and `GET /{resource}/:id`.
pub fn build_router<R: Record>(store: SharedStore<R>) -> Router {
    let collection = format!("/{}", R::RESOURCE);
    let item = format!("/{}/:id", R::RESOURCE);

    Router::new()
        .route(&collection, get(records::list::<R>).post(records::create::<R>))
        .route(&item, get(records::get_one::<R>))
        .with_state(store)
        // handler panics become 500s instead of dropping the connection
        .layer(CatchPanicLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

use crate::handler::health::health_handler;
use crate::tracespan::{SpanForwarder, TraceSpanState, tracespan_routes};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Build the HTTP router (health + tracespan ingestion).
pub fn main_router(forwarder: Arc<SpanForwarder>) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    Router::new()
        .merge(v1_health_router)
        .merge(tracespan_routes(TraceSpanState { forwarder }))
}

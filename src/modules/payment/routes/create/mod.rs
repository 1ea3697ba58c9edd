mod handler;
mod service;
mod types;


use crate::types::Context;
use axum::Router;
use std::sync::Arc;

/// Payments are created on any path and method.
pub fn get_router() -> Router<Arc<Context>> {
    Router::new().fallback(handler::handler)
}

pub mod payment;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().merge(payment::routes::get_router())
}

use super::{service::service, types::response};
use crate::types::Context;
use axum::{body::Body, extract::State};
use serde_json::Value;
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, body: Body) -> response::Response {
    let body = axum::body::to_bytes(body, usize::MAX).await.map_err(|err| {
        tracing::error!("Yookassa Error: failed to read request body: {}", err);
        response::Error::ServerError
    })?;

    let json = serde_json::from_slice::<Value>(body.as_ref()).map_err(|err| {
        tracing::error!("Yookassa Error: invalid request body: {}", err);
        response::Error::ServerError
    })?;

    service(ctx, json).await
}

use super::types::{request, response};
use crate::{modules::payment::service as processor, types::Context};
use serde_json::Value;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, json: Value) -> response::Response {
    let payload = request::Payload::try_from(json).map_err(|err| match err {
        request::Error::MissingRequiredFields => response::Error::MissingRequiredFields,
        request::Error::NullBody => {
            tracing::error!("Yookassa Error: request body is null");
            response::Error::ServerError
        }
    })?;

    let credentials = ctx
        .payment
        .credentials()
        .ok_or(response::Error::MissingApiCredentials)?;

    processor::create_payment(&ctx.payment, &credentials, &payload.into())
        .await
        .map_err(|err| match err {
            processor::Error::Rejected { status, body } => response::Error::Upstream(status, body),
            processor::Error::UnexpectedError => response::Error::ServerError,
        })
        .map(response::Success::PaymentCreated)
}

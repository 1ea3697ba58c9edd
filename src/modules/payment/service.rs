use super::model::CreatePaymentPayload;
use crate::types::{Credentials, PaymentContext};
use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

pub static IDEMPOTENCE_KEY: &str = "Idempotence-Key";

#[derive(Debug)]
pub enum Error {
    Rejected { status: StatusCode, body: Value },
    UnexpectedError,
}

fn build_headers(credentials: &Credentials) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    let auth_header = HeaderValue::from_str(&credentials.basic_auth()).map_err(|_| {
        tracing::error!("Failed to build authorization header from credentials");
        Error::UnexpectedError
    })?;
    headers.insert(AUTHORIZATION, auth_header);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let idempotence_key = Uuid::new_v4().to_string();
    headers.insert(
        IDEMPOTENCE_KEY,
        HeaderValue::from_str(&idempotence_key).map_err(|err| {
            tracing::error!("Failed to build idempotence key header: {}", err);
            Error::UnexpectedError
        })?,
    );

    Ok(headers)
}

/// Creates a payment and returns the processor body untouched.
///
/// The body is only checked to be valid JSON. Non-2xx replies come back as
/// [`Error::Rejected`] carrying the decoded body.
pub async fn create_payment(
    ctx: &PaymentContext,
    credentials: &Credentials,
    payload: &CreatePaymentPayload,
) -> Result<Bytes, Error> {
    let headers = build_headers(credentials)?;

    let res = ctx
        .client
        .post(ctx.api_endpoint.as_str())
        .headers(headers)
        .json(payload)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to create payment: {}", err);
            Error::UnexpectedError
        })?;

    let status = res.status();

    let data = res.bytes().await.map_err(|err| {
        tracing::error!("Failed to read create payment response: {:?}", err);
        Error::UnexpectedError
    })?;

    let body = serde_json::from_slice::<Value>(data.as_ref()).map_err(|err| {
        tracing::error!(
            "Failed to decode create payment response ({}): {:?}",
            status,
            err
        );
        Error::UnexpectedError
    })?;

    if !status.is_success() {
        tracing::error!("Payment was rejected ({}): {}", status, body);
        return Err(Error::Rejected { status, body });
    }

    tracing::debug!("Response received from yookassa server: {}", body);

    Ok(data)
}

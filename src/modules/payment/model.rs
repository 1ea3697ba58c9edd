use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct Amount {
    pub value: Value,
    pub currency: Value,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Confirmation {
    Redirect { return_url: Value },
}

/// Body of `POST /v3/payments`.
#[derive(Serialize)]
pub struct CreatePaymentPayload {
    pub amount: Amount,
    pub capture: bool,
    pub confirmation: Confirmation,
    pub description: Value,
}

pub mod request {
    use crate::modules::payment::model::{Amount, Confirmation, CreatePaymentPayload};
    use serde_json::Value;

    /// Mirrors JavaScript truthiness, which callers of this endpoint rely on.
    pub fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub struct Payload {
        pub amount: Value,
        pub currency: Value,
        pub description: Value,
        pub return_url: Value,
    }

    pub enum Error {
        MissingRequiredFields,
        NullBody,
    }

    impl TryFrom<Value> for Payload {
        type Error = Error;

        fn try_from(json: Value) -> Result<Self, Self::Error> {
            if json.is_null() {
                return Err(Error::NullBody);
            }

            let field = |name: &str| {
                json.get(name)
                    .filter(|value| is_truthy(value))
                    .cloned()
                    .ok_or(Error::MissingRequiredFields)
            };

            Ok(Self {
                amount: field("amount")?,
                currency: field("currency")?,
                description: field("description")?,
                return_url: field("return_url")?,
            })
        }
    }

    impl From<Payload> for CreatePaymentPayload {
        fn from(payload: Payload) -> Self {
            Self {
                amount: Amount {
                    value: payload.amount,
                    currency: payload.currency,
                },
                capture: true,
                confirmation: Confirmation::Redirect {
                    return_url: payload.return_url,
                },
                description: payload.description,
            }
        }
    }
}

pub mod response {
    use axum::{
        body::{Body, Bytes},
        extract::Json,
        http::{header, StatusCode},
        response::IntoResponse,
    };
    use serde_json::{json, Value};

    pub enum Success {
        PaymentCreated(Bytes),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaymentCreated(body) => (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/json")],
                    Body::from(body),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingRequiredFields,
        MissingApiCredentials,
        Upstream(StatusCode, Value),
        ServerError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingRequiredFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Missing required fields" })),
                )
                    .into_response(),
                Self::MissingApiCredentials => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Missing API credentials" })),
                )
                    .into_response(),
                Self::Upstream(status, body) => {
                    (status, Json(json!({ "error": body }))).into_response()
                }
                Self::ServerError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::{is_truthy, Error, Payload};
    use serde_json::json;

    #[test]
    fn truthiness_follows_javascript_rules() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{} should be falsy", value);
        }
        for value in [json!(true), json!(1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{} should be truthy", value);
        }
    }

    #[test]
    fn payload_requires_every_field() {
        let complete = json!({
            "amount": "10.00",
            "currency": "RUB",
            "description": "Coffee",
            "return_url": "https://shop.example/done"
        });
        assert!(Payload::try_from(complete.clone()).is_ok());

        for field in ["amount", "currency", "description", "return_url"] {
            let mut missing = complete.clone();
            missing.as_object_mut().unwrap().remove(field);
            assert!(matches!(
                Payload::try_from(missing),
                Err(Error::MissingRequiredFields)
            ));

            let mut empty = complete.clone();
            empty[field] = json!("");
            assert!(matches!(
                Payload::try_from(empty),
                Err(Error::MissingRequiredFields)
            ));
        }
    }

    #[test]
    fn non_object_bodies() {
        assert!(matches!(Payload::try_from(json!(null)), Err(Error::NullBody)));
        assert!(matches!(
            Payload::try_from(json!([1, 2])),
            Err(Error::MissingRequiredFields)
        ));
        assert!(matches!(
            Payload::try_from(json!("amount")),
            Err(Error::MissingRequiredFields)
        ));
    }
}

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::env;
use std::fmt;

pub const DEFAULT_PAYMENT_API_ENDPOINT: &str = "https://api.yookassa.ru/v3/payments";

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct Credentials {
    pub shop_id: String,
    pub api_key: String,
}

impl Credentials {
    pub fn basic_auth(&self) -> String {
        let encoded = BASE64_STANDARD.encode(format!("{}:{}", self.shop_id, self.api_key));
        format!("Basic {}", encoded)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("shop_id", &self.shop_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct PaymentContext {
    pub api_endpoint: String,
    pub shop_id: Option<String>,
    pub api_key: Option<String>,
    pub client: reqwest::Client,
}

impl PaymentContext {
    /// Both values must be present and non-empty.
    pub fn credentials(&self) -> Option<Credentials> {
        let shop_id = self.shop_id.as_deref().filter(|v| !v.is_empty())?;
        let api_key = self.api_key.as_deref().filter(|v| !v.is_empty())?;

        Some(Credentials {
            shop_id: shop_id.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub payment: PaymentContext,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub api_endpoint: String,
    pub shop_id: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub payment: PaymentConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let payment_api_endpoint = env::var("YOOKASSA_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_PAYMENT_API_ENDPOINT.to_string());
        // missing credentials are reported per request, not at startup
        let payment_shop_id = env::var("YOOKASSA_SHOP_ID").ok();
        let payment_api_key = env::var("YOOKASSA_API_KEY").ok();

        if payment_shop_id.is_none() || payment_api_key.is_none() {
            tracing::warn!("YooKassa credentials are not fully configured");
        }

        return Self {
            app: AppConfig { host, port },
            payment: PaymentConfig {
                api_endpoint: payment_api_endpoint,
                shop_id: payment_shop_id,
                api_key: payment_api_key,
            },
        };
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            payment: PaymentContext {
                api_endpoint: self.payment.api_endpoint,
                shop_id: self.payment.shop_id,
                api_key: self.payment.api_key,
                client: reqwest::Client::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment_context(shop_id: Option<&str>, api_key: Option<&str>) -> PaymentContext {
        PaymentContext {
            api_endpoint: DEFAULT_PAYMENT_API_ENDPOINT.to_string(),
            shop_id: shop_id.map(String::from),
            api_key: api_key.map(String::from),
            client: reqwest::Client::new(),
        }
    }

    #[test]
    fn credentials_require_both_values() {
        assert!(payment_context(Some("shop"), Some("key")).credentials().is_some());
        assert!(payment_context(None, Some("key")).credentials().is_none());
        assert!(payment_context(Some("shop"), None).credentials().is_none());
        assert!(payment_context(Some(""), Some("key")).credentials().is_none());
        assert!(payment_context(Some("shop"), Some("")).credentials().is_none());
    }

    #[test]
    fn basic_auth_encodes_shop_id_and_key() {
        let credentials = Credentials {
            shop_id: "123456".to_string(),
            api_key: "test_secret".to_string(),
        };

        assert_eq!(
            credentials.basic_auth(),
            format!("Basic {}", BASE64_STANDARD.encode("123456:test_secret"))
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let credentials = Credentials {
            shop_id: "123456".to_string(),
            api_key: "live_very_secret".to_string(),
        };

        let printed = format!("{:?}", credentials);
        assert!(printed.contains("123456"));
        assert!(!printed.contains("live_very_secret"));
    }
}

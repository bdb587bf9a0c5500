//! HTTP client for the payment gateway API

use crate::config::{ClientConfig, Credentials};
use crate::{PaygateError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Authenticated client for the gateway's REST API.
///
/// Holds only static configuration after construction, so a single
/// instance (or its clones) can be shared freely between callers.
/// Every call is exactly one request: nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    /// Underlying HTTP client
    client: Client,
    /// Base URL every endpoint path is joined onto
    base_url: String,
    /// Basic auth credentials
    credentials: Credentials,
}

impl GatewayClient {
    /// Create a new gateway client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(timeout) = config.connect_timeout {
            client_builder = client_builder.connect_timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| PaygateError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            credentials: config.credentials,
        })
    }

    /// Create a client from `RAZORPAY_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Get the base URL of this client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(
            self.credentials.key_id(),
            Some(self.credentials.key_secret()),
        )
    }

    pub(crate) async fn get_json<Res>(&self, path: &str) -> Result<Res>
    where
        Res: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<Req, Res>(&self, path: &str, body: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Classify a response: status >= 300 becomes an API error carrying the
    /// raw body, anything else is decoded as JSON.
    async fn decode<Res>(response: Response) -> Result<Res>
    where
        Res: DeserializeOwned,
    {
        let status = response.status();
        if status.as_u16() >= 300 {
            let body = response.bytes().await?;
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(status = status.as_u16(), "gateway rejected request");
            return Err(PaygateError::api(status.as_u16(), body));
        }

        Ok(response.json::<Res>().await?)
    }
}

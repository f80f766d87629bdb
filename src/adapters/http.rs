use crate::core::guest_validator::{validate_create, validate_update};
use crate::core::health::HealthReport;
use crate::domain::ports::{ConfigProvider, GuestGateway};
use crate::domain::violation::{FieldViolation, ValidationError};
use crate::utils::error::{GuestError, Result};
use crate::utils::validation::is_blank;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// reqwest-backed client for the guest backend.
///
/// Payloads are validated locally first; an invalid payload never leaves the
/// process.
pub struct GuestApiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> GuestApiClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Appends `segments` to the base URL; each one is percent-encoded, so a
    /// `/`, `?` or `#` inside a segment stays inside it.
    fn url<I, S>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = self.config.base_url();
        let invalid = |reason: String| GuestError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: base.to_string(),
            reason,
        };

        let mut url = Url::parse(base).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response> {
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        tracing::debug!("API response status: {}", response.status());

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(GuestError::HttpStatus { status, body })
        }
    }

    async fn send_json<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, url, body).await?;
        Ok(response.json().await?)
    }

    /// Proxies a GET to any API path and returns the JSON body.
    ///
    /// The path is split on `/`; every piece is encoded as its own segment.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.url(path.split('/').filter(|segment| !segment.is_empty()))?;
        self.send_json::<_, ()>(Method::GET, url, None).await
    }
}

/// A guest id must name exactly one path segment under `guests/`.
fn check_guest_id(id: &str) -> std::result::Result<(), ValidationError> {
    if is_blank(id) || id == "." || id == ".." {
        return Err(ValidationError::new(vec![FieldViolation::new(
            "id",
            "is_segment",
            "id must be a non-empty guest identifier",
        )]));
    }
    Ok(())
}

#[async_trait::async_trait]
impl<C: ConfigProvider> GuestGateway for GuestApiClient<C> {
    async fn health(&self) -> Result<HealthReport> {
        let url = self.url(["health"])?;
        self.send_json::<_, ()>(Method::GET, url, None).await
    }

    async fn create_guest(&self, payload: &serde_json::Value) -> Result<serde_json::Value> {
        let record = validate_create(payload)?;
        tracing::info!("Creating guest {} ({})", record.name, record.category);
        let url = self.url(["guests"])?;
        self.send_json(Method::POST, url, Some(&record)).await
    }

    async fn update_guest(
        &self,
        id: &str,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        check_guest_id(id)?;
        let patch = validate_update(payload)?;
        tracing::info!("Updating guest {}", id);
        let url = self.url(["guests", id])?;
        self.send_json(Method::PATCH, url, Some(&patch)).await
    }
}

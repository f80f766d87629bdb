use crate::core::health::HealthReport;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// Normalized API origin, no trailing slash.
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// Remote guest backend as seen by this crate.
#[async_trait]
pub trait GuestGateway: Send + Sync {
    async fn health(&self) -> Result<HealthReport>;
    async fn create_guest(&self, payload: &serde_json::Value) -> Result<serde_json::Value>;
    async fn update_guest(
        &self,
        id: &str,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value>;
}

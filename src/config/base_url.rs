use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GuestError, Result};
use crate::utils::validation::{is_blank, validate_url};
use std::env;
use std::time::Duration;

/// Checked in this order; the first set, non-blank value wins.
pub const DEFAULT_BASE_URL_VARS: [&str; 3] =
    ["GUESTLIST_API_URL", "API_BASE_URL", "NEXT_PUBLIC_API_URL"];

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const API_SEGMENT: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrlResolver {
    variables: Vec<String>,
}

impl Default for BaseUrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL_VARS)
    }
}

impl BaseUrlResolver {
    pub fn new<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variables: variables.into_iter().map(Into::into).collect(),
        }
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn resolve(&self) -> Result<String> {
        self.resolve_with(|key| env::var(key).ok())
    }

    /// Same as [`resolve`](Self::resolve) but reads variables through `lookup`.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        for variable in &self.variables {
            match lookup(variable.as_str()) {
                Some(value) if !is_blank(&value) => {
                    tracing::debug!("API base URL taken from {}", variable);
                    return normalize_origin(variable, &value);
                }
                _ => continue,
            }
        }

        Err(GuestError::MissingConfigError {
            field: format!("API base URL (one of {})", self.variables.join(", ")),
        })
    }
}

/// Trims the value, checks it is an http(s) URL and drops trailing slashes.
pub fn normalize_origin(field_name: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    validate_url(field_name, trimmed)?;
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Origin with exactly one trailing `/api` segment, for server-side calls.
pub fn server_base_url(origin: &str) -> String {
    let trimmed = origin.trim_end_matches('/');
    // 只處理路徑部分，避免把主機名稱 "api" 當成路徑
    let path_start = trimmed
        .find("://")
        .map(|i| i + 3)
        .and_then(|host| trimmed[host..].find('/').map(|p| host + p))
        .unwrap_or(trimmed.len());
    let (authority, mut path) = trimmed.split_at(path_start);
    while let Some(stripped) = path.strip_suffix(API_SEGMENT) {
        path = stripped.trim_end_matches('/');
    }
    format!("{}{}{}", authority, path, API_SEGMENT)
}

/// Resolved once at startup and handed to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: normalize_origin("api.base_url", base_url)?,
            timeout,
        })
    }

    pub fn from_lookup<F>(resolver: &BaseUrlResolver, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_url: resolver.resolve_with(lookup)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn server_base_url(&self) -> String {
        server_base_url(&self.base_url)
    }
}

impl ConfigProvider for ApiSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }
}

use crate::config::Config;
use crate::models::error::AppError;
use serde_json::Value;

// DEFAULT ENDPOINTS
const DISTRIBUTION_PATH: &str = "/api/movies/distribution-by-year?group_by=decade";
const THEMES_PATH: &str = "/api/movies/themes-by-decade";
const COMPANIES_PATH: &str = "/api/production/countries";
const COUNTRIES_PATH: &str = "/api/production/directors";
const DIRECTORS_PATH: &str = "/api/ratings/distribution";
const TOP_RATED_PATH: &str = "/api/ratings/top-rated";

/// The six paths fetched on load, named by the view slot each one feeds.
///
/// The defaults reproduce the deployed backend's wiring, where the
/// production and ratings paths land in differently named slots. Override
/// them here once the backend contract is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Feeds both the summary stats (whole body) and the decade distribution.
    pub distribution: String,
    pub themes: String,
    pub companies: String,
    pub countries: String,
    pub directors: String,
    /// Fetched with the rest of the batch; its result is not bound.
    pub top_rated: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            distribution: DISTRIBUTION_PATH.to_string(),
            themes: THEMES_PATH.to_string(),
            companies: COMPANIES_PATH.to_string(),
            countries: COUNTRIES_PATH.to_string(),
            directors: DIRECTORS_PATH.to_string(),
            top_rated: TOP_RATED_PATH.to_string(),
        }
    }
}

impl Endpoints {
    /// All paths in batch order.
    pub fn all(&self) -> [&str; 6] {
        [
            &self.distribution,
            &self.themes,
            &self.companies,
            &self.countries,
            &self.directors,
            &self.top_rated,
        ]
    }
}

// API CONFIGURATION
/// Configuration for the dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    endpoints: Endpoints,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Joins an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    endpoints: Option<Endpoints>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Replaces the endpoint binding.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Builds the `ApiConfig`, defaulting the base URL to the page origin.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .or_else(page_origin)
                .unwrap_or_else(|| Config::FALLBACK_BASE_URL.to_string()),
            endpoints: self.endpoints.unwrap_or_default(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

// JSON SOURCE
/// Anything that can answer a GET on an endpoint path with a JSON body.
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn get_json(&self, path: &str) -> Result<Value, AppError>;
}

// DASHBOARD CLIENT
/// HTTP client for the movie statistics API.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        error_for_status(status.as_u16(), body)
    }
}

impl JsonSource for DashboardClient {
    /// Executes a single GET and decodes the body.
    async fn get_json(&self, path: &str) -> Result<Value, AppError> {
        let url = self.config.url(path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response from {path}: {e}")))
    }
}

fn error_for_status(status: u16, body: &str) -> AppError {
    match status {
        429 => AppError::RateLimited,
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

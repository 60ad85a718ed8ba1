//! Request client for the intake API
//!
//! Every service call goes through [`ApiClient::request`], which merges the
//! default JSON headers with caller headers and the clinic identifier, and
//! normalizes failures into [`ApiError`].

use crate::config::ApiConfig;
use crate::domain::{ApiError, ClinicContext, IntakeError, Result, CLINIC_ID_HEADER};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Options for a single request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,

    /// Pre-encoded JSON body
    pub body: Option<String>,

    /// Caller headers; these override the defaults but not the clinic header
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    /// A bodiless GET
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }

    /// A POST whose body is `body` encoded as JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if `body` cannot be encoded.
    pub fn post_json<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_string(body)?),
            headers: Vec::new(),
        })
    }

    /// Adds a caller header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// HTTP client bound to one API base URL and one clinic context
///
/// Cloning is cheap; the underlying connection pool is shared.
///
/// # Example
///
/// ```no_run
/// use clinic_intake::adapters::api::ApiClient;
/// use clinic_intake::domain::{ClinicContext, ClinicId, Patient, ApiResponse};
///
/// # async fn example() -> clinic_intake::domain::Result<()> {
/// let context = ClinicContext::new(ClinicId::new("3f2504e0-4f89-11d3-9a0c-0305e82c3301").unwrap());
/// let client = ApiClient::new("https://api.example.com", context)?;
///
/// let url = client.endpoint("patient/search?firstname=Ana&lastname=&page=1&page_size=10");
/// let response: ApiResponse<Vec<Patient>> = client.get(&url).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    context: ClinicContext,
}

impl ApiClient {
    /// Creates a client for `base_url`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the base URL is missing or is not
    /// an absolute http(s) URL. No request is attempted in that case.
    pub fn new(base_url: impl Into<String>, context: ClinicContext) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if base_url.is_empty() {
            return Err(IntakeError::Configuration(
                "API base URL is not defined in the environment configuration.".to_string(),
            ));
        }

        let parsed = Url::parse(&base_url).map_err(|e| {
            IntakeError::Configuration(format!("Invalid API base URL '{base_url}': {e}"))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(IntakeError::Configuration(format!(
                "API base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        let http = Client::builder().build().map_err(|e| {
            IntakeError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url,
            http,
            context,
        })
    }

    /// Creates a client from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let context = ClinicContext::from_optional(config.clinic_id.as_deref());
        Self::new(&config.base_url, context)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Clinic context applied to every request
    pub fn context(&self) -> &ClinicContext {
        &self.context
    }

    /// Absolute URL for `path`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for `path` with URL-encoded query parameters
    pub fn endpoint_with_query(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let mut url = Url::parse(&self.endpoint(path)).map_err(|e| {
            IntakeError::Configuration(format!("Invalid endpoint URL for '{path}': {e}"))
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url.to_string())
    }

    /// Builds the outgoing header set
    ///
    /// Precedence, lowest to highest: JSON defaults, caller headers, the
    /// clinic identifier. The clinic header is omitted when the context has
    /// no clinic.
    pub fn build_headers(&self, caller: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in caller {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                IntakeError::Configuration(format!("Invalid header name '{name}': {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                IntakeError::Configuration(format!("Invalid value for header '{name}': {e}"))
            })?;
            headers.insert(name, value);
        }

        if let Some(clinic_id) = self.context.clinic_id() {
            let value = HeaderValue::from_str(clinic_id.as_str()).map_err(|e| {
                IntakeError::Configuration(format!("Invalid clinic identifier: {e}"))
            })?;
            let name = HeaderName::from_bytes(CLINIC_ID_HEADER.as_bytes()).map_err(|e| {
                IntakeError::Configuration(format!("Invalid clinic header name: {e}"))
            })?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Issues a request and decodes the JSON response into `T`
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] for a non-success status, carrying the raw body text
    /// - [`ApiError::Transport`] when the request could not be completed,
    ///   including an error response whose body could not be read
    /// - [`ApiError::Decode`] when the body is not valid JSON of shape `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let headers = self.build_headers(&options.headers)?;

        crate::log_api_request!(options.method, url, self.context.clinic_id().is_some());

        let mut request = self.http.request(options.method.clone(), url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                tracing::warn!(
                    url = %url,
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read error response body"
                );
                ApiError::Transport(format!(
                    "HTTP error! Status: {}, body could not be read: {}",
                    status.as_u16(),
                    e
                ))
            })?;
            tracing::warn!(
                method = %options.method,
                url = %url,
                status = status.as_u16(),
                "API request failed"
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "API response is not valid JSON");
            ApiError::Decode(e.to_string()).into()
        })
    }

    /// GET `url` and decode the response
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.request(url, RequestOptions::get()).await
    }

    /// POST `body` as JSON to `url` and decode the response
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(url, RequestOptions::post_json(body)?).await
    }
}

//! smart-me REST API client implementation.
//!
//! The [`SmartMeClient`] provides a type-safe interface for interacting with
//! the smart-me REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use smartme::api::{RequestContext, SmartMeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SmartMeClient::new("user@example.com", "password")?;
//!     let ctx = RequestContext::background();
//!
//!     // Get all devices
//!     let devices = client.get_devices(&ctx).await?;
//!     println!("Found {} devices", devices.len());
//!
//!     // Get the latest values of one device
//!     let values = client.get_values(&ctx, "device-id").await?;
//!     println!("{} values at {}", values.values.len(), values.date);
//!
//!     Ok(())
//! }
//! ```

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, TimeZone};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::context::RequestContext;
use crate::api::error::{ApiError, ApiResult};
use crate::api::types::*;
use crate::config::Credentials;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

/// Builder for configuring [`SmartMeClient`].
///
/// Setters apply in call order; a later setter overrides the effect of an
/// earlier one on the same setting.
#[derive(Clone)]
pub struct SmartMeClientBuilder {
    username: String,
    password: String,
    base_url: String,
    http_client: Option<Client>,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl SmartMeClientBuilder {
    /// Create a new builder with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            base_url: DEFAULT_API_URL.to_string(),
            http_client: None,
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Use a custom `reqwest::Client` as transport.
    ///
    /// Replaces the transport wholesale, so a timeout set before this call is
    /// dropped. Set the timeout afterwards to enforce one per request.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self.timeout = None;
        self
    }

    /// Override the API base URL (useful for testing).
    ///
    /// Request paths are resolved against it as relative references, so a
    /// path prefix must end with `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the overall timeout of every call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails if the username is empty, the base URL cannot be parsed, a
    /// header is invalid, or the default transport cannot be initialized.
    pub fn build(self) -> ApiResult<SmartMeClient> {
        if self.username.is_empty() {
            return Err(ApiError::EmptyUsername);
        }

        let base_url = Url::parse(&self.base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let (http_client, timeout, request_timeout) = match self.http_client {
            Some(client) => (client, self.timeout, self.timeout),
            None => {
                let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
                let client = Client::builder().timeout(timeout).build()?;
                (client, Some(timeout), None)
            }
        };

        tracing::debug!(base_url = %base_url, timeout = ?timeout, "Built smart-me client");

        Ok(SmartMeClient {
            http_client,
            base_url,
            username: self.username,
            password: self.password,
            default_headers: headers,
            timeout,
            request_timeout,
        })
    }
}

impl fmt::Debug for SmartMeClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartMeClientBuilder")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("http_client", &self.http_client.is_some())
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

/// smart-me REST API client.
///
/// Immutable once built; clones share the underlying connection pool and can
/// be used from many tasks at once.
#[derive(Clone)]
pub struct SmartMeClient {
    http_client: Client,
    base_url: Url,
    username: String,
    password: String,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    /// Only set when the transport was supplied by the caller.
    request_timeout: Option<Duration>,
}

impl SmartMeClient {
    /// Create a new client against the production API.
    ///
    /// Uses default settings (10s timeout).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyUsername`] if `username` is empty, or an HTTP
    /// error if the transport cannot be initialized.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> ApiResult<Self> {
        SmartMeClientBuilder::new(username, password).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> SmartMeClientBuilder {
        SmartMeClientBuilder::new(username, password)
    }

    /// Create a client with default settings from loaded [`Credentials`].
    pub fn from_credentials(credentials: &Credentials) -> ApiResult<Self> {
        Self::new(credentials.username.clone(), credentials.password.clone())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the username used for authentication.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Overall per-call timeout enforced by this client.
    ///
    /// `None` when a custom transport was supplied without a timeout; the
    /// transport's own settings apply then.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    // =========================================================================
    // Device endpoints
    // =========================================================================

    /// Get all devices of the account.
    ///
    /// GET /api/Devices
    ///
    /// A `null` body yields an empty list.
    pub async fn get_devices(&self, ctx: &RequestContext) -> ApiResult<Vec<Device>> {
        let devices: Option<Vec<Device>> = self
            .request(ctx, Method::GET, "api/Devices", None::<&()>)
            .await?;
        Ok(devices.unwrap_or_default())
    }

    /// Get the latest values of a device.
    ///
    /// GET /api/Values/{id}
    pub async fn get_values(&self, ctx: &RequestContext, device_id: &str) -> ApiResult<DeviceValues> {
        let path = format!("api/Values/{}", Self::device_segment(device_id)?);
        self.request(ctx, Method::GET, &path, None::<&()>).await
    }

    /// Get the first value of a device before `date`.
    ///
    /// GET /api/ValuesInPast/{id}?date={date}
    pub async fn get_values_in_past<Tz>(
        &self,
        ctx: &RequestContext,
        device_id: &str,
        date: &DateTime<Tz>,
    ) -> ApiResult<Value>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let path = format!(
            "api/ValuesInPast/{}?date={}",
            Self::device_segment(device_id)?,
            format_timestamp(date)
        );
        self.request(ctx, Method::GET, &path, None::<&()>).await
    }

    /// Get the values of a device within a time range.
    ///
    /// May require a professional smart-me license; a rejection surfaces as
    /// [`ApiError::Status`] like any other error status.
    ///
    /// GET /api/ValuesInPastMultiple/{id}?startDate={start}&endDate={end}
    ///
    /// A `null` body yields an empty list.
    pub async fn get_values_in_past_multiple<Tz>(
        &self,
        ctx: &RequestContext,
        device_id: &str,
        start_date: &DateTime<Tz>,
        end_date: &DateTime<Tz>,
    ) -> ApiResult<Vec<Value>>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let path = format!(
            "api/ValuesInPastMultiple/{}?startDate={}&endDate={}",
            Self::device_segment(device_id)?,
            format_timestamp(start_date),
            format_timestamp(end_date)
        );
        let values: Option<Vec<Value>> = self.request(ctx, Method::GET, &path, None::<&()>).await?;
        Ok(values.unwrap_or_default())
    }

    // =========================================================================
    // Generic requests
    // =========================================================================

    /// Send a request to `path` (relative to the base URL) and decode the JSON
    /// response into `T`.
    ///
    /// `body`, when given, is sent as JSON.
    pub async fn request<T, B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.new_request(method, path, body)?;
        let response = self.execute(ctx, request).await?;
        Self::decode(ctx, response).await
    }

    /// Like [`request`](Self::request), but without decoding the response body.
    ///
    /// Returns the (successful) status code.
    pub async fn request_no_content<B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<StatusCode>
    where
        B: Serialize + ?Sized,
    {
        let request = self.new_request(method, path, body)?;
        let response = self.execute(ctx, request).await?;
        Ok(response.status())
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Build an authenticated request for `path`.
    fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path).map_err(|e| {
            ApiError::InvalidParameter(format!("Invalid request path '{}': {}", path, e))
        })?;

        let mut builder = self
            .http_client
            .request(method, url)
            .headers(self.default_headers.clone())
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(ApiError::Serialize)?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        Ok(builder.build()?)
    }

    /// Send the request and classify the response status.
    async fn execute(&self, ctx: &RequestContext, request: reqwest::Request) -> ApiResult<Response> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "Sending API request");

        let response = tokio::select! {
            biased;
            err = ctx.done() => return Err(err),
            result = self.http_client.execute(request) => match result {
                Ok(response) => response,
                // A transport failure racing a cancelled context reports the context.
                Err(e) => return Err(ctx.err().unwrap_or(ApiError::Http(e))),
            },
        };

        let status = response.status();
        tracing::debug!(status = %status, "Received API response");

        if status.as_u16() >= 400 {
            return Err(ApiError::from_status(status));
        }

        Ok(response)
    }

    /// Read the whole body and decode it as JSON.
    async fn decode<T: DeserializeOwned>(ctx: &RequestContext, response: Response) -> ApiResult<T> {
        let body = tokio::select! {
            biased;
            err = ctx.done() => return Err(err),
            result = response.bytes() => {
                result.map_err(|e| ctx.err().unwrap_or(ApiError::Http(e)))?
            }
        };

        // Only the first JSON value is read; anything after it is ignored.
        let mut de = serde_json::Deserializer::from_slice(&body);
        let value: T = serde::Deserialize::deserialize(&mut de).map_err(|e| {
            tracing::trace!(error = %e, len = body.len(), "Failed to decode response body");
            ApiError::Decode(e)
        })?;
        Ok(value)
    }

    /// Validate a device ID and encode it as a single path segment.
    fn device_segment(device_id: &str) -> ApiResult<Cow<'_, str>> {
        if device_id.is_empty() {
            return Err(ApiError::EmptyDeviceId);
        }
        Ok(urlencoding::encode(device_id))
    }
}

impl fmt::Debug for SmartMeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartMeClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Render a timestamp as RFC 3339 with whole seconds and `Z` for UTC.
///
/// The result is placed into query strings unescaped. A positive offset
/// renders a literal `+`, which many servers decode as a space, so pass
/// `DateTime<Utc>` (or call `.with_timezone(&Utc)`) for query parameters.
pub fn format_timestamp<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

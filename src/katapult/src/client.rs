// Copyright 2025 Katapult Rust Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Result;
use crate::error::{Error, ErrorResponseBody};
use crate::query::QueryValues;
use crate::response::Response;

/// The default Katapult API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.katapult.io";

/// The default `User-Agent` header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("katapult-rust/", env!("CARGO_PKG_VERSION"));

/// The HTTP transport shared by all resource clients.
///
/// The client owns the endpoint, the API token, and a [reqwest::Client];
/// cloning is cheap and clones share the connection pool. Transport-level
/// behavior (TLS, pooling, timeouts) is `reqwest`'s; this type only adds the
/// Katapult request shape: bearer auth, JSON codec, and the error envelope
/// handling on non-2xx responses.
///
/// # Example
/// ```no_run
/// # async fn sample() -> katapult::Result<()> {
/// let client = katapult::Client::builder()
///     .api_token("kat_token")
///     .build()
///     .expect("valid configuration");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    endpoint: url::Url,
    api_token: Option<String>,
    user_agent: String,
}

impl Client {
    /// Creates a builder with the default endpoint and user agent.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Sends a request and decodes the JSON response body.
    ///
    /// `path` is relative to the endpoint (e.g. `core/v1/networks/_`) and
    /// `query` is the already-merged filter for the request. On non-2xx
    /// responses the error envelope is parsed into a
    /// [ResponseError][crate::error::ResponseError] carrying the
    /// status-derived category.
    pub async fn execute<I, O>(
        &self,
        method: reqwest::Method,
        path: &str,
        query: &QueryValues,
        body: Option<&I>,
    ) -> Result<Response<O>>
    where
        I: serde::Serialize + ?Sized,
        O: serde::de::DeserializeOwned + Default,
    {
        let mut url = self.endpoint.join(path).map_err(Error::request)?;
        if !query.is_empty() {
            url.set_query(Some(&query.encode()));
        }
        let token = self.api_token.as_deref().ok_or_else(|| {
            Error::request(format!("no API token available for: {method} {path}"))
        })?;

        let mut builder = self
            .inner
            .request(method.clone(), url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(token);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %method, path, "sending request");
        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status();
        if !status.is_success() {
            let err = to_response_error(status, response).await;
            tracing::debug!(method = %method, path, status = status.as_u16(), %err, "request failed");
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(Error::io)?;
        let body = if bytes.is_empty() {
            // 204s and other bodiless successes decode to the envelope's
            // default value.
            O::default()
        } else {
            serde_json::from_slice(&bytes).map_err(Error::deser)?
        };
        Ok(Response::new(status, body))
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_response_error(status: http::StatusCode, response: reqwest::Response) -> Error {
    let bytes = match response.bytes().await {
        Ok(b) => b,
        Err(e) => return Error::io(e),
    };
    match serde_json::from_slice::<ErrorResponseBody>(&bytes) {
        Ok(ErrorResponseBody {
            error: Some(envelope),
        }) => Error::service(envelope.with_status(status.as_u16())),
        // A non-2xx response without a recognizable envelope; keep the
        // status visible as that is all we know.
        Ok(_) | Err(_) => Error::deser(format!("unexpected response: status={status}")),
    }
}

/// Errors while building a [Client].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuilderError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// A builder for [Client].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    endpoint: Option<String>,
    api_token: Option<String>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Overrides the API endpoint, e.g. for a test server.
    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the API token sent as a bearer `Authorization` header. Requests
    /// made without a token fail before any I/O.
    pub fn api_token<S: Into<String>>(mut self, token: S) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Supplies a pre-configured [reqwest::Client], e.g. with custom
    /// timeouts or proxy settings.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the client.
    pub fn build(self) -> std::result::Result<Client, BuilderError> {
        let mut endpoint = self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        // `Url::join` treats the last path segment as a file unless the base
        // ends with a slash.
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        let endpoint = url::Url::parse(&endpoint)?;
        Ok(Client {
            inner: self.http_client.unwrap_or_default(),
            endpoint,
            api_token: self.api_token,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

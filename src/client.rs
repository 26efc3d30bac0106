use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request, Response, StatusCode};
use url::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::Configuration;
use crate::credit_notes::CreditNotesService;
use crate::error::{ApiError, Error, ErrorEnvelope};
use crate::files::FilesService;
use crate::invoices::InvoicesService;
use crate::notifications::NotificationsService;

/// Header carrying the per-call request correlation identifier.
pub const REQUEST_ID_HEADER: &str = "X-BW-REQUEST-ID";

/// Callback invoked with the raw request and response immediately after
/// every round trip, before error classification. Intended for auditing and
/// metrics; its outcome never affects control flow.
pub type RequestCompletionCallback = dyn Fn(&Request, &Response) + Send + Sync;

/// Client for the Basware invoicing API.
///
/// Owns the shared transport (connection pool, credentials, headers) and
/// exposes one service façade per API resource:
///
/// ```no_run
/// use basware_client::{Client, Configuration, InvoicePathParams};
///
/// # async fn run() -> Result<(), basware_client::Error> {
/// let client = Client::new(Configuration::sandbox("user", "secret"))?;
/// let invoice = client.invoices().get(&InvoicePathParams::new("abc-123")).await?;
/// println!("{}", invoice.data.id);
/// # Ok(())
/// # }
/// ```
pub struct Client {
    config: Configuration,
    base_url: Url,
    http: reqwest::Client,
    on_request_completed: Option<Box<RequestCompletionCallback>>,
}

impl Client {
    /// Creates a client from an immutable configuration.
    ///
    /// Fails with [`Error::Configuration`] when the configured base URL is
    /// not a valid absolute URL. The URL is normalized to include a
    /// trailing slash so relative endpoint paths join correctly. A
    /// configured timeout applies to every request; requests exceeding it
    /// fail with [`Error::Cancelled`].
    pub fn new(config: Configuration) -> Result<Self, Error> {
        let parsed = Url::parse(config.base_url()).map_err(|_| {
            Error::Configuration(format!("invalid base URL '{}'", config.base_url()))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: ensure_trailing_slash(parsed),
            http: builder.build()?,
            on_request_completed: None,
            config,
        })
    }

    /// Shorthand for a production client.
    pub fn production(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::new(Configuration::production(username, password))
    }

    /// Shorthand for a sandbox client.
    pub fn sandbox(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::new(Configuration::sandbox(username, password))
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Registers a callback invoked after every request completes.
    ///
    /// Register before sharing the client across tasks; the callback itself
    /// is read-only during calls. The callback receives a clone of the
    /// outgoing request, so it only fires for cloneable requests; every
    /// request this client builds carries a buffered byte body and is
    /// cloneable.
    pub fn set_on_request_completed(
        &mut self,
        callback: impl Fn(&Request, &Response) + Send + Sync + 'static,
    ) {
        self.on_request_completed = Some(Box::new(callback));
    }

    /// Operations on the `v1/invoices` resource.
    pub fn invoices(&self) -> InvoicesService<'_> {
        InvoicesService::new(self)
    }

    /// Operations on the `v1/creditNotes` resource.
    pub fn credit_notes(&self) -> CreditNotesService<'_> {
        CreditNotesService::new(self)
    }

    /// Operations on the `v1/files` resource.
    pub fn files(&self) -> FilesService<'_> {
        FilesService::new(self)
    }

    /// Operations on the `v1/notifications` resource.
    pub fn notifications(&self) -> NotificationsService<'_> {
        NotificationsService::new(self)
    }

    /// Sends a GET request to `path` and decodes the response.
    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        let url = self.endpoint_url(path)?;
        let request = self.build_request(Method::GET, url, None::<&()>)?;
        self.execute(request).await
    }

    /// Sends a POST request with a JSON body to `path` and decodes the
    /// response.
    pub(crate) async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, Error> {
        let url = self.endpoint_url(path)?;
        let request = self.build_request(Method::POST, url, Some(body))?;
        self.execute(request).await
    }

    /// Resolves a relative endpoint path against the configured base URL.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|_| Error::Configuration(format!("invalid endpoint path '{path}'")))
    }

    /// Builds an authenticated request with the standard header set.
    ///
    /// Every call gets a fresh `X-BW-REQUEST-ID`, including retries of the
    /// same logical submission; only the idempotency token inside an
    /// invoice body is reused across retries. When the configuration's
    /// `force_post` flag is set the wire method is POST regardless of
    /// `method`.
    pub(crate) fn build_request<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Request, Error> {
        let wire_method = if self.config.force_post() {
            Method::POST
        } else {
            method
        };

        let mut builder = self
            .http
            .request(wire_method, url)
            .basic_auth(self.config.username(), Some(self.config.password()))
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .header(CONTENT_TYPE, self.config.content_type())
            .header(ACCEPT, self.config.media_type())
            .header(USER_AGENT, self.config.user_agent());

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(Error::Encoding)?;
            builder = builder.body(encoded);
        }

        builder.build().map_err(Error::from)
    }

    /// Sends a request and classifies the response.
    ///
    /// Exactly one round trip; no retries. Classification, in order:
    /// a declared zero content length fails with the status line as the
    /// message; a 2xx status decodes the body into `R` (decode failures are
    /// still [`Error::Api`]); any other status decodes the body as an
    /// [`ErrorEnvelope`] when possible. A response content type that does
    /// not match the configured media type is recorded as a diagnostic note
    /// on the error path but is never fatal on its own.
    pub(crate) async fn execute<R: DeserializeOwned>(&self, request: Request) -> Result<R, Error> {
        let method = request.method().clone();
        let url = request.url().clone();

        if self.config.debug() {
            debug_dump_request(&request);
        }

        let observed = if self.on_request_completed.is_some() {
            request.try_clone()
        } else {
            None
        };

        let response = self.http.execute(request).await?;

        if let (Some(callback), Some(request)) = (&self.on_request_completed, &observed) {
            callback(request, &response);
        }

        let status = response.status();
        let content_length = response.content_length();

        let mut envelope = ErrorEnvelope::default();
        if let Some(note) = content_type_mismatch(&response, self.config.media_type()) {
            envelope.errors.message = note;
        }

        if content_length == Some(0) {
            envelope.errors.message = status_line(status);
            return Err(api_error(status, method, url, envelope));
        }

        // Consumes the response; reqwest returns the connection to the pool
        // on every path from here on.
        let payload = response.text().await?;

        if self.config.debug() {
            tracing::debug!(%status, body = %payload, "received response");
        }

        if !status.is_success() {
            if payload.is_empty() {
                return Err(api_error(status, method, url, envelope));
            }
            return Err(match serde_json::from_str::<ErrorEnvelope>(&payload) {
                Ok(mut decoded) => {
                    // Keep the content-type note when the envelope itself
                    // carries no message.
                    if decoded.errors.message.is_empty() {
                        decoded.errors.message = envelope.errors.message;
                    }
                    api_error(status, method, url, decoded)
                }
                Err(parse_error) => {
                    envelope.errors.message = parse_error.to_string();
                    api_error(status, method, url, envelope)
                }
            });
        }

        match serde_json::from_str::<R>(&payload) {
            Ok(decoded) => Ok(decoded),
            Err(decode_error) => {
                envelope.errors.message = decode_error.to_string();
                Err(api_error(status, method, url, envelope))
            }
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Substitutes `{bumId}` in an endpoint template, exactly once.
///
/// The identifier is inserted verbatim; callers supply URL-safe values.
pub(crate) fn render_endpoint(template: &str, bum_id: &str) -> String {
    template.replacen("{bumId}", bum_id, 1)
}

fn api_error(status: StatusCode, method: Method, url: Url, envelope: ErrorEnvelope) -> Error {
    Error::Api(Box::new(ApiError {
        status,
        method,
        url,
        envelope,
    }))
}

/// Renders a status line such as `200 OK`.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_str()),
        None => status.as_str().to_owned(),
    }
}

/// Compares the response content type (parameters stripped) against the
/// configured media type; returns a diagnostic note on mismatch.
fn content_type_mismatch(response: &Response, expected: &str) -> Option<String> {
    let header = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let content_type = header.split(';').next().unwrap_or("").trim();

    if content_type == expected {
        None
    } else {
        Some(format!(
            "expected Content-Type \"{expected}\", got \"{content_type}\""
        ))
    }
}

fn debug_dump_request(request: &Request) {
    let body = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .map(String::from_utf8_lossy)
        .unwrap_or_default();
    tracing::debug!(
        method = %request.method(),
        url = %request.url(),
        headers = ?request.headers(),
        %body,
        "sending request",
    );
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}

use std::time::Duration;

/// Production API host.
pub const PRODUCTION_BASE_URL: &str = "https://api.basware.com";

/// Sandbox API host used for integration testing against Basware.
pub const SANDBOX_BASE_URL: &str = "https://test-api.basware.com";

const DEFAULT_MEDIA_TYPE: &str = "application/json";
const DEFAULT_CHARSET: &str = "utf-8";
const DEFAULT_USER_AGENT: &str = concat!("basware-client/", env!("CARGO_PKG_VERSION"));

/// Immutable client configuration.
///
/// Built once via [`Configuration::production`] or
/// [`Configuration::sandbox`] and optionally adjusted with the consuming
/// `with_*` methods before constructing a [`crate::Client`]. There are no
/// setters; concurrent calls only ever read this value.
#[derive(Clone, Debug)]
pub struct Configuration {
    base_url: String,
    username: String,
    password: String,
    media_type: String,
    charset: String,
    user_agent: String,
    timeout: Option<Duration>,
    debug: bool,
    force_post: bool,
}

impl Configuration {
    /// Configuration for the production host (`api.basware.com`).
    pub fn production(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_host(PRODUCTION_BASE_URL, username, password)
    }

    /// Configuration for the sandbox host (`test-api.basware.com`).
    pub fn sandbox(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_host(SANDBOX_BASE_URL, username, password)
    }

    fn with_host(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.to_owned(),
            username: username.into(),
            password: password.into(),
            media_type: DEFAULT_MEDIA_TYPE.to_owned(),
            charset: DEFAULT_CHARSET.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
            debug: false,
            force_post: false,
        }
    }

    /// Overrides the base URL. Mainly useful for pointing tests at a mock
    /// server. The URL is validated when the [`crate::Client`] is built.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the media type used in `Content-Type` and `Accept`.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Overrides the charset advertised in `Content-Type`.
    #[must_use]
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Overrides the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets a deadline covering the whole of each request, from connect
    /// until the response body is read. Requests exceeding it fail with
    /// [`crate::Error::Cancelled`]. No deadline is applied by default.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables verbatim request/response dumps as `tracing` debug events.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Forces POST as the wire method for every operation, including
    /// logical reads.
    ///
    /// The original Basware bindings always issued POST regardless of the
    /// requested method. Leave this off for correct REST semantics; turn it
    /// on when wire compatibility with those bindings is required.
    #[must_use]
    pub fn with_force_post(mut self, force_post: bool) -> Self {
        self.force_post = force_post;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn force_post(&self) -> bool {
        self.force_post
    }

    /// Full `Content-Type` header value, `{mediaType}; charset={charset}`.
    pub(crate) fn content_type(&self) -> String {
        format!("{}; charset={}", self.media_type, self.charset)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Configuration;

    #[test]
    fn production_defaults() {
        let config = Configuration::production("user", "secret");
        assert_eq!(config.base_url(), "https://api.basware.com");
        assert_eq!(config.media_type(), "application/json");
        assert_eq!(config.charset(), "utf-8");
        assert_eq!(config.content_type(), "application/json; charset=utf-8");
        assert!(config.user_agent().starts_with("basware-client/"));
        assert_eq!(config.timeout(), None);
        assert!(!config.debug());
        assert!(!config.force_post());
    }

    #[test]
    fn with_timeout_sets_the_request_deadline() {
        let config = Configuration::sandbox("user", "secret")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn sandbox_uses_test_host() {
        let config = Configuration::sandbox("user", "secret");
        assert_eq!(config.base_url(), "https://test-api.basware.com");
    }

    #[test]
    fn with_overrides_replace_defaults() {
        let config = Configuration::sandbox("user", "secret")
            .with_base_url("http://127.0.0.1:8080")
            .with_media_type("application/vnd.basware+json")
            .with_charset("iso-8859-1")
            .with_user_agent("custom/1.0")
            .with_debug(true)
            .with_force_post(true);
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(
            config.content_type(),
            "application/vnd.basware+json; charset=iso-8859-1"
        );
        assert_eq!(config.user_agent(), "custom/1.0");
        assert!(config.debug());
        assert!(config.force_post());
    }
}

//! Routes API client error types.

/// Errors from fetching a route from the provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or missing API key
    #[error("unauthorized: check ROUTES_API_KEY")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by Routes API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Client could not be set up from its configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Canned response could not be loaded
    #[error("static provider error: {message}")]
    Static { message: String },
}

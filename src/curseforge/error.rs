/// Failure of a single call against the CurseForge API.
///
/// Callers only report these; none of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection, TLS, ...).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body was not the expected JSON.
    #[error("unexpected response body: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

//! Error taxonomy for the transport layer.

/// Errors from the appliance REST API layer.
///
/// Every failure is distinguishable from a valid empty response, so the
/// state layer can leave its regions untouched instead of clobbering them
/// with a partial value.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The appliance returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response whose body does not match the promised schema.
    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path the response came from.
        endpoint: String,
        source: serde_json::Error,
    },
}

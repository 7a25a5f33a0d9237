//! Transport failures reported by the API clients.

use thiserror::Error;

/// Any failure of a remote call.
///
/// Both the HTTP and the gRPC clients map their library errors into this
/// type so callers such as the seed builder treat them uniformly.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("Request to {endpoint} failed: {message}")]
    Connection { endpoint: String, message: String },

    /// HTTP response with a non-success status code.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// gRPC call completed with a non-OK status.
    #[error("{endpoint} returned gRPC status {code}: {message}")]
    Rpc {
        endpoint: String,
        code: String,
        message: String,
    },

    /// The response arrived but its body could not be decoded.
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = TransportError::Status {
            endpoint: "/api/v1/users".to_string(),
            status: 422,
            body: "invalid email".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "/api/v1/users returned HTTP 422: invalid email"
        );
    }
}

//! Request correlation ids.

use std::fmt::{Display, Formatter, Result as FmtResult};

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client-supplied ids longer than this are replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlates a request's log lines with the response a client received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestId(String);

impl RequestId {
    /// Reuse the caller's id when it is usable, otherwise mint a v7 uuid.
    pub(super) fn from_header(header_value: Option<String>) -> Self {
        header_value
            .map(|value| value.trim().to_owned())
            .filter(|value| is_usable(value))
            .map_or_else(Self::generate, Self)
    }

    fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    /// Echo the id back in the `x-request-id` response header.
    pub(super) fn write_header(&self, res: &mut Response) {
        match HeaderValue::from_str(&self.0) {
            Ok(value) => {
                res.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Err(source) => {
                warn!(
                    request_id = %self,
                    "could not encode request id for response header: {source}"
                );
            }
        }
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

fn is_usable(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value.bytes().all(|byte| byte.is_ascii_graphic())
}

/// Handlers that write a body without setting a status respond with 200.
pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_header_is_kept() {
        let id = RequestId::from_header(Some(" req-123 ".to_string()));

        assert_eq!(id.as_str(), "req-123");
    }

    #[test]
    fn blank_header_gets_a_fresh_id() {
        let id = RequestId::from_header(Some("  ".to_string()));

        assert!(Uuid::parse_str(id.as_str()).is_ok(), "expected a generated uuid");
    }

    #[test]
    fn oversized_or_spaced_header_is_replaced() {
        let long = RequestId::from_header(Some("x".repeat(MAX_REQUEST_ID_LEN + 1)));
        let spaced = RequestId::from_header(Some("req 123".to_string()));

        assert!(Uuid::parse_str(long.as_str()).is_ok(), "expected a generated uuid");
        assert!(Uuid::parse_str(spaced.as_str()).is_ok(), "expected a generated uuid");
    }

    #[test]
    fn missing_status_is_treated_as_ok() {
        assert_eq!(response_status_or_ok(None), StatusCode::OK);
        assert_eq!(
            response_status_or_ok(Some(StatusCode::NOT_FOUND)),
            StatusCode::NOT_FOUND
        );
    }
}

//! HTTP-specific error types for the GuildHub API SDK.
//!
//! This module contains the error taxonomy for API requests, along with the
//! status-code classification policy applied by the transport layer.
//!
//! # Error Handling
//!
//! Every failed request surfaces as an [`ApiError`]. Each variant carries a
//! [`RequestContext`] describing the request that failed (method, path, and
//! the body as it was sent on the wire), and, when the platform supplied
//! one, a structured [`ErrorPayload`] parsed from the response body.
//!
//! Two categories deserve special mention:
//!
//! - [`ApiError::Unauthorized`] (401) and [`ApiError::Forbidden`] (403) are
//!   recognized as distinct categories so callers can special-case them.
//!   They are never retried or swallowed by the SDK.
//! - [`ApiError::Pending`]: GuildHub uses the 201/202 status codes to mean
//!   "your request was structurally valid but the operation has not
//!   completed". The SDK reclassifies those responses as failures so callers
//!   must handle them explicitly instead of silently succeeding.
//!
//! # Example
//!
//! ```rust,ignore
//! use guildhub_api::ApiError;
//!
//! match api.guild("G1").members().get().await {
//!     Ok(members) => println!("members: {members}"),
//!     Err(ApiError::Unauthorized { .. }) => println!("bad token"),
//!     Err(ApiError::Pending { data, .. }) => {
//!         println!("still pending: {:?}", data);
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::clients::http_request::HttpMethod;

/// The outcome category assigned to an HTTP status code.
///
/// This is the explicit classification policy the transport applies to every
/// response, kept out of the transport plumbing so it can be tested in
/// isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// A 2xx response (other than 201/202): the request succeeded.
    Success,
    /// 201 or 202: the platform accepted the request but the operation is
    /// still pending. Reclassified as a failure.
    Pending,
    /// 401: the bot token was rejected.
    Unauthorized,
    /// 403: the bot lacks permission for the operation.
    Forbidden,
    /// Any other non-2xx status.
    Failure,
}

/// Classifies an HTTP status code into its [`StatusOutcome`].
///
/// GuildHub's "created, pending" (201) and "accepted, pending" (202) codes
/// are success-range at the HTTP level but mean the operation has not
/// completed; they map to [`StatusOutcome::Pending`].
#[must_use]
pub const fn classify_status(code: u16) -> StatusOutcome {
    match code {
        201 | 202 => StatusOutcome::Pending,
        200..=299 => StatusOutcome::Success,
        401 => StatusOutcome::Unauthorized,
        403 => StatusOutcome::Forbidden,
        _ => StatusOutcome::Failure,
    }
}

/// A structured error payload supplied by the platform.
///
/// GuildHub error bodies carry a numeric `code` and a human-readable
/// `message`; any additional fields are preserved in `extra` (with
/// camelCased keys, like every other inbound body).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorPayload {
    /// The platform's numeric error code.
    pub code: Option<i64>,
    /// The platform's error message.
    pub message: Option<String>,
    /// Any auxiliary fields the platform included.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ErrorPayload {
    /// Parses a payload from an (already camelCased) response body.
    ///
    /// Returns `None` when the body is not an object or carries neither a
    /// `code` nor a `message`; in that case there is nothing structured to
    /// report.
    #[must_use]
    pub fn from_body(body: &Value) -> Option<Self> {
        if !body.is_object() {
            return None;
        }
        serde_json::from_value::<Self>(body.clone())
            .ok()
            .filter(|payload| payload.code.is_some() || payload.message.is_some())
    }
}

/// The request that produced a failure.
///
/// Every [`ApiError`] carries one of these so a failing call can be
/// reproduced or logged: the HTTP method, the request path, and the body as
/// it was sent on the wire (snake_cased).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// The HTTP method of the failing request.
    pub method: HttpMethod,
    /// The request path, relative to the configured host.
    pub path: String,
    /// The body that was sent, if any, in wire (snake_case) form.
    pub body: Option<Value>,
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A PATCH request was built without a body.
    #[error("Cannot use {method} without specifying a body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was built with a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that forbids a body.
        method: String,
    },
}

/// Unified error type for all API request failures.
///
/// Nothing is retried and nothing is logged on the caller's behalf; every
/// failure propagates as one of these variants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The bot token was rejected (HTTP 401).
    #[error("unauthorized (401) for {context}")]
    Unauthorized {
        /// The request that failed.
        context: RequestContext,
        /// The platform's error payload, when supplied.
        data: Option<ErrorPayload>,
    },

    /// The bot lacks permission for the operation (HTTP 403).
    #[error("forbidden (403) for {context}")]
    Forbidden {
        /// The request that failed.
        context: RequestContext,
        /// The platform's error payload, when supplied.
        data: Option<ErrorPayload>,
    },

    /// The platform accepted the request but the operation is still pending
    /// (HTTP 201/202). Reclassified as a failure so callers handle it
    /// explicitly.
    #[error("request accepted but still pending ({code}) for {context}")]
    Pending {
        /// The status code that was reclassified (201 or 202).
        code: u16,
        /// The request that failed.
        context: RequestContext,
        /// The response body's error payload, when supplied.
        data: Option<ErrorPayload>,
    },

    /// Any other non-2xx response.
    #[error("request failed with status {code} for {context}")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
        /// The request that failed.
        context: RequestContext,
        /// The platform's error payload, when supplied.
        data: Option<ErrorPayload>,
    },

    /// The request failed validation before it was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// A network or connection error occurred.
    #[error("network error for {context}: {source}")]
    Network {
        /// The request that failed.
        context: RequestContext,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// A successful response body could not be decoded into the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the platform's structured error payload, if one was supplied.
    #[must_use]
    pub const fn data(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Unauthorized { data, .. }
            | Self::Forbidden { data, .. }
            | Self::Pending { data, .. }
            | Self::Status { data, .. } => data.as_ref(),
            Self::InvalidRequest(_) | Self::Network { .. } | Self::Decode(_) => None,
        }
    }

    /// Returns the context of the failing request, when one exists.
    #[must_use]
    pub const fn context(&self) -> Option<&RequestContext> {
        match self {
            Self::Unauthorized { context, .. }
            | Self::Forbidden { context, .. }
            | Self::Pending { context, .. }
            | Self::Status { context, .. }
            | Self::Network { context, .. } => Some(context),
            Self::InvalidRequest(_) | Self::Decode(_) => None,
        }
    }

    /// Returns the HTTP status code of the failure, when one exists.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::Pending { code, .. } | Self::Status { code, .. } => Some(*code),
            Self::InvalidRequest(_) | Self::Network { .. } | Self::Decode(_) => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<ErrorPayload>();
    assert_send_sync::<RequestContext>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> RequestContext {
        RequestContext {
            method: HttpMethod::Get,
            path: "/guilds/G1".to_string(),
            body: None,
        }
    }

    #[test]
    fn test_classify_status_success_range() {
        assert_eq!(classify_status(200), StatusOutcome::Success);
        assert_eq!(classify_status(204), StatusOutcome::Success);
        assert_eq!(classify_status(299), StatusOutcome::Success);
    }

    #[test]
    fn test_classify_status_reclassifies_pending_codes() {
        assert_eq!(classify_status(201), StatusOutcome::Pending);
        assert_eq!(classify_status(202), StatusOutcome::Pending);
    }

    #[test]
    fn test_classify_status_auth_categories() {
        assert_eq!(classify_status(401), StatusOutcome::Unauthorized);
        assert_eq!(classify_status(403), StatusOutcome::Forbidden);
    }

    #[test]
    fn test_classify_status_other_failures() {
        assert_eq!(classify_status(400), StatusOutcome::Failure);
        assert_eq!(classify_status(404), StatusOutcome::Failure);
        assert_eq!(classify_status(429), StatusOutcome::Failure);
        assert_eq!(classify_status(500), StatusOutcome::Failure);
    }

    #[test]
    fn test_error_payload_parses_code_and_message() {
        let payload =
            ErrorPayload::from_body(&json!({"code": 1, "message": "pending"})).unwrap();
        assert_eq!(payload.code, Some(1));
        assert_eq!(payload.message, Some("pending".to_string()));
        assert!(payload.extra.is_empty());
    }

    #[test]
    fn test_error_payload_preserves_auxiliary_fields() {
        let payload = ErrorPayload::from_body(
            &json!({"code": 40013, "message": "missing scope", "requiredScope": "guilds.write"}),
        )
        .unwrap();
        assert_eq!(payload.code, Some(40013));
        assert_eq!(
            payload.extra.get("requiredScope"),
            Some(&json!("guilds.write"))
        );
    }

    #[test]
    fn test_error_payload_absent_for_unstructured_bodies() {
        assert!(ErrorPayload::from_body(&json!({})).is_none());
        assert!(ErrorPayload::from_body(&json!("plain text")).is_none());
        assert!(ErrorPayload::from_body(&json!(null)).is_none());
        assert!(ErrorPayload::from_body(&json!({"unrelated": true})).is_none());
    }

    #[test]
    fn test_request_context_display() {
        let ctx = RequestContext {
            method: HttpMethod::Post,
            path: "/channels/C1/announces".to_string(),
            body: Some(json!({"message_id": "M1"})),
        };
        assert_eq!(ctx.to_string(), "post /channels/C1/announces");
    }

    #[test]
    fn test_data_accessor_returns_payload_for_status_errors() {
        let error = ApiError::Pending {
            code: 202,
            context: context(),
            data: ErrorPayload::from_body(&json!({"code": 1, "message": "pending"})),
        };

        assert_eq!(error.data().unwrap().code, Some(1));
        assert_eq!(error.status(), Some(202));
    }

    #[test]
    fn test_status_accessor_for_auth_variants() {
        let unauthorized = ApiError::Unauthorized {
            context: context(),
            data: None,
        };
        let forbidden = ApiError::Forbidden {
            context: context(),
            data: None,
        };

        assert_eq!(unauthorized.status(), Some(401));
        assert_eq!(forbidden.status(), Some(403));
    }

    #[test]
    fn test_context_accessor_preserves_failing_call() {
        let error = ApiError::Status {
            code: 404,
            context: RequestContext {
                method: HttpMethod::Delete,
                path: "/guilds/G1/members/U1".to_string(),
                body: None,
            },
            data: None,
        };

        let ctx = error.context().unwrap();
        assert_eq!(ctx.method, HttpMethod::Delete);
        assert_eq!(ctx.path, "/guilds/G1/members/U1");
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let missing = InvalidRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(missing.to_string(), "Cannot use patch without specifying a body.");

        let unexpected = InvalidRequestError::UnexpectedBody {
            method: "get".to_string(),
        };
        assert_eq!(unexpected.to_string(), "Cannot send a body with get.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &ApiError::Status {
            code: 500,
            context: context(),
            data: None,
        };
        let _ = error;

        let invalid: &dyn std::error::Error = &InvalidRequestError::MissingBody {
            method: "patch".to_string(),
        };
        let _ = invalid;
    }
}

//! HTTP client types for GuildHub API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the GuildHub API. It handles request/response
//! processing, key-casing conversion at the wire boundary, and error
//! normalization.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`ApiError`]: Unified error type for request failures
//! - [`classify_status`]: The status-code classification policy
//!
//! # Status Classification
//!
//! The platform uses 201/202 to mean "accepted but still pending"; the
//! client reclassifies those as failures ([`ApiError::Pending`]). 401 and
//! 403 are surfaced as distinct categories. No status is ever retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    classify_status, ApiError, ErrorPayload, InvalidRequestError, RequestContext, StatusOutcome,
};
pub use http_client::{ApiClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

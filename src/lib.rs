//! # GuildHub API Rust SDK
//!
//! A Rust SDK for the GuildHub messaging platform REST API, providing
//! type-safe configuration, bearer-token authentication, and a chainable
//! path builder for addressing the platform's resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`GuildHubConfig`] and [`GuildHubConfigBuilder`]
//! - Validated newtypes for the bot token and API host
//! - Sandbox routing for non-production testing
//! - An async HTTP client with automatic key-casing conversion at the wire
//!   boundary (snake_case out, camelCase in)
//! - A chainable, lazily-evaluated [`ResourceBuilder`] for the platform's
//!   REST layout
//! - Typed domain records for the platform schema in [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use guildhub_api::{BotToken, GuildHub, GuildHubConfig};
//!
//! // Create configuration using the builder pattern
//! let config = GuildHubConfig::builder()
//!     .bot_token(BotToken::new("your-bot-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let api = GuildHub::new(&config);
//! ```
//!
//! ## Making API Requests
//!
//! Chained accessors build a path without issuing any request; I/O happens
//! only when a terminal method runs:
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! // GET /guilds/G1/members
//! let members = api.guild("G1").members().get().await?;
//!
//! // GET /guilds/G1/roles/R1
//! let role = api.guild("G1").role("R1").get().await?;
//!
//! // POST /channels/C1/announces with body {"message_id": "M1"}
//! api.channel("C1")
//!     .announces()
//!     .add(json!({"messageId": "M1"}))
//!     .await?;
//!
//! // PATCH /guilds/G1/members/U1
//! api.guild("G1")
//!     .member("U1")
//!     .update(json!({"nickname": "ferris"}))
//!     .await?;
//!
//! // DELETE /guilds/G1/members/U1/roles/R1
//! api.guild("G1").member("U1").role("R1").delete().await?;
//! ```
//!
//! ## Key Casing
//!
//! The platform speaks snake_case JSON on the wire; this SDK exposes
//! camelCase to callers, matching the platform's official client libraries.
//! The conversion is deep, total, and applied automatically in both
//! directions by the transport layer.
//!
//! ## Error Handling
//!
//! Every failure rejects with an [`ApiError`] that carries the failing
//! request's context and, when supplied, the platform's structured
//! `{code, message}` payload. Two details are specific to this platform:
//!
//! - 201/202 responses mean "accepted but still pending" and are surfaced
//!   as [`ApiError::Pending`] rather than success
//! - 401/403 are distinct variants ([`ApiError::Unauthorized`],
//!   [`ApiError::Forbidden`]) so callers can special-case them
//!
//! Nothing is retried and nothing is logged on the caller's behalf.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Immutable chains**: Every builder step yields a new value; chains are
//!   inert until explicitly resolved

pub mod casing;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BotToken, GuildHubConfig, GuildHubConfigBuilder, HostUrl, DEFAULT_HOST};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    classify_status, ApiClient, ApiError, ErrorPayload, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidRequestError, RequestContext, StatusOutcome,
};

// Re-export the builder surface
pub use rest::{pluralize, GuildHub, ResourceBuilder};

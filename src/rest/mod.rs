//! REST resource infrastructure for the GuildHub API.
//!
//! This module provides the path-building layer of the SDK:
//!
//! - **[`GuildHub`]**: the root accessor handing out builder chains for the
//!   platform's top-level resources
//! - **[`ResourceBuilder`]**: an immutable, lazily-evaluated path
//!   accumulator with terminal verb methods
//! - **[`pluralize`]**: the fixed singular→plural segment table used by
//!   lookup-by-id steps
//! - **[`resources`]**: plain serde records for the platform's schema
//!
//! # Example
//!
//! ```rust,ignore
//! use guildhub_api::{BotToken, GuildHub, GuildHubConfig};
//! use guildhub_api::rest::resources::Member;
//! use serde_json::json;
//!
//! let config = GuildHubConfig::builder()
//!     .bot_token(BotToken::new("my-bot-token").unwrap())
//!     .build()?;
//! let api = GuildHub::new(&config);
//!
//! // Chains are inert until a terminal method runs.
//! let members = api.guild("G1").members();          // no I/O yet
//! let body = members.get().await?;                  // GET /guilds/G1/members
//!
//! // Typed variant
//! let member: Member = api.guild("G1").member("U1").fetch().await?;
//!
//! // Terminal verbs
//! api.channel("C1").announces().add(json!({"messageId": "M1"})).await?;
//! api.guild("G1").member("U1").update(json!({"nickname": "ferris"})).await?;
//! api.guild("G1").member("U1").role("R1").delete().await?;
//! ```

mod api;
mod builder;
mod path;

pub mod resources;

pub use api::GuildHub;
pub use builder::ResourceBuilder;
pub use path::pluralize;

//! User record.
//!
//! Users represent accounts on the platform, both human members and bots.
//! The SDK treats them as opaque payload shapes: no validation or mutation
//! happens beyond the key-casing the transport applies to every body.
//!
//! # Example
//!
//! ```rust,ignore
//! use guildhub_api::rest::resources::User;
//!
//! // GET /users/U1, deserialized
//! let user: User = api.user("U1").fetch().await?;
//! println!("{}", user.name.as_deref().unwrap_or("unknown"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account on the GuildHub platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique identifier of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The user's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL of the user's avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Whether this account is a bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,

    /// When the account was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

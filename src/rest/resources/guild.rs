//! Guild record.

use serde::{Deserialize, Serialize};

/// A guild (server/community) on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    /// The unique identifier of the guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The guild's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The guild's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// URL of the guild's icon image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// The user id of the guild owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// The number of members in the guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}

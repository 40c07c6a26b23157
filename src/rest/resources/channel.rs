//! Channel record.

use serde::{Deserialize, Serialize};

/// A channel within a guild.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// The unique identifier of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The id of the guild this channel belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,

    /// The channel's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The channel's topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// The channel type: "text", "voice", "forum".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Whether the channel is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

//! Custom emoji record.

use serde::{Deserialize, Serialize};

/// A custom emoji registered in a guild.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Emoji {
    /// The unique identifier of the emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The emoji's short name, without colons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL of the emoji image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// The id of the user who registered the emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
}

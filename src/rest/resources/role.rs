//! Role record.

use serde::{Deserialize, Serialize};

/// A role within a guild.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// The unique identifier of the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The role's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The role's display color, as a hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// The role's position in the guild's role list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Permission names granted by the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

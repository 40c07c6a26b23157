//! Guild member record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's membership in a guild.
///
/// Membership is keyed by user id; the member's roles are carried as a list
/// of role ids rather than embedded [`Role`](super::Role) records.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// The id of the user this membership belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// The member's guild-specific nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Ids of the roles assigned to the member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<String>>,

    /// When the user joined the guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

//! Channel announce record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message pinned as a channel announce.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announce {
    /// The unique identifier of the announce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The id of the channel the announce lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// The id of the announced message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// When the announce was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

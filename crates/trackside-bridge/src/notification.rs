use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a server-side notification, used for filtering and for
/// picking the icon/label shown in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PerformanceUpdate,
    TeamAddition,
    Milestone,
    /// Any kind this client version does not know about.
    #[serde(other)]
    Other,
}

impl NotificationKind {
    /// Human-readable label for the feed item footer.
    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationKind::PerformanceUpdate => "Performance Update",
            NotificationKind::TeamAddition => "Team Addition",
            NotificationKind::Milestone => "Milestone",
            NotificationKind::Other => "Notification",
        }
    }
}

/// One notification as served by the tracker backend.
///
/// Items are created server-side and fetched read-only; the only client-side
/// mutation is flipping `read` after a mark-read acknowledgment. Items are
/// never deleted client-side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NotificationItem {
    /// Server-assigned identifier, used for deduplication and mark-read.
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    /// Id of the related entity (performance entry, team, ...), if any.
    #[serde(default)]
    pub related_id: Option<String>,
}

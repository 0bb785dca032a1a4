use trackside_bridge::notification::{NotificationItem, NotificationKind};
use trackside_viewmodel::feed::{FeedFilter, NotificationFeed};

use crate::formatting;

/// Icon shown next to a feed item, by kind.
fn icon_name(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::PerformanceUpdate => "chart-line",
        NotificationKind::TeamAddition => "user-plus",
        NotificationKind::Milestone => "trophy",
        NotificationKind::Other => "bell",
    }
}

/// The notification area: the header badge plus the filtered feed list.
///
/// This is a display mirror of the backend-owned feed; read-state changes
/// arrive as full snapshots after the server has acknowledged them, new
/// items as prepend batches.
pub struct NotificationsPanel {
    feed: NotificationFeed,
    badge_count: u64,
    filter: FeedFilter,
}

impl Default for NotificationsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationsPanel {
    pub fn new() -> Self {
        Self {
            feed: NotificationFeed::new(),
            badge_count: 0,
            filter: FeedFilter::All,
        }
    }

    /// Updates the header badge. The badge is hidden entirely at zero.
    pub fn set_badge_count(&mut self, count: u64) {
        self.badge_count = count;
        match formatting::badge_text(count) {
            Some(text) => log::info!("Unread badge: {text}"),
            None => log::debug!("Unread badge hidden"),
        }
    }

    /// Prepends a batch of new items fetched by the poller.
    pub fn prepend_batch(&mut self, batch: Vec<NotificationItem>) {
        let inserted = self.feed.insert_batch(batch);
        if inserted > 0 {
            log::info!("{inserted} new notification(s) in the feed");
        }
    }

    /// Replaces the whole list after a read-state change.
    pub fn replace_all(&mut self, items: Vec<NotificationItem>) {
        self.feed = NotificationFeed::from_items(items);
    }

    pub fn set_filter(&mut self, filter: FeedFilter) {
        self.filter = filter;
    }

    pub fn badge_count(&self) -> u64 {
        self.badge_count
    }

    /// Items visible under the active filter, newest-first, with their icon.
    pub fn visible_items(&self) -> Vec<(&'static str, &NotificationItem)> {
        self.feed
            .filtered(self.filter)
            .into_iter()
            .map(|item| (icon_name(item.kind), item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn item(id: &str, minute: u32, kind: NotificationKind) -> NotificationItem {
        NotificationItem {
            id: id.to_string(),
            kind,
            message: format!("notification {id}"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, minute, 0).unwrap(),
            read: false,
            related_id: None,
        }
    }

    #[test]
    fn batches_show_up_newest_first() {
        let mut panel = NotificationsPanel::new();
        panel.prepend_batch(vec![item("a", 1, NotificationKind::Milestone)]);
        panel.prepend_batch(vec![item("b", 2, NotificationKind::TeamAddition)]);

        let ids: Vec<&str> = panel
            .visible_items()
            .iter()
            .map(|(_, item)| item.id.as_str())
            .collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn filter_narrows_the_visible_list() {
        let mut panel = NotificationsPanel::new();
        panel.prepend_batch(vec![
            item("a", 2, NotificationKind::Milestone),
            item("b", 1, NotificationKind::TeamAddition),
        ]);

        panel.set_filter(FeedFilter::Kind(NotificationKind::Milestone));
        let visible = panel.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, "trophy");
        assert_eq!(visible[0].1.id, "a");
    }

    #[test]
    fn snapshot_replaces_read_state() {
        let mut panel = NotificationsPanel::new();
        panel.prepend_batch(vec![item("a", 1, NotificationKind::Milestone)]);

        let mut read = item("a", 1, NotificationKind::Milestone);
        read.read = true;
        panel.replace_all(vec![read]);
        panel.set_filter(FeedFilter::Unread);
        assert!(panel.visible_items().is_empty());
    }
}

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use trackside_bridge::notification::{NotificationItem, NotificationKind};

/// Display filter applied to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFilter {
    All,
    Unread,
    Kind(NotificationKind),
}

/// An ordered, deduplicated list of notifications with read/unread state.
///
/// Items are kept newest-first at all times. Read-state transitions are
/// one-way (unread to read) and are applied only after the server has
/// acknowledged the corresponding write, so a failed mark-read never leaves
/// the feed half-flipped.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<NotificationItem>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a feed from items in arbitrary order.
    pub fn from_items(mut items: Vec<NotificationItem>) -> Self {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { items }
    }

    /// Current items, newest-first.
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    /// Prepends a batch of fetched items, preserving the batch's own
    /// (already newest-first) relative order. Items whose id is already in
    /// the feed are dropped. Returns how many items were actually inserted.
    pub fn insert_batch(&mut self, batch: Vec<NotificationItem>) -> usize {
        let known: HashSet<&str> = self.items.iter().map(|item| item.id.as_str()).collect();
        let fresh: Vec<NotificationItem> = batch
            .into_iter()
            .filter(|item| !known.contains(item.id.as_str()))
            .collect();
        let inserted = fresh.len();
        self.items.splice(0..0, fresh);
        inserted
    }

    /// Timestamp of the newest item, used as the `since` cursor for the next
    /// poll.
    pub fn latest_timestamp(&self) -> Option<DateTime<Utc>> {
        self.items.first().map(|item| item.created_at)
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    /// Flips every unread item to read. Call only after the server has
    /// acknowledged the bulk write. Returns the number of items flipped.
    pub fn mark_all_read(&mut self) -> usize {
        let mut flipped = 0;
        for item in &mut self.items {
            if !item.read {
                item.read = true;
                flipped += 1;
            }
        }
        flipped
    }

    /// Flips one item to read after a per-item acknowledgment. Returns false
    /// when the id is unknown or the item was already read.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.read => {
                item.read = true;
                true
            }
            _ => false,
        }
    }

    /// Items visible under the given filter, newest-first.
    pub fn filtered(&self, filter: FeedFilter) -> Vec<&NotificationItem> {
        self.items
            .iter()
            .filter(|item| match filter {
                FeedFilter::All => true,
                FeedFilter::Unread => !item.read,
                FeedFilter::Kind(kind) => item.kind == kind,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn item(id: &str, minute: u32, kind: NotificationKind) -> NotificationItem {
        NotificationItem {
            id: id.to_string(),
            kind,
            message: format!("notification {id}"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap(),
            read: false,
            related_id: None,
        }
    }

    #[test]
    fn batches_are_prepended_preserving_their_order() {
        let mut feed =
            NotificationFeed::from_items(vec![item("old", 0, NotificationKind::Milestone)]);
        feed.insert_batch(vec![
            item("n2", 20, NotificationKind::PerformanceUpdate),
            item("n1", 10, NotificationKind::TeamAddition),
        ]);

        let ids: Vec<&str> = feed.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["n2", "n1", "old"]);
    }

    #[test]
    fn duplicate_ids_are_dropped_on_insert() {
        let mut feed = NotificationFeed::new();
        assert_eq!(
            feed.insert_batch(vec![item("a", 1, NotificationKind::Milestone)]),
            1
        );
        assert_eq!(
            feed.insert_batch(vec![
                item("a", 1, NotificationKind::Milestone),
                item("b", 2, NotificationKind::Milestone),
            ]),
            1
        );
        assert_eq!(feed.items().len(), 2);
    }

    #[test]
    fn latest_timestamp_tracks_the_newest_item() {
        let mut feed = NotificationFeed::new();
        assert_eq!(feed.latest_timestamp(), None);

        feed.insert_batch(vec![item("a", 5, NotificationKind::Milestone)]);
        feed.insert_batch(vec![item("b", 30, NotificationKind::Milestone)]);
        assert_eq!(
            feed.latest_timestamp(),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn mark_all_read_flips_everything_once() {
        let mut feed = NotificationFeed::from_items(vec![
            item("a", 1, NotificationKind::Milestone),
            item("b", 2, NotificationKind::Milestone),
        ]);
        assert_eq!(feed.unread_count(), 2);
        assert_eq!(feed.mark_all_read(), 2);
        assert_eq!(feed.unread_count(), 0);
        // already read: nothing left to flip
        assert_eq!(feed.mark_all_read(), 0);
    }

    #[test]
    fn mark_read_is_one_way_and_id_scoped() {
        let mut feed = NotificationFeed::from_items(vec![
            item("a", 1, NotificationKind::Milestone),
            item("b", 2, NotificationKind::Milestone),
        ]);

        assert!(feed.mark_read("a"));
        assert!(!feed.mark_read("a"));
        assert!(!feed.mark_read("missing"));
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn filters_select_by_read_state_and_kind() {
        let mut feed = NotificationFeed::from_items(vec![
            item("a", 1, NotificationKind::Milestone),
            item("b", 2, NotificationKind::TeamAddition),
            item("c", 3, NotificationKind::Milestone),
        ]);
        feed.mark_read("c");

        assert_eq!(feed.filtered(FeedFilter::All).len(), 3);
        assert_eq!(feed.filtered(FeedFilter::Unread).len(), 2);
        let milestones = feed.filtered(FeedFilter::Kind(NotificationKind::Milestone));
        let ids: Vec<&str> = milestones.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
    }
}

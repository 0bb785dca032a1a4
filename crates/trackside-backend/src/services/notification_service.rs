use std::time::Duration;

use chrono::{DateTime, Utc};
use trackside_bridge::MessageFromBackend;
use trackside_bridge::notification::NotificationItem;
use trackside_bridge::toast::ToastSeverity;
use trackside_client::{ApiClient, NetworkError, poller};

/// The write endpoints the read-state handlers go through. Seam between the
/// ack-before-flip protocol and the HTTP client carrying it out.
pub(crate) trait ReadStateApi {
    async fn mark_all_read(&self) -> Result<bool, NetworkError>;
    async fn mark_notification_read(&self, id: &str) -> Result<bool, NetworkError>;
}

impl ReadStateApi for ApiClient {
    async fn mark_all_read(&self) -> Result<bool, NetworkError> {
        ApiClient::mark_all_read(self).await
    }

    async fn mark_notification_read(&self, id: &str) -> Result<bool, NetworkError> {
        ApiClient::mark_notification_read(self, id).await
    }
}

/// Starts the two notification timers: the unread-count poll for the header
/// badge and the new-items poll for the feed. Their first ticks fire
/// immediately and double as the initial page-load fetch.
pub async fn start_polling(context: super::AppContextHandle) {
    let (api, interval_secs) = {
        let state = context.state.read().await;
        (
            state.api.clone(),
            state.config.polling.notification_interval_secs,
        )
    };
    if interval_secs == 0 {
        log::info!("Notification polling disabled by configuration");
        return;
    }
    let interval = Duration::from_secs(interval_secs);

    let count_api = api.clone();
    let (count_handle, mut count_rx) = poller::start(interval, move || {
        let api = count_api.clone();
        async move { api.notification_count().await }
    });
    let count_context = context.clone();
    tokio::spawn(async move {
        while let Some(outcome) = count_rx.recv().await {
            match outcome {
                Ok(count) => {
                    count_context
                        .send(MessageFromBackend::NotificationCountUpdate(count))
                        .await;
                }
                Err(error) => log::error!("Failed to fetch notification count: {error}"),
            }
        }
    });

    // `since` is re-read from the feed on every tick so each poll only asks
    // for items newer than what we already hold. An empty feed asks from the
    // beginning of time, which doubles as the initial population.
    let feed_api = api;
    let feed_state = context.state.clone();
    let (feed_handle, mut feed_rx) = poller::start(interval, move || {
        let api = feed_api.clone();
        let state = feed_state.clone();
        async move {
            let since = { state.read().await.feed.latest_timestamp() }
                .unwrap_or(DateTime::<Utc>::MIN_UTC);
            api.new_notifications(since).await
        }
    });
    let feed_context = context.clone();
    tokio::spawn(async move {
        while let Some(outcome) = feed_rx.recv().await {
            match outcome {
                Ok(batch) => apply_batch(&feed_context, batch).await,
                Err(error) => log::error!("Failed to fetch new notifications: {error}"),
            }
        }
    });

    let mut state = context.state.write().await;
    state.notification_polls = vec![count_handle, feed_handle];
}

/// Folds a fetched batch into the feed and notifies the frontend about
/// genuinely new items.
async fn apply_batch(context: &super::AppContextHandle, batch: Vec<NotificationItem>) {
    if batch.is_empty() {
        return;
    }

    let fresh = {
        let mut state = context.state.write().await;
        let inserted = state.feed.insert_batch(batch);
        state.feed.items()[..inserted].to_vec()
    };
    if fresh.is_empty() {
        return;
    }

    let count = fresh.len();
    context
        .send(MessageFromBackend::NotificationBatch(fresh))
        .await;
    context
        .send_toast(
            ToastSeverity::Info,
            format!("{count} new notification(s) received"),
        )
        .await;
}

/// Handles a bulk mark-read request (see
/// [`trackside_bridge::MessageToBackend::MarkAllReadRequest`]).
///
/// The server write happens first; local read flags flip only after the
/// acknowledgment, so a failed request leaves every item exactly as it was.
pub async fn handle_mark_all_read(context: super::AppContextHandle) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };
    mark_all_read_via(&context, api.as_ref()).await;
}

async fn mark_all_read_via<A: ReadStateApi>(context: &super::AppContextHandle, api: &A) {
    let acknowledged = match api.mark_all_read().await {
        Ok(acknowledged) => acknowledged,
        Err(error) => {
            log::error!("Mark-all-read request failed: {error}");
            false
        }
    };
    if !acknowledged {
        context
            .send_toast(ToastSeverity::Error, "Failed to mark notifications as read")
            .await;
        return;
    }

    let snapshot = {
        let mut state = context.state.write().await;
        let flipped = state.feed.mark_all_read();
        log::info!("Marked {flipped} notification(s) as read");
        state.feed.items().to_vec()
    };
    context
        .send(MessageFromBackend::NotificationFeedSnapshot(snapshot))
        .await;
    context
        .send(MessageFromBackend::NotificationCountUpdate(0))
        .await;
    context
        .send_toast(ToastSeverity::Success, "All notifications marked as read")
        .await;
}

/// Handles a single-item mark-read request (see
/// [`trackside_bridge::MessageToBackend::MarkNotificationReadRequest`]).
pub async fn handle_mark_one_read(context: super::AppContextHandle, id: String) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };
    mark_one_read_via(&context, api.as_ref(), &id).await;
}

async fn mark_one_read_via<A: ReadStateApi>(context: &super::AppContextHandle, api: &A, id: &str) {
    let acknowledged = match api.mark_notification_read(id).await {
        Ok(acknowledged) => acknowledged,
        Err(error) => {
            log::error!("Mark-read request for {id} failed: {error}");
            false
        }
    };
    if !acknowledged {
        context
            .send_toast(ToastSeverity::Error, "Failed to mark notification as read")
            .await;
        return;
    }

    let (snapshot, unread) = {
        let mut state = context.state.write().await;
        state.feed.mark_read(id);
        (state.feed.items().to_vec(), state.feed.unread_count())
    };
    context
        .send(MessageFromBackend::NotificationFeedSnapshot(snapshot))
        .await;
    context
        .send(MessageFromBackend::NotificationCountUpdate(unread as u64))
        .await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;
    use tokio::sync::{RwLock, mpsc};
    use trackside_bridge::config::Config;
    use trackside_bridge::notification::NotificationKind;
    use trackside_viewmodel::feed::NotificationFeed;

    use crate::app::AppContext;
    use crate::services::AppContextHandle;
    use crate::state::State;

    use super::*;

    struct Unacknowledged;

    impl ReadStateApi for Unacknowledged {
        async fn mark_all_read(&self) -> Result<bool, NetworkError> {
            Ok(false)
        }

        async fn mark_notification_read(&self, _id: &str) -> Result<bool, NetworkError> {
            Ok(false)
        }
    }

    struct Unreachable;

    impl ReadStateApi for Unreachable {
        async fn mark_all_read(&self) -> Result<bool, NetworkError> {
            Err(NetworkError::Status { status: 500 })
        }

        async fn mark_notification_read(&self, _id: &str) -> Result<bool, NetworkError> {
            Err(NetworkError::Status { status: 500 })
        }
    }

    struct Acknowledging;

    impl ReadStateApi for Acknowledging {
        async fn mark_all_read(&self) -> Result<bool, NetworkError> {
            Ok(true)
        }

        async fn mark_notification_read(&self, _id: &str) -> Result<bool, NetworkError> {
            Ok(true)
        }
    }

    fn item(id: &str, minute: u32) -> NotificationItem {
        NotificationItem {
            id: id.to_string(),
            kind: NotificationKind::Milestone,
            message: format!("notification {id}"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, minute, 0).unwrap(),
            read: false,
            related_id: None,
        }
    }

    fn context_with_feed(
        items: Vec<NotificationItem>,
    ) -> (AppContextHandle, mpsc::Receiver<MessageFromBackend>) {
        let config = Config::default();
        let api = Arc::new(ApiClient::new(reqwest::Client::new(), &config.server));
        let state = Arc::new(RwLock::new(State {
            config,
            api,
            feed: NotificationFeed::from_items(items),
            notification_polls: Vec::new(),
            dashboard_poll: None,
        }));
        let (tx, rx) = mpsc::channel(8);
        (Arc::new(AppContext { state, tx }), rx)
    }

    #[tokio::test]
    async fn unacknowledged_mark_all_read_leaves_every_read_flag_untouched() {
        let (context, mut rx) = context_with_feed(vec![item("a", 1), item("b", 2)]);

        mark_all_read_via(&context, &Unacknowledged).await;

        let state = context.state.read().await;
        assert_eq!(state.feed.unread_count(), 2);
        assert!(state.feed.items().iter().all(|i| !i.read));
        drop(state);

        match rx.try_recv().unwrap() {
            MessageFromBackend::ToastMessage(toast) => {
                assert_eq!(toast.severity, ToastSeverity::Error);
                assert_eq!(toast.message, "Failed to mark notifications as read");
            }
            other => panic!("expected an error toast, got {other:?}"),
        }
        // no snapshot, no count update: the frontend mirror stays as-is too
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn failed_mark_all_read_request_leaves_every_read_flag_untouched() {
        let (context, mut rx) = context_with_feed(vec![item("a", 1)]);

        mark_all_read_via(&context, &Unreachable).await;

        assert_eq!(context.state.read().await.feed.unread_count(), 1);
        assert!(matches!(
            rx.try_recv().unwrap(),
            MessageFromBackend::ToastMessage(toast) if toast.severity == ToastSeverity::Error
        ));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn acknowledged_mark_all_read_flips_and_pushes_the_snapshot() {
        let (context, mut rx) = context_with_feed(vec![item("a", 1), item("b", 2)]);

        mark_all_read_via(&context, &Acknowledging).await;

        assert_eq!(context.state.read().await.feed.unread_count(), 0);
        assert!(matches!(
            rx.try_recv().unwrap(),
            MessageFromBackend::NotificationFeedSnapshot(items) if items.iter().all(|i| i.read)
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            MessageFromBackend::NotificationCountUpdate(0)
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            MessageFromBackend::ToastMessage(toast) if toast.severity == ToastSeverity::Success
        ));
    }

    #[tokio::test]
    async fn unacknowledged_single_mark_read_keeps_the_item_unread() {
        let (context, mut rx) = context_with_feed(vec![item("a", 1)]);

        mark_one_read_via(&context, &Unacknowledged, "a").await;

        assert_eq!(context.state.read().await.feed.unread_count(), 1);
        assert!(matches!(
            rx.try_recv().unwrap(),
            MessageFromBackend::ToastMessage(toast) if toast.severity == ToastSeverity::Error
        ));
        assert!(rx.try_recv().is_err());
    }
}

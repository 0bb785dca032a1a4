use std::sync::Arc;

use trackside_client::ApiClient;
use trackside_client::poller::PollHandle;
use trackside_viewmodel::feed::NotificationFeed;

/// The core application state shared across async tasks.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks. The notification/dashboard timers
/// each write disjoint parts of it; all mutation goes through the lock.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: trackside_bridge::config::Config,
    /// Shared typed client over a pooled HTTP connection.
    pub api: Arc<ApiClient>,
    /// The authoritative notification feed; the frontend holds a display
    /// mirror of it.
    pub feed: NotificationFeed,
    /// Handles of the running notification timers.
    pub notification_polls: Vec<PollHandle>,
    /// Handle of the dashboard refresh timer for the current selection, if
    /// any. Replaced (old one cancelled) when the selection changes.
    pub dashboard_poll: Option<PollHandle>,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;

//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the dashboard
//! frontend with an asynchronous backend responsible for REST polling,
//! view-model shaping, and the notification feed.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., refresh the dashboard, mark
//!   notifications as read, request config).
//! - The backend pushes events (e.g., shaped chart data, notification
//!   batches, toasts).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod notification;
pub mod performance;
pub mod toast;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or pushed
/// asynchronously by the polling timers (notification batches, counts).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all transient user-visible toasts.
    ToastMessage(toast::Toast),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// Shaped time-series data for the performance chart of one metric.
    TimeSeriesUpdate {
        /// Name of the metric the series were built from.
        metric_name: String,
        /// Chart-ready series sharing one x-axis.
        view: performance::TimeSeriesView,
    },
    /// Shaped per-athlete comparison rows for one metric.
    ComparisonUpdate {
        metric_name: String,
        rows: Vec<performance::ComparisonRow>,
    },
    /// Current unread notification count for the header badge.
    NotificationCountUpdate(u64),
    /// Newly fetched notifications, newest-first, not yet seen by the feed.
    NotificationBatch(Vec<notification::NotificationItem>),
    /// Full feed state after a read-state change, newest-first.
    NotificationFeedSnapshot(Vec<notification::NotificationItem>),
    /// Metric and athlete catalogs for the selected team.
    TeamCatalogResponse {
        metrics: Vec<performance::MetricInfo>,
        athletes: Vec<performance::AthleteInfo>,
    },
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request to (re-)fetch and shape the performance data for one team and
    /// metric. Sent on page load, selector changes, and date-range changes.
    DashboardRefreshRequest {
        team_id: String,
        metric_name: String,
        /// Restrict the series to the trailing N days when set.
        range_days: Option<u32>,
    },
    /// Request the metric and athlete catalogs for a team (report form).
    TeamCatalogRequest { team_id: String },
    /// Mark every notification as read.
    MarkAllReadRequest,
    /// Mark a single notification as read by its id.
    MarkNotificationReadRequest(String),
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}

use std::path::Path;

use tokio::sync::mpsc::{Receiver, Sender};
use trackside_bridge::toast::{Toast, ToastSeverity};
use trackside_bridge::{MessageFromBackend, MessageToBackend};

use crate::BackendBridge;
use crate::charts::console::ConsoleBackend;
use crate::charts::registry::ChartRenderer;
use crate::export::csv;
use crate::export::pdf::ReportExporter;
use crate::export::report::{self, ReportKind};
use crate::views::commands::UiCommand;
use crate::views::dashboard_page::{COMPARISON_SURFACE, DashboardPage, PERFORMANCE_SURFACE};
use crate::views::notifications_panel::NotificationsPanel;

/// Top-level UI state: one dashboard page, the notification area, the chart
/// registry they render through, and the report exporter.
struct RootView {
    dashboard: DashboardPage,
    notifications: NotificationsPanel,
    renderer: ChartRenderer<ConsoleBackend>,
    exporter: ReportExporter,
}

impl RootView {
    fn new() -> Self {
        Self {
            dashboard: DashboardPage::default(),
            notifications: NotificationsPanel::new(),
            renderer: ChartRenderer::new(ConsoleBackend::with_surfaces([
                PERFORMANCE_SURFACE,
                COMPARISON_SURFACE,
            ])),
            exporter: ReportExporter::without_pdf(),
        }
    }

    fn show_toast(&self, toast: Toast) {
        let class = toast.severity.style_class();
        match toast.severity {
            ToastSeverity::Error => log::error!("[toast:{class}] {}", toast.message),
            ToastSeverity::Warning => log::warn!("[toast:{class}] {}", toast.message),
            _ => log::info!("[toast:{class}] {}", toast.message),
        }
    }

    async fn handle_message(&mut self, bridge: &BackendBridge, message: MessageFromBackend) {
        match message {
            MessageFromBackend::ConfigurationResponse(config) => {
                // initial page load: fetch the configured default selection
                if let (Some(team), Some(metric)) = (
                    config.dashboard.default_team_id.clone(),
                    config.dashboard.default_metric.clone(),
                ) {
                    bridge
                        .refresh_dashboard(team, metric, Some(config.dashboard.range_days))
                        .await;
                }
            }
            MessageFromBackend::TimeSeriesUpdate { metric_name, view } => {
                self.dashboard
                    .apply_time_series(&mut self.renderer, metric_name, view);
            }
            MessageFromBackend::ComparisonUpdate { metric_name, rows } => {
                self.dashboard
                    .apply_comparison(&mut self.renderer, &metric_name, rows);
            }
            MessageFromBackend::NotificationCountUpdate(count) => {
                self.notifications.set_badge_count(count);
            }
            MessageFromBackend::NotificationBatch(batch) => {
                self.notifications.prepend_batch(batch);
            }
            MessageFromBackend::NotificationFeedSnapshot(items) => {
                self.notifications.replace_all(items);
            }
            MessageFromBackend::TeamCatalogResponse { metrics, athletes } => {
                self.dashboard.set_catalog(metrics, athletes);
            }
            MessageFromBackend::ToastMessage(toast) => self.show_toast(toast),
        }
    }

    async fn handle_command(&mut self, bridge: &BackendBridge, command: UiCommand) {
        match command {
            UiCommand::Refresh {
                team_id,
                metric_name,
                range_days,
            } => {
                bridge
                    .refresh_dashboard(team_id, metric_name, range_days)
                    .await;
            }
            UiCommand::TeamCatalog { team_id } => bridge.request_team_catalog(team_id).await,
            UiCommand::MarkAllRead => bridge.mark_all_read().await,
            UiCommand::MarkRead(id) => bridge.mark_notification_read(id).await,
            UiCommand::Filter(filter) => {
                self.notifications.set_filter(filter);
                for (icon, item) in self.notifications.visible_items() {
                    log::info!("[{icon}] {}: {}", item.kind.display_name(), item.message);
                }
            }
            UiCommand::ExportCsv(path) => match self.dashboard.export_table() {
                Some(table) => {
                    if let Err(error) = csv::write_csv(&table, &path) {
                        log::error!("CSV export failed: {error}");
                    }
                }
                None => log::warn!("Nothing to export yet"),
            },
            UiCommand::ExportPdf(path) => self.export_pdf(&path),
        }
    }

    /// Assembles the report from the rendered state and hands it to the PDF
    /// collaborator, if one is attached.
    fn export_pdf(&self, path: &Path) {
        let Some(table) = self.dashboard.export_table() else {
            log::warn!("Nothing to export yet");
            return;
        };
        let insights = self
            .dashboard
            .trend_summary()
            .map(|trend| vec![format!("Overall change: {trend}")])
            .unwrap_or_default();
        let document = report::build_document(
            ReportKind::TeamPerformance,
            self.dashboard.metric_name(),
            &trackside_viewmodel::stats::format_date(&chrono::Utc::now()),
            vec![(
                "Metric".to_string(),
                self.dashboard.metric_name().to_string(),
            )],
            table,
            self.renderer.snapshot_png(PERFORMANCE_SURFACE),
            insights,
            Vec::new(),
        );
        if let Err(error) = self.exporter.export_pdf(&document, path) {
            log::error!("PDF export failed: {error}");
        }
    }
}

/// Consumes backend messages and user commands until the bridge closes.
pub async fn run_event_loop(
    mut rx: Receiver<MessageFromBackend>,
    tx: Sender<MessageToBackend>,
    mut commands: Receiver<UiCommand>,
) {
    let bridge = BackendBridge { to_backend: tx };
    let mut view = RootView::new();
    let mut commands_open = true;

    bridge.request_config().await;
    loop {
        tokio::select! {
            message = rx.recv() => match message {
                Some(message) => {
                    log::debug!("Got a message from backend: {message:?}");
                    view.handle_message(&bridge, message).await;
                }
                None => break,
            },
            command = commands.recv(), if commands_open => match command {
                Some(command) => view.handle_command(&bridge, command).await,
                None => commands_open = false,
            },
        }
    }
}

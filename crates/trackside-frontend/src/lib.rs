//! Dashboard frontend: chart lifecycle, notification display, and report
//! export, driven entirely by bridge messages from the backend.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub mod charts;
pub mod export;
pub mod formatting;
pub mod views;

/// Frontend-side handle for issuing commands to the backend.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<trackside_bridge::MessageToBackend>,
}

impl BackendBridge {
    pub async fn request_config(&self) {
        self.to_backend
            .send(trackside_bridge::MessageToBackend::ConfigurationRequest)
            .await
            .expect("failed to request config");
    }

    pub async fn refresh_dashboard(
        &self,
        team_id: String,
        metric_name: String,
        range_days: Option<u32>,
    ) {
        self.to_backend
            .send(trackside_bridge::MessageToBackend::DashboardRefreshRequest {
                team_id,
                metric_name,
                range_days,
            })
            .await
            .expect("failed to request dashboard refresh");
    }

    pub async fn request_team_catalog(&self, team_id: String) {
        self.to_backend
            .send(trackside_bridge::MessageToBackend::TeamCatalogRequest { team_id })
            .await
            .expect("failed to request team catalog");
    }

    pub async fn mark_all_read(&self) {
        self.to_backend
            .send(trackside_bridge::MessageToBackend::MarkAllReadRequest)
            .await
            .expect("failed to request mark-all-read");
    }

    pub async fn mark_notification_read(&self, id: String) {
        self.to_backend
            .send(trackside_bridge::MessageToBackend::MarkNotificationReadRequest(id))
            .await
            .expect("failed to request mark-read");
    }
}

/// Feeds commands typed on standard input into the event loop, one per
/// line, until stdin closes.
async fn read_commands(tx: mpsc::Sender<views::UiCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match views::parse_command(&line) {
            Some(command) => {
                if tx.send(command).await.is_err() {
                    break;
                }
            }
            None => {
                if !line.trim().is_empty() {
                    log::warn!("Unrecognized command: {line:?}");
                }
            }
        }
    }
}

/// Runs the frontend event loop until the backend closes the bridge.
pub fn run(
    rx: mpsc::Receiver<trackside_bridge::MessageFromBackend>,
    tx: mpsc::Sender<trackside_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(8);
        tokio::spawn(read_commands(command_tx));
        views::run_event_loop(rx, tx, command_rx).await;
    });
    Ok(())
}

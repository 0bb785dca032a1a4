use std::time::Duration;

use chrono::NaiveDate;
use trackside_bridge::MessageFromBackend;
use trackside_bridge::performance::PerformanceRow;
use trackside_client::poller;
use trackside_viewmodel::comparison::{latest_by_athlete, to_comparison_rows};
use trackside_viewmodel::series::performance_time_series;

/// Drops rows older than the trailing `range_days` window ending at `today`.
/// Rows with unparsable dates are dropped too; they cannot be placed on the
/// axis.
fn clip_to_range(rows: Vec<PerformanceRow>, range_days: u32, today: NaiveDate) -> Vec<PerformanceRow> {
    let cutoff = today - chrono::Duration::days(i64::from(range_days));
    rows.into_iter()
        .filter(|row| match NaiveDate::parse_from_str(&row.date, "%Y-%m-%d") {
            Ok(date) => date >= cutoff,
            Err(_) => {
                log::debug!("Dropping row with unparsable date {:?}", row.date);
                false
            }
        })
        .collect()
}

/// Shapes fetched rows into view-models and pushes them to the frontend.
async fn publish(
    context: &super::AppContextHandle,
    metric_name: &str,
    mut rows: Vec<PerformanceRow>,
    range_days: Option<u32>,
) {
    if let Some(days) = range_days {
        rows = clip_to_range(rows, days, chrono::Utc::now().date_naive());
    }

    let highlight = {
        let state = context.state.read().await;
        state.config.dashboard.highlight_subject.clone()
    };

    let view = performance_time_series(&rows);
    let subjects = latest_by_athlete(&rows);
    let comparison = to_comparison_rows(&subjects, highlight.as_deref());

    context
        .send(MessageFromBackend::TimeSeriesUpdate {
            metric_name: metric_name.to_string(),
            view,
        })
        .await;
    context
        .send(MessageFromBackend::ComparisonUpdate {
            metric_name: metric_name.to_string(),
            rows: comparison,
        })
        .await;
}

/// Handles a dashboard refresh request (see
/// [`trackside_bridge::MessageToBackend::DashboardRefreshRequest`]).
///
/// A new selection replaces the refresh timer of the previous one; the new
/// timer's first tick fires immediately and serves as the initial load. With
/// periodic refresh disabled the fetch happens once, here.
pub async fn handle_refresh(
    context: super::AppContextHandle,
    team_id: String,
    metric_name: String,
    range_days: Option<u32>,
) {
    let (api, interval_secs) = {
        let state = context.state.read().await;
        (state.api.clone(), state.config.polling.dashboard_interval_secs)
    };

    let previous = {
        let mut state = context.state.write().await;
        state.dashboard_poll.take()
    };
    if let Some(handle) = previous {
        // any in-flight result of the old selection is discarded
        handle.cancel();
    }

    if interval_secs == 0 {
        match api.performance_data(&team_id, &metric_name).await {
            Ok(rows) => publish(&context, &metric_name, rows, range_days).await,
            Err(error) => {
                log::error!("Dashboard refresh failed, keeping last data: {error}");
            }
        }
        return;
    }

    let fetch_api = api.clone();
    let fetch_team = team_id.clone();
    let fetch_metric = metric_name.clone();
    let (handle, mut rx) = poller::start(Duration::from_secs(interval_secs), move || {
        let api = fetch_api.clone();
        let team = fetch_team.clone();
        let metric = fetch_metric.clone();
        async move { api.performance_data(&team, &metric).await }
    });

    {
        let mut state = context.state.write().await;
        state.dashboard_poll = Some(handle);
    }

    let consumer = context.clone();
    tokio::spawn(async move {
        while let Some(outcome) = rx.recv().await {
            match outcome {
                Ok(rows) => publish(&consumer, &metric_name, rows, range_days).await,
                Err(error) => {
                    log::error!("Dashboard refresh failed, keeping last data: {error}");
                }
            }
        }
    });
}

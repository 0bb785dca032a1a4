use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use trackside_bridge::config::ServerConfig;
use trackside_bridge::notification::NotificationItem;
use trackside_bridge::performance::{AthleteInfo, MetricInfo, PerformanceRow};

use crate::NetworkError;

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct NotificationsResponse {
    notifications: Vec<NotificationItem>,
}

#[derive(Debug, Deserialize)]
struct AckResponse {
    success: bool,
}

/// Typed client for the tracker's JSON API surface.
///
/// Role-scoped paths (notifications, performance data) are derived from the
/// configured [`trackside_bridge::config::Role`]; nothing here inspects
/// ambient state. The underlying [`reqwest::Client`] pools connections, so
/// the type is cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    role_segment: &'static str,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, server: &ServerConfig) -> Self {
        Self {
            http,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            role_segment: server.role.path_segment(),
            auth_token: server.auth_token.clone(),
        }
    }

    /// URL of an endpoint under the configured role scope.
    fn role_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.role_segment, path)
    }

    /// URL of an unscoped endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Executes a prepared request and decodes its JSON body.
    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, NetworkError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
            });
        }
        response.json::<T>().await.map_err(NetworkError::from)
    }

    /// One-shot GET of an arbitrary API path, decoded as `T`.
    pub async fn fetch_once<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetworkError> {
        self.execute_json(self.http.get(self.url(path))).await
    }

    /// POST to a role-scoped path, attaching the session token as a CSRF
    /// header when one is configured. Write requests only.
    async fn post_acknowledged(&self, url: String) -> Result<bool, NetworkError> {
        let mut request = self.http.post(url);
        if let Some(token) = &self.auth_token {
            request = request.header("X-CSRFToken", token);
        }
        let ack: AckResponse = self.execute_json(request).await?;
        Ok(ack.success)
    }

    /// `GET /{role}/api/notification_count`
    pub async fn notification_count(&self) -> Result<u64, NetworkError> {
        let response: CountResponse = self
            .execute_json(self.http.get(self.role_url("api/notification_count")))
            .await?;
        Ok(response.count)
    }

    /// `GET /{role}/api/new_notifications?since={timestamp}` — only items
    /// newer than `since`, filtered server-side.
    pub async fn new_notifications(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<NotificationItem>, NetworkError> {
        let request = self
            .http
            .get(self.role_url("api/new_notifications"))
            .query(&[("since", since.to_rfc3339())]);
        let response: NotificationsResponse = self.execute_json(request).await?;
        Ok(response.notifications)
    }

    /// `POST /{role}/api/mark_all_read` — returns whether the server
    /// acknowledged the write.
    pub async fn mark_all_read(&self) -> Result<bool, NetworkError> {
        self.post_acknowledged(self.role_url("api/mark_all_read"))
            .await
    }

    /// `POST /{role}/api/mark_read/{id}` for a single notification.
    pub async fn mark_notification_read(&self, id: &str) -> Result<bool, NetworkError> {
        self.post_acknowledged(self.role_url(&format!("api/mark_read/{id}")))
            .await
    }

    /// `GET /coach/api/performance_data/{team}/{metric}` — raw measurement
    /// rows for one team and metric.
    pub async fn performance_data(
        &self,
        team_id: &str,
        metric_name: &str,
    ) -> Result<Vec<PerformanceRow>, NetworkError> {
        let url = self.url(&format!("coach/api/performance_data/{team_id}/{metric_name}"));
        self.execute_json(self.http.get(url)).await
    }

    /// `GET /api/teams/{team}/metrics`
    pub async fn team_metrics(&self, team_id: &str) -> Result<Vec<MetricInfo>, NetworkError> {
        self.fetch_once(&format!("api/teams/{team_id}/metrics"))
            .await
    }

    /// `GET /api/teams/{team}/athletes`
    pub async fn team_athletes(&self, team_id: &str) -> Result<Vec<AthleteInfo>, NetworkError> {
        self.fetch_once(&format!("api/teams/{team_id}/athletes"))
            .await
    }
}

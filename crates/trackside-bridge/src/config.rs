use serde::{Deserialize, Serialize};

/// The role the signed-in user acts as. Role-scoped REST paths (notification
/// count, feed, mark-read) are built from this value; it is part of the
/// explicit configuration instead of being sniffed from ambient UI state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Coach,
    Athlete,
}

impl Role {
    /// The path segment role-scoped endpoints are mounted under.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Role::Coach => "coach",
            Role::Athlete => "athlete",
        }
    }
}

/// Where and as whom the client talks to the tracker server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the tracker server, without a trailing slash.
    pub base_url: String,
    /// Role determining which scoped API surface is used.
    pub role: Role,
    /// Session token attached to write requests as a CSRF header, if any.
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            role: Role::default(),
            auth_token: None,
        }
    }
}

/// Intervals for the background polling timers. A zero interval disables the
/// corresponding timer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    /// Seconds between notification count/feed polls.
    pub notification_interval_secs: u64,
    /// Seconds between automatic dashboard data refreshes.
    pub dashboard_interval_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            notification_interval_secs: 60,
            dashboard_interval_secs: 300,
        }
    }
}

/// What the dashboard shows before the user touches any selector.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Team whose data is loaded on startup, if any.
    pub default_team_id: Option<String>,
    /// Metric charted on startup, if any.
    pub default_metric: Option<String>,
    /// Subject name highlighted in comparison charts (the athlete's own name
    /// when running in the athlete role).
    pub highlight_subject: Option<String>,
    /// Default trailing window for time-series charts, in days.
    pub range_days: u32,
}

/// Where exported report artifacts are written.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Output directory for CSV/PDF downloads. Defaults to the current
    /// working directory when unset.
    pub output_dir: Option<std::path::PathBuf>,
}

/// Global application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server connection and role settings.
    pub server: ServerConfig,
    /// Background polling intervals.
    pub polling: PollingConfig,
    /// Initial dashboard selection.
    pub dashboard: DashboardConfig,
    /// Report export settings.
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            polling: PollingConfig::default(),
            dashboard: DashboardConfig {
                range_days: 30,
                ..DashboardConfig::default()
            },
            export: ExportConfig::default(),
        }
    }
}

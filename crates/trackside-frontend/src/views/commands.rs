//! Line-oriented commands driving the dashboard.
//!
//! The binary reads these from standard input, one per line; each maps to a
//! user action the page widgets would otherwise trigger (selector changes,
//! mark-read buttons, feed filter tabs, export downloads).

use std::path::PathBuf;

use trackside_bridge::notification::NotificationKind;
use trackside_viewmodel::feed::FeedFilter;

/// A user action addressed to the running dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// `refresh <team> <metric> [days]`: change the dashboard selection.
    Refresh {
        team_id: String,
        metric_name: String,
        range_days: Option<u32>,
    },
    /// `catalog <team>`: reload the selector catalogs for a team.
    TeamCatalog { team_id: String },
    /// `mark-all-read`
    MarkAllRead,
    /// `mark-read <id>`
    MarkRead(String),
    /// `filter all|unread|performance|team|milestone`
    Filter(FeedFilter),
    /// `export-csv <path>`: write the rendered table as CSV.
    ExportCsv(PathBuf),
    /// `export-pdf <path>`: assemble and write the report document.
    ExportPdf(PathBuf),
}

/// Parses one input line. `None` for anything unrecognized, including
/// trailing junk after a complete command.
pub fn parse_command(line: &str) -> Option<UiCommand> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "refresh" => {
            let team_id = words.next()?.to_string();
            let metric_name = words.next()?.to_string();
            let range_days = match words.next() {
                Some(word) => Some(word.parse().ok()?),
                None => None,
            };
            UiCommand::Refresh {
                team_id,
                metric_name,
                range_days,
            }
        }
        "catalog" => UiCommand::TeamCatalog {
            team_id: words.next()?.to_string(),
        },
        "mark-all-read" => UiCommand::MarkAllRead,
        "mark-read" => UiCommand::MarkRead(words.next()?.to_string()),
        "filter" => UiCommand::Filter(match words.next()? {
            "all" => FeedFilter::All,
            "unread" => FeedFilter::Unread,
            "performance" => FeedFilter::Kind(NotificationKind::PerformanceUpdate),
            "team" => FeedFilter::Kind(NotificationKind::TeamAddition),
            "milestone" => FeedFilter::Kind(NotificationKind::Milestone),
            _ => return None,
        }),
        "export-csv" => UiCommand::ExportCsv(PathBuf::from(words.next()?)),
        "export-pdf" => UiCommand::ExportPdf(PathBuf::from(words.next()?)),
        _ => return None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

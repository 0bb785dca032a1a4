use serde::{Deserialize, Serialize};

/// One raw performance measurement as served by
/// `GET /coach/api/performance_data/{team}/{metric}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PerformanceRow {
    pub athlete: String,
    /// Measurement date, `YYYY-MM-DD`.
    pub date: String,
    pub value: f64,
}

/// A metric name entry from the team metric catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricInfo {
    pub name: String,
}

/// An athlete entry from the team roster catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AthleteInfo {
    pub id: String,
    pub name: String,
}

/// One (x, y) sample of a series. A `None` value is a gap in the data for
/// that x-axis slot, not a zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub timestamp: String,
    pub value: Option<f64>,
}

/// One named sequence of points rendered as one visual trace.
///
/// Points are ordered by timestamp ascending and no two points share a
/// timestamp within one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    pub label: String,
    pub points: Vec<DataPoint>,
}

/// A set of series shaped onto one shared x-axis: every series holds exactly
/// one point (possibly a gap) per axis entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesView {
    /// Sorted union of the distinct x values of every series.
    pub axis: Vec<String>,
    pub series: Vec<MetricSeries>,
}

impl TimeSeriesView {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// One subject's value in a bar/radar comparison. Display order is the input
/// order; it is never re-sorted downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub subject_name: String,
    pub value: f64,
    /// Whether this row is the currently signed-in subject, drawn in the
    /// fixed highlight color instead of the stepped palette.
    pub is_highlighted: bool,
}

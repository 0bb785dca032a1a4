//! Report form state and document assembly.

use chrono::{Duration, NaiveDate};
use trackside_bridge::performance::TimeSeriesView;

use crate::export::csv::TableState;
use crate::export::pdf::{ReportDocument, ReportSection};

/// The report variants the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    TeamPerformance,
    AthleteComparison,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::TeamPerformance => "Team Performance Report",
            ReportKind::AthleteComparison => "Athlete Comparison Report",
        }
    }

    /// Which optional form fields apply to this report kind.
    pub fn needs_athlete_field(&self) -> bool {
        matches!(self, ReportKind::AthleteComparison)
    }
}

/// Default date range for a new report form: the trailing 30 days through
/// today.
pub fn default_date_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(30), today)
}

/// Captures a rendered time-series view as an exportable table, one row per
/// (series, axis slot) pair that actually has a value.
pub fn series_table(view: &TimeSeriesView) -> TableState {
    let mut rows = Vec::new();
    for series in &view.series {
        for point in &series.points {
            if let Some(value) = point.value {
                rows.push(vec![
                    series.label.clone(),
                    point.timestamp.clone(),
                    format!("{value}"),
                ]);
            }
        }
    }
    TableState {
        columns: vec!["athlete".into(), "date".into(), "value".into()],
        rows,
    }
}

/// Assembles the multi-section document for a report from rendered state.
pub fn build_document(
    kind: ReportKind,
    subtitle: &str,
    generated_on: &str,
    parameters: Vec<(String, String)>,
    table: TableState,
    chart_png: Option<Vec<u8>>,
    insights: Vec<String>,
    recommendations: Vec<String>,
) -> ReportDocument {
    let data_heading = match kind {
        ReportKind::TeamPerformance => "Performance Data",
        ReportKind::AthleteComparison => "Athlete Comparison",
    };

    let mut sections = vec![ReportSection::Table {
        heading: data_heading.to_string(),
        table,
    }];
    if let Some(png) = chart_png {
        sections.push(ReportSection::Chart {
            heading: match kind {
                ReportKind::TeamPerformance => "Performance Chart".to_string(),
                ReportKind::AthleteComparison => "Comparison Chart".to_string(),
            },
            png,
        });
    }
    if !insights.is_empty() {
        sections.push(ReportSection::BulletList {
            heading: "Performance Insights".to_string(),
            items: insights,
        });
    }
    if !recommendations.is_empty() {
        sections.push(ReportSection::BulletList {
            heading: "Recommendations".to_string(),
            items: recommendations,
        });
    }

    ReportDocument {
        title: kind.title().to_string(),
        subtitle: subtitle.to_string(),
        generated_on: generated_on.to_string(),
        parameters,
        sections,
        footer: "Generated by Trackside".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use trackside_bridge::performance::{DataPoint, MetricSeries};

    use super::*;

    #[test]
    fn default_range_is_the_trailing_thirty_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let (from, to) = default_date_range(today);
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(to, today);
    }

    #[test]
    fn series_table_skips_gaps() {
        let view = TimeSeriesView {
            axis: vec!["2024-01-01".into(), "2024-01-02".into()],
            series: vec![MetricSeries {
                label: "Ada".into(),
                points: vec![
                    DataPoint {
                        timestamp: "2024-01-01".into(),
                        value: Some(10.0),
                    },
                    DataPoint {
                        timestamp: "2024-01-02".into(),
                        value: None,
                    },
                ],
            }],
        };
        let table = series_table(&view);
        assert_eq!(table.columns, ["athlete", "date", "value"]);
        assert_eq!(table.rows, vec![vec![
            "Ada".to_string(),
            "2024-01-01".to_string(),
            "10".to_string(),
        ]]);
    }

    #[test]
    fn document_sections_follow_the_report_layout() {
        let document = build_document(
            ReportKind::TeamPerformance,
            "Relay Squad",
            "2024-03-31",
            vec![("Report Type".into(), "Team Performance".into())],
            TableState {
                columns: vec!["athlete".into()],
                rows: vec![vec!["Ada".into()]],
            },
            Some(vec![1, 2, 3]),
            vec!["improving".into()],
            vec![],
        );

        assert_eq!(document.title, "Team Performance Report");
        assert_eq!(document.sections.len(), 3);
        assert!(matches!(
            document.sections[0],
            ReportSection::Table { ref heading, .. } if heading == "Performance Data"
        ));
        assert!(matches!(document.sections[1], ReportSection::Chart { .. }));
    }

    #[test]
    fn athlete_field_only_applies_to_comparison_reports() {
        assert!(!ReportKind::TeamPerformance.needs_athlete_field());
        assert!(ReportKind::AthleteComparison.needs_athlete_field());
    }
}

//! Renderer-neutral chart descriptions.
//!
//! Each builder implements the fixed mapping from one view-model shape to
//! the labels-plus-datasets structure the rendering collaborator expects.
//! Colors come from the deterministic stepped palette so the same input
//! always produces the same visuals; the highlighted subject always gets the
//! fixed teal instead of a palette slot.

use trackside_bridge::performance::{ComparisonRow, TimeSeriesView};
use trackside_viewmodel::color::{self, HIGHLIGHT_BORDER, HIGHLIGHT_FILL};
use trackside_viewmodel::stats::percent_change;

/// Radius used for every bubble in a cluster chart.
const BUBBLE_RADIUS: f64 = 10.0;

/// `"name (unit)"`, or just the name when no unit is known.
fn unit_label(name: &str, unit: &str) -> String {
    if unit.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({unit})")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    BarVertical,
    BarHorizontal,
    Radar,
    Doughnut,
    Bubble,
}

/// One bubble: a subject positioned by two chosen metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// The values of one dataset. Bubble charts carry positioned points; every
/// other kind carries one value (or gap) per axis label.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetData {
    Values(Vec<Option<f64>>),
    Points(Vec<BubblePoint>),
}

impl DatasetData {
    pub fn len(&self) -> usize {
        match self {
            DatasetData::Values(values) => values.len(),
            DatasetData::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One visual trace within a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: DatasetData,
    /// Fill color per trace, or per slice/bar when `per_point_fill` is set.
    pub fill: String,
    pub border: String,
    pub border_width: u8,
    /// Per-element colors for charts that color each bar/slice individually.
    pub per_point_fill: Option<Vec<String>>,
}

/// A complete renderer-ready chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: Option<String>,
    /// Axis (or arc/spoke) labels shared by every dataset.
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// An empty spec hides its surface instead of rendering.
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|dataset| dataset.data.is_empty())
    }
}

/// Per-point change annotations for a line chart tooltip: `None` for the
/// first point and for gaps, a signed percentage for the rest.
pub fn change_annotations(values: &[Option<f64>]) -> Vec<Option<String>> {
    let mut previous: Option<f64> = None;
    values
        .iter()
        .map(|value| {
            let annotation = match (previous, value) {
                (Some(old), Some(new)) => {
                    Some(crate::formatting::signed_percent(percent_change(old, *new)))
                }
                _ => None,
            };
            if value.is_some() {
                previous = *value;
            }
            annotation
        })
        .collect()
}

/// Line chart: series over one shared time axis. A single series keeps the
/// fixed teal of the original dashboard; multiple series step the palette.
pub fn line_chart(metric_name: &str, unit: &str, view: &TimeSeriesView) -> ChartSpec {
    let single = view.series.len() == 1;
    let datasets = view
        .series
        .iter()
        .enumerate()
        .map(|(index, series)| {
            let (fill, border) = if single {
                ("rgba(75, 192, 192, 0.2)".to_string(), HIGHLIGHT_BORDER.to_string())
            } else {
                let color = color::assign_color(index);
                (color.rgba(0.2), color.rgb())
            };
            Dataset {
                label: unit_label(&series.label, unit),
                data: DatasetData::Values(series.points.iter().map(|p| p.value).collect()),
                fill,
                border,
                border_width: 2,
                per_point_fill: None,
            }
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Line,
        title: Some(metric_name.to_string()),
        labels: view.axis.clone(),
        datasets,
    }
}

/// Vertical bar chart comparing subjects on one metric. Bars are colored per
/// subject, the highlighted subject in teal.
pub fn comparison_bar_chart(metric_name: &str, unit: &str, rows: &[ComparisonRow]) -> ChartSpec {
    let fills = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            if row.is_highlighted {
                HIGHLIGHT_FILL.to_string()
            } else {
                color::assign_color(index).rgba(0.7)
            }
        })
        .collect();

    ChartSpec {
        kind: ChartKind::BarVertical,
        title: Some(unit_label(metric_name, unit)),
        labels: rows.iter().map(|row| row.subject_name.clone()).collect(),
        datasets: vec![Dataset {
            label: unit_label(metric_name, unit),
            data: DatasetData::Values(rows.iter().map(|row| Some(row.value)).collect()),
            fill: String::new(),
            border: String::new(),
            border_width: 1,
            per_point_fill: Some(fills),
        }],
    }
}

/// One category (team) with the comparison rows of its subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRows {
    pub category: String,
    pub rows: Vec<ComparisonRow>,
}

/// Horizontal bar chart with one dataset per subject across categories.
/// Subjects a category has no row for get a gap there.
pub fn category_comparison_chart(metric_name: &str, categories: &[CategoryRows]) -> ChartSpec {
    // union of subjects, first-appearance order
    let mut subjects: Vec<&str> = Vec::new();
    for category in categories {
        for row in &category.rows {
            if !subjects.contains(&row.subject_name.as_str()) {
                subjects.push(&row.subject_name);
            }
        }
    }

    let datasets = subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| {
            let color = color::assign_color(index);
            Dataset {
                label: subject.to_string(),
                data: DatasetData::Values(
                    categories
                        .iter()
                        .map(|category| {
                            category
                                .rows
                                .iter()
                                .find(|row| row.subject_name == **subject)
                                .map(|row| row.value)
                        })
                        .collect(),
                ),
                fill: color.rgba(0.7),
                border: color.rgb(),
                border_width: 1,
                per_point_fill: None,
            }
        })
        .collect();

    ChartSpec {
        kind: ChartKind::BarHorizontal,
        title: Some(format!("{metric_name} Comparison Across Teams")),
        labels: categories.iter().map(|c| c.category.clone()).collect(),
        datasets,
    }
}

/// One subject with its value per metric, for radar charts.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectMetrics {
    pub name: String,
    pub is_highlighted: bool,
    /// `(metric name, value)` pairs; missing metrics render as zero spokes.
    pub values: Vec<(String, f64)>,
}

/// Radar chart: spokes are metric names, one dataset per subject. The
/// highlighted subject gets a thicker border.
pub fn radar_chart(metric_names: &[String], subjects: &[SubjectMetrics]) -> ChartSpec {
    let datasets = subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| {
            let color = color::assign_color(index);
            Dataset {
                label: subject.name.clone(),
                data: DatasetData::Values(
                    metric_names
                        .iter()
                        .map(|metric| {
                            let value = subject
                                .values
                                .iter()
                                .find(|(name, _)| name == metric)
                                .map(|(_, value)| *value)
                                .unwrap_or(0.0);
                            Some(value)
                        })
                        .collect(),
                ),
                fill: color.rgba(0.2),
                border: color.rgb(),
                border_width: if subject.is_highlighted { 3 } else { 2 },
                per_point_fill: None,
            }
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Radar,
        title: None,
        labels: metric_names.to_vec(),
        datasets,
    }
}

/// A named count for distribution doughnuts.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceCount {
    pub name: String,
    pub count: u64,
}

/// Doughnut chart of proportional arcs, one palette slot per slice.
pub fn distribution_chart(title: &str, slices: &[SliceCount]) -> ChartSpec {
    let fills = (0..slices.len())
        .map(|index| color::assign_color(index).rgb())
        .collect();

    ChartSpec {
        kind: ChartKind::Doughnut,
        title: Some(title.to_string()),
        labels: slices.iter().map(|slice| slice.name.clone()).collect(),
        datasets: vec![Dataset {
            label: title.to_string(),
            data: DatasetData::Values(
                slices.iter().map(|slice| Some(slice.count as f64)).collect(),
            ),
            fill: String::new(),
            border: "rgba(30, 30, 30, 1)".to_string(),
            border_width: 1,
            per_point_fill: Some(fills),
        }],
    }
}

/// A subject positioned by two chosen metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterPoint {
    pub subject: String,
    pub x: f64,
    pub y: f64,
}

/// Bubble chart of performance clusters: one dataset per subject, constant
/// radius.
pub fn cluster_chart(x_metric: &str, y_metric: &str, points: &[ClusterPoint]) -> ChartSpec {
    let datasets = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let color = color::assign_color(index);
            Dataset {
                label: point.subject.clone(),
                data: DatasetData::Points(vec![BubblePoint {
                    x: point.x,
                    y: point.y,
                    radius: BUBBLE_RADIUS,
                }]),
                fill: color.rgba(0.7),
                border: color.rgb(),
                border_width: 1,
                per_point_fill: None,
            }
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Bubble,
        title: Some(format!("{x_metric} vs {y_metric}")),
        labels: Vec::new(),
        datasets,
    }
}

#[cfg(test)]
mod tests {
    use trackside_bridge::performance::{DataPoint, MetricSeries};

    use super::*;

    fn view() -> TimeSeriesView {
        TimeSeriesView {
            axis: vec!["2024-01-01".into(), "2024-01-02".into()],
            series: vec![
                MetricSeries {
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
                },
                MetricSeries {
                    label: "Ben".into(),
                    points: vec![
                        DataPoint {
                            timestamp: "2024-01-01".into(),
                            value: None,
                        },
                        DataPoint {
                            timestamp: "2024-01-02".into(),
                            value: Some(20.0),
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn line_chart_keeps_axis_and_gaps() {
        let spec = line_chart("Sprint Time", "s", &view());
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.labels, ["2024-01-01", "2024-01-02"]);
        assert_eq!(spec.datasets.len(), 2);
        assert_eq!(
            spec.datasets[0].data,
            DatasetData::Values(vec![Some(10.0), None])
        );
        assert_eq!(
            spec.datasets[1].data,
            DatasetData::Values(vec![None, Some(20.0)])
        );
        assert!(!spec.is_empty());
    }

    #[test]
    fn multi_series_line_chart_steps_the_palette() {
        let spec = line_chart("Sprint Time", "s", &view());
        assert_eq!(spec.datasets[0].border, "hsl(0, 70%, 60%)");
        assert_eq!(spec.datasets[1].border, "hsl(137, 70%, 60%)");
    }

    #[test]
    fn comparison_bars_highlight_the_current_subject_in_teal() {
        let rows = [
            ComparisonRow {
                subject_name: "Ada".into(),
                value: 11.0,
                is_highlighted: false,
            },
            ComparisonRow {
                subject_name: "Ben".into(),
                value: 12.0,
                is_highlighted: true,
            },
        ];
        let spec = comparison_bar_chart("Sprint Time", "s", &rows);
        let fills = spec.datasets[0].per_point_fill.as_ref().unwrap();
        assert_eq!(fills[0], "hsla(0, 70%, 60%, 0.7)");
        assert_eq!(fills[1], HIGHLIGHT_FILL);
        assert_eq!(spec.labels, ["Ada", "Ben"]);
    }

    #[test]
    fn category_comparison_unions_subjects_with_gaps() {
        let categories = [
            CategoryRows {
                category: "Sprinters".into(),
                rows: vec![ComparisonRow {
                    subject_name: "Ada".into(),
                    value: 1.0,
                    is_highlighted: false,
                }],
            },
            CategoryRows {
                category: "Relay".into(),
                rows: vec![ComparisonRow {
                    subject_name: "Ben".into(),
                    value: 2.0,
                    is_highlighted: false,
                }],
            },
        ];
        let spec = category_comparison_chart("Sprint Time", &categories);
        assert_eq!(spec.kind, ChartKind::BarHorizontal);
        assert_eq!(spec.labels, ["Sprinters", "Relay"]);
        assert_eq!(spec.datasets.len(), 2);
        assert_eq!(
            spec.datasets[0].data,
            DatasetData::Values(vec![Some(1.0), None])
        );
        assert_eq!(
            spec.datasets[1].data,
            DatasetData::Values(vec![None, Some(2.0)])
        );
    }

    #[test]
    fn radar_fills_missing_metrics_with_zero_and_thickens_highlight() {
        let metrics = vec!["Speed".to_string(), "Stamina".to_string()];
        let subjects = [SubjectMetrics {
            name: "Ada".into(),
            is_highlighted: true,
            values: vec![("Speed".into(), 8.5)],
        }];
        let spec = radar_chart(&metrics, &subjects);
        assert_eq!(
            spec.datasets[0].data,
            DatasetData::Values(vec![Some(8.5), Some(0.0)])
        );
        assert_eq!(spec.datasets[0].border_width, 3);
    }

    #[test]
    fn bubbles_use_a_constant_radius() {
        let points = [ClusterPoint {
            subject: "Ada".into(),
            x: 3.0,
            y: 4.0,
        }];
        let spec = cluster_chart("Speed", "Stamina", &points);
        match &spec.datasets[0].data {
            DatasetData::Points(points) => {
                assert_eq!(points[0].radius, 10.0);
                assert_eq!((points[0].x, points[0].y), (3.0, 4.0));
            }
            other => panic!("expected points, got {other:?}"),
        }
    }

    #[test]
    fn empty_view_builds_an_empty_spec() {
        let empty = TimeSeriesView {
            axis: Vec::new(),
            series: Vec::new(),
        };
        assert!(line_chart("Sprint Time", "s", &empty).is_empty());
        assert!(comparison_bar_chart("Sprint Time", "s", &[]).is_empty());
    }

    #[test]
    fn change_annotations_skip_first_point_and_gaps() {
        let values = [Some(100.0), Some(150.0), None, Some(75.0)];
        let notes = change_annotations(&values);
        assert_eq!(notes[0], None);
        assert_eq!(notes[1].as_deref(), Some("+50.0%"));
        assert_eq!(notes[2], None);
        // change measured against the last real value (150), not the gap
        assert_eq!(notes[3].as_deref(), Some("-50.0%"));
    }
}

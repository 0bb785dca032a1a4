use trackside_bridge::performance::{AthleteInfo, ComparisonRow, MetricInfo, TimeSeriesView};

use crate::charts::console::ConsoleBackend;
use crate::charts::registry::{ChartRenderer, RenderError};
use crate::charts::spec;
use crate::export::csv::TableState;
use crate::export::report;

/// Surface id of the metric-over-time line chart.
pub const PERFORMANCE_SURFACE: &str = "performanceChart";
/// Surface id of the per-athlete comparison bar chart.
pub const COMPARISON_SURFACE: &str = "comparisonChart";

/// State of the main dashboard page: the currently rendered view-models and
/// the team catalogs backing the selectors.
#[derive(Default)]
pub struct DashboardPage {
    metric_name: String,
    time_series: Option<TimeSeriesView>,
    comparison: Vec<ComparisonRow>,
    metrics: Vec<MetricInfo>,
    athletes: Vec<AthleteInfo>,
}

impl DashboardPage {
    /// Applies freshly shaped series data and re-renders the line chart.
    /// Missing surfaces are expected on pages without that widget.
    pub fn apply_time_series(
        &mut self,
        renderer: &mut ChartRenderer<ConsoleBackend>,
        metric_name: String,
        view: TimeSeriesView,
    ) {
        let chart = spec::line_chart(&metric_name, "", &view);
        self.metric_name = metric_name;
        self.time_series = Some(view);
        if let Err(RenderError::SurfaceNotFound(id)) = renderer.render(PERFORMANCE_SURFACE, &chart)
        {
            log::debug!("Surface {id:?} not present, skipping render");
        }
    }

    /// Applies freshly shaped comparison rows and re-renders the bar chart.
    pub fn apply_comparison(
        &mut self,
        renderer: &mut ChartRenderer<ConsoleBackend>,
        metric_name: &str,
        rows: Vec<ComparisonRow>,
    ) {
        let chart = spec::comparison_bar_chart(metric_name, "", &rows);
        self.comparison = rows;
        if let Err(RenderError::SurfaceNotFound(id)) = renderer.render(COMPARISON_SURFACE, &chart) {
            log::debug!("Surface {id:?} not present, skipping render");
        }
    }

    /// Replaces the selector catalogs after a team change.
    pub fn set_catalog(&mut self, metrics: Vec<MetricInfo>, athletes: Vec<AthleteInfo>) {
        log::info!(
            "Team catalog updated: {} metric(s), {} athlete(s)",
            metrics.len(),
            athletes.len()
        );
        self.metrics = metrics;
        self.athletes = athletes;
    }

    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    pub fn metrics(&self) -> &[MetricInfo] {
        &self.metrics
    }

    pub fn athletes(&self) -> &[AthleteInfo] {
        &self.athletes
    }

    /// The currently rendered series as an exportable table.
    pub fn export_table(&self) -> Option<TableState> {
        self.time_series.as_ref().map(report::series_table)
    }

    /// Overall trend of the first series, first to last real value, as a
    /// signed percentage for the stat card.
    pub fn trend_summary(&self) -> Option<String> {
        let series = self.time_series.as_ref()?.series.first()?;
        let mut values = series.points.iter().filter_map(|point| point.value);
        let first = values.next()?;
        let last = values.last().unwrap_or(first);
        Some(crate::formatting::signed_percent(
            trackside_viewmodel::stats::percent_change(first, last),
        ))
    }
}

#[cfg(test)]
mod tests {
    use trackside_bridge::performance::{DataPoint, MetricSeries};

    use super::*;

    fn renderer() -> ChartRenderer<ConsoleBackend> {
        ChartRenderer::new(ConsoleBackend::with_surfaces([
            PERFORMANCE_SURFACE,
            COMPARISON_SURFACE,
        ]))
    }

    fn view() -> TimeSeriesView {
        TimeSeriesView {
            axis: vec!["2024-01-01".into(), "2024-01-05".into()],
            series: vec![MetricSeries {
                label: "Ada".into(),
                points: vec![
                    DataPoint {
                        timestamp: "2024-01-01".into(),
                        value: Some(100.0),
                    },
                    DataPoint {
                        timestamp: "2024-01-05".into(),
                        value: Some(150.0),
                    },
                ],
            }],
        }
    }

    #[test]
    fn refresh_replaces_the_chart_instance() {
        let mut renderer = renderer();
        let mut page = DashboardPage::default();

        page.apply_time_series(&mut renderer, "Sprint Time".into(), view());
        page.apply_time_series(&mut renderer, "Sprint Time".into(), view());

        assert_eq!(renderer.live_count(), 1);
        assert!(renderer.has_chart(PERFORMANCE_SURFACE));
    }

    #[test]
    fn empty_refresh_hides_the_chart() {
        let mut renderer = renderer();
        let mut page = DashboardPage::default();

        page.apply_time_series(&mut renderer, "Sprint Time".into(), view());
        page.apply_time_series(
            &mut renderer,
            "Sprint Time".into(),
            TimeSeriesView {
                axis: Vec::new(),
                series: Vec::new(),
            },
        );

        assert!(!renderer.has_chart(PERFORMANCE_SURFACE));
    }

    #[test]
    fn missing_surface_is_silently_skipped() {
        let mut renderer = ChartRenderer::new(ConsoleBackend::with_surfaces::<_, String>([]));
        let mut page = DashboardPage::default();

        page.apply_time_series(&mut renderer, "Sprint Time".into(), view());
        assert_eq!(renderer.live_count(), 0);
        // the state update still happened; only the render was skipped
        assert!(page.export_table().is_some());
    }

    #[test]
    fn trend_summary_spans_first_to_last_value() {
        let mut renderer = renderer();
        let mut page = DashboardPage::default();
        page.apply_time_series(&mut renderer, "Sprint Time".into(), view());
        assert_eq!(page.trend_summary().as_deref(), Some("+50.0%"));
    }
}

use std::collections::{BTreeSet, HashMap};

use trackside_bridge::performance::{DataPoint, MetricSeries, PerformanceRow, TimeSeriesView};

/// Groups rows into series sharing one x-axis.
///
/// The axis is the sorted union of every distinct date across all groups.
/// Each group contributes exactly one point per axis entry; a `None` value
/// marks an axis slot the group has no row for — a gap in the data, not a
/// zero. Series appear in the order their group first occurs in the input,
/// and the first row wins when a group carries two rows for one date.
pub fn to_time_series<R>(
    rows: &[R],
    group_key: impl Fn(&R) -> &str,
    date_key: impl Fn(&R) -> &str,
    value: impl Fn(&R) -> f64,
) -> TimeSeriesView {
    let axis: Vec<String> = rows
        .iter()
        .map(|row| date_key(row).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut group_order: Vec<&str> = Vec::new();
    let mut values_by_group: HashMap<&str, HashMap<&str, f64>> = HashMap::new();
    for row in rows {
        let group = group_key(row);
        let values = values_by_group.entry(group).or_insert_with(|| {
            group_order.push(group);
            HashMap::new()
        });
        values.entry(date_key(row)).or_insert_with(|| value(row));
    }

    let series = group_order
        .into_iter()
        .map(|group| {
            let values = &values_by_group[group];
            MetricSeries {
                label: group.to_string(),
                points: axis
                    .iter()
                    .map(|date| DataPoint {
                        timestamp: date.clone(),
                        value: values.get(date.as_str()).copied(),
                    })
                    .collect(),
            }
        })
        .collect();

    TimeSeriesView { axis, series }
}

/// Shapes raw performance rows into per-athlete series over a shared
/// date axis.
pub fn performance_time_series(rows: &[PerformanceRow]) -> TimeSeriesView {
    to_time_series(
        rows,
        |row| row.athlete.as_str(),
        |row| row.date.as_str(),
        |row| row.value,
    )
}

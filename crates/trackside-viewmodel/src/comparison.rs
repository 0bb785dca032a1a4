use std::collections::HashMap;

use trackside_bridge::performance::{ComparisonRow, PerformanceRow};

/// One subject with the single value it is compared by.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectValue {
    pub id: String,
    pub name: String,
    pub value: f64,
}

/// One comparison row per subject, in input order. A subject is highlighted
/// iff its id equals `current_subject_id`.
pub fn to_comparison_rows(
    subjects: &[SubjectValue],
    current_subject_id: Option<&str>,
) -> Vec<ComparisonRow> {
    subjects
        .iter()
        .map(|subject| ComparisonRow {
            subject_name: subject.name.clone(),
            value: subject.value,
            is_highlighted: current_subject_id == Some(subject.id.as_str()),
        })
        .collect()
}

/// Reduces raw rows to each athlete's most recent measurement, in first-
/// appearance order. Dates are `YYYY-MM-DD`, so the lexicographic maximum is
/// the latest one.
pub fn latest_by_athlete(rows: &[PerformanceRow]) -> Vec<SubjectValue> {
    let mut order: Vec<&str> = Vec::new();
    let mut latest: HashMap<&str, &PerformanceRow> = HashMap::new();
    for row in rows {
        let newest_so_far = latest.get(row.athlete.as_str()).copied().map(|current| current.date.as_str());
        match newest_so_far {
            Some(date) if date >= row.date.as_str() => continue,
            Some(_) => {}
            None => order.push(&row.athlete),
        }
        latest.insert(&row.athlete, row);
    }

    order
        .into_iter()
        .map(|athlete| SubjectValue {
            id: athlete.to_string(),
            name: athlete.to_string(),
            value: latest[athlete].value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_exactly_the_current_subject() {
        let subjects = [
            SubjectValue {
                id: "a1".into(),
                name: "Ada".into(),
                value: 11.2,
            },
            SubjectValue {
                id: "a2".into(),
                name: "Ben".into(),
                value: 10.8,
            },
        ];

        let rows = to_comparison_rows(&subjects, Some("a2"));
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].is_highlighted);
        assert!(rows[1].is_highlighted);
        assert_eq!(rows[1].subject_name, "Ben");
    }

    #[test]
    fn no_current_subject_highlights_nothing() {
        let subjects = [SubjectValue {
            id: "a1".into(),
            name: "Ada".into(),
            value: 11.2,
        }];
        let rows = to_comparison_rows(&subjects, None);
        assert!(rows.iter().all(|row| !row.is_highlighted));
    }

    #[test]
    fn latest_by_athlete_keeps_the_newest_row_per_athlete() {
        let rows = [
            PerformanceRow {
                athlete: "Ada".into(),
                date: "2024-01-10".into(),
                value: 5.0,
            },
            PerformanceRow {
                athlete: "Ben".into(),
                date: "2024-01-12".into(),
                value: 6.0,
            },
            PerformanceRow {
                athlete: "Ada".into(),
                date: "2024-02-01".into(),
                value: 7.5,
            },
        ];

        let subjects = latest_by_athlete(&rows);
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].name, "Ada");
        assert_eq!(subjects[0].value, 7.5);
        assert_eq!(subjects[1].name, "Ben");
        assert_eq!(subjects[1].value, 6.0);
    }
}

use crate::domain::Observation;

/// Location-level statistics over `heatpump_pct`.
///
/// Values are kept at full precision here; rounding for presentation is
/// the request layer's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

/// Compute mean/max/min/count for a location's records.
///
/// Callers must have already established that the location resolves to at
/// least one record; an empty input is a precondition violation and
/// panics.
pub fn summarize<'a, I>(records: I) -> ShareSummary
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for rec in records {
        count += 1;
        sum += rec.heatpump_pct;
        min = min.min(rec.heatpump_pct);
        max = max.max(rec.heatpump_pct);
    }

    assert!(count > 0, "summarize requires at least one observation");

    ShareSummary {
        mean: sum / count as f64,
        max,
        min,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn obs(pct: f64) -> Observation {
        Observation::new(datetime!(2023-03-01 08:00:00 UTC), "a", "town", 1.0, pct)
    }

    #[test]
    fn computes_all_four_statistics() {
        let records = vec![obs(10.0), obs(20.0), obs(30.0)];
        let summary = summarize(&records);

        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.max, 30.0);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn min_mean_max_ordering_holds() {
        let records = vec![obs(3.7), obs(91.2), obs(44.4), obs(0.1)];
        let summary = summarize(&records);

        assert!(summary.min <= summary.mean);
        assert!(summary.mean <= summary.max);
    }

    #[test]
    fn single_record_collapses_to_its_value() {
        let records = vec![obs(55.5)];
        let summary = summarize(&records);

        assert_eq!(summary.mean, 55.5);
        assert_eq!(summary.max, 55.5);
        assert_eq!(summary.min, 55.5);
        assert_eq!(summary.count, 1);
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        let records = vec![obs(-5.0), obs(130.0)];
        let summary = summarize(&records);

        assert_eq!(summary.min, -5.0);
        assert_eq!(summary.max, 130.0);
    }

    #[test]
    #[should_panic(expected = "at least one observation")]
    fn empty_input_is_a_precondition_violation() {
        let records: Vec<Observation> = Vec::new();
        summarize(&records);
    }
}

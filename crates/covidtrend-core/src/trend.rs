// crates/covidtrend-core/src/trend.rs

//! # Trend Ranker
//!
//! Turns a windowed baseline/peak aggregation into a list of
//! [`TrendEntry`] rows sorted by percent increase, slowest risers first.

use crate::aggregate::aggregate_baseline_peak;
use crate::model::{DailyRecord, PercentIncrease, TrendEntry};
use crate::window::window;

/// Regions whose peak is at or below this are treated as noise.
pub const DEFAULT_MIN_PEAK_CASES: u64 = 100;

/// Rank regions by percent increase over the last `days` distinct days.
///
/// * Entries with an empty region id, or with `peak <= min_peak`, are dropped.
/// * `namer` maps a region id to a display name; `None` falls back to the id.
/// * `link` builds the href for a region id.
///
/// The result is sorted ascending by the numeric value of the fixed-point
/// percent (stable, so ties keep first-sighting order); undefined trends
/// (zero baseline) come last.
pub fn rank_trends<N, L>(
    records: &[DailyRecord],
    days: usize,
    min_peak: u64,
    namer: N,
    link: L,
) -> Vec<TrendEntry>
where
    N: Fn(&str) -> Option<String>,
    L: Fn(&str) -> String,
{
    let slice = window(records, days);

    let mut ranked: Vec<TrendEntry> = aggregate_baseline_peak(slice)
        .into_iter()
        .filter(|(id, bp)| !id.is_empty() && bp.peak > min_peak)
        .map(|(id, bp)| TrendEntry {
            region_id: id.to_string(),
            name: namer(id).unwrap_or_else(|| id.to_string()),
            baseline: bp.baseline,
            peak: bp.peak,
            percent_increase: PercentIncrease::from_counts(bp.baseline, bp.peak),
            href: link(id),
        })
        .collect();

    ranked.sort_by(|a, b| PercentIncrease::ascending(&a.percent_increase, &b.percent_increase));

    log::debug!(
        "rank_trends: {} region(s) ranked over {} day(s) (min peak {})",
        ranked.len(),
        days,
        min_peak
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::tests::rec;

    fn rank(data: &[DailyRecord], days: usize) -> Vec<TrendEntry> {
        rank_trends(
            data,
            days,
            DEFAULT_MIN_PEAK_CASES,
            |_| None,
            |id| format!("/r/{id}"),
        )
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        let data = vec![
            rec("2021-01-01", "A", 50),
            rec("2021-01-01", "B", 100),
            rec("2021-01-01", "C", 101),
        ];
        let ids: Vec<_> = rank(&data, 7).into_iter().map(|e| e.region_id).collect();
        assert_eq!(ids, ["C"]);
    }

    #[test]
    fn percent_ties_round_up() {
        let data = vec![rec("2021-01-01", "A", 320), rec("2021-01-02", "A", 330)];
        let ranked = rank(&data, 7);
        assert_eq!(ranked[0].percent_increase.to_string(), "3.13");
    }

    #[test]
    fn empty_region_ids_are_dropped() {
        let data = vec![rec("2021-01-01", "", 5000)];
        assert!(rank(&data, 7).is_empty());
    }

    #[test]
    fn sorts_numerically_ascending() {
        let data = vec![
            rec("2021-01-01", "A", 100),
            rec("2021-01-01", "B", 1000),
            rec("2021-01-02", "A", 200),  // +100%
            rec("2021-01-02", "B", 1200), // +20%
        ];
        let ranked = rank(&data, 2);
        assert_eq!(ranked[0].region_id, "B");
        assert_eq!(ranked[0].percent_increase.to_string(), "20.00");
        assert_eq!(ranked[1].percent_increase.to_string(), "100.00");
    }

    #[test]
    fn zero_baseline_sorts_last_as_undefined() {
        let data = vec![
            rec("2021-01-01", "Z", 0),
            rec("2021-01-01", "A", 100),
            rec("2021-01-02", "Z", 500),
            rec("2021-01-02", "A", 150),
        ];
        let ranked = rank(&data, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].percent_increase.to_string(), "50.00");
        assert_eq!(ranked[1].region_id, "Z");
        assert_eq!(ranked[1].percent_increase, PercentIncrease::Undefined);
    }

    #[test]
    fn window_excludes_older_days() {
        let data = vec![
            rec("2021-01-01", "A", 110),
            rec("2021-01-02", "A", 200),
            rec("2021-01-03", "A", 300),
        ];
        let ranked = rank(&data, 2);
        assert_eq!(ranked[0].baseline, 200);
        assert_eq!(ranked[0].peak, 300);
        assert_eq!(ranked[0].percent_increase.to_string(), "50.00");
    }

    #[test]
    fn namer_and_links_are_applied() {
        let data = vec![rec("2021-01-01", "A", 500)];
        let ranked = rank_trends(
            &data,
            1,
            DEFAULT_MIN_PEAK_CASES,
            |id| (id == "A").then(|| "Alpha".to_string()),
            |id| format!("/x/{id}"),
        );
        assert_eq!(ranked[0].name, "Alpha");
        assert_eq!(ranked[0].href, "/x/A");

        let fallback = rank(&data, 1);
        assert_eq!(fallback[0].name, "A");
    }

    #[test]
    fn ranking_is_idempotent() {
        let data = vec![
            rec("2021-01-01", "A", 120),
            rec("2021-01-02", "A", 180),
        ];
        assert_eq!(rank(&data, 2), rank(&data, 2));
    }
}

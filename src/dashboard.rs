use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config;
use crate::data::filter::filter;
use crate::data::model::{Metric, PropertyDataset, PropertyRecord};
use crate::data::stats::{summarize, StatsError, Summary};

// ---------------------------------------------------------------------------
// Render model: everything the UI needs for one (city, year) selection
// ---------------------------------------------------------------------------

/// One strip plot, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub metric: Metric,
    /// Global reference lines (whole dataset, not the current year).
    pub summary: Summary,
    /// `[jittered x, value]` for every other city in the selected year.
    pub others: Vec<[f64; 2]>,
    /// `[jittered x, value]` for the selected city; empty when it has no row
    /// for that year.
    pub selected: Vec<[f64; 2]>,
    /// Legend entry for the highlighted point.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub city: String,
    pub year: i32,
    pub charts: Vec<ChartView>,
    /// Rows shown in the results table.
    pub rows: Vec<PropertyRecord>,
}

impl DashboardView {
    /// Appreciation above the overall median while the average price sits
    /// below its median. `None` when the selected city has no row that year.
    pub fn is_opportunity(&self) -> Option<bool> {
        let row = self.rows.first()?;
        let median = |metric: Metric| {
            self.charts
                .iter()
                .find(|c| c.metric == metric)
                .map(|c| c.summary.median)
        };
        Some(
            row.annual_appreciation_pct > median(Metric::AnnualAppreciation)?
                && row.avg_sale_price < median(Metric::AvgSalePrice)?,
        )
    }
}

/// Recompute the whole dashboard for a selection.
///
/// Pure over its inputs: jitter comes from a fixed seed, so the same
/// selection always produces the same layout.
pub fn build_view(
    dataset: &PropertyDataset,
    city: &str,
    year: i32,
) -> Result<DashboardView, StatsError> {
    let partition = filter(dataset.records(), city, year);

    let charts = Metric::ALL
        .into_iter()
        .map(|metric| -> Result<ChartView, StatsError> {
            let summary = summarize(dataset.records(), metric)?;
            let mut rng = StdRng::seed_from_u64(config::JITTER_SEED ^ metric as u64);
            Ok(ChartView {
                metric,
                summary,
                others: strip(&partition.others, metric, config::OTHERS_JITTER, &mut rng),
                selected: strip(&partition.selected, metric, config::SELECTED_JITTER, &mut rng),
                label: city.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "recomputed view for {city}/{year}: {} selected, {} others",
        partition.selected.len(),
        partition.others.len()
    );

    Ok(DashboardView {
        city: city.to_string(),
        year,
        charts,
        rows: partition.selected.into_iter().cloned().collect(),
    })
}

fn strip(
    records: &[&PropertyRecord],
    metric: Metric,
    jitter: f64,
    rng: &mut StdRng,
) -> Vec<[f64; 2]> {
    records
        .iter()
        .map(|r| [rng.gen_range(-jitter..=jitter), r.value(metric)])
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::record;

    fn dataset() -> PropertyDataset {
        PropertyDataset::from_records(vec![
            record("CityA", 2020, 5.0, 1_000_000.0, 10),
            record("CityB", 2020, 3.0, 900_000.0, 5),
            record("CityC", 2020, 7.0, 1_100_000.0, 8),
            record("CityA", 2021, 9.0, 1_300_000.0, 12),
            record("CityB", 2021, -1.0, 950_000.0, 4),
        ])
    }

    #[test]
    fn builds_one_chart_per_metric() {
        let view = build_view(&dataset(), "CityA", 2020).unwrap();
        let metrics: Vec<Metric> = view.charts.iter().map(|c| c.metric).collect();
        assert_eq!(metrics, Metric::ALL);

        let pct = &view.charts[0];
        assert_eq!(pct.selected.len(), 1);
        assert_eq!(pct.selected[0][1], 5.0);
        let others: Vec<f64> = pct.others.iter().map(|p| p[1]).collect();
        assert_eq!(others, [3.0, 7.0]);
        assert_eq!(pct.label, "CityA");

        assert_eq!(view.rows, vec![record("CityA", 2020, 5.0, 1_000_000.0, 10)]);
    }

    #[test]
    fn absent_combination_renders_without_highlight() {
        let view = build_view(&dataset(), "CityC", 2021).unwrap();
        assert!(view.rows.is_empty());
        for chart in &view.charts {
            assert!(chart.selected.is_empty());
            assert_eq!(chart.others.len(), 2);
        }
    }

    #[test]
    fn reference_lines_do_not_follow_the_selection() {
        let ds = dataset();
        let a = build_view(&ds, "CityA", 2020).unwrap();
        let b = build_view(&ds, "CityB", 2021).unwrap();
        for (ca, cb) in a.charts.iter().zip(&b.charts) {
            assert_eq!(ca.summary, cb.summary);
        }
        // Median over all five rows, not just 2020.
        assert_eq!(a.charts[0].summary.median, 5.0);
        assert_eq!(a.charts[0].summary.q1, 3.0);
        assert_eq!(a.charts[0].summary.q3, 7.0);
    }

    #[test]
    fn flags_cheap_fast_growing_cities() {
        let ds = PropertyDataset::from_records(vec![
            record("Polokwane", 2020, 8.0, 800_000.0, 20),
            record("Sandton", 2020, 2.0, 1_200_000.0, 30),
            record("Durban", 2020, 5.0, 1_000_000.0, 25),
        ]);
        assert_eq!(build_view(&ds, "Polokwane", 2020).unwrap().is_opportunity(), Some(true));
        assert_eq!(build_view(&ds, "Sandton", 2020).unwrap().is_opportunity(), Some(false));
        // The median city is not strictly above/below either line.
        assert_eq!(build_view(&ds, "Durban", 2020).unwrap().is_opportunity(), Some(false));
        assert_eq!(build_view(&ds, "Durban", 2019).unwrap().is_opportunity(), None);
    }

    #[test]
    fn jitter_stays_in_its_lane() {
        let view = build_view(&dataset(), "CityB", 2020).unwrap();
        for chart in &view.charts {
            assert!(chart
                .others
                .iter()
                .all(|p| p[0].abs() <= config::OTHERS_JITTER));
            assert!(chart
                .selected
                .iter()
                .all(|p| p[0].abs() <= config::SELECTED_JITTER));
        }
    }

    #[test]
    fn same_selection_gives_same_layout() {
        let ds = dataset();
        assert_eq!(
            build_view(&ds, "CityA", 2021).unwrap(),
            build_view(&ds, "CityA", 2021).unwrap()
        );
    }

    fn arb_dataset() -> impl Strategy<Value = PropertyDataset> {
        prop::collection::vec(
            (0usize..4, 2014i32..2024, -15.0f64..25.0, 2.0e5f64..9.0e6),
            1..80,
        )
        .prop_map(|rows| {
            PropertyDataset::from_records(
                rows.into_iter()
                    .map(|(c, y, pct, price)| record(&format!("City{c}"), y, pct, price, 1))
                    .collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_reference_lines_ignore_the_selection(
            ds in arb_dataset(),
            a in 0usize..5,
            b in 0usize..5,
            ya in 2013i32..2025,
            yb in 2013i32..2025,
        ) {
            let first = build_view(&ds, &format!("City{a}"), ya).unwrap();
            let second = build_view(&ds, &format!("City{b}"), yb).unwrap();
            prop_assert_eq!(first.charts.len(), second.charts.len());
            for (x, y) in first.charts.iter().zip(&second.charts) {
                prop_assert_eq!(x.metric, y.metric);
                prop_assert_eq!(x.summary, y.summary);
            }
        }
    }
}

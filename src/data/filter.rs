use super::model::PropertyRecord;

// ---------------------------------------------------------------------------
// City / year partition
// ---------------------------------------------------------------------------

/// Rows of one year split by whether they belong to the chosen city.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    /// `city == X && year == Y` (normally a single row, possibly none).
    pub selected: Vec<&'a PropertyRecord>,
    /// `city != X && year == Y`.
    pub others: Vec<&'a PropertyRecord>,
}

/// Split `records` for the given city and year, preserving dataset order.
///
/// Rows from other years land in neither side.
pub fn filter<'a>(records: &'a [PropertyRecord], city: &str, year: i32) -> Partition<'a> {
    let (selected, others) = records
        .iter()
        .filter(|r| r.year == year)
        .partition(|r| r.city == city);

    Partition { selected, others }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::record;

    fn sample() -> Vec<PropertyRecord> {
        vec![
            record("CityA", 2020, 5.0, 1_000_000.0, 10),
            record("CityB", 2020, 3.0, 900_000.0, 5),
            record("CityC", 2020, 7.0, 1_100_000.0, 8),
            record("CityA", 2021, 4.0, 1_050_000.0, 11),
        ]
    }

    #[test]
    fn splits_selected_city_from_the_rest_of_its_year() {
        let rows = sample();
        let p = filter(&rows, "CityA", 2020);
        assert_eq!(p.selected, vec![&rows[0]]);
        assert_eq!(p.others, vec![&rows[1], &rows[2]]);
    }

    #[test]
    fn missing_combination_gives_empty_selection() {
        let rows = sample();
        let p = filter(&rows, "CityB", 2021);
        assert!(p.selected.is_empty());
        assert_eq!(p.others, vec![&rows[3]]);

        let p = filter(&rows, "Nowhere", 2020);
        assert!(p.selected.is_empty());
        assert_eq!(p.others.len(), 3);
    }

    fn arb_records() -> impl Strategy<Value = Vec<PropertyRecord>> {
        prop::collection::vec(
            (0usize..5, 2014i32..2018, -10.0f64..20.0, 1.0e5f64..5.0e6, 0i64..500),
            0..60,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(c, y, pct, price, sales)| record(&format!("City{c}"), y, pct, price, sales))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_sides_match_their_predicates(
            rows in arb_records(),
            c in 0usize..6,
            year in 2013i32..2019,
        ) {
            let city = format!("City{c}");
            let p = filter(&rows, &city, year);
            prop_assert!(p.selected.iter().all(|r| r.city == city && r.year == year));
            prop_assert!(p.others.iter().all(|r| r.city != city && r.year == year));
        }

        #[test]
        fn prop_partitions_the_dataset_exactly(
            rows in arb_records(),
            c in 0usize..6,
            year in 2013i32..2019,
        ) {
            let city = format!("City{c}");
            let p = filter(&rows, &city, year);
            let other_years = rows.iter().filter(|r| r.year != year).count();
            prop_assert_eq!(p.selected.len() + p.others.len() + other_years, rows.len());

            // Each row is counted on exactly one side.
            for r in &rows {
                let hits = p.selected.iter().filter(|s| std::ptr::eq(**s, r)).count()
                    + p.others.iter().filter(|s| std::ptr::eq(**s, r)).count();
                prop_assert_eq!(hits, usize::from(r.year == year));
            }
        }

        #[test]
        fn prop_filter_is_idempotent(rows in arb_records(), c in 0usize..6, year in 2014i32..2018) {
            let city = format!("City{c}");
            prop_assert_eq!(filter(&rows, &city, year), filter(&rows, &city, year));
        }
    }
}

use std::sync::Arc;

use crate::dashboard::{build_view, DashboardView};
use crate::data::model::PropertyDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Table loaded at startup; shared read-only.
    pub dataset: Arc<PropertyDataset>,

    /// Current city selection.
    pub city: String,

    /// Current year selection.
    pub year: i32,

    /// Render model for the current selection.
    pub view: Option<DashboardView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start on the first city and the earliest year, like a fresh page load.
    pub fn new(dataset: Arc<PropertyDataset>) -> Self {
        let city = dataset.cities().first().cloned().unwrap_or_default();
        let year = dataset.years().first().copied().unwrap_or_default();
        let mut state = Self {
            dataset,
            city,
            year,
            view: None,
            status_message: None,
        };
        state.recompute();
        state
    }

    /// Rebuild the view from scratch for the current selection.
    pub fn recompute(&mut self) {
        match build_view(&self.dataset, &self.city, self.year) {
            Ok(view) => {
                self.view = Some(view);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to summarize dataset: {e}");
                self.view = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    pub fn select_city(&mut self, city: &str) {
        if self.city != city {
            self.city = city.to_string();
            self.recompute();
        }
    }

    pub fn select_year(&mut self, year: i32) {
        if self.year != year {
            self.year = year;
            self.recompute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn state() -> AppState {
        AppState::new(Arc::new(PropertyDataset::from_records(vec![
            record("Durban", 2021, 3.0, 1_200_000.0, 9),
            record("Cape Town", 2020, 6.0, 1_900_000.0, 14),
            record("Durban", 2020, 2.0, 1_100_000.0, 7),
        ])))
    }

    #[test]
    fn starts_on_first_city_and_earliest_year() {
        let s = state();
        assert_eq!(s.city, "Durban");
        assert_eq!(s.year, 2020);
        let view = s.view.as_ref().unwrap();
        assert_eq!(view.rows, vec![record("Durban", 2020, 2.0, 1_100_000.0, 7)]);
        assert!(s.status_message.is_none());
    }

    #[test]
    fn changing_a_selector_rebuilds_the_view() {
        let mut s = state();
        s.select_city("Cape Town");
        let view = s.view.as_ref().unwrap();
        assert_eq!(view.city, "Cape Town");
        assert_eq!(view.rows[0].annual_appreciation_pct, 6.0);

        s.select_year(2021);
        let view = s.view.as_ref().unwrap();
        assert_eq!((view.city.as_str(), view.year), ("Cape Town", 2021));
        assert!(view.rows.is_empty());
        assert!(view.charts.iter().all(|c| c.selected.is_empty()));
    }

    #[test]
    fn empty_dataset_reports_instead_of_panicking() {
        let s = AppState::new(Arc::new(PropertyDataset::from_records(Vec::new())));
        assert!(s.view.is_none());
        assert!(s.status_message.unwrap().contains("no finite values"));
    }
}

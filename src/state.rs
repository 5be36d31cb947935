use crate::color::CategoryColors;
use crate::data::aggregate::{success_counts, CountAggregate};
use crate::data::filter::filtered_indices;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Both chart inputs are cached here and recomputed from the full dataset
/// whenever a widget changes; nothing is updated incrementally.
pub struct AppState {
    /// Loaded dataset (None until a file is opened).
    pub dataset: Option<LaunchDataset>,

    /// Current site-selector value.
    pub site_selection: SiteSelection,

    /// Current payload sliders, kept within `payload_bounds`.
    pub payload_range: PayloadRange,

    /// Observed dataset (min, max) payload mass; the slider end-stops.
    pub payload_bounds: (f64, f64),

    /// Pie-chart counts for the current site selection (cached).
    pub pie_counts: CountAggregate,

    /// Indices of launches shown on the scatter plot (cached).
    pub visible_indices: Vec<usize>,

    /// Booster category colours for the scatter series.
    pub category_colors: Option<CategoryColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            site_selection: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 0.0),
            payload_bounds: (0.0, 0.0),
            pie_counts: CountAggregate::new(),
            visible_indices: Vec::new(),
            category_colors: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the widgets around it.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        let bounds = dataset.payload_bounds().unwrap_or((0.0, 0.0));
        self.payload_bounds = bounds;
        self.payload_range = PayloadRange::new(bounds.0, bounds.1);
        self.site_selection = SiteSelection::All;
        self.category_colors = Some(CategoryColors::new(&dataset.booster_categories));
        self.dataset = Some(dataset);
        self.status_message = None;

        self.recompute_pie();
        self.refilter();
    }

    /// Change the site selector. Invalidates both chart caches.
    pub fn set_site_selection(&mut self, selection: SiteSelection) {
        if self.site_selection == selection {
            return;
        }
        self.site_selection = selection;
        self.recompute_pie();
        self.refilter();
    }

    /// Move the lower payload slider; drags the upper end along when pushed
    /// past it, so `low <= high` always holds.
    pub fn set_payload_low(&mut self, low: f64) {
        let (min, max) = self.payload_bounds;
        let low = low.clamp(min, max);
        self.payload_range.low = low;
        if self.payload_range.high < low {
            self.payload_range.high = low;
        }
        self.refilter();
    }

    /// Move the upper payload slider; mirror of [`Self::set_payload_low`].
    pub fn set_payload_high(&mut self, high: f64) {
        let (min, max) = self.payload_bounds;
        let high = high.clamp(min, max);
        self.payload_range.high = high;
        if self.payload_range.low > high {
            self.payload_range.low = high;
        }
        self.refilter();
    }

    /// Recompute the pie aggregate after a site change.
    fn recompute_pie(&mut self) {
        if let Some(ds) = &self.dataset {
            self.pie_counts = success_counts(&ds.records, &self.site_selection);
        }
    }

    /// Recompute `visible_indices` after a widget change.
    fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, self.payload_range, &self.site_selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn rec(site: &str, mass: f64, class: i64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: "FT".to_string(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(LaunchDataset::from_records(vec![
            rec("KSC LC-39A", 5000.0, 1),
            rec("KSC LC-39A", 3000.0, 0),
            rec("CCAFS LC-40", 7000.0, 1),
        ]));
        state
    }

    #[test]
    fn set_dataset_spans_the_full_range() {
        let state = loaded_state();
        assert_eq!(state.payload_bounds, (3000.0, 7000.0));
        assert_eq!(state.payload_range, PayloadRange::new(3000.0, 7000.0));
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.pie_counts.values().sum::<usize>(), 2);
    }

    #[test]
    fn site_change_refreshes_both_caches() {
        let mut state = loaded_state();
        state.set_site_selection(SiteSelection::Site("KSC LC-39A".into()));
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.pie_counts.get("Success"), Some(&1));
        assert_eq!(state.pie_counts.get("Failure"), Some(&1));
    }

    #[test]
    fn sliders_clamp_to_observed_bounds() {
        let mut state = loaded_state();
        state.set_payload_low(-500.0);
        state.set_payload_high(99_999.0);
        assert_eq!(state.payload_range, PayloadRange::new(3000.0, 7000.0));
    }

    #[test]
    fn pushing_one_slider_past_the_other_drags_it_along() {
        let mut state = loaded_state();
        state.set_payload_low(6000.0);
        assert!(state.payload_range.low <= state.payload_range.high);
        assert_eq!(state.payload_range.low, 6000.0);

        state.set_payload_high(4000.0);
        assert_eq!(state.payload_range, PayloadRange::new(4000.0, 4000.0));
    }

    #[test]
    fn narrowing_the_range_shrinks_the_scatter_set() {
        let mut state = loaded_state();
        state.set_payload_low(4000.0);
        state.set_payload_high(6000.0);
        assert_eq!(state.visible_indices, vec![0]);
    }
}

use super::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Scatter-plot filter: payload range + optional site
// ---------------------------------------------------------------------------

/// Return indices of launches within the payload range (inclusive on both
/// ends) that also match the site selection.
///
/// Always re-evaluated over the full dataset; the caller caches the result
/// until a widget changes. An empty result is a valid selection state, not
/// an error.
pub fn filtered_indices(
    dataset: &LaunchDataset,
    range: PayloadRange,
    selection: &SiteSelection,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg) && selection.matches(&rec.site))
        .map(|(i, _)| i)
        .collect()
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

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("KSC LC-39A", 5000.0, 1),
            rec("KSC LC-39A", 3000.0, 0),
            rec("CCAFS LC-40", 7000.0, 1),
        ])
    }

    #[test]
    fn full_range_all_sites_returns_every_row() {
        let ds = sample();
        let (lo, hi) = ds.payload_bounds().unwrap();
        let idx = filtered_indices(&ds, PayloadRange::new(lo, hi), &SiteSelection::All);
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn range_cuts_out_of_band_rows() {
        let ds = sample();
        let idx = filtered_indices(&ds, PayloadRange::new(4000.0, 8000.0), &SiteSelection::All);
        let masses: Vec<f64> = idx.iter().map(|&i| ds.records[i].payload_mass_kg).collect();
        assert_eq!(masses, vec![5000.0, 7000.0]);
    }

    #[test]
    fn site_selection_narrows_the_range_result() {
        let ds = sample();
        let idx = filtered_indices(
            &ds,
            PayloadRange::new(0.0, 10_000.0),
            &SiteSelection::Site("KSC LC-39A".into()),
        );
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn refiltering_a_filtered_subset_is_a_fixpoint() {
        let ds = sample();
        let range = PayloadRange::new(4000.0, 8000.0);
        let once = filtered_indices(&ds, range, &SiteSelection::All);

        let subset = LaunchDataset::from_records(
            once.iter().map(|&i| ds.records[i].clone()).collect(),
        );
        let twice = filtered_indices(&subset, range, &SiteSelection::All);

        let first: Vec<&LaunchRecord> = once.iter().map(|&i| &ds.records[i]).collect();
        let second: Vec<&LaunchRecord> = twice.iter().map(|&i| &subset.records[i]).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_site_yields_empty_set() {
        let ds = sample();
        let idx = filtered_indices(
            &ds,
            PayloadRange::new(0.0, 10_000.0),
            &SiteSelection::Site("VAFB SLC-4E".into()),
        );
        assert!(idx.is_empty());
    }

    #[test]
    fn degenerate_range_keeps_exact_matches() {
        let ds = sample();
        let idx = filtered_indices(&ds, PayloadRange::new(5000.0, 5000.0), &SiteSelection::All);
        assert_eq!(idx, vec![0]);
    }
}

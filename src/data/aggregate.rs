use std::collections::BTreeMap;

use super::model::{LaunchRecord, SiteSelection};

// ---------------------------------------------------------------------------
// Pie-chart aggregate: label → occurrence count
// ---------------------------------------------------------------------------

/// Counts per category label, feeding the pie chart. `BTreeMap` so slice
/// order (and therefore slice colors) is stable across frames.
pub type CountAggregate = BTreeMap<String, usize>;

/// Compute the pie-chart counts for the current site selection.
///
/// * `All` – successful launches only, one count per launch site.
/// * `Site(name)` – launches at that site only, one count per outcome label.
///
/// No matching records yields an empty aggregate; the chart renders an
/// empty state rather than failing.
pub fn success_counts(records: &[LaunchRecord], selection: &SiteSelection) -> CountAggregate {
    let mut counts = CountAggregate::new();

    match selection {
        SiteSelection::All => {
            for rec in records.iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(rec.site.clone()).or_insert(0) += 1;
            }
        }
        SiteSelection::Site(name) => {
            for rec in records.iter().filter(|r| r.site == *name) {
                *counts.entry(rec.outcome.to_string()).or_insert(0) += 1;
            }
        }
    }

    counts
}

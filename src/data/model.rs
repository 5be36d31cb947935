use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the `class` flag of a launch record
// ---------------------------------------------------------------------------

/// Landing outcome of a single launch. The source data encodes it as the
/// `class` column: 1 = success, 0 = failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret the raw `class` flag. Anything other than 0 or 1 is invalid.
    pub fn from_class(class: i64) -> Option<Outcome> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Vertical position on the scatter plot (success on top).
    pub fn as_y(self) -> f64 {
        match self {
            Outcome::Success => 1.0,
            Outcome::Failure => 0.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV). Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch pad name, e.g. "KSC LC-39A".
    pub site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass_kg: f64,
    /// Landing outcome flag.
    pub outcome: Outcome,
    /// Booster version category label, e.g. "FT" or "B4".
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// SiteSelection – the dropdown value
// ---------------------------------------------------------------------------

/// Current value of the launch-site selector: the whole fleet or one pad.
/// A name not present in the dataset simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }

    /// Text shown in the selector widget.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – the range-slider value
// ---------------------------------------------------------------------------

/// Closed payload-mass interval `[low, high]` in kilograms. The widgets keep
/// `low <= high`; construction does not reorder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed value indices.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows).
    pub records: Vec<LaunchRecord>,
    /// Sorted, deduplicated launch-site names.
    pub sites: Vec<String>,
    /// Sorted set of booster version categories, used for scatter coloring.
    pub booster_categories: BTreeSet<String>,
}

impl LaunchDataset {
    /// Build the value indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut site_set: BTreeSet<String> = BTreeSet::new();
        let mut booster_categories: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            site_set.insert(rec.site.clone());
            booster_categories.insert(rec.booster_category.clone());
        }

        LaunchDataset {
            records,
            sites: site_set.into_iter().collect(),
            booster_categories,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed (min, max) payload mass, or `None` for an empty dataset.
    /// These bound the range slider.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut masses = self.records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        let mut lo = first;
        let mut hi = first;
        for m in masses {
            lo = lo.min(m);
            hi = hi.max(m);
        }
        Some((lo, hi))
    }
}

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// CSV schema
// ---------------------------------------------------------------------------

/// Header names the upstream dataset ships with. Extra columns (flight
/// number, full booster version, ...) are ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Structural problems in the input data. Fatal at startup; surfaced in the
/// status line when re-loading through File → Open.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: class flag {value} is not 0 or 1")]
    BadOutcome { row: usize, value: i64 },
    #[error("row {row}: negative payload mass {value}")]
    NegativePayload { row: usize, value: f64 },
}

/// One CSV row as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load launch records from a CSV file.
pub fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let file = File::open(path).context("opening CSV")?;
    load_reader(file)
}

/// Parse launch records from any CSV source. A header row is required.
pub fn load_reader<R: Read>(reader: R) -> Result<LaunchDataset> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers().context("reading CSV headers")?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in rdr.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let outcome = Outcome::from_class(raw.class).ok_or(LoadError::BadOutcome {
            row: row_no,
            value: raw.class,
        })?;
        if raw.payload_mass_kg < 0.0 {
            return Err(LoadError::NegativePayload {
                row: row_no,
                value: raw.payload_mass_kg,
            }
            .into());
        }

        records.push(LaunchRecord {
            site: raw.site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome,
            booster_category: raw.booster_category,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,0,v1.0
2,CCAFS LC-40,1,525,v1.0
3,KSC LC-39A,1,5300,FT
4,VAFB SLC-4E,0,9600,B4
";

    #[test]
    fn parses_rows_and_ignores_extra_columns() {
        let ds = load_reader(GOOD.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
        assert_eq!(ds.payload_bounds(), Some((0.0, 9600.0)));
        assert!(ds.booster_categories.contains("FT"));

        let rec = &ds.records[2];
        assert_eq!(rec.site, "KSC LC-39A");
        assert_eq!(rec.payload_mass_kg, 5300.0);
        assert!(rec.outcome.is_success());
    }

    #[test]
    fn header_only_input_is_an_empty_dataset() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), None);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Launch Site,class,Booster Version Category\nKSC LC-39A,1,FT\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        let load_err = err.downcast::<LoadError>().unwrap();
        assert!(matches!(load_err, LoadError::MissingColumn("Payload Mass (kg)")));
    }

    #[test]
    fn out_of_range_class_flag_is_rejected() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,2,5300,FT
";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        let load_err = err.downcast::<LoadError>().unwrap();
        assert!(matches!(load_err, LoadError::BadOutcome { row: 0, value: 2 }));
    }

    #[test]
    fn negative_payload_is_rejected() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,-10,FT
";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(err.downcast_ref::<LoadError>().is_some());
    }

    #[test]
    fn unparseable_payload_names_the_row() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,heavy,FT
";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("row 0"));
    }
}

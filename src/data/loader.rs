use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord, OutcomeClass};

/// Columns the dashboard cannot run without.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a CSV file.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    load_csv(file).with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row as written by the launch records export.
/// Columns not named here (e.g. `Unnamed: 0`) are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Flight Number")]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// Parse launch records from any CSV source with a header row.
pub fn load_csv<R: Read>(source: R) -> Result<LaunchDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("CSV missing '{column}' column");
        }
    }

    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(row_to_record(row, row_no)?);
    }

    log::debug!("parsed {} launch records", records.len());

    LaunchDataset::from_records(records).context("CSV contains no launch records")
}

fn row_to_record(row: CsvRow, row_no: usize) -> Result<LaunchRecord> {
    let Some(outcome) = OutcomeClass::from_class(row.class) else {
        bail!("CSV row {row_no}: class must be 0 or 1, got {}", row.class);
    };
    if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
        bail!(
            "CSV row {row_no}: payload mass must be a non-negative number, got {}",
            row.payload_mass_kg
        );
    }
    let launch_site = row.launch_site.trim().to_string();
    if launch_site.is_empty() {
        bail!("CSV row {row_no}: empty launch site");
    }

    Ok(LaunchRecord {
        flight_number: row.flight_number,
        launch_site,
        payload_mass_kg: row.payload_mass_kg,
        booster_version: row.booster_version.filter(|v| !v.is_empty()),
        booster_version_category: row.booster_version_category.trim().to_string(),
        outcome,
    })
}

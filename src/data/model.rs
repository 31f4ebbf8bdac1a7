use std::fmt;

// ---------------------------------------------------------------------------
// OutcomeClass – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome as encoded in the `class` column (1 / 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    /// Decode the numeric class value. Anything other than 0 or 1 is rejected.
    pub fn from_class(value: i64) -> Option<Self> {
        match value {
            0 => Some(OutcomeClass::Failure),
            1 => Some(OutcomeClass::Success),
            _ => None,
        }
    }

    /// Numeric class value, used as the scatter y coordinate.
    pub fn as_class(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeClass::Success => write!(f, "Success"),
            OutcomeClass::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub booster_version: Option<String>,
    pub booster_version_category: String,
    pub outcome: OutcomeClass,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with indices computed once at load time.
///
/// Never mutated after construction; the UI shares it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    sites: Vec<String>,
    /// Distinct booster categories in order of first appearance.
    booster_categories: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchDataset {
    /// Build the site/category indices and payload bounds.
    ///
    /// Returns `None` for an empty record set, which has no payload bounds.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        let first = records.first()?;
        let mut min_payload = first.payload_mass_kg;
        let mut max_payload = first.payload_mass_kg;
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();

        for rec in &records {
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            if !booster_categories.contains(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
        }

        Some(LaunchDataset {
            records,
            sites,
            booster_categories,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Smallest payload mass observed in the data.
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass observed in the data.
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(site: &str, payload: f64, class: i64, category: &str) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version: None,
            booster_version_category: category.to_string(),
            outcome: OutcomeClass::from_class(class).expect("class must be 0 or 1"),
        }
    }

    /// The three-record table used throughout the view tests.
    pub fn three_launches() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("SiteA", 500.0, 1, "v1.0"),
            record("SiteA", 2000.0, 0, "FT"),
            record("SiteB", 1500.0, 1, "FT"),
        ])
        .expect("non-empty")
    }

    /// A larger table shaped like the real launch file.
    pub fn mixed_launches() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("CCAFS LC-40", 525.0, 0, "v1.0"),
            record("VAFB SLC-4E", 500.0, 0, "v1.1"),
            record("CCAFS LC-40", 3170.0, 1, "v1.1"),
            record("KSC LC-39A", 2490.0, 1, "FT"),
            record("KSC LC-39A", 5300.0, 1, "FT"),
            record("VAFB SLC-4E", 9600.0, 1, "FT"),
            record("CCAFS SLC-40", 3669.0, 0, "B4"),
            record("KSC LC-39A", 6070.0, 0, "B4"),
            record("CCAFS SLC-40", 5384.0, 1, "B5"),
            record("KSC LC-39A", 3600.0, 1, "B5"),
        ])
        .expect("non-empty")
    }
}

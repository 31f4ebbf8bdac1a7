use std::fmt;

use crate::error::ViewError;

use super::model::{LaunchDataset, LaunchRecord};

/// Dropdown label and value of the "every site" entry.
pub const ALL_SITES: &str = "All Sites";

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// Which launch site the dashboard is focused on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Resolve a raw dropdown value against the sites present in `dataset`.
    pub fn resolve(value: &str, dataset: &LaunchDataset) -> Result<Self, ViewError> {
        if value == ALL_SITES {
            Ok(SiteSelection::AllSites)
        } else if dataset.has_site(value) {
            Ok(SiteSelection::Site(value.to_string()))
        } else {
            Err(ViewError::UnknownSite(value.to_string()))
        }
    }

    /// Reject a `Site` that the dataset does not contain.
    pub fn validate(&self, dataset: &LaunchDataset) -> Result<(), ViewError> {
        match self {
            SiteSelection::Site(name) if !dataset.has_site(name) => {
                Err(ViewError::UnknownSite(name.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Whether `record` belongs to the selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "{ALL_SITES}"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Closed payload interval `[low, high]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, ViewError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(ViewError::InvalidPayloadRange { low, high });
        }
        Ok(PayloadRange { low, high })
    }

    /// The full observed payload span of `dataset`.
    pub fn of_dataset(dataset: &LaunchDataset) -> Self {
        PayloadRange {
            low: dataset.min_payload(),
            high: dataset.max_payload(),
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive on both bounds, matching the range control's handles.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filter state shared by both views
// ---------------------------------------------------------------------------

/// Current widget values, already validated against the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterState {
    /// Initial state: every site, full observed payload span.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        FilterState {
            site: SiteSelection::AllSites,
            payload: PayloadRange::of_dataset(dataset),
        }
    }
}

/// Dropdown values: the sentinel first, then every site in data order.
pub fn site_options(dataset: &LaunchDataset) -> Vec<String> {
    std::iter::once(ALL_SITES.to_string())
        .chain(dataset.sites().iter().cloned())
        .collect()
}

/// Records at the selected site whose payload lies in `range`.
pub fn scatter_subset<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |r| site.matches(r))
        .filter(move |r| range.contains(r.payload_mass_kg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::*;

    #[test]
    fn resolve_accepts_sentinel_and_known_sites() {
        let ds = three_launches();
        assert_eq!(
            SiteSelection::resolve("All Sites", &ds),
            Ok(SiteSelection::AllSites)
        );
        assert_eq!(
            SiteSelection::resolve("SiteB", &ds),
            Ok(SiteSelection::Site("SiteB".into()))
        );
    }

    #[test]
    fn resolve_rejects_unknown_site() {
        let ds = three_launches();
        assert_eq!(
            SiteSelection::resolve("SiteZ", &ds),
            Err(ViewError::UnknownSite("SiteZ".into()))
        );
        // Site names are matched exactly.
        assert!(SiteSelection::resolve("sitea", &ds).is_err());
        assert!(SiteSelection::Site("SiteZ".into()).validate(&ds).is_err());
    }

    #[test]
    fn dropdown_lists_sentinel_then_sites() {
        let ds = three_launches();
        assert_eq!(site_options(&ds), vec!["All Sites", "SiteA", "SiteB"]);
        for option in site_options(&ds) {
            assert!(SiteSelection::resolve(&option, &ds).is_ok());
        }
    }

    #[test]
    fn payload_range_bounds_are_inclusive() {
        let range = PayloadRange::new(1000.0, 3000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(3000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(3000.1));
    }

    #[test]
    fn payload_range_rejects_inverted_or_nan_bounds() {
        assert!(PayloadRange::new(5.0, 1.0).is_err());
        assert!(PayloadRange::new(f64::NAN, 1.0).is_err());
        assert!(PayloadRange::new(0.0, f64::INFINITY).is_err());
        assert!(PayloadRange::new(4000.0, 4000.0).is_ok());
    }

    #[test]
    fn initial_state_spans_observed_payloads() {
        let ds = mixed_launches();
        let state = FilterState::initial(&ds);
        assert_eq!(state.site, SiteSelection::AllSites);
        assert_eq!(state.payload.low(), 0.0);
        assert_eq!(state.payload.high(), 9600.0);
    }

    #[test]
    fn subset_applies_site_then_payload() {
        let ds = mixed_launches();
        let site = SiteSelection::Site("KSC LC-39A".into());
        let range = PayloadRange::new(3000.0, 6000.0).unwrap();
        let payloads: Vec<f64> = scatter_subset(&ds, &site, range)
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(payloads, vec![5300.0, 3600.0]);
    }
}

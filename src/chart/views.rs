use crate::data::filter::{PayloadRange, SiteSelection, scatter_subset};
use crate::data::model::{LaunchDataset, LaunchRecord, OutcomeClass};
use crate::error::ViewError;

use super::spec::{
    ChartSpec, PIE_HOLE, PieChart, PieSlice, ScatterChart, ScatterPoint, marker_size,
};

// ---------------------------------------------------------------------------
// Outcome pie chart
// ---------------------------------------------------------------------------

/// Success counts per site for `AllSites`, success vs. failure for one site.
pub fn compute_pie(dataset: &LaunchDataset, site: &SiteSelection) -> Result<ChartSpec, ViewError> {
    site.validate(dataset)?;

    let (title, slices) = match site {
        SiteSelection::AllSites => {
            let successes: Vec<&LaunchRecord> = dataset
                .records()
                .iter()
                .filter(|r| r.outcome.is_success())
                .collect();
            let slices: Vec<PieSlice> = dataset
                .sites()
                .iter()
                .map(|name| PieSlice {
                    label: name.clone(),
                    count: successes.iter().filter(|r| r.launch_site == *name).count(),
                })
                .filter(|slice| slice.count > 0)
                .collect();
            ("Total Success Launches By all sites".to_string(), slices)
        }
        SiteSelection::Site(name) => {
            let at_site: Vec<&LaunchRecord> = dataset
                .records()
                .iter()
                .filter(|r| r.launch_site == *name)
                .collect();
            let slices: Vec<PieSlice> = [OutcomeClass::Success, OutcomeClass::Failure]
                .into_iter()
                .map(|outcome| PieSlice {
                    label: outcome.to_string(),
                    count: at_site.iter().filter(|r| r.outcome == outcome).count(),
                })
                .filter(|slice| slice.count > 0)
                .collect();
            (format!("Total Success Launches for site {name}"), slices)
        }
    };

    Ok(ChartSpec::Pie(PieChart {
        title,
        hole: PIE_HOLE,
        slices,
    }))
}

// ---------------------------------------------------------------------------
// Payload scatter chart
// ---------------------------------------------------------------------------

/// Payload mass against outcome for the selected site and payload range,
/// coloured by booster version category.
pub fn compute_scatter(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Result<ChartSpec, ViewError> {
    site.validate(dataset)?;

    let subset: Vec<&LaunchRecord> = scatter_subset(dataset, site, range).collect();
    let max_payload = subset
        .iter()
        .map(|r| r.payload_mass_kg)
        .fold(0.0_f64, f64::max);

    let points = subset
        .iter()
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            class: r.outcome.as_class(),
            category: r.booster_version_category.clone(),
            size: marker_size(r.payload_mass_kg, max_payload),
            hover: hover_text(r),
        })
        .collect();

    let categories = dataset
        .booster_categories()
        .iter()
        .filter(|c| subset.iter().any(|r| r.booster_version_category == **c))
        .cloned()
        .collect();

    let title = match site {
        SiteSelection::AllSites => "Payload Mass vs. Class (All Sites)".to_string(),
        SiteSelection::Site(name) => format!("Payload Mass vs. Class ({name})"),
    };

    Ok(ChartSpec::Scatter(ScatterChart {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "class".to_string(),
        color_by: "Booster Version Category".to_string(),
        categories,
        points,
    }))
}

fn hover_text(record: &LaunchRecord) -> String {
    let mut text = format!("Payload Mass (kg): {}", record.payload_mass_kg);
    text.push_str(&format!("\nLaunch Site: {}", record.launch_site));
    if let Some(flight) = record.flight_number {
        text.push_str(&format!("\nFlight Number: {flight}"));
    }
    if let Some(version) = &record.booster_version {
        text.push_str(&format!("\nBooster Version: {version}"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::*;

    fn pie(spec: ChartSpec) -> PieChart {
        match spec {
            ChartSpec::Pie(p) => p,
            other => panic!("expected pie, got {other:?}"),
        }
    }

    fn scatter(spec: ChartSpec) -> ScatterChart {
        match spec {
            ChartSpec::Scatter(s) => s,
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    fn count_of(chart: &PieChart, label: &str) -> Option<usize> {
        chart.slices.iter().find(|s| s.label == label).map(|s| s.count)
    }

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    fn range(low: f64, high: f64) -> PayloadRange {
        PayloadRange::new(low, high).unwrap()
    }

    #[test]
    fn all_sites_pie_counts_successes_per_site() {
        let chart = pie(compute_pie(&three_launches(), &SiteSelection::AllSites).unwrap());
        assert_eq!(chart.title, "Total Success Launches By all sites");
        assert_eq!(chart.hole, PIE_HOLE);
        assert_eq!(
            chart.slices,
            vec![
                PieSlice { label: "SiteA".into(), count: 1 },
                PieSlice { label: "SiteB".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn single_site_pie_splits_success_and_failure() {
        let chart = pie(compute_pie(&three_launches(), &site("SiteA")).unwrap());
        assert_eq!(chart.title, "Total Success Launches for site SiteA");
        assert_eq!(count_of(&chart, "Success"), Some(1));
        assert_eq!(count_of(&chart, "Failure"), Some(1));
    }

    #[test]
    fn single_site_pie_omits_empty_outcome() {
        let chart = pie(compute_pie(&three_launches(), &site("SiteB")).unwrap());
        assert_eq!(chart.slices, vec![PieSlice { label: "Success".into(), count: 1 }]);
    }

    #[test]
    fn per_site_pie_totals_match_site_record_counts() {
        let ds = mixed_launches();
        for name in ds.sites() {
            let chart = pie(compute_pie(&ds, &site(name)).unwrap());
            let expected = ds.records().iter().filter(|r| r.launch_site == *name).count();
            assert_eq!(chart.total(), expected, "site {name}");
        }
    }

    #[test]
    fn all_sites_pie_total_matches_success_count() {
        let ds = mixed_launches();
        let chart = pie(compute_pie(&ds, &SiteSelection::AllSites).unwrap());
        assert_eq!(chart.total(), ds.success_count());
        // VAFB has one success, CCAFS LC-40 one, KSC three, CCAFS SLC-40 one.
        assert_eq!(count_of(&chart, "KSC LC-39A"), Some(3));
    }

    #[test]
    fn unknown_site_is_rejected_by_both_views() {
        let ds = three_launches();
        assert_eq!(
            compute_pie(&ds, &site("Nowhere")),
            Err(ViewError::UnknownSite("Nowhere".into()))
        );
        assert!(compute_scatter(&ds, &site("Nowhere"), range(0.0, 10000.0)).is_err());
    }

    #[test]
    fn all_sites_scatter_uses_inclusive_range() {
        let chart = scatter(
            compute_scatter(&three_launches(), &SiteSelection::AllSites, range(1000.0, 3000.0))
                .unwrap(),
        );
        assert_eq!(chart.title, "Payload Mass vs. Class (All Sites)");
        let payloads: Vec<f64> = chart.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(payloads, vec![2000.0, 1500.0]);
        assert!(!payloads.contains(&500.0));

        let edge = scatter(
            compute_scatter(&three_launches(), &SiteSelection::AllSites, range(500.0, 1500.0))
                .unwrap(),
        );
        let payloads: Vec<f64> = edge.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(payloads, vec![500.0, 1500.0]);
    }

    #[test]
    fn scatter_points_stay_inside_range() {
        let ds = mixed_launches();
        for (low, high) in [(0.0, 10000.0), (1000.0, 4000.0), (3600.0, 3600.0), (7000.0, 9000.0)] {
            let chart = scatter(compute_scatter(&ds, &SiteSelection::AllSites, range(low, high)).unwrap());
            for p in &chart.points {
                assert!(low <= p.payload_mass_kg && p.payload_mass_kg <= high);
            }
        }
    }

    #[test]
    fn site_scatter_masks_the_site_subset() {
        let ds = mixed_launches();
        let chart = scatter(compute_scatter(&ds, &site("KSC LC-39A"), range(0.0, 10000.0)).unwrap());
        assert_eq!(chart.title, "Payload Mass vs. Class (KSC LC-39A)");
        assert_eq!(chart.points.len(), 4);
        assert!(chart.points.iter().all(|p| p.hover.contains("KSC LC-39A")));

        let narrowed = scatter(compute_scatter(&ds, &site("KSC LC-39A"), range(5000.0, 7000.0)).unwrap());
        let payloads: Vec<f64> = narrowed.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(payloads, vec![5300.0, 6070.0]);
    }

    #[test]
    fn scatter_encodings() {
        let ds = mixed_launches();
        let chart = scatter(compute_scatter(&ds, &SiteSelection::AllSites, range(2000.0, 6000.0)).unwrap());
        assert_eq!(chart.color_by, "Booster Version Category");
        assert_eq!(chart.categories, vec!["v1.1", "FT", "B4", "B5"]);

        let largest = chart
            .points
            .iter()
            .find(|p| p.payload_mass_kg == 5384.0)
            .unwrap();
        assert_eq!(largest.size, crate::chart::spec::MAX_MARKER_SIZE);
        assert_eq!(largest.class, 1);
        assert!(largest.hover.starts_with("Payload Mass (kg): 5384"));
        assert_eq!(chart.points_in("FT").count(), 2);
    }

    #[test]
    fn empty_range_yields_empty_chart() {
        let ds = mixed_launches();
        let chart = scatter(compute_scatter(&ds, &SiteSelection::AllSites, range(9700.0, 10000.0)).unwrap());
        assert!(chart.points.is_empty());
        assert!(chart.categories.is_empty());
    }

    #[test]
    fn views_are_idempotent() {
        let ds = mixed_launches();
        let s = site("CCAFS SLC-40");
        assert_eq!(compute_pie(&ds, &s), compute_pie(&ds, &s));
        assert_eq!(
            compute_scatter(&ds, &s, range(0.0, 6000.0)),
            compute_scatter(&ds, &s, range(0.0, 6000.0))
        );
    }
}

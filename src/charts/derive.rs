//! Chart Derivation Module
//! Pure functions mapping (site selection, payload range) onto chart
//! specifications. These hold no state and are safe to re-run every frame.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::data::{LaunchRecord, Outcome};

/// Selector value for both charts: every site, or one specific site.
/// A site name that matches no records simply yields empty output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    /// Label shown in the site dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All",
            SiteSelection::Site(site) => site,
        }
    }
}

/// Inclusive payload mass range in kg. An inverted range (low > high)
/// matches nothing rather than being an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.low && payload_kg <= self.high
    }
}

/// One labeled count in the success pie chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Success pie chart specification: ordered slices plus a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Sum of all slice values. Zero is valid (all-zero distribution).
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Payload-outcome scatter chart specification: the filtered record subset
/// plus a title. Points plot as x = payload mass, y = outcome class,
/// colored by booster category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub points: Vec<LaunchRecord>,
}

/// Site-Success Aggregator (pie chart derivation).
///
/// With `All` selected: one (site, success-count) slice per site that has at
/// least one successful launch, ordered by descending count then site name.
/// Sites with zero successes are absent, mirroring a success-only count.
///
/// With a specific site: fixed-order Success/Failed slices for that site,
/// both present even when zero.
pub fn success_breakdown(selection: &SiteSelection, records: &[LaunchRecord]) -> PieSpec {
    match selection {
        SiteSelection::All => {
            let mut counts: HashMap<&str, u64> = HashMap::new();
            for record in records.iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(record.site.as_str()).or_insert(0) += 1;
            }

            let mut slices: Vec<PieSlice> = counts
                .into_iter()
                .map(|(site, value)| PieSlice {
                    label: site.to_string(),
                    value,
                })
                .collect();
            // Deterministic order so identical inputs give identical output
            slices.sort_by(|a, b| (Reverse(a.value), &a.label).cmp(&(Reverse(b.value), &b.label)));

            PieSpec {
                title: "Success Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let mut successes = 0u64;
            let mut failures = 0u64;
            for record in records.iter().filter(|r| r.site == *site) {
                match record.outcome {
                    Outcome::Success => successes += 1,
                    Outcome::Failure => failures += 1,
                }
            }

            PieSpec {
                title: format!("Success Launches at {site}"),
                slices: vec![
                    PieSlice {
                        label: "Success".to_string(),
                        value: successes,
                    },
                    PieSlice {
                        label: "Failed".to_string(),
                        value: failures,
                    },
                ],
            }
        }
    }
}

/// Payload-Outcome Filter (scatter chart derivation).
///
/// Keeps records whose payload lies in `range` and whose site matches the
/// selection. An empty result is valid output, not an error.
pub fn payload_scatter(
    selection: &SiteSelection,
    range: PayloadRange,
    records: &[LaunchRecord],
) -> ScatterSpec {
    let points: Vec<LaunchRecord> = records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && selection.matches(&r.site))
        .cloned()
        .collect();

    let title = match selection {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Outcome at {site}"),
    };

    ScatterSpec { title, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, booster: &str, class: i64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            outcome: Outcome::from_class(class).unwrap(),
        }
    }

    /// The three-record scenario used throughout these tests:
    /// SiteA has one success and one failure, SiteB one success.
    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            record("SiteA", 500.0, "v1.0", 1),
            record("SiteA", 600.0, "v1.0", 0),
            record("SiteB", 700.0, "v1.1", 1),
        ]
    }

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    #[test]
    fn all_sites_pie_counts_successes_per_site() {
        let pie = success_breakdown(&SiteSelection::All, &sample_records());
        assert_eq!(pie.title, "Success Launches by Site");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice {
                    label: "SiteA".to_string(),
                    value: 1
                },
                PieSlice {
                    label: "SiteB".to_string(),
                    value: 1
                },
            ]
        );
        // Total equals the number of successful records
        assert_eq!(pie.total(), 2);
    }

    #[test]
    fn all_sites_pie_orders_by_count_then_name() {
        let records = vec![
            record("SiteB", 700.0, "v1.1", 1),
            record("SiteB", 800.0, "v1.1", 1),
            record("SiteA", 500.0, "v1.0", 1),
        ];
        let pie = success_breakdown(&SiteSelection::All, &records);
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["SiteB", "SiteA"]);
    }

    #[test]
    fn site_pie_reports_success_and_failed_in_fixed_order() {
        let pie = success_breakdown(&site("SiteA"), &sample_records());
        assert_eq!(pie.title, "Success Launches at SiteA");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice {
                    label: "Success".to_string(),
                    value: 1
                },
                PieSlice {
                    label: "Failed".to_string(),
                    value: 1
                },
            ]
        );
        // Total equals all records at the site, success and failure alike
        assert_eq!(pie.total(), 2);
    }

    #[test]
    fn zero_success_site_is_absent_from_all_mode_but_counted_site_mode() {
        let records = vec![
            record("SiteA", 500.0, "v1.0", 1),
            record("SiteC", 900.0, "FT", 0),
            record("SiteC", 950.0, "FT", 0),
        ];

        let all = success_breakdown(&SiteSelection::All, &records);
        assert!(all.slices.iter().all(|s| s.label != "SiteC"));

        let site_c = success_breakdown(&site("SiteC"), &records);
        assert_eq!(site_c.slices[0].value, 0); // Success
        assert_eq!(site_c.slices[1].value, 2); // Failed
    }

    #[test]
    fn unknown_site_yields_all_zero_pie_not_an_error() {
        let pie = success_breakdown(&site("Nowhere"), &sample_records());
        assert_eq!(pie.total(), 0);
        assert_eq!(pie.slices.len(), 2);
    }

    #[test]
    fn scatter_full_range_returns_every_record() {
        let records = sample_records();
        let spec = payload_scatter(&SiteSelection::All, PayloadRange::new(0.0, 10000.0), &records);
        assert_eq!(spec.title, "Payload vs. Outcome for All Sites");
        assert_eq!(spec.points, records);
    }

    #[test]
    fn scatter_range_bounds_are_inclusive() {
        let records = sample_records();
        let spec = payload_scatter(&SiteSelection::All, PayloadRange::new(550.0, 10000.0), &records);
        assert_eq!(spec.points, vec![records[1].clone(), records[2].clone()]);

        // Exactly on the bound counts as inside
        let spec = payload_scatter(&SiteSelection::All, PayloadRange::new(600.0, 700.0), &records);
        assert_eq!(spec.points.len(), 2);
    }

    #[test]
    fn scatter_applies_site_and_range_predicates_together() {
        let records = sample_records();
        let spec = payload_scatter(&site("SiteA"), PayloadRange::new(0.0, 10000.0), &records);
        assert_eq!(spec.title, "Payload vs. Outcome at SiteA");
        assert!(spec.points.iter().all(|r| r.site == "SiteA"));
        assert_eq!(spec.points.len(), 2);
    }

    #[test]
    fn scatter_output_satisfies_its_own_predicate_and_refilters_unchanged() {
        let records = sample_records();
        let selection = site("SiteA");
        let range = PayloadRange::new(550.0, 650.0);

        let spec = payload_scatter(&selection, range, &records);
        for point in &spec.points {
            assert!(range.contains(point.payload_mass_kg));
            assert!(selection.matches(&point.site));
        }

        // Filtering the output again with the same predicate is a fixpoint
        let refiltered = payload_scatter(&selection, range, &spec.points);
        assert_eq!(refiltered, spec);
    }

    #[test]
    fn inverted_or_disjoint_range_yields_empty_set() {
        let records = sample_records();
        let inverted = payload_scatter(&SiteSelection::All, PayloadRange::new(800.0, 100.0), &records);
        assert!(inverted.points.is_empty());

        let below = payload_scatter(&SiteSelection::All, PayloadRange::new(0.0, 400.0), &records);
        assert!(below.points.is_empty());

        let above = payload_scatter(&SiteSelection::All, PayloadRange::new(9000.0, 10000.0), &records);
        assert!(above.points.is_empty());
    }

    #[test]
    fn derivations_are_idempotent() {
        let records = sample_records();
        let selection = SiteSelection::All;
        let range = PayloadRange::new(0.0, 10000.0);

        assert_eq!(
            success_breakdown(&selection, &records),
            success_breakdown(&selection, &records)
        );
        assert_eq!(
            payload_scatter(&selection, range, &records),
            payload_scatter(&selection, range, &records)
        );
    }
}

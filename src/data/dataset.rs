//! Launch Record Dataset
//! Typed in-memory representation of the launch records CSV.
//! The dataset is immutable after load; the GUI only reads it.

use std::collections::BTreeSet;

/// Full payload slider range in kg (0 to 10000, step 1000).
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

/// Launch outcome, stored as the binary `class` column in the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Parse the CSV `class` value. Anything outside {0, 1} is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    /// Y coordinate for the payload-outcome scatter chart.
    pub fn as_plot_y(self) -> f64 {
        self.as_class() as f64
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

/// One row of the launch records CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub booster_category: String,
    pub outcome: Outcome,
}

/// The complete loaded dataset with pre-computed site list and payload bounds.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    /// All launch records, in CSV order.
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites.
    pub sites: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchDataset {
    /// Build the dataset index (distinct sites, observed payload bounds).
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites: BTreeSet<String> = records.iter().map(|r| r.site.clone()).collect();

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        Self {
            records,
            sites: sites.into_iter().collect(),
            min_payload,
            max_payload,
        }
    }

    /// Observed payload bounds `[min, max]`, used as the slider default.
    /// Falls back to the full slider range when no records are loaded.
    pub fn payload_bounds(&self) -> (f64, f64) {
        if self.records.is_empty() {
            (PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
        } else {
            (self.min_payload, self.max_payload)
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
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

    #[test]
    fn outcome_rejects_values_outside_binary_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
    }

    #[test]
    fn dataset_indexes_sites_sorted_and_distinct() {
        let dataset = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 3000.0, "FT", 1),
            record("CCAFS LC-40", 500.0, "v1.0", 0),
            record("KSC LC-39A", 4200.0, "B4", 1),
        ]);
        assert_eq!(dataset.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn payload_bounds_track_observed_extremes() {
        let dataset = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, "v1.0", 0),
            record("KSC LC-39A", 9600.0, "B5", 1),
        ]);
        assert_eq!(dataset.payload_bounds(), (500.0, 9600.0));
    }

    #[test]
    fn empty_dataset_falls_back_to_full_slider_range() {
        let dataset = LaunchDataset::from_records(Vec::new());
        assert_eq!(
            dataset.payload_bounds(),
            (PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
        );
    }
}

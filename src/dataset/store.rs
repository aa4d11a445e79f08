//! In-memory dataset accessor
//!
//! Holds every demand record for the session and exposes filtered views.
//! The record set is fixed after construction.

use serde::Serialize;
use std::collections::HashSet;

use super::error::{DatasetError, DatasetResult};
use super::types::{DemandRecord, Hour};

/// Summary of what happened while building a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Features found in the source collection
    pub features: usize,
    /// Records kept
    pub records: usize,
    /// Features skipped because they carry no county name
    pub skipped_unnamed: usize,
    /// Repeated (county, hour) pairs dropped in favour of the first one
    pub duplicates_dropped: usize,
}

/// The loaded demand records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<DemandRecord>,
    /// County names in order of first appearance
    counties: Vec<String>,
    /// Index of each county's first record, parallel to `counties`
    representatives: Vec<usize>,
    report: LoadReport,
}

impl Dataset {
    /// Build a dataset, keeping the first record of each (county, hour) pair
    pub fn from_records(records: impl IntoIterator<Item = DemandRecord>) -> Self {
        Self::build(records, LoadReport::default())
    }

    pub(crate) fn build(
        records: impl IntoIterator<Item = DemandRecord>,
        mut report: LoadReport,
    ) -> Self {
        let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
        let mut seen_counties: HashSet<String> = HashSet::new();
        let mut kept = Vec::new();
        let mut counties = Vec::new();
        let mut representatives = Vec::new();

        for record in records {
            if !seen_pairs.insert((record.county.clone(), record.hour_text.clone())) {
                tracing::warn!(
                    county = %record.county,
                    hour = %record.hour_text,
                    "Dropping duplicate county/hour record"
                );
                report.duplicates_dropped += 1;
                continue;
            }

            if seen_counties.insert(record.county.clone()) {
                counties.push(record.county.clone());
                representatives.push(kept.len());
            }
            kept.push(record);
        }

        report.records = kept.len();

        Self {
            records: kept,
            counties,
            representatives,
            report,
        }
    }

    /// All records in source order
    pub fn records(&self) -> &[DemandRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records were loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load statistics
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Distinct county names in order of first appearance
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    /// Check whether a county is present
    pub fn contains_county(&self, county: &str) -> bool {
        self.counties.iter().any(|c| c == county)
    }

    /// Fail with `CountyNotFound` unless the county is present
    pub fn require_county(&self, county: &str) -> DatasetResult<()> {
        if self.contains_county(county) {
            Ok(())
        } else {
            Err(DatasetError::CountyNotFound(county.to_string()))
        }
    }

    /// Records for one hour, in source order
    pub fn at_hour(&self, hour: Hour) -> impl Iterator<Item = &DemandRecord> + '_ {
        self.records.iter().filter(move |r| r.is_at(hour))
    }

    /// The record for a county at an hour, if any
    pub fn record(&self, county: &str, hour: Hour) -> Option<&DemandRecord> {
        self.records
            .iter()
            .find(|r| r.county == county && r.is_at(hour))
    }

    /// First record of each county, one per county
    pub fn representatives(&self) -> impl Iterator<Item = &DemandRecord> + '_ {
        self.representatives.iter().map(move |&i| &self.records[i])
    }

    /// The first record of a county
    pub fn representative(&self, county: &str) -> Option<&DemandRecord> {
        self.counties
            .iter()
            .position(|c| c == county)
            .map(|i| &self.records[self.representatives[i]])
    }

    /// Hours that have at least one record, ascending
    pub fn hours_present(&self) -> Vec<Hour> {
        Hour::all()
            .filter(|h| self.records.iter().any(|r| r.is_at(*h)))
            .collect()
    }
}

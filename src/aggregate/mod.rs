//! Aggregations over the demand dataset
//!
//! Pure functions; every call rescans the records. Nothing is cached
//! beyond the caller's render cycle.

use serde::Serialize;

use crate::dataset::{Dataset, DatasetResult, FleetCounts, Hour, HOURS_PER_DAY};

/// Statewide average demand at one hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyAverage {
    pub hour: Hour,
    /// Mean `ev_demand` across the hour's records, 0 when there are none
    pub average: f64,
}

/// Fleet totals summed once per county
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FleetTotals {
    /// Number of counties contributing
    pub counties: usize,
    #[serde(flatten)]
    pub fleet: FleetCounts,
}

/// Average demand for each hour 0-23, in hour order
pub fn average_demand_by_hour(dataset: &Dataset) -> Vec<HourlyAverage> {
    Hour::all()
        .map(|hour| {
            let (sum, count) = dataset
                .at_hour(hour)
                .fold((0.0, 0usize), |(sum, count), r| (sum + r.ev_demand, count + 1));

            let average = if count == 0 { 0.0 } else { sum / count as f64 };
            HourlyAverage { hour, average }
        })
        .collect()
}

/// Sum fleet counts across counties, taking each county's first record
///
/// Fleet composition is reported per county, so later hourly rows of the
/// same county are not counted again.
pub fn vehicle_totals_by_fleet_class(dataset: &Dataset) -> FleetTotals {
    dataset
        .representatives()
        .fold(FleetTotals::default(), |mut totals, record| {
            totals.counties += 1;
            totals.fleet.absorb(&record.fleet);
            totals
        })
}

/// A county's demand at each hour 0-23, 0 where it has no record
pub fn county_demand_series(dataset: &Dataset, county: &str) -> DatasetResult<Vec<f64>> {
    dataset.require_county(county)?;

    let mut series = vec![0.0; HOURS_PER_DAY];
    for (slot, hour) in series.iter_mut().zip(Hour::all()) {
        if let Some(record) = dataset.record(county, hour) {
            *slot = record.ev_demand;
        }
    }

    Ok(series)
}

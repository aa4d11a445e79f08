//! County table
//!
//! One row per county for the selected hour, rebuilt from scratch on every
//! hour change. Exportable as CSV or JSON.

use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

use super::format::{grouped, kwh};
use crate::dataset::{Dataset, DatasetResult, Hour};

/// Column headers, in display order
pub const COLUMNS: [&str; 6] = [
    "County",
    "Heavy Duty",
    "Medium Duty",
    "Light Duty",
    "Total Vehicles",
    "EV Demand (kWh)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub county: String,
    pub heavy_duty: f64,
    pub medium_duty: f64,
    pub light_duty: f64,
    pub total_vehicles: f64,
    pub ev_demand: f64,
}

impl TableRow {
    /// Formatted cells matching [`COLUMNS`]
    pub fn cells(&self) -> [String; 6] {
        [
            self.county.clone(),
            grouped(self.heavy_duty),
            grouped(self.medium_duty),
            grouped(self.light_duty),
            grouped(self.total_vehicles),
            kwh(self.ev_demand),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyTable {
    pub hour: Hour,
    pub rows: Vec<TableRow>,
}

impl CountyTable {
    /// Write the table as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> DatasetResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(COLUMNS)?;
        for row in &self.rows {
            csv.write_record(row.cells())?;
        }
        csv.flush()?;
        Ok(())
    }

    /// CSV as a string
    pub fn to_csv(&self) -> DatasetResult<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| crate::dataset::DatasetError::Export(e.to_string()))
    }
}

/// Build the table for `hour`; the first record of each county wins
pub fn county_table(dataset: &Dataset, hour: Hour) -> CountyTable {
    let mut seen = HashSet::new();
    let rows = dataset
        .at_hour(hour)
        .filter(|r| seen.insert(r.county.as_str()))
        .map(|r| TableRow {
            county: r.county.clone(),
            heavy_duty: r.fleet.heavy,
            medium_duty: r.fleet.medium,
            light_duty: r.fleet.light,
            total_vehicles: r.fleet.total,
            ev_demand: r.ev_demand,
        })
        .collect();

    CountyTable { hour, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{two_county_dataset, KANAWHA, MONONGALIA};
    use crate::dataset::{DemandRecord, FleetCounts};

    #[test]
    fn test_one_row_per_county() {
        let dataset = two_county_dataset();
        for hour in Hour::all() {
            let table = county_table(&dataset, hour);
            assert_eq!(table.rows.len(), dataset.counties().len());
        }

        let table = county_table(&dataset, Hour::new(3).unwrap());
        assert_eq!(table.rows[0].county, KANAWHA);
        assert_eq!(table.rows[1].county, MONONGALIA);
        assert_eq!(table.rows[1].ev_demand, 15.0);
    }

    #[test]
    fn test_only_counties_present_at_hour() {
        let dataset = Dataset::from_records(vec![
            DemandRecord::new("A County", "1", 1.0),
            DemandRecord::new("B County", "2", 1.0),
        ]);
        let table = county_table(&dataset, Hour::new(1).unwrap());
        assert_eq!(table.rows.len(), 1);
        assert!(county_table(&dataset, Hour::new(5).unwrap()).rows.is_empty());
    }

    #[test]
    fn test_cells_are_formatted() {
        let dataset = Dataset::from_records(vec![DemandRecord::new("A County", "0", 7.126)
            .fleet(FleetCounts { total: 123456.0, heavy: 1000.0, medium: 0.0, light: 22.0 })]);
        let table = county_table(&dataset, Hour::new(0).unwrap());

        assert_eq!(
            table.rows[0].cells(),
            ["A County", "1,000", "0", "22", "123,456", "7.13"].map(String::from)
        );
    }

    #[test]
    fn test_csv_export() {
        let table = county_table(&two_county_dataset(), Hour::new(2).unwrap());
        let csv = table.to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "County,Heavy Duty,Medium Duty,Light Duty,Total Vehicles,EV Demand (kWh)"
        );
        assert_eq!(lines[1], "Kanawha County,100,200,900,\"1,200\",20.00");
    }
}

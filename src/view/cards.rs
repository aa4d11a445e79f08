//! Summary cards
//!
//! Statewide fleet totals by default, or a single county's fleet after a click.

use serde::Serialize;

use super::format::grouped;
use super::state::Focus;
use crate::aggregate::vehicle_totals_by_fleet_class;
use crate::dataset::{Dataset, DatasetError, DatasetResult, FleetCounts, Hour};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCards {
    pub scope: Focus,
    pub fleet: FleetCounts,
    pub total_card: String,
    pub heavy_card: String,
    pub medium_card: String,
    pub light_card: String,
}

impl SummaryCards {
    fn new(scope: Focus, fleet: FleetCounts) -> Self {
        let total_card = match &scope {
            Focus::Statewide => format!("Total Fleet Vehicles: {}", grouped(fleet.total)),
            Focus::County(name) => format!("{}: {}", name, grouped(fleet.total)),
        };

        Self {
            total_card,
            heavy_card: format!("Heavy Duty: {}", grouped(fleet.heavy)),
            medium_card: format!("Medium Duty: {}", grouped(fleet.medium)),
            light_card: format!("Light Duty: {}", grouped(fleet.light)),
            scope,
            fleet,
        }
    }

    /// Card texts in display order
    pub fn lines(&self) -> [&str; 4] {
        [
            self.total_card.as_str(),
            self.heavy_card.as_str(),
            self.medium_card.as_str(),
            self.light_card.as_str(),
        ]
    }
}

/// Cards summing every county once
pub fn statewide_cards(dataset: &Dataset) -> SummaryCards {
    SummaryCards::new(Focus::Statewide, vehicle_totals_by_fleet_class(dataset).fleet)
}

/// Cards for one county, read from its record at `hour`
///
/// Counties without a record at that hour fall back to their first record.
pub fn county_cards(dataset: &Dataset, county: &str, hour: Hour) -> DatasetResult<SummaryCards> {
    let record = dataset
        .record(county, hour)
        .or_else(|| dataset.representative(county))
        .ok_or_else(|| DatasetError::CountyNotFound(county.to_string()))?;

    Ok(SummaryCards::new(
        Focus::County(record.county.clone()),
        record.fleet,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{two_county_dataset, KANAWHA};
    use crate::dataset::DemandRecord;

    #[test]
    fn test_statewide_cards() {
        let cards = statewide_cards(&two_county_dataset());
        assert_eq!(cards.scope, Focus::Statewide);
        assert_eq!(
            cards.lines(),
            [
                "Total Fleet Vehicles: 2,000",
                "Heavy Duty: 150",
                "Medium Duty: 350",
                "Light Duty: 1,500"
            ]
        );
    }

    #[test]
    fn test_county_cards() {
        let cards = county_cards(&two_county_dataset(), KANAWHA, Hour::NOON).unwrap();
        assert_eq!(cards.scope, Focus::County(KANAWHA.to_string()));
        assert_eq!(cards.total_card, "Kanawha County: 1,200");
        assert_eq!(cards.light_card, "Light Duty: 900");
    }

    #[test]
    fn test_county_cards_fallback_and_unknown() {
        let dataset = Dataset::from_records(vec![DemandRecord::new("A County", "4", 1.0)]);
        let cards = county_cards(&dataset, "A County", Hour::NOON).unwrap();
        assert_eq!(cards.total_card, "A County: 0");

        assert!(matches!(
            county_cards(&dataset, "B County", Hour::NOON),
            Err(DatasetError::CountyNotFound(_))
        ));
    }

    #[test]
    fn test_scope_serialization() {
        let json = serde_json::to_value(Focus::County("A County".into())).unwrap();
        assert_eq!(json["kind"], "county");
        assert_eq!(json["county"], "A County");

        let json = serde_json::to_value(Focus::Statewide).unwrap();
        assert_eq!(json["kind"], "statewide");
    }
}

//! Dashboard view state
//!
//! ```text
//! Idle(hour=h) --select_hour(h')--> Idle(hour=h')      re-render map + table
//! Idle         --focus_county(c)--> Focused(county=c)  cards show c
//! Focused      --select_hour(h')--> Focused            focus is kept
//! any          --reset-----------> Idle (statewide)
//! ```

use geojson::FeatureCollection;
use serde::Serialize;

use super::cards::{county_cards, statewide_cards, SummaryCards};
use super::layer::build_layer;
use super::table::{county_table, CountyTable};
use crate::dataset::{Dataset, DatasetResult, Hour};

/// Which county, if any, the cards are focused on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "county", rename_all = "snake_case")]
pub enum Focus {
    Statewide,
    County(String),
}

/// Selected hour plus card focus for one dashboard session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    hour: Hour,
    focus: Focus,
}

/// Everything the page redraws after an hour change
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub hour: Hour,
    pub hour_label: String,
    pub focus: Focus,
    pub layer: FeatureCollection,
    pub table: CountyTable,
    pub cards: SummaryCards,
}

impl ViewState {
    /// Statewide view at `hour`
    pub fn new(hour: Hour) -> Self {
        Self {
            hour,
            focus: Focus::Statewide,
        }
    }

    pub fn hour(&self) -> Hour {
        self.hour
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Move the selector; the focus is kept
    pub fn select_hour(&mut self, hour: Hour) {
        self.hour = hour;
    }

    /// Focus the cards on a county; unknown counties leave the state unchanged
    pub fn focus_county(&mut self, dataset: &Dataset, county: &str) -> DatasetResult<()> {
        dataset.require_county(county)?;
        self.focus = Focus::County(county.to_string());
        Ok(())
    }

    /// Back to statewide cards
    pub fn reset(&mut self) {
        self.focus = Focus::Statewide;
    }

    /// Cards for the current focus
    pub fn cards(&self, dataset: &Dataset) -> DatasetResult<SummaryCards> {
        match &self.focus {
            Focus::Statewide => Ok(statewide_cards(dataset)),
            Focus::County(county) => county_cards(dataset, county, self.hour),
        }
    }

    /// Rebuild map layer, table and cards from scratch
    pub fn render(&self, dataset: &Dataset) -> DatasetResult<DashboardView> {
        Ok(DashboardView {
            hour: self.hour,
            hour_label: self.hour.label(),
            focus: self.focus.clone(),
            layer: build_layer(dataset, self.hour),
            table: county_table(dataset, self.hour),
            cards: self.cards(dataset)?,
        })
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Hour::NOON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{two_county_dataset, KANAWHA};

    #[test]
    fn test_defaults_to_statewide_noon() {
        let state = ViewState::default();
        assert_eq!(state.hour(), Hour::NOON);
        assert_eq!(state.focus(), &Focus::Statewide);
    }

    #[test]
    fn test_hour_change_rerenders() {
        let dataset = two_county_dataset();
        let mut state = ViewState::default();

        state.select_hour(Hour::new(5).unwrap());
        let view = state.render(&dataset).unwrap();

        assert_eq!(view.hour_label, "5:00");
        assert_eq!(view.layer.features.len(), 2);
        assert_eq!(view.table.rows.len(), 2);
        assert_eq!(view.table.rows[0].ev_demand, 50.0);
        assert_eq!(view.cards.scope, Focus::Statewide);
    }

    #[test]
    fn test_focus_survives_hour_change_until_reset() {
        let dataset = two_county_dataset();
        let mut state = ViewState::default();

        state.focus_county(&dataset, KANAWHA).unwrap();
        state.select_hour(Hour::new(20).unwrap());
        assert_eq!(state.focus(), &Focus::County(KANAWHA.to_string()));

        let view = state.render(&dataset).unwrap();
        assert_eq!(view.cards.total_card, "Kanawha County: 1,200");
        assert_eq!(view.cards.scope, view.focus);

        state.reset();
        assert_eq!(state.focus(), &Focus::Statewide);
        assert_eq!(state.hour().get(), 20);
    }

    #[test]
    fn test_unknown_county_leaves_state_unchanged() {
        let dataset = two_county_dataset();
        let mut state = ViewState::default();
        state.focus_county(&dataset, KANAWHA).unwrap();

        let before = state.clone();
        assert!(state.focus_county(&dataset, "Atlantis County").is_err());
        assert_eq!(state, before);
    }
}

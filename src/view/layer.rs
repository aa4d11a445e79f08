//! Map layer
//!
//! Builds the choropleth layer for one hour as a GeoJSON feature collection.
//! Changing the hour rebuilds the whole layer.

use geojson::{Feature, FeatureCollection, JsonObject};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use super::choropleth::style_for;
use crate::config::MapConfig;
use crate::dataset::{Dataset, DemandRecord, Hour};

/// Content of a county popup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupContent {
    pub county: String,
    pub hour_label: String,
    pub ev_demand: f64,
    pub total_vehicles: f64,
    pub heavy_duty: f64,
    pub medium_duty: f64,
    pub light_duty: f64,
    /// Element id the client renders the county's hourly chart into
    pub chart_id: String,
}

impl PopupContent {
    pub fn for_record(record: &DemandRecord, hour: Hour) -> Self {
        Self {
            county: record.county.clone(),
            hour_label: hour.label(),
            ev_demand: record.ev_demand,
            total_vehicles: record.fleet.total,
            heavy_duty: record.fleet.heavy,
            medium_duty: record.fleet.medium,
            light_duty: record.fleet.light,
            chart_id: chart_element_id(&record.county),
        }
    }
}

/// Initial map position and base tiles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    /// `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl From<&MapConfig> for HomeView {
    fn from(config: &MapConfig) -> Self {
        Self {
            center: [config.center_lat, config.center_lon],
            zoom: config.zoom,
            max_zoom: config.max_zoom,
            tile_url: config.tile_url.clone(),
            attribution: config.attribution.clone(),
        }
    }
}

/// `chart_` followed by the county name with whitespace runs replaced by `_`
pub fn chart_element_id(county: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"));
    format!("chart_{}", re.replace_all(county, "_"))
}

/// One styled polygon per county record at `hour`
pub fn build_layer(dataset: &Dataset, hour: Hour) -> FeatureCollection {
    let features: Vec<Feature> = dataset
        .at_hour(hour)
        .map(|record| layer_feature(record, hour))
        .collect();

    tracing::debug!(hour = %hour, features = features.len(), "Built map layer");

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn layer_feature(record: &DemandRecord, hour: Hour) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("county".into(), record.county.clone().into());
    properties.insert("hour".into(), hour.get().into());
    properties.insert("ev_demand".into(), record.ev_demand.into());
    properties.insert(
        "style".into(),
        serde_json::to_value(style_for(record.ev_demand)).unwrap_or_default(),
    );
    properties.insert(
        "popup".into(),
        serde_json::to_value(PopupContent::for_record(record, hour)).unwrap_or_default(),
    );

    Feature {
        bbox: None,
        geometry: record.geometry.clone(),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{two_county_dataset, KANAWHA};

    #[test]
    fn test_chart_element_id() {
        assert_eq!(chart_element_id("Kanawha County"), "chart_Kanawha_County");
        assert_eq!(chart_element_id("Big  \t Sandy"), "chart_Big_Sandy");
        assert_eq!(chart_element_id("Ohio"), "chart_Ohio");
    }

    #[test]
    fn test_layer_has_one_feature_per_county() {
        let dataset = two_county_dataset();
        let hour = Hour::new(9).unwrap();
        let layer = build_layer(&dataset, hour);

        assert_eq!(layer.features.len(), 2);
        for feature in &layer.features {
            assert!(feature.geometry.is_some());
            let props = feature.properties.as_ref().unwrap();
            assert_eq!(props["hour"], 9);
            assert!(props["style"]["fillColor"].is_string());
        }
    }

    #[test]
    fn test_layer_styles_and_popup() {
        let dataset = two_county_dataset();
        let layer = build_layer(&dataset, Hour::new(12).unwrap());

        let kanawha = layer
            .features
            .iter()
            .find(|f| f.properties.as_ref().unwrap()["county"] == KANAWHA)
            .unwrap();
        let props = kanawha.properties.as_ref().unwrap();

        assert_eq!(props["ev_demand"], 120.0);
        assert_eq!(props["style"]["fillColor"], "#bd0026");
        assert_eq!(props["popup"]["hour_label"], "12:00");
        assert_eq!(props["popup"]["total_vehicles"], 1200.0);
        assert_eq!(props["popup"]["chart_id"], "chart_Kanawha_County");
    }

    #[test]
    fn test_home_view_from_config() {
        let home = HomeView::from(&MapConfig::default());
        assert_eq!(home.center, [38.5, -79.5]);
        assert_eq!(home.zoom, 7);
        assert_eq!(home.max_zoom, 19);
    }
}

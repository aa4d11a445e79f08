//! GeoJSON loading
//!
//! Turns a feature collection into a [`Dataset`]. Each feature carries one
//! county at one hour in its property bag.

use geojson::{Feature, GeoJson};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::coerce;
use super::error::{DatasetError, DatasetResult};
use super::store::{Dataset, LoadReport};
use super::types::{DemandRecord, FleetCounts};

/// Property names in the source feature collection
pub mod props {
    pub const COUNTY: &str = "NAMELSAD";
    pub const HOUR: &str = "Hour of Da";
    pub const EV_DEMAND: &str = "ev_demand";
    pub const TOTAL_REGISTRATIONS: &str = "total_regi";
    pub const HEAVY_DUTY: &str = "Heavy_Duty";
    pub const MEDIUM_DUTY: &str = "Medium_Dut";
    pub const LIGHT_DUTY: &str = "Light_Duty";
}

impl Dataset {
    /// Load a dataset from a GeoJSON file
    pub fn load(path: &Path) -> DatasetResult<Self> {
        if !path.exists() {
            return Err(DatasetError::Missing(path.to_path_buf()));
        }

        let reader = BufReader::new(File::open(path)?);
        let geojson = GeoJson::from_reader(reader)?;
        let dataset = Self::from_geojson(geojson)?;

        tracing::info!(
            path = ?path,
            records = dataset.len(),
            counties = dataset.counties().len(),
            "Loaded demand dataset"
        );

        Ok(dataset)
    }

    /// Parse a dataset from GeoJSON text
    pub fn from_geojson_str(text: &str) -> DatasetResult<Self> {
        let geojson: GeoJson = text.parse()?;
        Self::from_geojson(geojson)
    }

    /// Build a dataset from parsed GeoJSON; only feature collections are accepted
    pub fn from_geojson(geojson: GeoJson) -> DatasetResult<Self> {
        let collection = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            GeoJson::Feature(_) => return Err(DatasetError::NotFeatureCollection("Feature")),
            GeoJson::Geometry(_) => return Err(DatasetError::NotFeatureCollection("Geometry")),
        };

        let mut report = LoadReport {
            features: collection.features.len(),
            ..Default::default()
        };

        let mut records = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            match record_from_feature(feature) {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(index, "Skipping feature without a county name");
                    report.skipped_unnamed += 1;
                }
            }
        }

        Ok(Self::build(records, report))
    }
}

/// Convert one feature; `None` when the county name is missing or empty
fn record_from_feature(feature: Feature) -> Option<DemandRecord> {
    let property = |key: &str| feature.properties.as_ref().and_then(|p| p.get(key));

    let county = coerce::text(property(props::COUNTY)).filter(|c| !c.trim().is_empty())?;
    let hour_text = coerce::text(property(props::HOUR)).unwrap_or_default();

    let fleet = FleetCounts {
        total: coerce::number(property(props::TOTAL_REGISTRATIONS)),
        heavy: coerce::number(property(props::HEAVY_DUTY)),
        medium: coerce::number(property(props::MEDIUM_DUTY)),
        light: coerce::number(property(props::LIGHT_DUTY)),
    };

    let mut record = DemandRecord::new(county, hour_text, coerce::number(property(props::EV_DEMAND)))
        .fleet(fleet);
    record.geometry = feature.geometry;

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::two_county_geojson;
    use crate::dataset::Hour;
    use std::io::Write;

    #[test]
    fn test_load_fixture() {
        let dataset = Dataset::from_geojson_str(&two_county_geojson()).unwrap();

        assert_eq!(dataset.len(), 48);
        assert_eq!(dataset.counties().len(), 2);
        assert_eq!(dataset.report().features, 48);
        assert_eq!(dataset.report().records, 48);
        assert!(dataset.records().iter().all(|r| r.geometry.is_some()));
    }

    #[test]
    fn test_properties_are_coerced() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": null,
                "properties": {
                    "NAMELSAD": "Ohio County",
                    "Hour of Da": 6,
                    "ev_demand": "12.5",
                    "total_regi": "",
                    "Heavy_Duty": null,
                    "Medium_Dut": "unknown",
                    "Light_Duty": 300
                }
            }]
        }"#;

        let dataset = Dataset::from_geojson_str(text).unwrap();
        let record = &dataset.records()[0];

        assert_eq!(record.hour(), Hour::new(6).ok());
        assert_eq!(record.ev_demand, 12.5);
        assert_eq!(record.fleet.total, 0.0);
        assert_eq!(record.fleet.heavy, 0.0);
        assert_eq!(record.fleet.medium, 0.0);
        assert_eq!(record.fleet.light, 300.0);
        assert!(record.geometry.is_none());
    }

    #[test]
    fn test_unnamed_features_are_skipped() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null, "properties": {"Hour of Da": "1", "ev_demand": 3}},
                {"type": "Feature", "geometry": null, "properties": {"NAMELSAD": "  ", "Hour of Da": "1"}},
                {"type": "Feature", "geometry": null, "properties": null},
                {"type": "Feature", "geometry": null, "properties": {"NAMELSAD": "Wood County", "Hour of Da": "1"}}
            ]
        }"#;

        let dataset = Dataset::from_geojson_str(text).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.report().skipped_unnamed, 3);
        assert_eq!(dataset.report().features, 4);
    }

    #[test]
    fn test_rejects_non_collection() {
        let text = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
        assert!(matches!(
            Dataset::from_geojson_str(text),
            Err(DatasetError::NotFeatureCollection("Geometry"))
        ));
        assert!(matches!(
            Dataset::from_geojson_str("not json"),
            Err(DatasetError::GeoJson(_))
        ));
    }

    #[test]
    fn test_missing_file_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.geojson");
        assert!(matches!(Dataset::load(&path), Err(DatasetError::Missing(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ev_demand.geojson");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(two_county_geojson().as_bytes()).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 48);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.geojson");
        std::fs::write(&path, "{\"type\": \"FeatureCollection\", \"features\": [").unwrap();

        assert!(matches!(Dataset::load(&path), Err(DatasetError::GeoJson(_))));
    }
}

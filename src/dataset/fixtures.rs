//! Test fixtures: two counties with a full day of hourly records each

use serde_json::json;

use super::store::Dataset;

pub const KANAWHA: &str = "Kanawha County";
pub const MONONGALIA: &str = "Monongalia County";

/// Kanawha demand is `10 * hour`, Monongalia demand is `5 * hour`
pub fn two_county_geojson() -> String {
    let mut features = Vec::new();

    for hour in 0..24 {
        features.push(feature(KANAWHA, hour, 10.0 * hour as f64, [1200, 100, 200, 900], 0.0));
        features.push(feature(MONONGALIA, hour, 5.0 * hour as f64, [800, 50, 150, 600], 1.0));
    }

    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

pub fn two_county_dataset() -> Dataset {
    Dataset::from_geojson_str(&two_county_geojson()).unwrap()
}

fn feature(county: &str, hour: u8, demand: f64, fleet: [u32; 4], offset: f64) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [-81.0 + offset, 38.0],
                [-80.5 + offset, 38.0],
                [-80.5 + offset, 38.5],
                [-81.0 + offset, 38.0]
            ]]
        },
        "properties": {
            "NAMELSAD": county,
            "Hour of Da": hour.to_string(),
            "ev_demand": demand,
            "total_regi": fleet[0],
            "Heavy_Duty": fleet[1],
            "Medium_Dut": fleet[2],
            "Light_Duty": fleet[3]
        }
    })
}

//! Choropleth colour scale
//!
//! Seven demand buckets keyed by kWh thresholds, open-ended above the top one.

use serde::Serialize;

/// Lower bounds of the legend buckets, in kWh
pub const THRESHOLDS: [u32; 7] = [0, 1, 14, 38, 67, 111, 181];

/// Fill colour for a county's demand value
pub fn fill_color(demand: f64) -> &'static str {
    if demand > 111.0 {
        "#bd0026"
    } else if demand > 67.0 {
        "#f03b20"
    } else if demand > 38.0 {
        "#fd8d3c"
    } else if demand > 14.0 {
        "#feb24c"
    } else if demand > 1.0 {
        "#fed976"
    } else if demand > 0.0 {
        "#ffffb2"
    } else {
        "#ffffff"
    }
}

/// Path style for one county polygon, in the map library's option names
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    pub fill_color: &'static str,
    pub weight: u8,
    pub color: &'static str,
    pub dash_array: &'static str,
    pub fill_opacity: f64,
}

/// Style a polygon by its demand
pub fn style_for(demand: f64) -> FeatureStyle {
    FeatureStyle {
        fill_color: fill_color(demand),
        weight: 2,
        color: "#000",
        dash_array: "3",
        fill_opacity: 0.5,
    }
}

/// One legend row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub from: u32,
    /// Upper bound; `None` for the open-ended top bucket
    pub to: Option<u32>,
    pub color: &'static str,
    pub label: String,
}

/// Legend rows, lowest bucket first
pub fn legend() -> Vec<LegendEntry> {
    THRESHOLDS
        .iter()
        .enumerate()
        .map(|(i, &from)| {
            let to = THRESHOLDS.get(i + 1).copied();
            let label = match to {
                Some(to) => format!("{}–{} kWh", from, to),
                None => format!("{}+ kWh", from),
            };
            LegendEntry {
                from,
                to,
                color: fill_color(from as f64 + 1.0),
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_color_bucket_edges() {
        assert_eq!(fill_color(0.0), "#ffffff");
        assert_eq!(fill_color(-3.0), "#ffffff");
        assert_eq!(fill_color(0.5), "#ffffb2");
        assert_eq!(fill_color(1.0), "#ffffb2");
        assert_eq!(fill_color(1.01), "#fed976");
        assert_eq!(fill_color(14.0), "#fed976");
        assert_eq!(fill_color(38.0), "#feb24c");
        assert_eq!(fill_color(67.0), "#fd8d3c");
        assert_eq!(fill_color(111.0), "#f03b20");
        assert_eq!(fill_color(111.5), "#bd0026");
        assert_eq!(fill_color(5000.0), "#bd0026");
    }

    #[test]
    fn test_style() {
        let style = style_for(50.0);
        assert_eq!(style.fill_color, "#fd8d3c");
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["fillColor"], "#fd8d3c");
        assert_eq!(json["dashArray"], "3");
        assert_eq!(json["fillOpacity"], 0.5);
    }

    #[test]
    fn test_legend() {
        let legend = legend();
        assert_eq!(legend.len(), 7);
        assert_eq!(legend[0].label, "0–1 kWh");
        assert_eq!(legend[0].color, "#ffffb2");
        assert_eq!(legend[5].color, "#bd0026");
        assert_eq!(legend[6].label, "181+ kWh");
        assert_eq!(legend[6].to, None);
    }
}

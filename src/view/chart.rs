//! Chart series
//!
//! Line-chart data for the statewide average and the per-county popup chart.

use serde::Serialize;

use super::layer::chart_element_id;
use crate::aggregate::{average_demand_by_hour, county_demand_series};
use crate::dataset::{Dataset, DatasetResult, Hour};

/// A single line series with its axis labels and colours
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    /// `"0:00"` .. `"23:00"`
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
    pub tension: f64,
    /// Y axis unit
    pub unit: &'static str,
}

/// Popup chart for one county
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyChart {
    pub county: String,
    pub chart_id: String,
    pub series: ChartSeries,
}

fn hour_labels() -> Vec<String> {
    Hour::all().map(Hour::label).collect()
}

/// Average demand by hour across all counties
pub fn average_demand_chart(dataset: &Dataset) -> ChartSeries {
    ChartSeries {
        label: "Avg EV Demand",
        labels: hour_labels(),
        values: average_demand_by_hour(dataset)
            .into_iter()
            .map(|a| a.average)
            .collect(),
        border_color: "#ffdd57",
        background_color: "rgba(255,221,87,0.3)",
        fill: true,
        tension: 0.25,
        unit: "kWh",
    }
}

/// 24-hour demand for one county, computed when its popup opens
pub fn county_demand_chart(dataset: &Dataset, county: &str) -> DatasetResult<CountyChart> {
    let values = county_demand_series(dataset, county)?;

    Ok(CountyChart {
        county: county.to_string(),
        chart_id: chart_element_id(county),
        series: ChartSeries {
            label: "EV Demand",
            labels: hour_labels(),
            values,
            border_color: "#f03b20",
            background_color: "rgba(240,59,32,0.2)",
            fill: true,
            tension: 0.2,
            unit: "kW",
        },
    })
}

//! Core data types for the demand dataset
//!
//! - `Hour`: a validated hour of day (0-23)
//! - `FleetCounts`: registered vehicles split by fleet class
//! - `DemandRecord`: one county at one hour

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{DatasetError, DatasetResult};

/// Number of hourly slots in a day
pub const HOURS_PER_DAY: usize = 24;

/// Hour of day, always in `0..=23`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// Hour shown when the dashboard first loads
    pub const NOON: Hour = Hour(12);

    /// Create an hour, rejecting values above 23
    pub fn new(hour: u8) -> DatasetResult<Self> {
        if (hour as usize) < HOURS_PER_DAY {
            Ok(Self(hour))
        } else {
            Err(DatasetError::InvalidHour(hour.to_string()))
        }
    }

    /// Raw hour value
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterate all 24 hours in order
    pub fn all() -> impl Iterator<Item = Hour> {
        (0..HOURS_PER_DAY as u8).map(Hour)
    }

    /// Display label used on chart axes and the slider (`"5:00"`)
    pub fn label(self) -> String {
        format!("{}:00", self.0)
    }

    /// Canonical text form as stored in the `Hour of Da` property (`"5"`)
    pub fn as_text(self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<u8> for Hour {
    type Error = DatasetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Hour::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> u8 {
        hour.0
    }
}

impl FromStr for Hour {
    type Err = DatasetError;

    /// Parse user input such as a slider value; `"05"` and `" 5 "` are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| DatasetError::InvalidHour(s.to_string()))?;
        Hour::new(value).map_err(|_| DatasetError::InvalidHour(s.to_string()))
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered vehicles for a county, by fleet class
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetCounts {
    /// Total vehicle registrations (`total_regi`)
    pub total: f64,
    /// Heavy duty vehicles (`Heavy_Duty`)
    pub heavy: f64,
    /// Medium duty vehicles (`Medium_Dut`)
    pub medium: f64,
    /// Light duty vehicles (`Light_Duty`)
    pub light: f64,
}

impl FleetCounts {
    /// Add another county's counts into this one
    pub fn absorb(&mut self, other: &FleetCounts) {
        self.total += other.total;
        self.heavy += other.heavy;
        self.medium += other.medium;
        self.light += other.light;
    }
}

/// One feature of the loaded collection: a county at one hour of the day
///
/// Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandRecord {
    /// County name (`NAMELSAD`)
    pub county: String,
    /// Hour of day exactly as stored in the source (`Hour of Da`)
    pub hour_text: String,
    /// EV charging demand in kWh (`ev_demand`)
    pub ev_demand: f64,
    /// Fleet registrations for the county
    pub fleet: FleetCounts,
    /// County polygon, passed through to the map layer
    #[serde(skip)]
    pub geometry: Option<geojson::Geometry>,
}

impl DemandRecord {
    /// Create a record without geometry
    pub fn new(county: impl Into<String>, hour_text: impl Into<String>, ev_demand: f64) -> Self {
        Self {
            county: county.into(),
            hour_text: hour_text.into(),
            ev_demand,
            fleet: FleetCounts::default(),
            geometry: None,
        }
    }

    /// Builder method: set fleet counts
    pub fn fleet(mut self, fleet: FleetCounts) -> Self {
        self.fleet = fleet;
        self
    }

    /// True when the stored hour text is the canonical text of `hour`
    pub fn is_at(&self, hour: Hour) -> bool {
        self.hour_text == hour.as_text()
    }

    /// The record's hour, if its text is a canonical hour
    pub fn hour(&self) -> Option<Hour> {
        Hour::all().find(|h| self.is_at(*h))
    }
}

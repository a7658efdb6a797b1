//! Defines the data structures representing Envista stations, regions, and the
//! monitors (measurement channels) attached to each station.
//!
//! Field names follow Rust conventions; serde attributes map them onto the
//! exact JSON keys the service emits, including the one key that breaks the
//! camelCase convention of its siblings (`StationTarget`).

use serde::{Deserialize, Serialize};

/// Represents a single Envista weather station and its associated metadata.
///
/// This structure corresponds to one element of the `stations` endpoint
/// response. It includes identification, geographical location, and the list
/// of monitored conditions the station reports.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StationInfo {
    /// The unique station identifier (e.g. 178 for Tel Aviv Coast).
    pub station_id: i32,
    /// The station name.
    pub name: String,
    /// The station short name.
    pub short_name: String,
    /// Free-form tags attached to the station.
    #[serde(rename = "stationsTag")]
    pub tags: String,
    /// Geographical location (latitude/longitude).
    pub location: Location,
    /// Reporting interval in minutes.
    pub timebase: i32,
    /// Whether the station is active.
    pub active: bool,
    /// The organization operating the station.
    pub owner: String,
    /// Identifier of the region the station belongs to.
    pub region_id: i32,
    /// The station's measurement target.
    // The service really does capitalize this one key.
    #[serde(rename = "StationTarget")]
    pub target: String,
    /// The monitored conditions the station reports, in payload order.
    pub monitors: Vec<Monitor>,
}

/// One monitored condition (measurement channel) of a station.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Monitor {
    /// The channel identifier, unique within a station.
    pub channel_id: i32,
    /// The monitored condition name (e.g. `"TD"`).
    pub name: String,
    /// The monitored condition alias.
    pub alias: String,
    /// Whether the channel is active.
    pub active: bool,
    /// The monitored condition type identifier.
    pub type_id: i32,
    /// The monitored condition pollutant identifier.
    pub pollutant_id: i32,
    /// The measuring unit.
    #[serde(rename = "units")]
    pub unit: String,
    /// The monitored condition description.
    pub description: String,
}

/// Represents the geographical location of a weather station.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
}

/// Represents an Envista region and the stations inside it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    /// The unique region identifier.
    pub region_id: i32,
    /// The region name.
    pub name: String,
    /// The stations belonging to the region, in payload order.
    pub stations: Vec<StationInfo>,
}

//! The response-normalization core: pure functions turning decoded JSON
//! values into the crate's domain entities.
//!
//! Nothing in this module performs I/O; the HTTP facade hands parsed JSON in
//! and receives typed entities (or a [`DecodeError`](error::DecodeError))
//! back. All functions here are safe to call concurrently.

pub(crate) mod channels;
pub mod error;
mod reading;
mod station;
pub(crate) mod time;

pub use reading::station_readings_from_json;
pub use station::{
    region_info_from_json, regions_from_json, station_info_from_json, stations_from_json,
};

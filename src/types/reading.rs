//! Defines the data structures representing decoded meteorological readings.

use std::fmt;

use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;

use crate::types::variable::Variable;

/// One meteorological observation for one station at one instant.
///
/// Every measurement field is optional: a field is `Some` only when the
/// corresponding channel in the source payload passed the validity gate
/// (`valid == true && status == 1`). Gated-out channels are absent, never
/// zeroed, so `Some(0.0)` and `None` are distinct observations.
#[derive(Debug, PartialEq, Clone)]
pub struct Reading {
    /// The station that produced this reading.
    pub station_id: i32,
    /// Observation time, as civil time in the station reference timezone,
    /// with the service's daylight-saving quirk compensated.
    pub datetime: DateTime<Tz>,
    /// End time of the `Ws10mm` sample, decoded from the `Time` channel.
    pub time: Option<NaiveTime>,
    /// Rainfall in mm.
    pub rain: Option<f64>,
    /// Wind speed in m/s.
    pub ws: Option<f64>,
    /// Gust wind speed in m/s.
    pub ws_max: Option<f64>,
    /// Wind direction in degrees.
    pub wd: Option<f64>,
    /// Gust wind direction in degrees.
    pub wd_max: Option<f64>,
    /// Standard deviation of wind direction in degrees.
    pub std_wd: Option<f64>,
    /// Temperature in °C.
    pub td: Option<f64>,
    /// Maximum temperature in °C.
    pub td_max: Option<f64>,
    /// Minimum temperature in °C.
    pub td_min: Option<f64>,
    /// Grass minimum temperature in °C.
    pub tg: Option<f64>,
    /// Wet bulb temperature in °C.
    pub tw: Option<f64>,
    /// Relative humidity in %.
    pub rh: Option<f64>,
    /// Maximum 1 minute wind speed in m/s.
    pub ws_1mm: Option<f64>,
    /// Maximum 10 minutes wind speed in m/s.
    pub ws_10mm: Option<f64>,
    /// Average pressure at station level in hPa.
    pub bp: Option<f64>,
    /// Diffused radiation in w/m².
    pub diff_r: Option<f64>,
    /// Global radiation in w/m².
    pub grad: Option<f64>,
    /// Direct radiation in w/m².
    pub nip: Option<f64>,
    /// Rainfall per minute in mm.
    pub rain_1_min: Option<f64>,
}

fn reading_field(value: Option<f64>, variable: Variable) -> String {
    match value {
        Some(value) => format!("{value}{}", variable.unit()),
        None => "None".to_string(),
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = match self.time {
            Some(time) => format!("{}{}", time.format("%H:%M"), Variable::Time.unit()),
            None => "None".to_string(),
        };
        write!(
            f,
            "StationID: {}, Date: {}, Readings: [\
             (TD: {}), (TDmax: {}), (TDmin: {}), (TG: {}), (RH: {}), (Rain: {}), \
             (WS: {}), (WSmax: {}), (WD: {}), (WDmax: {}), (STDwd: {}), \
             (WS1mm: {}), (WS10mm: {}), (Time: {})]",
            self.station_id,
            self.datetime,
            reading_field(self.td, Variable::Td),
            reading_field(self.td_max, Variable::TdMax),
            reading_field(self.td_min, Variable::TdMin),
            reading_field(self.tg, Variable::Tg),
            reading_field(self.rh, Variable::Rh),
            reading_field(self.rain, Variable::Rain),
            reading_field(self.ws, Variable::Ws),
            reading_field(self.ws_max, Variable::WsMax),
            reading_field(self.wd, Variable::Wd),
            reading_field(self.wd_max, Variable::WdMax),
            reading_field(self.std_wd, Variable::StdWd),
            reading_field(self.ws_1mm, Variable::Ws1Mm),
            reading_field(self.ws_10mm, Variable::Ws10Mm),
            time,
        )
    }
}

/// All readings decoded from one API response for one station.
///
/// `readings` preserves the payload order of the source `data` array and is
/// empty (never absent) when the payload carried no data.
#[derive(Debug, PartialEq, Clone)]
pub struct StationReadingSet {
    /// The station the readings belong to.
    pub station_id: i32,
    /// The decoded readings, in payload order.
    pub readings: Vec<Reading>,
}

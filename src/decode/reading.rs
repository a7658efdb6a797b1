//! Assembles typed readings from raw per-station reading payloads.

use chrono::Duration;
use serde::Deserialize;
use serde_json::Value;

use crate::decode::channels::{decode_channels, RawChannel};
use crate::decode::error::DecodeError;
use crate::decode::time::{decode_time_of_day, normalize_timestamp};
use crate::types::reading::{Reading, StationReadingSet};
use crate::types::variable::Variable;

#[derive(Debug, Deserialize)]
struct RawReadingSet {
    #[serde(rename = "stationId")]
    station_id: i32,
    // The service omits the field or sends `null` when a station has no
    // data for the requested window.
    #[serde(default)]
    data: Option<Vec<RawReading>>,
}

#[derive(Debug, Deserialize)]
struct RawReading {
    datetime: String,
    channels: Vec<RawChannel>,
}

/// Decodes a station readings payload (the response shape of every `data`
/// endpoint) into a [`StationReadingSet`].
///
/// The returned `readings` preserve payload order; an absent, `null`, or
/// empty `data` field yields an empty vector. Decoding is all-or-nothing:
/// one malformed reading fails the whole payload.
///
/// # Errors
///
/// Returns [`DecodeError`] when a required key is missing, a value has the
/// wrong type, or a reading's timestamp cannot be interpreted.
pub fn station_readings_from_json(json: &Value) -> Result<StationReadingSet, DecodeError> {
    let raw = RawReadingSet::deserialize(json)?;
    let readings = raw
        .data
        .unwrap_or_default()
        .iter()
        .map(|reading| assemble_reading(raw.station_id, reading))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StationReadingSet {
        station_id: raw.station_id,
        readings,
    })
}

/// Builds one [`Reading`] by composing the channel gate, the timestamp
/// normalization, and the time-of-day decoding.
///
/// When the daylight-saving compensation fired for the timestamp, the same
/// one-hour push is applied to the decoded time-of-day, wrapping past
/// midnight.
fn assemble_reading(station_id: i32, raw: &RawReading) -> Result<Reading, DecodeError> {
    let (datetime, dst_shifted) = normalize_timestamp(&raw.datetime)?;
    let mut values = decode_channels(&raw.channels)?;

    let mut time = decode_time_of_day(values.remove(&Variable::Time));
    if dst_shifted {
        time = time.map(|time| time + Duration::hours(1));
    }

    Ok(Reading {
        station_id,
        datetime,
        time,
        rain: values.remove(&Variable::Rain),
        ws: values.remove(&Variable::Ws),
        ws_max: values.remove(&Variable::WsMax),
        wd: values.remove(&Variable::Wd),
        wd_max: values.remove(&Variable::WdMax),
        std_wd: values.remove(&Variable::StdWd),
        td: values.remove(&Variable::Td),
        td_max: values.remove(&Variable::TdMax),
        td_min: values.remove(&Variable::TdMin),
        tg: values.remove(&Variable::Tg),
        tw: values.remove(&Variable::Tw),
        rh: values.remove(&Variable::Rh),
        ws_1mm: values.remove(&Variable::Ws1Mm),
        ws_10mm: values.remove(&Variable::Ws10Mm),
        bp: values.remove(&Variable::Bp),
        diff_r: values.remove(&Variable::Diff),
        grad: values.remove(&Variable::Grad),
        nip: values.remove(&Variable::Nip),
        rain_1_min: values.remove(&Variable::Rain1Min),
    })
}

//! Maps station and region metadata payloads onto domain entities.
//!
//! These are pure structural mappings: all key renaming lives in the serde
//! attributes on the entity types, and no defaults are substituted for
//! missing fields.

use serde::Deserialize;
use serde_json::Value;

use crate::decode::error::DecodeError;
use crate::types::station::{RegionInfo, StationInfo};

/// Decodes one station metadata object into a [`StationInfo`].
///
/// # Errors
///
/// Returns [`DecodeError`] when a required key is missing or a value has the
/// wrong type.
pub fn station_info_from_json(json: &Value) -> Result<StationInfo, DecodeError> {
    Ok(StationInfo::deserialize(json)?)
}

/// Decodes the all-stations response (an array of station objects).
pub fn stations_from_json(json: &Value) -> Result<Vec<StationInfo>, DecodeError> {
    Ok(Vec::<StationInfo>::deserialize(json)?)
}

/// Decodes one region metadata object into a [`RegionInfo`].
///
/// # Errors
///
/// Returns [`DecodeError`] when a required key is missing or a value has the
/// wrong type.
pub fn region_info_from_json(json: &Value) -> Result<RegionInfo, DecodeError> {
    Ok(RegionInfo::deserialize(json)?)
}

/// Decodes the all-regions response (an array of region objects).
pub fn regions_from_json(json: &Value) -> Result<Vec<RegionInfo>, DecodeError> {
    Ok(Vec::<RegionInfo>::deserialize(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn station_payload() -> Value {
        json!({
            "stationId": 178,
            "name": "TEL AVIV COAST",
            "shortName": "TLV-COAST",
            "stationsTag": "(None)",
            "location": { "latitude": 32.05, "longitude": 34.75 },
            "timebase": 10,
            "active": true,
            "owner": "ims",
            "regionId": 13,
            "StationTarget": "",
            "monitors": [{
                "channelId": 7,
                "name": "TD",
                "alias": "Temperature",
                "active": true,
                "typeId": 1,
                "pollutantId": 27,
                "units": "°C",
                "description": "Dry temperature"
            }]
        })
    }

    #[test]
    fn station_fields_map_from_wire_keys() {
        let station = station_info_from_json(&station_payload()).unwrap();
        assert_eq!(station.station_id, 178);
        assert_eq!(station.short_name, "TLV-COAST");
        assert_eq!(station.tags, "(None)");
        assert_eq!(station.location.latitude, 32.05);
        assert_eq!(station.region_id, 13);
        assert_eq!(station.target, "");
        assert_eq!(station.monitors.len(), 1);

        let monitor = &station.monitors[0];
        assert_eq!(monitor.channel_id, 7);
        assert_eq!(monitor.unit, "°C");
        assert_eq!(monitor.pollutant_id, 27);
    }

    #[test]
    fn mapping_is_idempotent_and_yields_independent_values() {
        let payload = station_payload();
        let first = station_info_from_json(&payload).unwrap();
        let second = station_info_from_json(&payload).unwrap();
        assert_eq!(first, second);

        // Structural equality, not shared ownership: mutating one copy must
        // not be observable through the other.
        let mut third = second.clone();
        third.monitors.clear();
        assert_eq!(second.monitors.len(), 1);
    }

    #[test]
    fn missing_identity_key_fails_the_parse() {
        let mut payload = station_payload();
        payload.as_object_mut().unwrap().remove("stationId");
        let err = station_info_from_json(&payload).unwrap_err();
        assert!(matches!(err, DecodeError::Payload(_)));
    }

    #[test]
    fn wire_key_casing_is_exact() {
        // `stationTarget` is not the key the service sends; the mapper must
        // not accept a camelCase stand-in for `StationTarget`.
        let mut payload = station_payload();
        let object = payload.as_object_mut().unwrap();
        let target = object.remove("StationTarget").unwrap();
        object.insert("stationTarget".to_string(), target);
        assert!(station_info_from_json(&payload).is_err());
    }

    #[test]
    fn region_payload_maps_with_nested_stations() {
        let payload = json!({
            "regionId": 13,
            "name": "Coast",
            "stations": [station_payload()]
        });
        let region = region_info_from_json(&payload).unwrap();
        assert_eq!(region.region_id, 13);
        assert_eq!(region.name, "Coast");
        assert_eq!(region.stations.len(), 1);
        assert_eq!(region.stations[0].station_id, 178);
    }

    #[test]
    fn station_and_region_arrays_decode() {
        let stations = stations_from_json(&json!([station_payload()])).unwrap();
        assert_eq!(stations.len(), 1);

        let regions = regions_from_json(&json!([
            { "regionId": 1, "name": "North", "stations": [] }
        ]))
        .unwrap();
        assert_eq!(regions.len(), 1);
        assert!(regions[0].stations.is_empty());
    }
}

//! Temporal decoding: anchors reading timestamps to the station reference
//! timezone and decodes the raw `Time` channel encoding.

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::{OffsetComponents, Tz};
use log::debug;

use crate::decode::error::DecodeError;

/// Every Envista payload reports civil time in this zone, regardless of
/// where the station physically is.
pub(crate) const STATION_TZ: Tz = chrono_tz::Asia::Jerusalem;

/// Largest raw `Time` value still interpreted as a bare minute-of-hour.
const MAX_MINUTE_ENCODING: i64 = 60;

/// Anchors a reading's `datetime` string to the station reference timezone
/// and compensates for the service's daylight-saving quirk.
///
/// An offsetless string is taken as wall-clock time in [`STATION_TZ`]; a
/// string carrying a UTC offset is re-expressed in that zone. When daylight
/// saving is in effect for the resulting civil time, the timestamp is pushed
/// forward by exactly one hour: the service reports these fields as if
/// daylight saving were never applied. The shift is a reproduction of
/// upstream behavior, not timezone arithmetic, and is evaluated once, before
/// the push.
///
/// Returns the corrected timestamp and whether the one-hour compensation was
/// applied, so the caller can apply the same shift to the decoded
/// time-of-day.
pub(crate) fn normalize_timestamp(raw: &str) -> Result<(DateTime<Tz>, bool), DecodeError> {
    let anchored = match DateTime::parse_from_rfc3339(raw) {
        Ok(datetime) => datetime.with_timezone(&STATION_TZ),
        Err(_) => {
            let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map_err(
                |source| DecodeError::Timestamp {
                    value: raw.to_string(),
                    source,
                },
            )?;
            // During the fall-back fold the wall-clock time occurs twice;
            // resolve to the earlier instant.
            STATION_TZ
                .from_local_datetime(&naive)
                .earliest()
                .ok_or_else(|| DecodeError::NonexistentLocalTime {
                    value: raw.to_string(),
                    tz: STATION_TZ,
                })?
        }
    };

    let dst_in_effect = !anchored.offset().dst_offset().is_zero();
    if dst_in_effect {
        Ok((anchored + Duration::hours(1), true))
    } else {
        Ok((anchored, false))
    }
}

/// Decodes the raw `Time` channel value into a time of day.
///
/// The service encodes sub-hour times and full HHMM times in the same field
/// without a discriminator: values up to 60 mean `00:MM`, larger values are
/// read as a zero-padded HHMM string. Out-of-range results are treated as an
/// absent field and logged, never raised; the upstream occasionally emits
/// values no clock can represent.
pub(crate) fn decode_time_of_day(raw: Option<f64>) -> Option<NaiveTime> {
    let raw = raw?;
    let encoded = raw as i64;
    let (hour, minute) = if encoded <= MAX_MINUTE_ENCODING {
        (0, encoded)
    } else {
        (encoded / 100, encoded % 100)
    };
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        debug!("invalid raw time encoding: {raw}");
        return None;
    }
    NaiveTime::from_hms_opt(hour as u32, minute as u32, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Offset, Timelike};

    fn offset_seconds(datetime: &DateTime<Tz>) -> i32 {
        datetime.offset().fix().local_minus_utc()
    }

    #[test]
    fn offsetless_timestamp_is_anchored_to_station_zone() {
        let (datetime, shifted) = normalize_timestamp("2025-01-15T12:00:00").unwrap();
        assert!(!shifted);
        assert_eq!(datetime.hour(), 12);
        assert_eq!(offset_seconds(&datetime), 2 * 3600);
    }

    #[test]
    fn offset_timestamp_is_reexpressed_in_station_zone() {
        // 10:00 UTC in winter is 12:00 in Jerusalem (IST, +02:00).
        let (datetime, shifted) = normalize_timestamp("2025-01-15T10:00:00Z").unwrap();
        assert!(!shifted);
        assert_eq!(datetime.hour(), 12);
        assert_eq!(offset_seconds(&datetime), 2 * 3600);
    }

    #[test]
    fn dst_instant_is_pushed_forward_one_hour() {
        // Mid-July is within the daylight-saving interval (IDT, +03:00).
        let (datetime, shifted) = normalize_timestamp("2025-07-15T12:00:00").unwrap();
        assert!(shifted);
        assert_eq!(datetime.hour(), 13);
        assert_eq!(offset_seconds(&datetime), 3 * 3600);
    }

    #[test]
    fn dst_shift_applies_to_offset_carrying_timestamps_too() {
        // 09:00 UTC in summer is 12:00 IDT; the compensation pushes it to 13:00.
        let (datetime, shifted) = normalize_timestamp("2025-07-15T09:00:00Z").unwrap();
        assert!(shifted);
        assert_eq!(datetime.hour(), 13);
    }

    #[test]
    fn fractional_seconds_are_accepted() {
        let (datetime, _) = normalize_timestamp("2025-01-15T12:00:00.500").unwrap();
        assert_eq!(datetime.hour(), 12);
    }

    #[test]
    fn ambiguous_fold_time_resolves_to_the_earlier_instant() {
        // Daylight saving ended 2025-10-26 at 02:00 IDT; 01:30 occurred twice.
        // The earlier occurrence is still IDT (22:30 UTC), so the compensation
        // applies. The shift moves the absolute instant, and one hour past
        // 01:30 IDT is 01:30 IST on the far side of the fold.
        let (datetime, shifted) = normalize_timestamp("2025-10-26T01:30:00").unwrap();
        assert!(shifted);
        assert_eq!(
            datetime.naive_utc(),
            NaiveDate::from_ymd_opt(2025, 10, 25)
                .unwrap()
                .and_hms_opt(23, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn nonexistent_gap_time_is_rejected() {
        // Clocks jumped 02:00 -> 03:00 on 2025-03-28.
        let err = normalize_timestamp("2025-03-28T02:30:00").unwrap_err();
        assert!(matches!(err, DecodeError::NonexistentLocalTime { .. }));
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        let err = normalize_timestamp("yesterday-ish").unwrap_err();
        assert!(matches!(err, DecodeError::Timestamp { .. }));
    }

    #[test]
    fn absent_raw_time_decodes_to_none() {
        assert_eq!(decode_time_of_day(None), None);
    }

    #[test]
    fn small_values_decode_as_minute_of_hour() {
        assert_eq!(decode_time_of_day(Some(0.0)), NaiveTime::from_hms_opt(0, 0, 0));
        // 45 is read as 00:45. A true HHMM rendering of 00:45 is the bare
        // number 45 as well, so values below 0100 are indistinguishable from
        // minute-of-hour encodings; both interpretations land on the same
        // clock time.
        assert_eq!(
            decode_time_of_day(Some(45.0)),
            NaiveTime::from_hms_opt(0, 45, 0)
        );
    }

    #[test]
    fn large_values_decode_as_hhmm() {
        assert_eq!(
            decode_time_of_day(Some(1305.0)),
            NaiveTime::from_hms_opt(13, 5, 0)
        );
        assert_eq!(
            decode_time_of_day(Some(2359.0)),
            NaiveTime::from_hms_opt(23, 59, 0)
        );
    }

    #[test]
    fn out_of_range_values_are_treated_as_absent() {
        // 60 sits on the minute-of-hour side of the cutoff but minute 60 is
        // not a clock minute.
        assert_eq!(decode_time_of_day(Some(60.0)), None);
        assert_eq!(decode_time_of_day(Some(2460.0)), None);
        assert_eq!(decode_time_of_day(Some(2400.0)), None);
        assert_eq!(decode_time_of_day(Some(75.0)), None);
        assert_eq!(decode_time_of_day(Some(-5.0)), None);
        assert_eq!(decode_time_of_day(Some(12345.0)), None);
    }

    #[test]
    fn fractional_raw_time_is_truncated() {
        assert_eq!(
            decode_time_of_day(Some(1305.9)),
            NaiveTime::from_hms_opt(13, 5, 0)
        );
    }
}

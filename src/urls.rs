//! Endpoint URL construction for the Envista API.

use chrono::{Datelike, NaiveDate};

pub(crate) const STATIONS_URL: &str = "https://api.ims.gov.il/v1/envista/stations";
pub(crate) const REGIONS_URL: &str = "https://api.ims.gov.il/v1/envista/regions";

/// Optional channel scoping inserted between `data` and the period selector.
fn channel_part(channel_id: Option<i32>) -> String {
    channel_id.map(|id| format!("/{id}")).unwrap_or_default()
}

pub(crate) fn station(station_id: i32) -> String {
    format!("{STATIONS_URL}/{station_id}")
}

pub(crate) fn region(region_id: i32) -> String {
    format!("{REGIONS_URL}/{region_id}")
}

pub(crate) fn latest_data(station_id: i32, channel_id: Option<i32>) -> String {
    format!(
        "{STATIONS_URL}/{station_id}/data{}/latest",
        channel_part(channel_id)
    )
}

pub(crate) fn earliest_data(station_id: i32, channel_id: Option<i32>) -> String {
    format!(
        "{STATIONS_URL}/{station_id}/data{}/earliest",
        channel_part(channel_id)
    )
}

pub(crate) fn daily_data(station_id: i32, channel_id: Option<i32>) -> String {
    format!(
        "{STATIONS_URL}/{station_id}/data{}/daily",
        channel_part(channel_id)
    )
}

pub(crate) fn daily_data_on(station_id: i32, channel_id: Option<i32>, date: NaiveDate) -> String {
    format!(
        "{STATIONS_URL}/{station_id}/data{}/daily/{}/{}/{}",
        channel_part(channel_id),
        date.year(),
        date.month(),
        date.day()
    )
}

pub(crate) fn monthly_data(station_id: i32, channel_id: Option<i32>) -> String {
    format!(
        "{STATIONS_URL}/{station_id}/data{}/monthly",
        channel_part(channel_id)
    )
}

pub(crate) fn monthly_data_in(
    station_id: i32,
    channel_id: Option<i32>,
    year: i32,
    month: u32,
) -> String {
    format!(
        "{STATIONS_URL}/{station_id}/data{}/monthly/{year}/{month:02}",
        channel_part(channel_id)
    )
}

pub(crate) fn range_data(
    station_id: i32,
    channel_id: Option<i32>,
    from: NaiveDate,
    to: NaiveDate,
) -> String {
    format!(
        "{STATIONS_URL}/{station_id}/data{}?from={}&to={}",
        channel_part(channel_id),
        from.format("%Y/%m/%d"),
        to.format("%Y/%m/%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_scoping_is_inserted_after_data() {
        assert_eq!(
            latest_data(178, None),
            "https://api.ims.gov.il/v1/envista/stations/178/data/latest"
        );
        assert_eq!(
            latest_data(178, Some(7)),
            "https://api.ims.gov.il/v1/envista/stations/178/data/7/latest"
        );
    }

    #[test]
    fn period_selectors() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(
            daily_data_on(178, None, date),
            "https://api.ims.gov.il/v1/envista/stations/178/data/daily/2025/3/5"
        );
        assert_eq!(
            monthly_data_in(178, Some(7), 2020, 7),
            "https://api.ims.gov.il/v1/envista/stations/178/data/7/monthly/2020/07"
        );
    }

    #[test]
    fn range_dates_are_zero_padded() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        assert_eq!(
            range_data(178, None, from, to),
            "https://api.ims.gov.il/v1/envista/stations/178/data?from=2025/01/02&to=2025/02/03"
        );
    }

    #[test]
    fn metadata_urls() {
        assert_eq!(
            station(178),
            "https://api.ims.gov.il/v1/envista/stations/178"
        );
        assert_eq!(region(13), "https://api.ims.gov.il/v1/envista/regions/13");
    }
}

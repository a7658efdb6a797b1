//! This module provides the main entry point for interacting with the IMS
//! Envista API: station and region metadata, and the meteorological readings
//! endpoints (latest/earliest/daily/monthly/range), optionally scoped to a
//! single channel.

use bon::bon;
use chrono::NaiveDate;
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::decode::{
    region_info_from_json, regions_from_json, station_info_from_json, station_readings_from_json,
    stations_from_json,
};
use crate::error::ImsEnvistaError;
use crate::types::reading::StationReadingSet;
use crate::types::station::{RegionInfo, StationInfo};
use crate::types::variable::{list_variable_descriptors, VariableDescriptor};
use crate::urls;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for the IMS Envista API.
///
/// Requests carry the account's API token in an `ApiToken` authorization
/// header. Endpoints with optional parameters are exposed as builders:
/// start with the station id, chain the optional setters, then `.call()`.
///
/// # Examples
///
/// ```no_run
/// # use ims_envista::{ImsEnvista, ImsEnvistaError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ImsEnvistaError> {
/// let ims = ImsEnvista::new("00000000-0000-0000-0000-000000000000")?;
///
/// // Latest readings for the Tel Aviv Coast station, all channels.
/// let latest = ims.latest_station_data(178).call().await?;
/// for reading in &latest.readings {
///     println!("{reading}");
/// }
///
/// // The same, scoped to the temperature channel.
/// let td_only = ims.latest_station_data(178).channel_id(7).call().await?;
/// # let _ = td_only;
/// # Ok(())
/// # }
/// ```
pub struct ImsEnvista {
    http: Client,
    token: String,
}

#[bon]
impl ImsEnvista {
    /// Creates a client with its own HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ImsEnvistaError::ClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self, ImsEnvistaError> {
        // api.ims.gov.il does not support IPv6; without a bound IPv4 local
        // address the client dials AAAA first and waits out the timeout.
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .build()
            .map_err(ImsEnvistaError::ClientBuild)?;
        Ok(Self {
            http,
            token: token.into(),
        })
    }

    /// Creates a client on top of an existing `reqwest::Client`, for callers
    /// that manage their own pool, proxy, or timeout policy.
    pub fn with_client(token: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            token: token.into(),
        }
    }

    /// Fetches the most recent readings for a station.
    ///
    /// Optionally scope the request to one channel with `.channel_id(..)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImsEnvistaError`] on transport failure or when the response
    /// payload cannot be decoded.
    #[builder]
    pub async fn latest_station_data(
        &self,
        #[builder(start_fn)] station_id: i32,
        channel_id: Option<i32>,
    ) -> Result<StationReadingSet, ImsEnvistaError> {
        let url = urls::latest_data(station_id, channel_id);
        Ok(station_readings_from_json(&self.get_json(&url).await?)?)
    }

    /// Fetches the earliest readings the service retains for a station.
    #[builder]
    pub async fn earliest_station_data(
        &self,
        #[builder(start_fn)] station_id: i32,
        channel_id: Option<i32>,
    ) -> Result<StationReadingSet, ImsEnvistaError> {
        let url = urls::earliest_data(station_id, channel_id);
        Ok(station_readings_from_json(&self.get_json(&url).await?)?)
    }

    /// Fetches today's readings for a station.
    #[builder]
    pub async fn daily_station_data(
        &self,
        #[builder(start_fn)] station_id: i32,
        channel_id: Option<i32>,
    ) -> Result<StationReadingSet, ImsEnvistaError> {
        let url = urls::daily_data(station_id, channel_id);
        Ok(station_readings_from_json(&self.get_json(&url).await?)?)
    }

    /// Fetches a station's readings for one calendar day.
    #[builder]
    pub async fn station_data_on_date(
        &self,
        #[builder(start_fn)] station_id: i32,
        #[builder(start_fn)] date: NaiveDate,
        channel_id: Option<i32>,
    ) -> Result<StationReadingSet, ImsEnvistaError> {
        let url = urls::daily_data_on(station_id, channel_id, date);
        Ok(station_readings_from_json(&self.get_json(&url).await?)?)
    }

    /// Fetches a station's readings over an inclusive date range.
    ///
    /// `from` and `to` are required setters on the returned builder.
    #[builder]
    pub async fn station_data_by_range(
        &self,
        #[builder(start_fn)] station_id: i32,
        from: NaiveDate,
        to: NaiveDate,
        channel_id: Option<i32>,
    ) -> Result<StationReadingSet, ImsEnvistaError> {
        let url = urls::range_data(station_id, channel_id, from, to);
        Ok(station_readings_from_json(&self.get_json(&url).await?)?)
    }

    /// Fetches a station's monthly readings.
    ///
    /// With both `.year(..)` and `.month(..)` set, a specific month is
    /// requested; otherwise the service returns the current month.
    #[builder]
    pub async fn monthly_station_data(
        &self,
        #[builder(start_fn)] station_id: i32,
        channel_id: Option<i32>,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<StationReadingSet, ImsEnvistaError> {
        let url = match (year, month) {
            (Some(year), Some(month)) => urls::monthly_data_in(station_id, channel_id, year, month),
            _ => urls::monthly_data(station_id, channel_id),
        };
        Ok(station_readings_from_json(&self.get_json(&url).await?)?)
    }

    /// Fetches the metadata of one station.
    pub async fn station_info(&self, station_id: i32) -> Result<StationInfo, ImsEnvistaError> {
        let url = urls::station(station_id);
        Ok(station_info_from_json(&self.get_json(&url).await?)?)
    }

    /// Fetches the metadata of every station.
    pub async fn all_stations_info(&self) -> Result<Vec<StationInfo>, ImsEnvistaError> {
        Ok(stations_from_json(&self.get_json(urls::STATIONS_URL).await?)?)
    }

    /// Fetches one region together with its stations.
    pub async fn region_info(&self, region_id: i32) -> Result<RegionInfo, ImsEnvistaError> {
        let url = urls::region(region_id);
        Ok(region_info_from_json(&self.get_json(&url).await?)?)
    }

    /// Fetches every region together with its stations.
    pub async fn all_regions_info(&self) -> Result<Vec<RegionInfo>, ImsEnvistaError> {
        Ok(regions_from_json(&self.get_json(urls::REGIONS_URL).await?)?)
    }

    /// Returns the descriptions of the meteorological variables collected by
    /// the stations.
    pub fn variable_descriptors(&self) -> &'static [VariableDescriptor] {
        list_variable_descriptors()
    }

    async fn get_json(&self, url: &str) -> Result<Value, ImsEnvistaError> {
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("ApiToken {}", self.token))
            .send()
            .await
            .map_err(|source| ImsEnvistaError::NetworkRequest(url.to_string(), source))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ImsEnvistaError::Authentication {
                url: url.to_string(),
                status,
            });
        }
        let response = response
            .error_for_status()
            .map_err(|source| ImsEnvistaError::HttpStatus {
                url: url.to_string(),
                status,
                source,
            })?;

        response
            .json()
            .await
            .map_err(|source| ImsEnvistaError::ResponseBody(url.to_string(), source))
    }
}

//! [myCKW](https://my.ckw.ch) smart-meter consumption client.

mod record;
mod resolution;

use std::time::Duration;

use bon::Builder;
use chrono::NaiveDate;
use reqwest::{
    Client,
    StatusCode,
    Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue},
};

pub use self::{record::ConsumptionRecord, resolution::Resolution};
use crate::prelude::{debug, info, instrument};

/// Base URL of the production API host.
pub const DEFAULT_HOST: &str = "https://etility.ckw.ch";

/// Path prefix of the smart-meter data service on the host.
pub const DEFAULT_SMARTMETER_PATH: &str = "/etility/proxy/ckw/serviceDA";

/// Date pattern accepted by the API in the request path.
pub const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected before any network activity.
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-success status.
    #[error("the API answered with HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The request never produced a response.
    #[error("failed to reach the API")]
    Transport(#[source] reqwest::Error),

    /// The response body is not the expected JSON shape.
    #[error("failed to parse the API response")]
    Parse(#[from] serde_json::Error),
}

impl From<InvalidHeaderValue> for Error {
    fn from(error: InvalidHeaderValue) -> Self {
        Self::Validation(format!("the token cannot be sent as a header value: {error}"))
    }
}

/// Connection settings of one meter point.
///
/// Only the identifiers and the credential have no default, the connection
/// fields point at the production service.
#[derive(Builder)]
pub struct Config {
    /// Base URL of the API host.
    #[builder(default = DEFAULT_HOST.parse().unwrap())]
    pub host: Url,

    /// Path prefix of the smart-meter data service.
    #[builder(into, default = DEFAULT_SMARTMETER_PATH.to_owned())]
    pub smartmeter_path: String,

    /// Client number, for example `0001234567`.
    #[builder(into)]
    pub client_number: String,

    /// 33-character meter point identifier, for example
    /// `CH0009801234500000000000000054321`.
    #[builder(into)]
    pub meter_point: String,

    /// Opaque bearer credential attached to every request.
    #[builder(into)]
    pub token: String,
}

/// Smart-meter consumption API client.
pub struct Api {
    client: Client,
    config: Config,
}

impl Api {
    /// Validate the configuration and build the client.
    ///
    /// The bearer token is installed as a default header, so every request is
    /// authorized uniformly. No network activity happens here.
    pub fn new(config: Config) -> Result<Self, Error> {
        if config.token.trim().is_empty() {
            return Err(Error::Validation("`token` must not be empty".to_owned()));
        }
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))?;
        authorization.set_sensitive(true);
        let client = Client::builder()
            .default_headers(HeaderMap::from_iter([(AUTHORIZATION, authorization)]))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(Error::Transport)?;
        Ok(Self { client, config })
    }

    /// Fetch the consumption series over the date range at the given resolution.
    ///
    /// The range is inclusive and interpreted by the provider; a `start_date`
    /// later than `end_date` is passed through as-is. The whole call fails or
    /// the whole series is returned, there are no partial results.
    #[instrument(
        skip_all,
        fields(resolution = %resolution, start_date = %start_date, end_date = %end_date),
    )]
    pub async fn get_consumption(
        &self,
        resolution: Resolution,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ConsumptionRecord>, Error> {
        let url = self.consumption_url(resolution, start_date, end_date)?;
        debug!(url = %url, "fetching…");
        let response = self.client.get(url).send().await.map_err(Error::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::Transport)?;
        if !status.is_success() {
            return Err(Error::Status { status, body });
        }
        let records: Vec<ConsumptionRecord> = serde_json::from_str(&body)?;
        info!(n_records = records.len(), "fetched");
        Ok(records)
    }

    fn consumption_url(
        &self,
        resolution: Resolution,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Url, Error> {
        let mut url = self.config.host.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Validation("the host URL cannot be a base".to_owned()))?;
            segments.pop_if_empty().extend(
                self.config.smartmeter_path.split('/').filter(|segment| !segment.is_empty()),
            );
            segments.push(&self.config.client_number);
            segments.push(&self.config.meter_point);
            segments.push(&start_date.format(DATE_FORMAT).to_string());
            segments.push(&end_date.format(DATE_FORMAT).to_string());
            segments.push(resolution.path_segment());
        }
        Ok(url)
    }
}

use std::time::Instant;

use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use reqwest::Url;

use crate::{
    api::smartmeter::{self, Resolution},
    prelude::*,
    tables::build_consumption_table,
};

/// Fetch consumption data from the myCKW API and pretty-print it.
#[derive(Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    /// Log verbosity.
    #[clap(long = "log-level", env = "LOG_LEVEL", default_value = "info")]
    pub log_level: Level,

    /// Client number, for example `0001234567`.
    #[clap(long = "client-number", short = 'c', env = "CKW_CLIENT_NUMBER")]
    pub client_number: String,

    /// 33-character meter point identifier, for example
    /// `CH0009801234500000000000000054321`.
    #[clap(long = "meter-point", short = 'm', env = "CKW_METER_POINT")]
    pub meter_point: String,

    /// Data resolution.
    #[clap(long, short = 'r', env = "CKW_RESOLUTION")]
    pub resolution: Resolution,

    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[clap(flatten)]
    pub interval: IntervalArgs,
}

impl Args {
    pub async fn run(self) -> Result {
        let started_at = Instant::now();
        let (start_date, end_date) = self.interval.resolve(Local::now().date_naive())?;

        let api = smartmeter::Api::new(
            smartmeter::Config::builder()
                .host(self.connection.host)
                .smartmeter_path(self.connection.smartmeter_path)
                .client_number(self.client_number)
                .meter_point(self.meter_point)
                .token(self.connection.token)
                .build(),
        )?;
        let records = api.get_consumption(self.resolution, start_date, end_date).await?;

        println!("{}", build_consumption_table(&records));
        println!(
            "Fetched {} data points in {:.2} seconds.",
            records.len(),
            started_at.elapsed().as_secs_f64(),
        );
        Ok(())
    }
}

#[derive(Parser)]
pub struct ConnectionArgs {
    /// API host.
    #[clap(long, env = "CKW_HOST", default_value = smartmeter::DEFAULT_HOST)]
    pub host: Url,

    /// Path prefix of the smart-meter data service on the host.
    #[clap(
        long = "smartmeter-path",
        env = "CKW_SMARTMETER_PATH",
        default_value = smartmeter::DEFAULT_SMARTMETER_PATH
    )]
    pub smartmeter_path: String,

    /// Bearer token used to authorize API requests.
    #[clap(long, env = "CKW_TOKEN", hide_env_values = true)]
    pub token: String,
}

/// Date range selection, either relative to today or absolute.
///
/// Exactly one of the two forms must be supplied.
#[derive(Parser)]
pub struct IntervalArgs {
    /// Interval expressed in days, relative to today.
    #[clap(
        long = "relative-interval",
        short = 'i',
        conflicts_with_all = ["start_date", "end_date"],
    )]
    pub relative_interval: Option<u64>,

    /// Start date in `YYYYMMDD` format.
    #[clap(
        long = "start-date",
        value_parser = parse_provider_date,
        requires = "end_date",
        required_unless_present = "relative_interval",
    )]
    pub start_date: Option<NaiveDate>,

    /// End date in `YYYYMMDD` format.
    #[clap(
        long = "end-date",
        value_parser = parse_provider_date,
        requires = "start_date",
        required_unless_present = "relative_interval",
    )]
    pub end_date: Option<NaiveDate>,
}

impl IntervalArgs {
    fn resolve(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        match (self.relative_interval, self.start_date, self.end_date) {
            (None, Some(start_date), Some(end_date)) => Ok((start_date, end_date)),
            (Some(days), None, None) => {
                let start_date = today
                    .checked_sub_days(Days::new(days))
                    .with_context(|| format!("cannot go {days} days back from {today}"))?;
                Ok((start_date, today))
            }
            _ => bail!("specify either --relative-interval or both --start-date and --end-date"),
        }
    }
}

fn parse_provider_date(string: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(string, smartmeter::DATE_FORMAT)
        .map_err(|_| format!("incorrect date format, should be `{}`", smartmeter::DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_ARGS: [&str; 9] = [
        "myckw",
        "-c",
        "0001234567",
        "-m",
        "CH0009801234500000000000000054321",
        "-r",
        "day",
        "--token",
        "secret",
    ];

    fn try_parse(extra: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(BASE_ARGS.iter().copied().chain(extra.iter().copied()))
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn both_interval_forms_are_rejected() {
        let result =
            try_parse(&["-i", "30", "--start-date", "20240101", "--end-date", "20240131"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_interval_is_rejected() {
        assert!(try_parse(&[]).is_err());
    }

    #[test]
    fn absolute_interval_requires_both_dates() {
        assert!(try_parse(&["--start-date", "20240101"]).is_err());
    }

    #[test]
    fn relative_interval_resolves_backwards_from_today() -> Result {
        let args = try_parse(&["-i", "30"])?;
        let today = date(2024, 3, 1);
        assert_eq!(args.interval.resolve(today)?, (date(2024, 1, 31), today));
        Ok(())
    }

    #[test]
    fn absolute_interval_resolves_to_the_given_dates() -> Result {
        let args = try_parse(&["--start-date", "20240101", "--end-date", "20240131"])?;
        assert_eq!(
            args.interval.resolve(date(2024, 3, 1))?,
            (date(2024, 1, 1), date(2024, 1, 31)),
        );
        Ok(())
    }

    #[test]
    fn dashed_dates_are_rejected() {
        let error = parse_provider_date("2024-01-01").unwrap_err();
        assert!(error.contains("%Y%m%d"));
    }
}

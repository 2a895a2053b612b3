use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use super::Error;

/// Temporal granularity of the returned consumption series.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
}

impl Resolution {
    /// The complete set of granularities offered by the API, coarsest first.
    pub const ALL: [Self; 6] =
        [Self::Year, Self::Month, Self::Week, Self::Day, Self::Hour, Self::Minute];

    /// URL path segment selecting this resolution on the API.
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|resolution| resolution.path_segment() == string).ok_or_else(
            || {
                Error::Validation(format!(
                    "`{string}` is not a valid resolution, use one of: {}",
                    Self::ALL.map(Self::path_segment).join(", "),
                ))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Result;

    #[test]
    fn path_segments_ok() {
        assert_eq!(Resolution::Year.path_segment(), "year");
        assert_eq!(Resolution::Month.path_segment(), "month");
        assert_eq!(Resolution::Week.path_segment(), "week");
        assert_eq!(Resolution::Day.path_segment(), "day");
        assert_eq!(Resolution::Hour.path_segment(), "hour");
        assert_eq!(Resolution::Minute.path_segment(), "minute");
    }

    #[test]
    fn from_str_round_trips() -> Result {
        for resolution in Resolution::ALL {
            assert_eq!(Resolution::from_str(&resolution.to_string())?, resolution);
        }
        Ok(())
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        let error = Resolution::from_str("fortnight").unwrap_err();
        assert!(matches!(&error, Error::Validation(_)));
        assert!(error.to_string().contains("year, month, week, day, hour, minute"));
    }
}

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// K线采样粒度，对应后端 granularity 查询参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Minute,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Minute => "minute",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Granularity::Day),
            "minute" => Ok(Granularity::Minute),
            other => Err(AppError::InvalidGranularity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_round_trip() {
        assert_eq!("day".parse::<Granularity>().unwrap(), Granularity::Day);
        assert_eq!(
            "minute".parse::<Granularity>().unwrap(),
            Granularity::Minute
        );
        assert_eq!(Granularity::Day.to_string(), "day");
        assert_eq!(Granularity::Minute.to_string(), "minute");
    }

    #[test]
    fn test_unknown_granularity_is_error() {
        assert!("hour".parse::<Granularity>().is_err());
        assert!("Day".parse::<Granularity>().is_err());
        assert!("".parse::<Granularity>().is_err());
    }
}

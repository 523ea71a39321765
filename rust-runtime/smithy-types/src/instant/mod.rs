/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            // times before the epoch carry a negative seconds component and a positive fraction
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut subsecond_nanos = duration.subsec_nanos();
                if subsecond_nanos != 0 {
                    seconds -= 1;
                    subsecond_nanos = NANOS_PER_SECOND - subsecond_nanos;
                }
                Instant {
                    seconds,
                    subsecond_nanos,
                }
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s).map_err(|err| {
                    DateTimeParseError::new(format!("invalid date-time `{}`: {}", s, err))
                })?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => parse_epoch_seconds(s),
        }
    }

    fn to_chrono(&self) -> Result<DateTime<Utc>, DateTimeFormatError> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos)
            .single()
            .ok_or(DateTimeFormatError {
                seconds: self.seconds,
            })
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => {
                let date_time = self.to_chrono()?;
                if !self.has_nanos() {
                    return Ok(date_time.to_rfc3339_opts(SecondsFormat::Secs, true));
                }
                let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
                let fraction_trimmed = rfc3339.trim_end_matches('Z').trim_end_matches('0');
                Ok(format!("{}Z", fraction_trimmed))
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    return Ok(format!("{}", self.seconds));
                }
                // a negative instant stores its fraction counted up from the earlier whole second
                let (sign, whole, nanos) = if self.seconds < 0 {
                    (
                        "-",
                        (self.seconds + 1).unsigned_abs(),
                        NANOS_PER_SECOND - self.subsecond_nanos,
                    )
                } else {
                    ("", self.seconds.unsigned_abs(), self.subsecond_nanos)
                };
                let fraction = format!("{:0>9}", nanos);
                Ok(format!(
                    "{}{}.{}",
                    sign,
                    whole,
                    fraction.trim_end_matches('0')
                ))
            }
        }
    }
}

fn parse_epoch_seconds(s: &str) -> Result<Instant, DateTimeParseError> {
    let invalid = || DateTimeParseError::new(format!("invalid epoch seconds `{}`", s));
    let (whole, fraction) = match s.find('.') {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };
    let mut seconds: i64 = whole.parse().map_err(|_| invalid())?;
    let mut subsecond_nanos = match fraction {
        None => 0,
        Some(digits) if digits.is_empty() || digits.len() > 9 => return Err(invalid()),
        Some(digits) if !digits.bytes().all(|b| b.is_ascii_digit()) => return Err(invalid()),
        Some(digits) => {
            let padded = format!("{:0<9}", digits);
            padded.parse::<u32>().map_err(|_| invalid())?
        }
    };
    if whole.starts_with('-') && subsecond_nanos != 0 {
        seconds = seconds.checked_sub(1).ok_or_else(invalid)?;
        subsecond_nanos = NANOS_PER_SECOND - subsecond_nanos;
    }
    Ok(Instant::from_secs_and_nanos(seconds, subsecond_nanos))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

/// Failure to parse a timestamp from its wire representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError {
    message: Cow<'static, str>,
}

impl DateTimeParseError {
    fn new(message: impl Into<Cow<'static, str>>) -> Self {
        DateTimeParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse timestamp: {}", self.message)
    }
}

impl StdError for DateTimeParseError {}

/// The instant can't be represented in the requested format (eg. a year beyond 9999)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormatError {
    seconds: i64,
}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seconds from the epoch is out of range for a date-time",
            self.seconds
        )
    }
}

impl StdError for DateTimeFormatError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn parses_service_timestamps() {
        let instant =
            Instant::from_str("2014-04-01T19:25:14.274Z", Format::DateTime).expect("valid");
        assert_eq!(instant.epoch_seconds(), 1396380314);
        assert_eq!(instant.epoch_subsecond_nanos(), 274_000_000);

        let offset = Instant::from_str("2014-04-01T21:25:14+02:00", Format::DateTime).unwrap();
        assert_eq!(offset, Instant::from_epoch_seconds(1396380314));
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(Instant::from_str("2014-04-01 19:25", Format::DateTime).is_err());
        assert!(Instant::from_str("", Format::DateTime).is_err());
        assert!(Instant::from_str("12.", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("12.x", Format::EpochSeconds).is_err());
    }

    #[test]
    fn epoch_seconds_parse() {
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
    }

    #[test]
    fn negative_fractional_epoch_seconds() {
        let parsed = Instant::from_str("-1.5", Format::EpochSeconds).unwrap();
        assert_eq!(parsed, Instant::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(parsed.epoch_fractional_seconds(), -1.5);

        let parsed = Instant::from_str("-0.25", Format::EpochSeconds).unwrap();
        assert_eq!(parsed.epoch_fractional_seconds(), -0.25);
        assert_eq!(parsed.fmt(Format::EpochSeconds).unwrap(), "-0.25");

        assert_eq!(
            Instant::from_f64(-1.5).fmt(Format::EpochSeconds).unwrap(),
            "-1.5"
        );
        assert_eq!(
            Instant::from_epoch_seconds(-3).fmt(Format::EpochSeconds).unwrap(),
            "-3"
        );
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        let instant = Instant::from_system_time(before);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
    }

    #[test]
    fn out_of_range_is_an_error() {
        assert!(Instant::from_epoch_seconds(i64::MAX)
            .fmt(Format::DateTime)
            .is_err());
    }

    proptest! {
        #[test]
        fn date_time_round_trip(seconds in -62_135_596_800i64..253_402_300_799i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::DateTime).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime).unwrap(), instant);
        }

        #[test]
        fn epoch_seconds_round_trip(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::EpochSeconds).unwrap();
            let parsed = Instant::from_str(&formatted, Format::EpochSeconds).unwrap();
            prop_assert_eq!(parsed, instant);
            let expected = seconds as f64 + nanos as f64 / 1e9;
            prop_assert!((parsed.epoch_fractional_seconds() - expected).abs() < 1e-5);
        }
    }
}

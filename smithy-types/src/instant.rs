/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Instant value for representing Smithy timestamps.
//!
//! Unlike [`std::time::Instant`], this instant is not opaque. The time inside of it can be
//! read. It also holds logic for formatting and parsing the timestamp formats used by the
//! AWS JSON and AWS Query protocols.

use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Instant in time represented as seconds and sub-second nanos since
/// the Unix epoch (January 1, 1970 at midnight UTC/GMT).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Timestamp formats supported by [`Instant::fmt`] and [`Instant::from_str`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    /// RFC-3339 date-time, eg. `2019-12-16T23:48:18Z`
    DateTime,
    /// IMF-fixdate, eg. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Seconds (and optional fraction) since the Unix epoch, eg. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug)]
pub enum InstantError {
    /// The value could not be parsed in the requested format
    Parse { format: Format, input: String },
    /// The value is outside the range chrono can represent
    OutOfRange,
}

impl fmt::Display for InstantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstantError::Parse { format, input } => {
                write!(f, "`{}` is not a valid {:?} timestamp", input, format)
            }
            InstantError::OutOfRange => write!(f, "timestamp is out of range"),
        }
    }
}

impl StdError for InstantError {}

impl Instant {
    pub fn from_secs(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates an `Instant` from a number of seconds and sub-second nanos since the Unix epoch.
    ///
    /// # Panics
    /// Panics if `subsecond_nanos` is not less than one second.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= NANOS_PER_SECOND {
            panic!("{} is >= 1_000_000_000", subsecond_nanos)
        }
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates an `Instant` from a fractional number of seconds since the Unix epoch.
    ///
    /// This is the representation used on the AWS JSON wire.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let subsecond_nanos = ((epoch_seconds - seconds) * NANOS_PER_SECOND as f64).round() as u32;
        if subsecond_nanos >= NANOS_PER_SECOND {
            Instant::from_secs(seconds as i64 + 1)
        } else {
            Instant::from_secs_and_nanos(seconds as i64, subsecond_nanos)
        }
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => Instant::from_secs_and_nanos(since.as_secs() as i64, since.subsec_nanos()),
            Err(err) => {
                let before = err.duration();
                if before.subsec_nanos() == 0 {
                    Instant::from_secs(-(before.as_secs() as i64))
                } else {
                    Instant::from_secs_and_nanos(
                        -(before.as_secs() as i64) - 1,
                        NANOS_PER_SECOND - before.subsec_nanos(),
                    )
                }
            }
        }
    }

    /// Parses an `Instant` from a string in the given format.
    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantError> {
        let parse_error = || InstantError::Parse {
            format,
            input: s.to_string(),
        };
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s).map_err(|_| parse_error())?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::HttpDate => {
                let parsed = DateTime::parse_from_rfc2822(s).map_err(|_| parse_error())?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => {
                let parsed: f64 = s.parse().map_err(|_| parse_error())?;
                if !parsed.is_finite() {
                    return Err(parse_error());
                }
                Ok(Instant::from_f64(parsed))
            }
        }
    }

    pub fn secs(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns the `Instant` value as an `f64` representing the seconds since the Unix epoch.
    ///
    /// _Note: This conversion will lose precision due to the nature of floating point numbers._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.seconds >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(self.seconds as u64, self.subsecond_nanos))
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.seconds.unsigned_abs()))?
                .checked_add(Duration::from_nanos(self.subsecond_nanos as u64))
        }
    }

    /// Formats the `Instant` in the given format.
    pub fn fmt(&self, format: Format) -> Result<String, InstantError> {
        match format {
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    Ok(self.seconds.to_string())
                } else {
                    Ok(self.as_secs_f64().to_string())
                }
            }
            Format::DateTime => Ok(self
                .to_chrono()?
                .to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Format::HttpDate => Ok(self
                .to_chrono()?
                .format("%a, %d %b %Y %H:%M:%S GMT")
                .to_string()),
        }
    }

    fn to_chrono(&self) -> Result<DateTime<Utc>, InstantError> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
            .ok_or(InstantError::OutOfRange)
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::from_system_time(time)
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn format_date_time() {
        let instant = Instant::from_secs(1576540098);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18Z");

        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.520Z"
        );
    }

    #[test]
    fn format_http_date() {
        let instant = Instant::from_secs(1576540098);
        assert_eq!(
            instant.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );
    }

    #[test]
    fn format_epoch_seconds() {
        assert_eq!(
            Instant::from_secs(1576540098)
                .fmt(Format::EpochSeconds)
                .unwrap(),
            "1576540098"
        );
        assert_eq!(
            Instant::from_secs_and_nanos(1576540098, 500_000_000)
                .fmt(Format::EpochSeconds)
                .unwrap(),
            "1576540098.5"
        );
    }

    #[test]
    fn parse_each_format() {
        let expected = Instant::from_secs(1576540098);
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18Z", Format::DateTime).unwrap(),
            expected
        );
        assert_eq!(
            Instant::from_str("Mon, 16 Dec 2019 23:48:18 GMT", Format::HttpDate).unwrap(),
            expected
        );
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds).unwrap(),
            expected
        );
        assert!(Instant::from_str("yesterday", Format::DateTime).is_err());
        assert!(Instant::from_str("NaN", Format::EpochSeconds).is_err());
    }

    #[test]
    fn fractional_seconds() {
        assert_eq!(
            Instant::from_f64(1.5),
            Instant::from_secs_and_nanos(1, 500_000_000)
        );
        assert_eq!(
            Instant::from_f64(-1.5),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
        assert_eq!(Instant::from_secs_and_nanos(-2, 500_000_000).as_secs_f64(), -1.5);
    }

    #[test]
    fn system_time_conversions() {
        let time = UNIX_EPOCH + Duration::new(1576540098, 12);
        let instant = Instant::from(time);
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 12));
        assert_eq!(instant.to_system_time(), Some(time));

        let before_epoch = UNIX_EPOCH - Duration::new(1, 250_000_000);
        let instant = Instant::from(before_epoch);
        assert_eq!(instant, Instant::from_secs_and_nanos(-2, 750_000_000));
        assert_eq!(instant.to_system_time(), Some(before_epoch));
    }
}

//
//  perfrepo-client
//  model/time.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JAXB Date-Time Codec
//!
//! JAXB's default `xs:dateTime` text is `YYYY-MM-DDThh:mm:ss[.fff]±hh:mm`:
//! millisecond precision at most, trailing zeros trimmed, and always a numeric
//! offset. The offset is kept exactly as written; no zone database is used.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, SubsecRound, TimeZone};

use crate::xml::ParseError;

/// Parse pattern; `%.f` also accepts a missing fraction.
const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// A timestamp with a fixed UTC offset, at millisecond precision.
///
/// Values are truncated to whole milliseconds on construction, which is the
/// precision the server stores, so every `JaxbTime` survives an
/// encode/decode round trip unchanged (instant and offset).
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone};
/// use perfrepo_client::model::JaxbTime;
///
/// let offset = FixedOffset::east_opt(2 * 3600).unwrap();
/// let started = JaxbTime::new(offset.with_ymd_and_hms(2016, 7, 7, 10, 30, 0).unwrap());
/// assert_eq!(started.to_string(), "2016-07-07T10:30:00+02:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JaxbTime(DateTime<FixedOffset>);

impl JaxbTime {
    /// Wraps `time`, truncating to milliseconds.
    ///
    /// The offset is kept, rounded to whole minutes since the text form has
    /// no seconds field. The instant itself never moves.
    pub fn new<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        let time = time.fixed_offset().trunc_subsecs(3);
        Self(time.with_timezone(&minute_offset(*time.offset())))
    }

    /// The current local time.
    pub fn now() -> Self {
        Self::new(Local::now())
    }

    /// The wrapped date-time.
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// The UTC offset exactly as it was written or constructed.
    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }
}

fn minute_offset(offset: FixedOffset) -> FixedOffset {
    let secs = offset.local_minus_utc();
    if secs % 60 == 0 {
        return offset;
    }
    let minutes = (secs as f64 / 60.0).round() as i32;
    // +-24:00 is out of range for FixedOffset
    FixedOffset::east_opt(minutes * 60)
        .or_else(|| FixedOffset::east_opt((minutes - minutes.signum()) * 60))
        .unwrap_or(offset)
}

impl<Tz: TimeZone> From<DateTime<Tz>> for JaxbTime {
    fn from(time: DateTime<Tz>) -> Self {
        Self::new(time)
    }
}

impl fmt::Display for JaxbTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))?;
        let millis = self.0.timestamp_subsec_millis();
        if millis > 0 {
            let fraction = format!("{:03}", millis);
            write!(f, ".{}", fraction.trim_end_matches('0'))?;
        }
        write!(f, "{}", self.0.format("%:z"))
    }
}

impl FromStr for JaxbTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.ends_with('Z') || s.ends_with('z') {
            return Err(ParseError::Timestamp {
                input: s.to_string(),
                reason: "a numeric UTC offset is required".to_string(),
            });
        }
        DateTime::parse_from_str(s, PARSE_FORMAT)
            .map(Self::new)
            .map_err(|e| ParseError::Timestamp {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

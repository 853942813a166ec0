// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use crate::Error;
use crate::Result;
use chrono::Datelike;
use chrono::NaiveDateTime;
use chrono::Utc;
use std::fmt;
use std::str::FromStr;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Date format: "20220313"
const DATE: &str = "%Y%m%d";
/// Time format for ISO 8601 basic: "20220313T072004Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format(DATE).to_string()
}

/// Format time into ISO 8601 basic format: `20220313T072004Z`
///
/// Sub-second fractions are dropped.
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Parse time from ISO 8601 basic format: `20220313T072004Z`
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    NaiveDateTime::parse_from_str(s, ISO8601)
        .map(|t| t.and_utc())
        .map_err(|e| {
            Error::timestamp_invalid(format!("parse {s:?} as iso8601 basic format")).with_source(e)
        })
}

/// Parse time from RFC 3339 like `2022-03-01T08:12:34Z`.
///
/// Any offset is normalized into UTC.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::timestamp_invalid(format!("parse {s:?} as rfc3339")).with_source(e))
}

/// SigningTime is the single instant a signature is computed at.
///
/// Both representations used by signing schemes are rendered once from the
/// same instant, so a canonical request and its credential scope can never
/// disagree on the date.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningTime {
    time: DateTime,
    iso8601: String,
    date: String,
}

impl SigningTime {
    /// Capture the signing time from a UTC instant.
    ///
    /// Returns [`ErrorKind::TimestampInvalid`](crate::ErrorKind::TimestampInvalid)
    /// if the year can't be rendered in four digits.
    pub fn new(time: DateTime) -> Result<Self> {
        let year = time.year();
        if !(0..=9999).contains(&year) {
            return Err(Error::timestamp_invalid(format!(
                "year {year} can't be formatted as YYYYMMDD"
            )));
        }

        Ok(Self {
            time,
            iso8601: format_iso8601(time),
            date: format_date(time),
        })
    }

    /// Capture the current time.
    pub fn now() -> Result<Self> {
        Self::new(now())
    }

    /// The captured instant.
    pub fn time(&self) -> DateTime {
        self.time
    }

    /// `YYYYMMDDTHHMMSSZ`
    pub fn iso8601(&self) -> &str {
        &self.iso8601
    }

    /// `YYYYMMDD`
    pub fn date(&self) -> &str {
        &self.date
    }
}

impl TryFrom<DateTime> for SigningTime {
    type Error = Error;

    fn try_from(time: DateTime) -> Result<Self> {
        Self::new(time)
    }
}

impl FromStr for SigningTime {
    type Err = Error;

    /// Accepts both `20220313T072004Z` and RFC 3339.
    fn from_str(s: &str) -> Result<Self> {
        let time = match parse_iso8601(s) {
            Ok(t) => t,
            Err(_) => parse_rfc3339(s)?,
        };
        Self::new(time)
    }
}

impl fmt::Debug for SigningTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningTime").field(&self.iso8601).finish()
    }
}

impl fmt::Display for SigningTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso8601)
    }
}

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

use std::fmt;

use antsign_core::time::SigningTime;
use antsign_core::{Error, Result};

use crate::constants::{ALGORITHM, REQUEST_SUFFIX};

/// Credential scope: `<date>/<region>/<service>/antavo_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialScope {
    date: String,
    region: String,
    service: String,
}

impl CredentialScope {
    /// Build the scope for the date of `time`.
    ///
    /// `region` and `service` must be non-empty and free of `/` or whitespace,
    /// otherwise the scope could be split ambiguously.
    pub fn new(time: &SigningTime, region: &str, service: &str) -> Result<Self> {
        check_segment("region", region)?;
        check_segment("service", service)?;

        Ok(Self {
            date: time.date().to_string(),
            region: region.to_string(),
            service: service.to_string(),
        })
    }

    /// `YYYYMMDD`
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Region segment.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service segment.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl fmt::Display for CredentialScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date, self.region, self.service, REQUEST_SUFFIX
        )
    }
}

fn check_segment(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::config_invalid(format!("{name} must not be empty")));
    }
    if value
        .chars()
        .any(|c| c == '/' || c.is_whitespace() || c.is_control())
    {
        return Err(Error::config_invalid(format!(
            "{name} {value:?} must not contain '/' or whitespace"
        )));
    }
    Ok(())
}

/// The string to sign.
///
/// ```text
/// ANTAVO-HMAC-SHA256\n
/// <YYYYMMDDTHHMMSSZ>\n
/// <credential scope>\n
/// <hex sha256 of canonical request>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringToSign(String);

impl StringToSign {
    /// Build from the signing time, the scope and the canonical request hash.
    pub fn new(time: &SigningTime, scope: &CredentialScope, canonical_request_hash: &str) -> Self {
        Self(format!(
            "{ALGORITHM}\n{}\n{scope}\n{canonical_request_hash}",
            time.iso8601()
        ))
    }

    /// Get the string to sign.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the string to sign as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for StringToSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

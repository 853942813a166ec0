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

use antsign_core::Result;
use http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE, DATE, HOST};
use http::request::Parts;
use http::{HeaderMap, HeaderValue};

use crate::canonical::CanonicalHeaders;
use crate::constants::ALGORITHM;
use crate::key::Signature;
use crate::scope::CredentialScope;

/// Headers produced by signing a request.
///
/// `Content-Type`, `Host` and `Date` carry exactly the values that were
/// canonicalized, so the server recomputes the same canonical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    authorization: String,
    content_type: String,
    host: String,
    date: String,
}

impl SignedHeaders {
    /// Assemble the authorization value and the companion headers.
    pub fn new(
        access_key: &str,
        scope: &CredentialScope,
        headers: &CanonicalHeaders,
        signature: &Signature,
    ) -> Self {
        let authorization = format!(
            "{ALGORITHM} Credential={access_key}/{scope}, SignedHeaders={}, Signature={signature}",
            headers.signed_names()
        );
        let value = |name: &HeaderName| headers.get(name).unwrap_or_default().to_string();

        Self {
            authorization,
            content_type: value(&CONTENT_TYPE),
            host: value(&HOST),
            date: value(&DATE),
        }
    }

    /// `ANTAVO-HMAC-SHA256 Credential=..., SignedHeaders=..., Signature=...`
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Signed content type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Signed host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Signing time as `YYYYMMDDTHHMMSSZ`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Iterate the headers as `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Authorization", self.authorization.as_str()),
            ("Content-Type", self.content_type.as_str()),
            ("Host", self.host.as_str()),
            ("Date", self.date.as_str()),
        ]
        .into_iter()
    }

    /// Convert into a [`HeaderMap`], the authorization value is marked sensitive.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&self.authorization)?;
        authorization.set_sensitive(true);

        let mut map = HeaderMap::with_capacity(4);
        map.insert(AUTHORIZATION, authorization);
        map.insert(CONTENT_TYPE, HeaderValue::from_str(&self.content_type)?);
        map.insert(HOST, HeaderValue::from_str(&self.host)?);
        map.insert(DATE, HeaderValue::from_str(&self.date)?);
        Ok(map)
    }

    /// Write the headers onto the request.
    ///
    /// Every value is validated first, so `req` is left untouched on error.
    pub fn apply(&self, req: &mut Parts) -> Result<()> {
        let map = self.to_header_map()?;
        for (name, value) in map {
            if let Some(name) = name {
                req.headers.insert(name, value);
            }
        }
        Ok(())
    }
}

impl fmt::Display for SignedHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

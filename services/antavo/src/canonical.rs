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

//! Canonical request construction.
//!
//! ```text
//! <method>\n
//! <canonical uri>\n
//! [<canonical query>\n]
//! content-type:<value>\n
//! date:<YYYYMMDDTHHMMSSZ>\n
//! host:<host>\n
//! \n
//! content-type;date;host\n
//! <hex sha256 of payload>
//! ```
//!
//! The query line only exists when query signing is enabled.

use std::fmt;

use antsign_core::hash::hex_sha256;
use antsign_core::time::SigningTime;
use antsign_core::{Error, Result};
use http::header::{self, HeaderName};
use http::{HeaderValue, Method};
use percent_encoding::utf8_percent_encode;

use crate::constants::QUERY_ENCODE_SET;

/// The headers covered by the signature, in canonical order.
///
/// The header block and the signed header list are both rendered from the
/// same entries, so they always name the same headers in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHeaders {
    entries: Vec<(HeaderName, String)>,
}

impl CanonicalHeaders {
    /// Build `content-type`, `date` and `host` from the values that will be sent.
    pub fn new(content_type: &str, time: &SigningTime, host: &str) -> Result<Self> {
        if host.is_empty() {
            return Err(Error::request_invalid("host must not be empty"));
        }
        if host.bytes().any(|b| b.is_ascii_whitespace() || b.is_ascii_control()) {
            return Err(Error::request_invalid(format!(
                "host {host:?} contains whitespace or control characters"
            )));
        }

        let entries = vec![
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::DATE, time.iso8601().to_string()),
            (header::HOST, host.to_string()),
        ];
        for (name, value) in &entries {
            HeaderValue::from_str(value).map_err(|e| {
                Error::request_invalid(format!("{name} value {value:?} is not a valid header"))
                    .with_source(e)
            })?;
        }

        Ok(Self { entries })
    }

    /// Iterate `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Get the value of a signed header.
    pub fn get(&self, name: &HeaderName) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// `name:value\n` for every header.
    pub fn block(&self) -> String {
        self.iter().fold(String::with_capacity(128), |mut s, (k, v)| {
            s.push_str(k.as_str());
            s.push(':');
            s.push_str(v);
            s.push('\n');
            s
        })
    }

    /// Lower-case header names joined by `;`.
    pub fn signed_names(&self) -> String {
        self.iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Canonical query string: pairs percent encoded, sorted, joined by `&`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalQuery(String);

impl CanonicalQuery {
    /// Build from decoded `(key, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut encoded = pairs
            .into_iter()
            .map(|(k, v)| {
                (
                    utf8_percent_encode(k.as_ref(), &QUERY_ENCODE_SET).to_string(),
                    utf8_percent_encode(v.as_ref(), &QUERY_ENCODE_SET).to_string(),
                )
            })
            .collect::<Vec<_>>();
        encoded.sort();

        Self(
            encoded
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&"),
        )
    }

    /// Get the canonical query string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The canonical request, the byte exact input of the request hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest(String);

impl CanonicalRequest {
    /// Assemble the canonical request.
    ///
    /// `uri` must be the already percent encoded path without a query string.
    pub fn build(
        method: &Method,
        uri: &str,
        query: Option<&CanonicalQuery>,
        headers: &CanonicalHeaders,
        payload_hash: &str,
    ) -> Result<Self> {
        check_canonical_uri(uri)?;

        // 256 is specially chosen to avoid reallocation for most requests.
        let mut s = String::with_capacity(256);
        s.push_str(method.as_str());
        s.push('\n');
        s.push_str(uri);
        s.push('\n');
        if let Some(query) = query {
            s.push_str(query.as_str());
            s.push('\n');
        }
        s.push_str(&headers.block());
        s.push('\n');
        s.push_str(&headers.signed_names());
        s.push('\n');
        s.push_str(payload_hash);

        Ok(Self(s))
    }

    /// Build the canonical request for the given payload bytes.
    pub fn build_with_payload(
        method: &Method,
        uri: &str,
        query: Option<&CanonicalQuery>,
        headers: &CanonicalHeaders,
        payload: &[u8],
    ) -> Result<Self> {
        Self::build(method, uri, query, headers, &hex_sha256(payload))
    }

    /// Hex encoded SHA256 of the canonical request.
    pub fn hash(&self) -> String {
        hex_sha256(self.0.as_bytes())
    }

    /// Get the canonical request.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical uri must be an absolute, already encoded path.
fn check_canonical_uri(uri: &str) -> Result<()> {
    if !uri.starts_with('/') {
        return Err(Error::request_invalid(format!(
            "canonical uri {uri:?} must start with '/'"
        )));
    }

    let bs = uri.as_bytes();
    let mut idx = 0;
    while idx < bs.len() {
        match bs[idx] {
            b'?' | b'#' => {
                return Err(Error::request_invalid(format!(
                    "canonical uri {uri:?} must not carry a query or fragment"
                )))
            }
            b'%' => {
                let valid = bs.len() > idx + 2
                    && bs[idx + 1].is_ascii_hexdigit()
                    && bs[idx + 2].is_ascii_hexdigit();
                if !valid {
                    return Err(Error::encoding_failure(format!(
                        "canonical uri {uri:?} has a malformed percent escape at {idx}"
                    )));
                }
                idx += 3;
                continue;
            }
            b if b.is_ascii_graphic() => {}
            _ => {
                return Err(Error::request_invalid(format!(
                    "canonical uri {uri:?} must be percent encoded"
                )))
            }
        }
        idx += 1;
    }

    Ok(())
}

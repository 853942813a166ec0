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

use crate::{Error, Result};
use http::header::{self, HeaderName};
use http::uri::Authority;
use http::HeaderMap;
use http::Method;

/// SigningRequest is a read-only snapshot of the parts of a request that
/// signing schemes consume.
///
/// Building it never mutates the original request, so a failed signature
/// leaves the request exactly as it was.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP authority, if the uri carries one.
    pub authority: Option<Authority>,
    /// HTTP path, still percent encoded. `/` if the uri has no path.
    pub path: String,
    /// HTTP query parameters, decoded, in request order.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing request from http::request::Parts.
    pub fn build(parts: &http::request::Parts) -> Result<Self> {
        let path = match parts.uri.path() {
            "" => "/".to_string(),
            v => v.to_string(),
        };

        Ok(SigningRequest {
            method: parts.method.clone(),
            authority: parts.uri.authority().cloned(),
            path,
            query: parts
                .uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
            headers: parts.headers.clone(),
        })
    }

    /// Get header value by name with surrounding spaces trimmed.
    ///
    /// Returns `None` if header not found.
    pub fn header_get(&self, key: &HeaderName) -> Result<Option<&str>> {
        match self.headers.get(key) {
            Some(v) => Ok(Some(v.to_str()?.trim_matches(' '))),
            None => Ok(None),
        }
    }

    /// Host of this request: the `Host` header if present, otherwise the uri authority.
    ///
    /// Userinfo in the authority is never part of the host.
    pub fn host(&self) -> Result<String> {
        if let Some(host) = self.header_get(&header::HOST)? {
            return Ok(host.to_string());
        }

        let authority = self
            .authority
            .as_ref()
            .ok_or_else(|| Error::request_invalid("request without host is invalid for signing"))?;
        Ok(match authority.port_u16() {
            Some(port) => format!("{}:{port}", authority.host()),
            None => authority.host().to_string(),
        })
    }

    /// Returns true if the request carries any query parameters.
    #[inline]
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

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

use std::fmt::{Debug, Formatter};

use antsign_core::time::SigningTime;
use antsign_core::utils::Redact;
use antsign_core::Result;
use bytes::Bytes;
use http::Method;
use log::debug;

use crate::authorization::SignedHeaders;
use crate::canonical::{CanonicalHeaders, CanonicalQuery, CanonicalRequest};
use crate::constants::{DEFAULT_CONTENT_TYPE, DEFAULT_SERVICE};
use crate::credential::Credential;
use crate::key::SigningKey;
use crate::scope::{CredentialScope, StringToSign};

/// Every input of a single signature.
///
/// The signing time is captured by the caller and carried here, every stage
/// reads the same instant.
#[derive(Clone)]
pub struct SigningContext {
    method: Method,
    canonical_uri: String,
    query: Option<CanonicalQuery>,
    host: String,
    content_type: String,
    region: String,
    service: String,
    credential: Credential,
    time: SigningTime,
    payload: Bytes,
}

impl SigningContext {
    /// Create a context with the default content type, the `api` service and
    /// an empty payload.
    pub fn new(
        method: Method,
        canonical_uri: impl Into<String>,
        host: impl Into<String>,
        time: SigningTime,
    ) -> Self {
        Self {
            method,
            canonical_uri: canonical_uri.into(),
            query: None,
            host: host.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            region: String::new(),
            service: DEFAULT_SERVICE.to_string(),
            credential: Credential::default(),
            time,
            payload: Bytes::new(),
        }
    }

    /// Set the credential.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    /// Set region and service.
    pub fn with_scope(mut self, region: impl Into<String>, service: impl Into<String>) -> Self {
        self.region = region.into();
        self.service = service.into();
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the payload.
    pub fn with_payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Cover the query string with the signature.
    ///
    /// The canonical request carries no query line unless this is set.
    pub fn with_query(mut self, query: CanonicalQuery) -> Self {
        self.query = Some(query);
        self
    }

    /// The signing time.
    pub fn time(&self) -> &SigningTime {
        &self.time
    }

    /// Build the signed headers.
    pub fn canonical_headers(&self) -> Result<CanonicalHeaders> {
        CanonicalHeaders::new(&self.content_type, &self.time, &self.host)
    }

    /// Build the canonical request.
    pub fn canonical_request(&self) -> Result<CanonicalRequest> {
        let headers = self.canonical_headers()?;
        CanonicalRequest::build_with_payload(
            &self.method,
            &self.canonical_uri,
            self.query.as_ref(),
            &headers,
            &self.payload,
        )
    }

    /// Build the credential scope.
    pub fn credential_scope(&self) -> Result<CredentialScope> {
        CredentialScope::new(&self.time, &self.region, &self.service)
    }

    /// Build the string to sign.
    pub fn string_to_sign(&self) -> Result<StringToSign> {
        let creq = self.canonical_request()?;
        let scope = self.credential_scope()?;
        Ok(StringToSign::new(&self.time, &scope, &creq.hash()))
    }

    /// Derive the signing key.
    ///
    /// Fails like [`SigningContext::sign`] when the credential is unusable.
    pub fn signing_key(&self) -> Result<SigningKey> {
        self.credential.check()?;
        SigningKey::derive(&self.credential.secret_key, &self.credential_scope()?)
    }

    /// Run the whole pipeline.
    ///
    /// Nothing is produced unless every stage succeeds.
    pub fn sign(&self) -> Result<SignedHeaders> {
        self.credential.check()?;

        let headers = self.canonical_headers()?;
        let creq = CanonicalRequest::build_with_payload(
            &self.method,
            &self.canonical_uri,
            self.query.as_ref(),
            &headers,
            &self.payload,
        )?;
        debug!("calculated canonical request: {creq}");

        let scope = self.credential_scope()?;
        debug!("calculated scope: {scope}");

        let string_to_sign = StringToSign::new(&self.time, &scope, &creq.hash());
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = SigningKey::derive(&self.credential.secret_key, &scope)?;
        let signature = signing_key.sign(&string_to_sign)?;

        Ok(SignedHeaders::new(
            &self.credential.access_key,
            &scope,
            &headers,
            &signature,
        ))
    }
}

impl Debug for SigningContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningContext")
            .field("method", &self.method)
            .field("canonical_uri", &self.canonical_uri)
            .field("query", &self.query)
            .field("host", &self.host)
            .field("content_type", &self.content_type)
            .field("region", &self.region)
            .field("service", &self.service)
            .field("access_key", &Redact::from(&self.credential.access_key))
            .field("secret_key", &Redact::from(&self.credential.secret_key))
            .field("time", &self.time)
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

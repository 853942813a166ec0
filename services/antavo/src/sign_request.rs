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

use async_trait::async_trait;
use http::header;
use http::request::Parts;
use log::debug;

use antsign_core::time::{now, DateTime, SigningTime};
use antsign_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::canonical::CanonicalQuery;
use crate::constants::{DEFAULT_CONTENT_TYPE, DEFAULT_SERVICE};
use crate::sign::SigningContext;
use crate::{Config, Credential};

/// RequestSigner that implements Antavo request signing.
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    region: String,
    content_type: String,
    sign_query: bool,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given service and region.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            sign_query: false,

            time: None,
        }
    }

    /// Create a new signer from config.
    ///
    /// Returns `ConfigInvalid` if no region is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let region = config
            .region
            .as_deref()
            .ok_or_else(|| Error::config_invalid("region is required for signing"))?;
        let service = config.service.as_deref().unwrap_or(DEFAULT_SERVICE);

        let mut signer = Self::new(service, region).with_query_signing(config.sign_query);
        if let Some(content_type) = &config.content_type {
            signer = signer.with_content_type(content_type);
        }
        Ok(signer)
    }

    /// Content type signed when the request doesn't carry one.
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Cover the query string with the signature.
    pub fn with_query_signing(mut self, sign_query: bool) -> Self {
        self.sign_query = sign_query;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request with an explicit payload.
    ///
    /// Headers are only written after every stage succeeded.
    pub fn sign_parts(&self, req: &mut Parts, cred: &Credential, payload: &[u8]) -> Result<()> {
        let time = SigningTime::new(self.time.unwrap_or_else(now))?;
        let signing_req = SigningRequest::build(req)?;

        let host = signing_req.host()?;
        let content_type = signing_req
            .header_get(&header::CONTENT_TYPE)?
            .unwrap_or(self.content_type.as_str())
            .to_string();

        let mut ctx = SigningContext::new(signing_req.method.clone(), &signing_req.path, host, time)
            .with_credential(cred.clone())
            .with_scope(&self.region, &self.service)
            .with_content_type(content_type)
            .with_payload(payload.to_vec());

        if signing_req.has_query() {
            if self.sign_query {
                ctx = ctx.with_query(CanonicalQuery::from_pairs(signing_req.query.iter().cloned()));
            } else {
                debug!("query string of {} is left unsigned", signing_req.path);
            }
        }

        let signed = ctx.sign()?;
        signed.apply(req)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_missing(
                "credential is required to sign antavo requests",
            ));
        };

        self.sign_parts(req, cred, &[])
    }
}

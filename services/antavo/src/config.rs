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

use antsign_core::{utils::Redact, Context};
use serde::Deserialize;

use crate::constants::*;

/// Config carries all the configuration for Antavo services.
///
/// Explicit values always win over the environment.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ANTAVO_ACCESS_KEY`]
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ANTAVO_API_SECRET`]
    pub secret_key: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ANTAVO_REGION`]
    pub region: Option<String>,
    /// `service` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ANTAVO_SERVICE`]
    /// - default to `api`
    pub service: Option<String>,
    /// Content type signed when the request doesn't carry one.
    ///
    /// Default to `application/x-www-form-urlencoded; charset=utf-8`.
    pub content_type: Option<String>,
    /// Cover the query string with the signature.
    ///
    /// Disabled by default: the Antavo API doesn't sign query parameters.
    pub sign_query: bool,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set service
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set content_type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Enable or disable query signing.
    pub fn with_sign_query(mut self, sign_query: bool) -> Self {
        self.sign_query = sign_query;
        self
    }

    /// Load config from env.
    ///
    /// Empty env values are ignored.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var_non_empty(ANTAVO_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var_non_empty(ANTAVO_API_SECRET) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var_non_empty(ANTAVO_REGION) {
            self.region.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var_non_empty(ANTAVO_SERVICE) {
            self.service.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("region", &self.region)
            .field("service", &self.service)
            .field("content_type", &self.content_type)
            .field("sign_query", &self.sign_query)
            .finish()
    }
}

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

use antsign_core::hash::{hex_hmac_sha256, hmac_sha256, SHA256_LEN};
use antsign_core::Result;

use crate::constants::{REQUEST_SUFFIX, SECRET_PREFIX};
use crate::scope::{CredentialScope, StringToSign};

/// Key derived from the api secret for a single credential scope.
///
/// ```text
/// k_date    = HMAC("ANTAVO" + secret, date)
/// k_region  = HMAC(k_date, region)
/// k_service = HMAC(k_region, service)
/// k_signing = HMAC(k_service, "antavo_request")
/// ```
///
/// Every round is keyed with the raw bytes of the previous one.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey([u8; SHA256_LEN]);

impl SigningKey {
    /// Derive the signing key for `scope`.
    pub fn derive(secret_key: &str, scope: &CredentialScope) -> Result<Self> {
        let seed = format!("{SECRET_PREFIX}{secret_key}");

        let k_date = hmac_sha256(seed.as_bytes(), scope.date().as_bytes())?;
        let k_region = hmac_sha256(&k_date, scope.region().as_bytes())?;
        let k_service = hmac_sha256(&k_region, scope.service().as_bytes())?;
        let k_signing = hmac_sha256(&k_service, REQUEST_SUFFIX.as_bytes())?;

        Ok(Self(k_signing))
    }

    /// Sign the string to sign.
    pub fn sign(&self, string_to_sign: &StringToSign) -> Result<Signature> {
        hex_hmac_sha256(&self.0, string_to_sign.as_bytes()).map(Signature)
    }

    /// Raw bytes of the key.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(***)")
    }
}

/// Lowercase hex encoded signature, always 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    /// Get the signature.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

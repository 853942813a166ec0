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

use antsign_core::utils::Redact;
use antsign_core::{Error, Result, SigningCredential};

/// Credential that holds the access key and the api secret.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key, sent in clear inside the authorization header.
    pub access_key: String,
    /// Api secret, only ever used as the seed of the signing key.
    pub secret_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Fail with `CredentialMissing` unless both keys are set.
    ///
    /// The access key is written verbatim into the authorization header, so
    /// `/`, `,`, `=`, whitespace and control characters are `CredentialInvalid`.
    pub fn check(&self) -> Result<()> {
        if self.access_key.is_empty() {
            return Err(Error::credential_missing("access key is empty"));
        }
        if self.secret_key.is_empty() {
            return Err(Error::credential_missing("secret key is empty"));
        }
        if self
            .access_key
            .chars()
            .any(|c| matches!(c, '/' | ',' | '=') || c.is_whitespace() || c.is_control())
        {
            return Err(Error::credential_invalid(
                "access key must not contain '/', ',', '=' or whitespace",
            ));
        }
        Ok(())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

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

//! Antavo API request signing.
//!
//! Requests are signed with `ANTAVO-HMAC-SHA256`: a canonical request is
//! hashed into a string to sign, which is then signed with a key derived from
//! the api secret in four HMAC rounds over `date/region/service/antavo_request`.
//!
//! ## Example
//!
//! ```no_run
//! use antsign_antavo::{DefaultCredentialProvider, RequestSigner};
//! use antsign_core::{Context, OsEnv, Result, Signer};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let signer = Signer::new(
//!     ctx,
//!     DefaultCredentialProvider::new(),
//!     RequestSigner::new("api", "st2"),
//! );
//!
//! let mut parts = http::Request::get("https://api.example.com/customers/123")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Signing without a request is done through [`SigningContext`]:
//!
//! ```
//! use antsign_antavo::{Credential, SigningContext};
//! use http::Method;
//!
//! # fn main() -> antsign_core::Result<()> {
//! let signed = SigningContext::new(
//!     Method::GET,
//!     "/customers/123/activities/spend",
//!     "api.example.com",
//!     "20170307T120000Z".parse()?,
//! )
//! .with_credential(Credential::new("AK123", "topsecret"))
//! .with_scope("rc", "api")
//! .sign()?;
//!
//! assert!(signed
//!     .authorization()
//!     .starts_with("ANTAVO-HMAC-SHA256 Credential=AK123/20170307/rc/api/antavo_request"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::*;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod canonical;
pub use canonical::{CanonicalHeaders, CanonicalQuery, CanonicalRequest};

mod scope;
pub use scope::{CredentialScope, StringToSign};

mod key;
pub use key::{Signature, SigningKey};

mod authorization;
pub use authorization::SignedHeaders;

mod sign;
pub use sign::SigningContext;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

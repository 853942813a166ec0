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

use antsign_antavo::{
    Credential, DefaultCredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
    ANTAVO_ACCESS_KEY, ANTAVO_API_SECRET,
};
use antsign_core::{Context, Error, ProvideCredential, ProvideCredentialChain, Result, StaticEnv};
use async_trait::async_trait;

#[derive(Debug)]
struct BrokenProvider;

#[async_trait]
impl ProvideCredential for BrokenProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Err(Error::credential_invalid("broken provider"))
    }
}

#[tokio::test]
async fn test_chain_skips_failing_provider() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        (ANTAVO_ACCESS_KEY, "env_access_key"),
        (ANTAVO_API_SECRET, "env_secret_key"),
    ]));
    let chain = ProvideCredentialChain::new()
        .push(BrokenProvider)
        .push(EnvCredentialProvider::new())
        .push(StaticCredentialProvider::new("static_ak", "static_sk"));

    let cred = DefaultCredentialProvider::with_chain(chain)
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");

    assert_eq!(cred.access_key, "env_access_key");

    Ok(())
}

#[tokio::test]
async fn test_default_provider_without_env() -> anyhow::Result<()> {
    let cred = DefaultCredentialProvider::new()
        .provide_credential(&Context::new())
        .await?;
    assert!(cred.is_none());

    let cred = DefaultCredentialProvider::new()
        .push_front(StaticCredentialProvider::new("static_ak", "static_sk"))
        .provide_credential(&Context::new())
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.access_key, "static_ak");

    Ok(())
}

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

use std::sync::Arc;

use antsign_antavo::{Config, ConfigCredentialProvider, ANTAVO_ACCESS_KEY, ANTAVO_API_SECRET};
use antsign_core::{Context, ProvideCredential, StaticEnv};

#[tokio::test]
async fn test_config_loaded_from_toml() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let config: Config = toml::from_str(
        r#"
        access_key = "toml_access_key"
        secret_key = "toml_secret_key"
        region = "st2"
        "#,
    )?;

    let provider = ConfigCredentialProvider::new(Arc::new(config));
    let cred = provider
        .provide_credential(&Context::new())
        .await?
        .expect("credential must be loaded");

    assert_eq!(cred.access_key, "toml_access_key");
    assert_eq!(cred.secret_key, "toml_secret_key");

    Ok(())
}

#[tokio::test]
async fn test_config_values_win_over_env() -> anyhow::Result<()> {
    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        (ANTAVO_ACCESS_KEY, "env_access_key"),
        (ANTAVO_API_SECRET, "env_secret_key"),
    ]));
    let config = Config::new().with_access_key("config_access_key");

    let provider = ConfigCredentialProvider::new(Arc::new(config));
    let cred = provider
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");

    assert_eq!(cred.access_key, "config_access_key");
    assert_eq!(cred.secret_key, "env_secret_key");

    Ok(())
}

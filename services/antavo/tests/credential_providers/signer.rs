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
    DefaultCredentialProvider, RequestSigner, StaticCredentialProvider, ANTAVO_ACCESS_KEY,
    ANTAVO_API_SECRET,
};
use antsign_core::time::parse_iso8601;
use antsign_core::{Context, ErrorKind, Signer, StaticEnv};
use http::header::AUTHORIZATION;
use http::Request;

fn test_signer() -> RequestSigner {
    RequestSigner::new("api", "rc")
        .with_time(parse_iso8601("20170307T120000Z").expect("time must be valid"))
}

#[tokio::test]
async fn test_signer_with_env_credential() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        (ANTAVO_ACCESS_KEY, "AK123"),
        (ANTAVO_API_SECRET, "topsecret"),
    ]));
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), test_signer());

    let mut req = Request::get("https://api.example.com/customers/123/activities/spend")
        .body(())?
        .into_parts()
        .0;
    signer.sign(&mut req).await?;

    assert_eq!(
        req.headers[AUTHORIZATION],
        "ANTAVO-HMAC-SHA256 Credential=AK123/20170307/rc/api/antavo_request, \
         SignedHeaders=content-type;date;host, \
         Signature=8fc70c4a891e010b5c098d12620e3b3c8bf4c79ffffb5f15c424ea78db2569e5"
    );

    Ok(())
}

#[tokio::test]
async fn test_signer_reuses_credential() -> anyhow::Result<()> {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("AK123", "topsecret"),
        test_signer(),
    );

    for _ in 0..3 {
        let mut req = Request::get("https://api.example.com/customers")
            .body(())?
            .into_parts()
            .0;
        signer.sign(&mut req).await?;
        assert!(req.headers.contains_key(AUTHORIZATION));
    }

    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential() -> anyhow::Result<()> {
    let signer = Signer::new(Context::new(), DefaultCredentialProvider::new(), test_signer());

    let mut req = Request::get("https://api.example.com/customers")
        .body(())?
        .into_parts()
        .0;
    let err = signer.sign(&mut req).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialMissing);
    assert!(req.headers.is_empty());

    Ok(())
}

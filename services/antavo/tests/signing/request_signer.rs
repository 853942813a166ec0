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

use super::*;
use antsign_antavo::{Config, RequestSigner};
use antsign_core::time::parse_iso8601;
use antsign_core::{Context, ErrorKind, SignRequest};
use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE, HOST};
use http::request::Parts;
use http::Request;
use pretty_assertions::assert_eq;

fn test_signer() -> RequestSigner {
    RequestSigner::new(TEST_SERVICE, TEST_REGION)
        .with_time(parse_iso8601("20170307T120000Z").expect("time must be valid"))
}

fn into_parts(req: Request<()>) -> Parts {
    req.into_parts().0
}

fn signature(req: &Parts) -> String {
    req.headers[AUTHORIZATION]
        .to_str()
        .expect("authorization must be ascii")
        .rsplit("Signature=")
        .next()
        .expect("authorization must carry a signature")
        .to_string()
}

#[tokio::test]
async fn test_sign_get_request() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut req = into_parts(
        Request::get("https://api.example.com/customers/123/activities/spend").body(())?,
    );
    test_signer()
        .sign_request(&Context::new(), &mut req, Some(&test_credential()))
        .await?;

    assert_eq!(
        signature(&req),
        "8fc70c4a891e010b5c098d12620e3b3c8bf4c79ffffb5f15c424ea78db2569e5"
    );
    assert_eq!(req.headers[HOST], "api.example.com");
    assert_eq!(req.headers[DATE], "20170307T120000Z");
    assert_eq!(
        req.headers[CONTENT_TYPE],
        "application/x-www-form-urlencoded; charset=utf-8"
    );
    assert!(req.headers[AUTHORIZATION].is_sensitive());

    Ok(())
}

#[test]
fn test_sign_post_request_with_payload() -> anyhow::Result<()> {
    let mut req = into_parts(
        Request::post("https://api.example.com/events")
            .header(CONTENT_TYPE, "application/json")
            .body(())?,
    );
    test_signer().sign_parts(&mut req, &test_credential(), br#"{"action":"spend"}"#)?;

    assert_eq!(
        signature(&req),
        "9f73c729089621625dc80168ead39b402bccf494fe46b530f44349f6dfd0b77c"
    );
    assert_eq!(req.headers[CONTENT_TYPE], "application/json");

    Ok(())
}

#[test]
fn test_host_header_wins_over_authority() -> anyhow::Result<()> {
    let mut req = into_parts(
        Request::get("https://10.0.0.1/customers/123/activities/spend")
            .header(HOST, "api.example.com")
            .body(())?,
    );
    test_signer().sign_parts(&mut req, &test_credential(), b"")?;

    assert_eq!(
        signature(&req),
        "8fc70c4a891e010b5c098d12620e3b3c8bf4c79ffffb5f15c424ea78db2569e5"
    );

    Ok(())
}

#[test]
fn test_query_is_unsigned_by_default() -> anyhow::Result<()> {
    let mut with_query = into_parts(
        Request::get("https://api.example.com/customers?offset=20&limit=10").body(())?,
    );
    let mut without_query =
        into_parts(Request::get("https://api.example.com/customers").body(())?);

    test_signer().sign_parts(&mut with_query, &test_credential(), b"")?;
    test_signer().sign_parts(&mut without_query, &test_credential(), b"")?;

    assert_eq!(signature(&with_query), signature(&without_query));
    assert_eq!(
        signature(&with_query),
        "938a0030028237107094f7382a6fdbf9bbb169279433aeddb9ad68af2e7e2ad9"
    );
    assert_eq!(with_query.uri.query(), Some("offset=20&limit=10"));

    Ok(())
}

#[test]
fn test_query_signing() -> anyhow::Result<()> {
    let mut req = into_parts(
        Request::get("https://api.example.com/customers?offset=20&limit=10").body(())?,
    );
    test_signer()
        .with_query_signing(true)
        .sign_parts(&mut req, &test_credential(), b"")?;

    assert_eq!(
        signature(&req),
        "c87c93bc88981613c17049ca27937c72b72d460bce16f4832d74bc224821fc33"
    );

    Ok(())
}

#[test]
fn test_signer_from_config() -> anyhow::Result<()> {
    let config: Config = toml::from_str(
        r#"
        region = "rc"
        sign_query = true
        "#,
    )?;
    let signer = RequestSigner::from_config(&config)?
        .with_time(parse_iso8601("20170307T120000Z")?);

    let mut req = into_parts(
        Request::get("https://api.example.com/customers?limit=10&offset=20").body(())?,
    );
    signer.sign_parts(&mut req, &test_credential(), b"")?;

    assert_eq!(
        signature(&req),
        "c87c93bc88981613c17049ca27937c72b72d460bce16f4832d74bc224821fc33"
    );

    Ok(())
}

#[test]
fn test_failed_signing_leaves_request_untouched() -> anyhow::Result<()> {
    let mut req = into_parts(Request::get("https://api.example.com/customers").body(())?);

    let err = test_signer()
        .sign_parts(&mut req, &Credential::new("AK123", ""), b"")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialMissing);
    assert!(req.headers.is_empty());

    let err = RequestSigner::new(TEST_SERVICE, "")
        .sign_parts(&mut req, &test_credential(), b"")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(req.headers.is_empty());

    Ok(())
}

#[test]
fn test_userinfo_is_not_signed_as_host() -> anyhow::Result<()> {
    let mut req = into_parts(Request::get("https://user:pw@api.example.com/customers").body(())?);
    test_signer().sign_parts(&mut req, &test_credential(), b"")?;

    assert_eq!(req.headers[HOST], "api.example.com");
    assert_eq!(
        signature(&req),
        "938a0030028237107094f7382a6fdbf9bbb169279433aeddb9ad68af2e7e2ad9"
    );

    Ok(())
}

#[test]
fn test_forged_access_key_is_rejected() -> anyhow::Result<()> {
    let mut req = into_parts(Request::get("https://api.example.com/customers").body(())?);

    let err = test_signer()
        .sign_parts(&mut req, &Credential::new("AK, Signature=forged", "topsecret"), b"")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(req.headers.is_empty());

    Ok(())
}

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
use antsign_antavo::{CredentialScope, SigningKey, REQUEST_SUFFIX, SECRET_PREFIX};
use antsign_core::hash::hmac_sha256;
use antsign_core::ErrorKind;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_signature_is_deterministic() {
    let a = test_context(Method::GET, "/customers/123/activities/spend");
    let b = test_context(Method::GET, "/customers/123/activities/spend");

    assert_eq!(
        a.canonical_request().unwrap(),
        b.canonical_request().unwrap()
    );
    assert_eq!(a.string_to_sign().unwrap(), b.string_to_sign().unwrap());
    assert_eq!(a.signing_key().unwrap(), b.signing_key().unwrap());
    assert_eq!(a.sign().unwrap(), b.sign().unwrap());
}

#[test_case(Method::GET, "/customers/123/activities/spend", "application/x-www-form-urlencoded; charset=utf-8"; "get")]
#[test_case(Method::POST, "/events", "application/json"; "post")]
#[test_case(Method::DELETE, "/customers/%C3%BC", "text/plain"; "encoded path")]
fn test_headers_match_signed_names(method: Method, uri: &str, content_type: &str) {
    let ctx = test_context(method, uri).with_content_type(content_type);
    let creq = ctx.canonical_request().unwrap();

    let (headers, names) = parse_canonical_request(creq.as_str());
    assert_eq!(
        headers.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>(),
        names
    );
    assert_eq!(names, vec!["content-type", "date", "host"]);

    let signed = ctx.sign().unwrap();
    assert!(signed
        .authorization()
        .contains(&format!("SignedHeaders={},", names.join(";"))));
    assert_eq!(
        headers,
        vec![
            ("content-type".to_string(), signed.content_type().to_string()),
            ("date".to_string(), signed.date().to_string()),
            ("host".to_string(), signed.host().to_string()),
        ]
    );
}

#[test]
fn test_key_chain_is_order_sensitive() {
    let scope = CredentialScope::new(&TEST_TIME, TEST_REGION, TEST_SERVICE).unwrap();
    let expected = SigningKey::derive("topsecret", &scope).unwrap();

    let rounds = [scope.date(), scope.region(), scope.service(), REQUEST_SUFFIX];
    let derive = |order: [usize; 4]| {
        let mut key = format!("{SECRET_PREFIX}topsecret").into_bytes();
        for idx in order {
            key = hmac_sha256(&key, rounds[idx].as_bytes()).unwrap().to_vec();
        }
        key
    };

    assert_eq!(derive([0, 1, 2, 3]), expected.as_bytes());
    for i in 0..4 {
        for j in (i + 1)..4 {
            let mut order = [0, 1, 2, 3];
            order.swap(i, j);
            assert_ne!(
                derive(order),
                expected.as_bytes(),
                "swapping round {i} and {j} must change the key"
            );
        }
    }
}

#[test]
fn test_date_boundary() {
    let before = SigningContext::new(
        Method::GET,
        "/customers",
        TEST_HOST,
        "2023-12-31T23:59:59Z".parse().unwrap(),
    )
    .with_credential(test_credential())
    .with_scope(TEST_REGION, TEST_SERVICE);
    let after = SigningContext::new(
        Method::GET,
        "/customers",
        TEST_HOST,
        "2024-01-01T00:00:00Z".parse().unwrap(),
    )
    .with_credential(test_credential())
    .with_scope(TEST_REGION, TEST_SERVICE);

    assert_eq!(
        before.credential_scope().unwrap().to_string(),
        "20231231/rc/api/antavo_request"
    );
    assert_eq!(
        after.credential_scope().unwrap().to_string(),
        "20240101/rc/api/antavo_request"
    );

    let before = before.sign().unwrap();
    let after = after.sign().unwrap();
    assert_eq!(before.date(), "20231231T235959Z");
    assert_eq!(after.date(), "20240101T000000Z");
    assert!(before
        .authorization()
        .ends_with("Signature=e0b2228e692faf5fa2bb18bd883baea7e33ada5e3e8280364bfe73542e39c4ee"));
    assert!(after
        .authorization()
        .ends_with("Signature=0bbc41cb79529e35cc56cd9b15d88ee57013edba0fc71c03d4f2d252c067639d"));
}

#[test_case(|c: SigningContext| c.with_content_type("application/json"); "content type")]
#[test_case(|c: SigningContext| c.with_payload("x"); "payload")]
#[test_case(|c: SigningContext| c.with_scope("st2", TEST_SERVICE); "region")]
#[test_case(|c: SigningContext| c.with_scope(TEST_REGION, "apis"); "service")]
#[test_case(|c: SigningContext| c.with_credential(Credential::new("AK123", "topsecret2")); "secret")]
fn test_tamper_sensitivity(tamper: fn(SigningContext) -> SigningContext) {
    let ctx = test_context(Method::GET, "/customers/123/activities/spend");
    let expected = ctx.sign().unwrap();

    let tampered = tamper(ctx).sign().unwrap();
    assert_ne!(tampered.authorization(), expected.authorization());
}

#[test]
fn test_tamper_uri_host_and_time() {
    let expected = test_context(Method::GET, "/customers/123/activities/spend")
        .sign()
        .unwrap();
    let signature = |s: &antsign_antavo::SignedHeaders| {
        s.authorization()
            .rsplit("Signature=")
            .next()
            .unwrap()
            .to_string()
    };

    let uri = test_context(Method::GET, "/customers/124/activities/spend")
        .sign()
        .unwrap();
    let host = SigningContext::new(
        Method::GET,
        "/customers/123/activities/spend",
        "api.example.org",
        TEST_TIME.clone(),
    )
    .with_credential(test_credential())
    .with_scope(TEST_REGION, TEST_SERVICE)
    .sign()
    .unwrap();
    let time = SigningContext::new(
        Method::GET,
        "/customers/123/activities/spend",
        TEST_HOST,
        "20170307T120001Z".parse().unwrap(),
    )
    .with_credential(test_credential())
    .with_scope(TEST_REGION, TEST_SERVICE)
    .sign()
    .unwrap();

    for tampered in [uri, host, time] {
        assert_ne!(signature(&tampered), signature(&expected));
    }
}

#[test_case("", "topsecret"; "access key")]
#[test_case("AK123", ""; "secret key")]
fn test_missing_credential(access_key: &str, secret_key: &str) {
    let err = test_context(Method::GET, "/customers")
        .with_credential(Credential::new(access_key, secret_key))
        .sign()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialMissing);
}

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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Algorithm identifier leading the string to sign and the authorization header.
pub const ALGORITHM: &str = "ANTAVO-HMAC-SHA256";
/// Literal prepended to the secret key before the first HMAC round.
pub const SECRET_PREFIX: &str = "ANTAVO";
/// Terminator of the credential scope and message of the last HMAC round.
pub const REQUEST_SUFFIX: &str = "antavo_request";

/// Content type the Antavo API expects when the request doesn't carry one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
/// Service used when none is configured.
pub const DEFAULT_SERVICE: &str = "api";

// Env values used in antavo services.
/// Env holding the access key.
pub const ANTAVO_ACCESS_KEY: &str = "ANTAVO_ACCESS_KEY";
/// Env holding the api secret.
pub const ANTAVO_API_SECRET: &str = "ANTAVO_API_SECRET";
/// Env holding the region, for example `st2`.
pub const ANTAVO_REGION: &str = "ANTAVO_REGION";
/// Env holding the service.
pub const ANTAVO_SERVICE: &str = "ANTAVO_SERVICE";

/// AsciiSet for RFC 3986 query encoding.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Request;
use pretty_assertions::Comparison;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing form param: expected `{expected}`, found {found:?}")]
    MissingFormParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden form param present: `{expected}`")]
    ForbiddenFormParam { expected: String },
    #[error("required form param missing: `{expected}`")]
    RequiredFormParam { expected: String },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },

    #[error("body did not match. {comparison}\n == hint:\n{hint}.")]
    BodyDidNotMatch {
        // the comparison is rendered eagerly so that the failure stays `Eq`
        comparison: String,
        hint: String,
    },
    #[error("body was not valid UTF-8")]
    InvalidBodyFormat,
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed: {}", e);
    }
}

#[derive(Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
struct FormParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> FormParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.splitn(2, '=');
        FormParam {
            key: parsed.next().unwrap_or_default(),
            value: parsed.next(),
        }
    }
}

fn extract_params(body: &[u8]) -> Result<HashSet<&str>, ProtocolTestFailure> {
    let body = std::str::from_utf8(body).map_err(|_| ProtocolTestFailure::InvalidBodyFormat)?;
    Ok(body.split('&').filter(|param| !param.is_empty()).collect())
}

fn extract_keys(body: &[u8]) -> Result<HashSet<&str>, ProtocolTestFailure> {
    Ok(extract_params(body)?
        .iter()
        .map(|param| FormParam::parse(param).key)
        .collect())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaType {
    /// `application/x-www-form-urlencoded`, compared param by param, ignoring order
    UrlEncodedForm,
    /// Anything else is compared byte for byte
    Other,
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/x-www-form-urlencoded" => MediaType::UrlEncodedForm,
            _ => MediaType::Other,
        }
    }
}

pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = actual_body.as_ref();
    match media_type {
        MediaType::UrlEncodedForm => try_url_encoded_form_equivalent(actual_body, expected_body),
        MediaType::Other => {
            let actual =
                std::str::from_utf8(actual_body).map_err(|_| ProtocolTestFailure::InvalidBodyFormat)?;
            if actual == expected_body {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: format!("{}", Comparison::new(&expected_body, &actual)),
                    hint: "body bytes differ".to_string(),
                })
            }
        }
    }
}

fn try_url_encoded_form_equivalent(
    actual_body: &[u8],
    expected_body: &str,
) -> Result<(), ProtocolTestFailure> {
    let mut actual: Vec<FormParam> = extract_params(actual_body)?
        .into_iter()
        .map(FormParam::parse)
        .collect();
    let mut expected: Vec<FormParam> = expected_body
        .split('&')
        .filter(|param| !param.is_empty())
        .map(FormParam::parse)
        .collect();
    actual.sort();
    expected.sort();
    if actual == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: format!("{}", Comparison::new(&expected, &actual)),
            hint: "form params are compared without regard to order".to_string(),
        })
    }
}

pub fn validate_form_params(
    body: &[u8],
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(body)?;
    for param in expected_params {
        if !actual_params.contains(param) {
            let mut found: Vec<String> = actual_params.iter().map(|s| s.to_string()).collect();
            found.sort();
            return Err(ProtocolTestFailure::MissingFormParam {
                expected: param.to_string(),
                found,
            });
        }
    }
    Ok(())
}

pub fn forbid_form_params(body: &[u8], forbid_keys: &[&str]) -> Result<(), ProtocolTestFailure> {
    let actual_keys = extract_keys(body)?;
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenFormParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_form_params(body: &[u8], require_keys: &[&str]) -> Result<(), ProtocolTestFailure> {
    let actual_keys = extract_keys(body)?;
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredFormParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        // Protocol tests store header lists as comma-delimited
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_form_params, require_form_params, validate_body, validate_form_params,
        validate_headers, MediaType, ProtocolTestFailure,
    };
    use http::Request;

    const BODY: &[u8] = b"Action=AddTagsToResource&Version=2015-02-02&ResourceName=arn%3Aaws&Tags.Tag.1.Key=a&Empty=";

    #[test]
    fn test_validate_form_params() {
        validate_form_params(BODY, &["Action=AddTagsToResource"]).expect("action is present");
        validate_form_params(BODY, &["Tags.Tag.1.Key=a", "Empty="]).expect("both are present");
        validate_form_params(BODY, &[]).expect("no required params should pass");
        validate_form_params(BODY, &["Tags.Tag.1.Key"]).expect_err("value must match");
        validate_form_params(BODY, &["ResourceName=arn:aws"]).expect_err("values are encoded");
    }

    #[test]
    fn test_forbid_form_params() {
        forbid_form_params(BODY, &["Version"]).expect_err("version is a param");
        forbid_form_params(BODY, &["Tags.Tag.2.Key"]).expect("not included");
        forbid_form_params(BODY, &["Action=AddTagsToResource"])
            .expect("should be matching against keys");
    }

    #[test]
    fn test_require_form_params() {
        require_form_params(BODY, &["Empty"]).expect("empty values still count");
        require_form_params(BODY, &["Marker"]).expect_err("no marker");
    }

    #[test]
    fn test_form_body_ignores_order() {
        validate_body(
            BODY,
            "Empty=&Tags.Tag.1.Key=a&ResourceName=arn%3Aaws&Version=2015-02-02&Action=AddTagsToResource",
            MediaType::from("application/x-www-form-urlencoded"),
        )
        .expect("same params in a different order");
        let err = validate_body(BODY, "Action=AddTagsToResource", MediaType::UrlEncodedForm)
            .expect_err("params missing");
        assert!(matches!(err, ProtocolTestFailure::BodyDidNotMatch { .. }));
    }

    #[test]
    fn test_other_body_is_exact() {
        validate_body(b"abc", "abc", MediaType::Other).expect("identical");
        validate_body(b"abc", "abd", MediaType::from("text/plain")).expect_err("different");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-Foo", "foo")
            .header("X-Foo", "bar")
            .body(())
            .unwrap();
        validate_headers(
            &request,
            &[("Content-Type", "application/x-www-form-urlencoded")],
        )
        .expect("header is present");
        validate_headers(&request, &[("X-Foo", "foo, bar")]).expect("lists are comma joined");
        validate_headers(&request, &[("content-type", "text/plain")])
            .expect_err("wrong header value");
        assert_eq!(
            validate_headers(&request, &[("X-Missing", "1")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "X-Missing".to_string()
            })
        );
    }
}

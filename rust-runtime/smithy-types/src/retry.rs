/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This module defines types that describe what kind of failure an error represents.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// This is a connection level error such as a socket timeout, socket connect error,
    /// tls negotiation timeout etc...
    ///
    /// TransientErrors are not currently modeled. They are determined based on specific provider
    /// level errors & response status code.
    TransientError,

    /// An error where the server explicitly told the client to back off, such as a 429 or 503 HTTP error.
    ThrottlingError,

    /// Server error that isn't explicitly throttling but is considered by the client
    /// to be something that could be retried.
    ServerError,

    /// Doesn't count against any budgets. This could be something like a 401 challenge in Http.
    ClientError,
}

/// Error codes returned by AWS services when a caller is being throttled
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];

const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

const SERVER_ERRORS: &[&str] = &["InternalFailure", "InternalError", "ServiceUnavailable"];

impl ErrorKind {
    /// Classify an error code that a service returned without modeling it
    pub fn from_code(code: &str) -> Option<ErrorKind> {
        if THROTTLING_ERRORS.contains(&code) {
            Some(ErrorKind::ThrottlingError)
        } else if TRANSIENT_ERRORS.contains(&code) {
            Some(ErrorKind::TransientError)
        } else if SERVER_ERRORS.contains(&code) {
            Some(ErrorKind::ServerError)
        } else {
            None
        }
    }
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`.
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled at the error kind depends
    /// on an HTTP status code, return `None`.
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

#[cfg(test)]
mod test {
    use super::ErrorKind;

    #[test]
    fn classify_codes() {
        assert_eq!(
            ErrorKind::from_code("Throttling"),
            Some(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            ErrorKind::from_code("RequestLimitExceeded"),
            Some(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            ErrorKind::from_code("ServiceUnavailable"),
            Some(ErrorKind::ServerError)
        );
        assert_eq!(
            ErrorKind::from_code("RequestTimeout"),
            Some(ErrorKind::TransientError)
        );
        assert_eq!(ErrorKind::from_code("CacheClusterNotFound"), None);
    }
}

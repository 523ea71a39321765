/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request middleware applied to an [`operation::Request`] after it has been constructed

use crate::operation;
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// A synchronous stage that rewrites an [`operation::Request`].
///
/// Stages read what they need from the property bag that `make_operation` filled in and
/// modify the HTTP request accordingly. Endpoint resolution is one such stage.
///
/// ```rust
/// use smithy_http::middleware::MapRequest;
/// use smithy_http::operation;
/// use std::convert::Infallible;
/// use http::header::{HeaderValue, USER_AGENT};
///
/// struct DefaultUserAgent(HeaderValue);
///
/// impl MapRequest for DefaultUserAgent {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
///         request.augment(|mut request, _properties| {
///             if !request.headers().contains_key(USER_AGENT) {
///                 request.headers_mut().insert(USER_AGENT, self.0.clone());
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// Use [`std::convert::Infallible`] for stages that can't fail.
    type Error: Into<BoxError>;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::MapRequest;
    use crate::operation::Request;

    struct RejectPoisoned;

    struct Poison;

    #[derive(Debug)]
    struct Poisoned;

    impl std::fmt::Display for Poisoned {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "request carries a poison marker")
        }
    }

    impl std::error::Error for Poisoned {}

    impl MapRequest for RejectPoisoned {
        type Error = Poisoned;

        fn apply(&self, request: Request) -> Result<Request, Self::Error> {
            request.augment(|request, properties| {
                if properties.get::<Poison>().is_some() {
                    Err(Poisoned)
                } else {
                    Ok(request)
                }
            })
        }
    }

    #[test]
    fn stage_errors_propagate() {
        let ok = Request::new(http::Request::new(SdkBody::from("Action=DescribeEvents")));
        assert!(RejectPoisoned.apply(ok).is_ok());

        let mut failing = Request::new(http::Request::new(SdkBody::empty()));
        failing.properties_mut().insert(Poison);
        assert!(matches!(RejectPoisoned.apply(failing), Err(Poisoned)));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// `Output` is unconstrained so that the same trait can describe request/response operations as
/// well as streaming ones. The split between `parse_unloaded` and `parse_loaded` keeps parsing
/// pure and sync: reading the body to the end is delegated to the caller.
pub trait ParseHttpResponse<B> {
    /// Output type of the HttpResponse.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<DescribeCacheClustersOutput, DescribeCacheClustersError>`
    type Output;

    /// Parse an HTTP request without reading the body. If the body must be provided to proceed,
    /// return `None`
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP request from a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience Trait for non-streaming APIs
///
/// `ParseStrictResponse` enables operations that _never_ need to stream the body incrementally to
/// have cleaner implementations. There is a blanket implementation
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}

#[cfg(test)]
mod test {
    use crate::response::{ParseHttpResponse, ParseStrictResponse};
    use bytes::Bytes;

    struct StatusOnly;

    impl ParseStrictResponse for StatusOnly {
        type Output = u16;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            response.status().as_u16()
        }
    }

    #[test]
    fn strict_responses_are_always_loaded() {
        let mut unloaded = http::Response::builder().status(503).body(()).unwrap();
        assert_eq!(
            ParseHttpResponse::<()>::parse_unloaded(&StatusOnly, &mut unloaded),
            None
        );
        let loaded = http::Response::builder()
            .status(503)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(
            ParseHttpResponse::<()>::parse_loaded(&StatusOnly, &loaded),
            503
        );
    }
}

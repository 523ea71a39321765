/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, PathAndQuery, Uri};
use std::borrow::Cow;
use std::str::FromStr;

/// The scheme and authority (and optionally a base path) that requests are sent to
///
/// Operations build requests against a relative URI like `/`; applying an endpoint fills in the
/// rest:
/// ```rust
/// # use smithy_http::endpoint::Endpoint;
/// use http::Uri;
/// let endpoint = Endpoint::new(Uri::from_static("https://elasticache.us-west-2.amazonaws.com"));
/// let mut uri = Uri::from_static("/");
/// endpoint.set_endpoint(&mut uri).expect("valid endpoint");
/// assert_eq!(uri, Uri::from_static("https://elasticache.us-west-2.amazonaws.com/"));
/// ```
#[derive(Debug, Clone)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    pub fn new(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Rewrites `uri` to target this endpoint, keeping its path and query
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), http::Error> {
        let authority = self
            .uri
            .authority()
            .map(Authority::as_str)
            .unwrap_or_default();
        let authority = Authority::from_str(authority)?;
        let scheme = self.uri.scheme().cloned().unwrap_or(http::uri::Scheme::HTTPS);
        let path_and_query = PathAndQuery::from_str(&Self::merge_paths(&self.uri, uri))?;
        *uri = Uri::builder()
            .authority(authority)
            .scheme(scheme)
            .path_and_query(path_and_query)
            .build()?;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        let endpoint_path = endpoint.path().trim_end_matches('/');
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let uri_path_and_query = uri_path_and_query.trim_start_matches('/');
            Cow::Owned(format!("{}/{}", endpoint_path, uri_path_and_query))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::Endpoint;
    use http::Uri;

    #[test]
    fn endpoint_keeps_path_and_query() {
        let ep = Endpoint::new(Uri::from_static("http://localhost:8000"));
        let mut uri = Uri::from_static("/?Action=DescribeEvents");
        ep.set_endpoint(&mut uri).expect("valid");
        assert_eq!(
            uri,
            Uri::from_static("http://localhost:8000/?Action=DescribeEvents")
        );
    }

    #[test]
    fn endpoint_with_base_path() {
        let ep = Endpoint::new(Uri::from_static("https://proxy.internal/elasticache/"));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri).expect("valid");
        assert_eq!(
            uri,
            Uri::from_static("https://proxy.internal/elasticache/")
        );
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
use aws_types::region::Region;
use smithy_http::endpoint::Endpoint;

/// Endpoint metadata for a single region or for a whole partition
#[derive(Debug)]
pub struct Definition {
    /// URI for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction
    pub uri_template: &'static str,

    /// Protocol to use for this endpoint
    pub protocol: Protocol,

    /// Credential scope to set for requests to this endpoint
    pub credential_scope: CredentialScope,

    /// Signature versions supported by this endpoint.
    ///
    /// Currently unused since the SDK only supports SigV4
    pub signature_versions: SignatureVersion,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SignatureVersion {
    V4,
}

impl ResolveAwsEndpoint for Definition {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = self.uri_template.replace("{region}", region.as_ref());
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        let endpoint = Endpoint::new(uri.parse()?);
        let credential_scope = CredentialScope {
            service: self.credential_scope.service.clone(),
            region: self
                .credential_scope
                .region
                .clone()
                .or_else(|| Some(region.clone().into())),
        };
        Ok(AwsEndpoint::new(endpoint, credential_scope))
    }
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::{Definition, Protocol, SignatureVersion};
    use crate::{CredentialScope, ResolveAwsEndpoint};
    use aws_types::region::{Region, SigningRegion};

    #[test]
    fn template_is_filled_with_region() {
        let definition = Definition {
            uri_template: "elasticache.{region}.amazonaws.com.cn",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
            signature_versions: SignatureVersion::V4,
        };
        let endpoint = definition
            .resolve_endpoint(&Region::from_static("cn-north-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri().to_string(),
            "https://elasticache.cn-north-1.amazonaws.com.cn/"
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("cn-north-1"))
        );
        assert_eq!(endpoint.credential_scope().service(), None);
    }

    #[test]
    fn invalid_template_fails() {
        let definition = Definition {
            uri_template: "not a host",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
            signature_versions: SignatureVersion::V4,
        };
        assert!(definition
            .resolve_endpoint(&Region::from_static("us-east-1"))
            .is_err());
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod endpoint;

use crate::{AwsEndpoint, BoxError, ResolveAwsEndpoint};
use aws_types::region::Region;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Resolves endpoints from an ordered set of partitions
///
/// The first partition whose region regex matches the region (or that explicitly lists the
/// region) wins. Regions matching no partition are resolved with `base`.
#[derive(Debug)]
pub struct PartitionResolver {
    base: Partition,
    rest: Vec<Partition>,
}

impl PartitionResolver {
    pub fn new(base: Partition, rest: Vec<Partition>) -> Self {
        Self { base, rest }
    }

    fn partition_for(&self, region: &Region) -> &Partition {
        let candidates = std::iter::once(&self.base).chain(self.rest.iter());
        candidates
            .clone()
            .find(|partition| partition.endpoints.contains_key(region))
            .or_else(|| candidates.clone().find(|partition| partition.can_resolve(region)))
            .unwrap_or(&self.base)
    }
}

impl ResolveAwsEndpoint for PartitionResolver {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let partition = self.partition_for(region);
        tracing::trace!(partition = partition.id, region = %region, "selected partition");
        partition.resolve_endpoint(region)
    }
}

pub struct Partition {
    id: &'static str,
    region_regex: Regex,
    partition_endpoint: Option<Region>,
    regionalized: Regionalized,
    default_endpoint: endpoint::Definition,
    endpoints: HashMap<Region, endpoint::Definition>,
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("id", &self.id)
            .field("region_regex", &self.region_regex.as_str())
            .field("partition_endpoint", &self.partition_endpoint)
            .field("regionalized", &self.regionalized)
            .field("endpoints", &self.endpoints.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Regionalized {
    Regionalized,
    NotRegionalized,
}

impl Default for Regionalized {
    fn default() -> Self {
        Regionalized::Regionalized
    }
}

#[derive(Default)]
pub struct Builder {
    id: Option<&'static str>,
    region_regex: Option<&'static str>,
    partition_endpoint: Option<Region>,
    regionalized: Option<Regionalized>,
    default_endpoint: Option<endpoint::Definition>,
    endpoints: HashMap<Region, endpoint::Definition>,
}

impl Builder {
    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn region_regex(mut self, regex: &'static str) -> Self {
        self.region_regex = Some(regex);
        self
    }

    pub fn partition_endpoint(mut self, region: &'static str) -> Self {
        self.partition_endpoint = Some(Region::from_static(region));
        self
    }

    pub fn regionalized(mut self, regionalized: Regionalized) -> Self {
        self.regionalized = Some(regionalized);
        self
    }

    pub fn default_endpoint(mut self, endpoint: endpoint::Definition) -> Self {
        self.default_endpoint = Some(endpoint);
        self
    }

    pub fn endpoint(mut self, region: &'static str, endpoint: endpoint::Definition) -> Self {
        self.endpoints.insert(Region::from_static(region), endpoint);
        self
    }

    /// Returns `None` if a required field is missing or the region regex is invalid
    pub fn build(self) -> Option<Partition> {
        let region_regex = Regex::new(self.region_regex?).ok()?;
        Some(Partition {
            id: self.id?,
            region_regex,
            partition_endpoint: self.partition_endpoint,
            regionalized: self.regionalized.unwrap_or_default(),
            default_endpoint: self.default_endpoint?,
            endpoints: self.endpoints,
        })
    }
}

impl Partition {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn id(&self) -> &str {
        self.id
    }

    fn can_resolve(&self, region: &Region) -> bool {
        self.region_regex.is_match(region.as_ref())
    }
}

impl ResolveAwsEndpoint for Partition {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        if let Some(endpoint) = self.endpoints.get(region) {
            return endpoint.resolve_endpoint(region);
        }
        let resolved_region = match self.regionalized {
            Regionalized::NotRegionalized => self.partition_endpoint.as_ref(),
            Regionalized::Regionalized => None,
        };
        let endpoint_for_region = resolved_region
            .and_then(|region| self.endpoints.get(region))
            .unwrap_or(&self.default_endpoint);
        endpoint_for_region.resolve_endpoint(resolved_region.unwrap_or(region))
    }
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::{Definition, Protocol, SignatureVersion};
    use crate::partition::{Partition, PartitionResolver, Regionalized};
    use crate::{CredentialScope, ResolveAwsEndpoint};
    use aws_types::region::{Region, SigningRegion};

    fn definition(uri_template: &'static str) -> Definition {
        Definition {
            uri_template,
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
            signature_versions: SignatureVersion::V4,
        }
    }

    fn resolver() -> PartitionResolver {
        let aws = Partition::builder()
            .id("aws")
            .region_regex(r#"^(us|eu|ap|sa|ca|me|af)\-\w+\-\d+$"#)
            .default_endpoint(definition("service.{region}.amazonaws.com"))
            .endpoint(
                "fips",
                Definition {
                    uri_template: "service-fips.us-east-1.amazonaws.com",
                    protocol: Protocol::Https,
                    credential_scope: CredentialScope::builder()
                        .region(SigningRegion::from_static("us-east-1"))
                        .build(),
                    signature_versions: SignatureVersion::V4,
                },
            )
            .build()
            .expect("valid partition");
        let china = Partition::builder()
            .id("aws-cn")
            .region_regex(r#"^cn\-\w+\-\d+$"#)
            .default_endpoint(definition("service.{region}.amazonaws.com.cn"))
            .build()
            .expect("valid partition");
        let global = Partition::builder()
            .id("aws-iso")
            .region_regex(r#"^us\-iso\-\w+\-\d+$"#)
            .regionalized(Regionalized::NotRegionalized)
            .partition_endpoint("us-iso-east-1")
            .default_endpoint(definition("service.{region}.c2s.ic.gov"))
            .build()
            .expect("valid partition");
        PartitionResolver::new(aws, vec![china, global])
    }

    fn uri_for(region: &'static str) -> String {
        resolver()
            .resolve_endpoint(&Region::from_static(region))
            .expect("resolves")
            .endpoint()
            .uri()
            .to_string()
    }

    #[test]
    fn regions_pick_their_partition() {
        assert_eq!(uri_for("us-west-2"), "https://service.us-west-2.amazonaws.com/");
        assert_eq!(uri_for("cn-northwest-1"), "https://service.cn-northwest-1.amazonaws.com.cn/");
        // unknown regions use the base partition
        assert_eq!(uri_for("mars-east-1"), "https://service.mars-east-1.amazonaws.com/");
    }

    #[test]
    fn explicit_endpoints_override_the_template() {
        let endpoint = resolver()
            .resolve_endpoint(&Region::from_static("fips"))
            .expect("resolves");
        assert_eq!(
            endpoint.endpoint().uri().to_string(),
            "https://service-fips.us-east-1.amazonaws.com/"
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("us-east-1"))
        );
    }

    #[test]
    fn non_regionalized_partitions_use_the_partition_endpoint() {
        let endpoint = resolver()
            .resolve_endpoint(&Region::from_static("us-iso-west-1"))
            .expect("resolves");
        assert_eq!(
            endpoint.endpoint().uri().to_string(),
            "https://service.us-iso-east-1.c2s.ic.gov/"
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("us-iso-east-1"))
        );
    }

    #[test]
    fn incomplete_partitions_are_rejected() {
        assert!(Partition::builder().id("aws").build().is_none());
        assert!(Partition::builder()
            .id("aws")
            .region_regex("(")
            .default_endpoint(definition("x"))
            .build()
            .is_none());
    }
}

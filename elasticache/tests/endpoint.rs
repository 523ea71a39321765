/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{AwsEndpointStage, AwsEndpointStageError};
use aws_types::region::SigningRegion;
use aws_types::SigningService;
use elasticache::input::ListTagsForResourceInput;
use elasticache::{Config, Endpoint, Region};
use http::Uri;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;

fn request_for(config: &Config) -> Request {
    ListTagsForResourceInput::builder()
        .resource_name("arn:aws:elasticache:us-east-1:0123456789:cluster:my-cluster")
        .build()
        .make_operation(config)
        .expect("valid operation")
        .into_request_response()
        .0
}

#[test]
fn regional_endpoint_is_applied() {
    let config = Config::builder().region(Region::new("us-east-1")).build();
    let request = AwsEndpointStage
        .apply(request_for(&config))
        .expect("endpoint resolves");
    assert_eq!(
        request.http().uri(),
        &Uri::from_static("https://elasticache.us-east-1.amazonaws.com/")
    );
    let properties = request.properties();
    assert_eq!(
        properties.get::<SigningRegion>(),
        Some(&SigningRegion::from_static("us-east-1"))
    );
    assert_eq!(
        properties.get::<SigningService>(),
        Some(&SigningService::from_static("elasticache"))
    );
}

#[test]
fn china_partition() {
    let config = Config::builder().region(Region::new("cn-north-1")).build();
    let request = AwsEndpointStage
        .apply(request_for(&config))
        .expect("endpoint resolves");
    assert_eq!(
        request.http().uri(),
        &Uri::from_static("https://elasticache.cn-north-1.amazonaws.com.cn/")
    );
}

#[test]
fn fips_endpoint_signs_for_real_region() {
    let config = Config::builder().region(Region::new("fips")).build();
    let request = AwsEndpointStage
        .apply(request_for(&config))
        .expect("endpoint resolves");
    assert_eq!(
        request.http().uri(),
        &Uri::from_static("https://elasticache-fips.us-west-1.amazonaws.com/")
    );
    assert_eq!(
        request.properties().get::<SigningRegion>(),
        Some(&SigningRegion::from_static("us-west-1"))
    );
}

#[test]
fn custom_endpoint_overrides_partitions() {
    let config = Config::builder()
        .region(Region::new("us-east-1"))
        .endpoint_resolver(Endpoint::new(Uri::from_static(
            "http://localhost:4566",
        )))
        .build();
    let request = AwsEndpointStage
        .apply(request_for(&config))
        .expect("endpoint resolves");
    assert_eq!(
        request.http().uri(),
        &Uri::from_static("http://localhost:4566/")
    );
}

#[test]
fn missing_region_is_an_error() {
    let config = Config::builder().build();
    assert!(config.region().is_none());
    let err = AwsEndpointStage
        .apply(request_for(&config))
        .expect_err("a region is required to resolve an endpoint");
    assert!(matches!(err, AwsEndpointStageError::NoRegion));
}

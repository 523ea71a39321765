/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use elasticache::input::{CreateCacheClusterInput, RemoveTagsFromResourceInput};
use elasticache::model::{
    AzMode, RecurringCharge, ReservedCacheNodesOffering, SlaMet, SlotMigration, SourceType, Tag,
};
use elasticache::operation::DescribeReservedCacheNodesOfferings;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use smithy_http::response::ParseStrictResponse;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn list_setters_append() {
    let input = RemoveTagsFromResourceInput::builder()
        .resource_name("my-cluster")
        .tag_keys("team")
        .tag_keys("env")
        .build();
    assert_eq!(
        input.tag_keys(),
        Some(&["team".to_string(), "env".to_string()][..])
    );
}

#[test]
fn set_none_clears_a_list() {
    let input = RemoveTagsFromResourceInput::builder()
        .tag_keys("team")
        .set_tag_keys(None)
        .build();
    assert_eq!(input.tag_keys(), None);

    let replaced = RemoveTagsFromResourceInput::builder()
        .tag_keys("team")
        .set_tag_keys(Some(vec!["env".to_string()]))
        .tag_keys("owner")
        .build();
    assert_eq!(
        replaced.tag_keys(),
        Some(&["env".to_string(), "owner".to_string()][..])
    );
}

#[test]
fn unset_builder_builds_empty_structure() {
    let input = CreateCacheClusterInput::builder().build();
    assert_eq!(input.cache_cluster_id(), None);
    assert_eq!(input.num_cache_nodes(), None);
    assert_eq!(format!("{:?}", input), "CreateCacheClusterInput");
}

#[test]
fn debug_skips_unset_members() {
    let tag = Tag::builder().key("team").build();
    assert_eq!(format!("{:?}", tag), "Tag { key: \"team\" }");
}

#[test]
fn auth_token_is_redacted() {
    let builder = CreateCacheClusterInput::builder()
        .cache_cluster_id("my-redis")
        .engine("redis")
        .auth_token("correct-horse-battery-staple");
    let builder_debug = format!("{:?}", builder);
    assert!(builder_debug.contains("*** Sensitive Data Redacted ***"));
    assert!(!builder_debug.contains("correct-horse-battery-staple"));

    let input = builder.build();
    let input_debug = format!("{:?}", input);
    assert!(input_debug.contains("cache_cluster_id: \"my-redis\""));
    assert!(input_debug.contains("auth_token: \"*** Sensitive Data Redacted ***\""));
    assert!(!input_debug.contains("correct-horse-battery-staple"));
    // the value itself is still available to the caller
    assert_eq!(input.auth_token(), Some("correct-horse-battery-staple"));
}

#[test]
fn enums_keep_unknown_values() {
    assert_eq!(AzMode::from("cross-az"), AzMode::CrossAz);
    assert_eq!(AzMode::CrossAz.as_str(), "cross-az");
    assert_eq!(AzMode::values(), &["single-az", "cross-az"]);
    let future = SourceType::from("some-new-source");
    assert_eq!(future, SourceType::Unknown("some-new-source".to_string()));
    assert_eq!(future.as_str(), "some-new-source");
    assert_eq!("n/a".parse::<SlaMet>(), Ok(SlaMet::Na));
}

#[test]
fn structural_equality() {
    let a = Tag::builder().key("team").value("cache").build();
    let b = Tag::builder().value("cache").key("team").build();
    assert_eq!(a, b);
    assert_ne!(a, Tag::builder().key("team").build());
}

#[test]
fn plain_and_fluent_setters_agree() {
    let fluent = Tag::builder().key("team").value("cache").build();
    let plain = Tag::builder()
        .set_key(Some("team".to_string()))
        .set_value(Some("cache".to_string()))
        .build();
    assert_eq!(fluent, plain);
}

#[test]
fn stored_lists_are_independent_of_the_caller() {
    let mut keys = vec!["team".to_string()];
    let input = RemoveTagsFromResourceInput::builder()
        .set_tag_keys(Some(keys.clone()))
        .build();
    keys.push("env".to_string());
    assert_eq!(input.tag_keys(), Some(&["team".to_string()][..]));
}

#[test]
fn equal_enums_hash_equally() {
    let modes: HashSet<AzMode> = vec![
        AzMode::CrossAz,
        AzMode::from("cross-az"),
        AzMode::Unknown("x".to_string()),
        AzMode::from("x"),
    ]
    .into_iter()
    .collect();
    assert_eq!(modes.len(), 2);
}

#[test]
fn nan_prices_are_equal_to_themselves() {
    let body = r#"<DescribeReservedCacheNodesOfferingsResponse xmlns="http://elasticache.amazonaws.com/doc/2015-02-02/">
  <DescribeReservedCacheNodesOfferingsResult>
    <ReservedCacheNodesOfferings>
      <ReservedCacheNodesOffering>
        <ReservedCacheNodesOfferingId>438012d3-4052-4cc7-b2e3-8d3372e0e706</ReservedCacheNodesOfferingId>
        <CacheNodeType>cache.r5.large</CacheNodeType>
        <Duration>31536000</Duration>
        <FixedPrice>NaN</FixedPrice>
        <UsagePrice>0.0</UsagePrice>
        <RecurringCharges>
          <RecurringCharge>
            <RecurringChargeAmount>NaN</RecurringChargeAmount>
            <RecurringChargeFrequency>Hourly</RecurringChargeFrequency>
          </RecurringCharge>
        </RecurringCharges>
      </ReservedCacheNodesOffering>
    </ReservedCacheNodesOfferings>
  </DescribeReservedCacheNodesOfferingsResult>
</DescribeReservedCacheNodesOfferingsResponse>"#;
    let response = http::Response::builder()
        .status(200)
        .body(bytes::Bytes::from_static(body.as_bytes()))
        .unwrap();
    let output = DescribeReservedCacheNodesOfferings::new()
        .parse(&response)
        .expect("valid response");
    let offering = &output.reserved_cache_nodes_offerings().unwrap()[0];
    assert!(offering.fixed_price().unwrap().is_nan());
    assert_eq!(offering, offering);
    assert_eq!(&output, &output);
    assert_eq!(offering.clone(), *offering);
    assert_eq!(hash_of(&offering.clone()), hash_of(offering));
    assert_eq!(hash_of(&output.clone()), hash_of(&output));
}

#[test]
fn float_members_compare_by_value() {
    let charge = |amount: f64| RecurringCharge::builder().recurring_charge_amount(amount).build();
    assert_eq!(charge(f64::NAN), charge(-f64::NAN));
    assert_eq!(hash_of(&charge(f64::NAN)), hash_of(&charge(-f64::NAN)));
    assert_eq!(charge(0.012), charge(0.012));
    assert_ne!(charge(0.012), charge(0.013));
    assert_ne!(charge(f64::NAN), charge(0.0));
    assert_ne!(
        ReservedCacheNodesOffering::builder().fixed_price(1.0).build(),
        ReservedCacheNodesOffering::builder().build()
    );
    let set: HashSet<SlotMigration> = vec![
        SlotMigration::builder().progress_percentage(50.0).build(),
        SlotMigration::builder().progress_percentage(50.0).build(),
        SlotMigration::builder().build(),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}

proptest! {
    #[test]
    fn equal_offerings_hash_equally(price in proptest::num::f64::ANY, id in "[a-z0-9-]{0,12}") {
        let offering = ReservedCacheNodesOffering::builder()
            .reserved_cache_nodes_offering_id(id)
            .fixed_price(price)
            .build();
        prop_assert_eq!(&offering.clone(), &offering);
        prop_assert_eq!(hash_of(&offering.clone()), hash_of(&offering));
    }

    #[test]
    fn clones_compare_equal(key in ".*", value in proptest::option::of(".*")) {
        let tag = Tag::builder().key(key).set_value(value).build();
        prop_assert_eq!(tag.clone(), tag);
    }

    #[test]
    fn unrecognized_enum_values_are_preserved(value in "[a-z]{1,12}-future") {
        let mode = AzMode::from(value.as_str());
        prop_assert_eq!(mode.as_str(), value.as_str());
        prop_assert!(matches!(mode, AzMode::Unknown(_)));
    }
}

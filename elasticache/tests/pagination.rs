/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use elasticache::input::{DescribeEngineDefaultParametersInput, DescribeEventsInput};
use elasticache::model::{EngineDefaults, SourceType};
use elasticache::output::{DescribeEngineDefaultParametersOutput, DescribeEventsOutput};

fn first_page() -> DescribeEventsInput {
    DescribeEventsInput::builder()
        .source_type(SourceType::CacheCluster)
        .max_records(20)
        .build()
}

#[test]
fn marker_produces_next_request() {
    let input = first_page();
    let output = DescribeEventsOutput::builder().marker("page-2").build();
    let next = input.next_page(&output).expect("more pages");
    assert_eq!(next.marker(), Some("page-2"));
    assert_eq!(next.source_type(), Some(&SourceType::CacheCluster));
    assert_eq!(next.max_records(), Some(20));
    // the original request is left untouched
    assert_eq!(input.marker(), None);
}

#[test]
fn missing_or_empty_marker_ends_pagination() {
    let input = first_page();
    assert!(input
        .next_page(&DescribeEventsOutput::builder().build())
        .is_none());
    assert!(input
        .next_page(&DescribeEventsOutput::builder().marker("").build())
        .is_none());
}

#[test]
fn pages_can_be_walked() {
    let pages = vec![
        DescribeEventsOutput::builder().marker("b").build(),
        DescribeEventsOutput::builder().marker("c").build(),
        DescribeEventsOutput::builder().build(),
    ];
    let mut request = Some(first_page());
    let mut markers = vec![];
    for page in &pages {
        let current = request.take().expect("a request for every page");
        markers.push(current.marker().map(str::to_owned));
        request = current.next_page(page);
    }
    assert!(request.is_none());
    assert_eq!(
        markers,
        vec![None, Some("b".to_string()), Some("c".to_string())]
    );
}

#[test]
fn engine_defaults_marker_is_nested() {
    let input = DescribeEngineDefaultParametersInput::builder()
        .cache_parameter_group_family("redis6.x")
        .build();
    let output = DescribeEngineDefaultParametersOutput::builder()
        .engine_defaults(
            EngineDefaults::builder()
                .cache_parameter_group_family("redis6.x")
                .marker("next-defaults")
                .build(),
        )
        .build();
    let next = input.next_page(&output).expect("more pages");
    assert_eq!(next.marker(), Some("next-defaults"));
    assert_eq!(next.cache_parameter_group_family(), Some("redis6.x"));
    assert!(input
        .next_page(&DescribeEngineDefaultParametersOutput::builder().build())
        .is_none());
}

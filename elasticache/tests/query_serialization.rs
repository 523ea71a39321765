/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use elasticache::input::{
    AddTagsToResourceInput, CreateReplicationGroupInput, DescribeEventsInput,
    DescribeServiceUpdatesInput, IncreaseNodeGroupsInGlobalReplicationGroupInput,
    ModifyCacheClusterInput, RemoveTagsFromResourceInput,
};
use elasticache::model::{
    AzMode, ConfigureShard, NodeGroupConfiguration, RegionalConfiguration,
    ReshardingConfiguration, ServiceUpdateStatus, SourceType, Tag,
};
use elasticache::{Config, Instant, Region};
use protocol_test_helpers::{
    assert_ok, forbid_form_params, require_form_params, validate_body, validate_form_params,
    validate_headers, MediaType,
};

fn config() -> Config {
    Config::builder().region(Region::new("us-west-2")).build()
}

fn body_of<H>(op: &smithy_http::operation::Operation<H, ()>) -> Vec<u8> {
    op.request()
        .http()
        .body()
        .bytes()
        .expect("query bodies are buffered")
        .to_vec()
}

#[test]
fn add_tags_to_resource_request() {
    let input = AddTagsToResourceInput::builder()
        .resource_name("arn:aws:elasticache:us-west-2:0123456789:cluster:my-mem-cluster")
        .tags(Tag::builder().key("team").value("cache").build())
        .tags(Tag::builder().key("env").build())
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/");
    let body = body_of(&op);
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-www-form-urlencoded"),
            ("content-length", &body.len().to_string()),
        ],
    ));
    assert_ok(validate_body(
        &body,
        "Action=AddTagsToResource\
         &Version=2015-02-02\
         &ResourceName=arn%3Aaws%3Aelasticache%3Aus-west-2%3A0123456789%3Acluster%3Amy-mem-cluster\
         &Tags.Tag.1.Key=team\
         &Tags.Tag.1.Value=cache\
         &Tags.Tag.2.Key=env",
        MediaType::from("application/x-www-form-urlencoded"),
    ));
    assert_eq!(op.metadata().map(|m| m.name()), Some("AddTagsToResource"));
    assert_eq!(op.metadata().map(|m| m.service()), Some("elasticache"));
}

#[test]
fn unset_members_are_not_serialized() {
    let input = ModifyCacheClusterInput::builder()
        .cache_cluster_id("my-cluster")
        .apply_immediately(true)
        .num_cache_nodes(3)
        .az_mode(AzMode::CrossAz)
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    let body = body_of(&op);
    assert_ok(validate_body(
        &body,
        "Action=ModifyCacheCluster&Version=2015-02-02&CacheClusterId=my-cluster\
         &NumCacheNodes=3&AZMode=cross-az&ApplyImmediately=true",
        MediaType::UrlEncodedForm,
    ));
    assert_ok(forbid_form_params(
        &body,
        &["AuthToken", "SecurityGroupIds", "CacheNodeIdsToRemove"],
    ));
}

#[test]
fn empty_lists_are_sent() {
    let input = RemoveTagsFromResourceInput::builder()
        .resource_name("my-cluster")
        .set_tag_keys(Some(vec![]))
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    assert_ok(validate_body(
        body_of(&op),
        "Action=RemoveTagsFromResource&Version=2015-02-02&ResourceName=my-cluster&TagKeys=",
        MediaType::UrlEncodedForm,
    ));
}

#[test]
fn lists_of_structures_and_renamed_members() {
    let input = CreateReplicationGroupInput::builder()
        .replication_group_id("rg")
        .replication_group_description("sharded")
        .automatic_failover_enabled(true)
        .multi_az_enabled(false)
        .num_node_groups(2)
        .preferred_cache_cluster_azs("us-west-2a")
        .preferred_cache_cluster_azs("us-west-2b")
        .node_group_configuration(
            NodeGroupConfiguration::builder()
                .slots("0-8191")
                .replica_count(1)
                .primary_availability_zone("us-west-2a")
                .replica_availability_zones("us-west-2b")
                .build(),
        )
        .security_group_ids("sg-1")
        .auth_token("hunter2")
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    let body = body_of(&op);
    assert_ok(validate_form_params(
        &body,
        &[
            "Action=CreateReplicationGroup",
            "AutomaticFailoverEnabled=true",
            "MultiAZEnabled=false",
            "NumNodeGroups=2",
            "PreferredCacheClusterAZs.AvailabilityZone.1=us-west-2a",
            "PreferredCacheClusterAZs.AvailabilityZone.2=us-west-2b",
            "NodeGroupConfiguration.NodeGroupConfiguration.1.Slots=0-8191",
            "NodeGroupConfiguration.NodeGroupConfiguration.1.ReplicaCount=1",
            "NodeGroupConfiguration.NodeGroupConfiguration.1.PrimaryAvailabilityZone=us-west-2a",
            "NodeGroupConfiguration.NodeGroupConfiguration.1.ReplicaAvailabilityZones.AvailabilityZone.1=us-west-2b",
            "SecurityGroupIds.SecurityGroupId.1=sg-1",
            "AuthToken=hunter2",
        ],
    ));
}

#[test]
fn nested_lists_inside_lists() {
    let input = IncreaseNodeGroupsInGlobalReplicationGroupInput::builder()
        .global_replication_group_id("ldgnf-global")
        .node_group_count(4)
        .regional_configurations(
            RegionalConfiguration::builder()
                .replication_group_id("rg-east")
                .replication_group_region("us-east-1")
                .resharding_configuration(
                    ReshardingConfiguration::builder()
                        .node_group_id("0001")
                        .preferred_availability_zones("us-east-1a")
                        .build(),
                )
                .build(),
        )
        .apply_immediately(true)
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    assert_ok(validate_body(
        body_of(&op),
        "Action=IncreaseNodeGroupsInGlobalReplicationGroup&Version=2015-02-02\
         &GlobalReplicationGroupId=ldgnf-global&NodeGroupCount=4\
         &RegionalConfigurations.RegionalConfiguration.1.ReplicationGroupId=rg-east\
         &RegionalConfigurations.RegionalConfiguration.1.ReplicationGroupRegion=us-east-1\
         &RegionalConfigurations.RegionalConfiguration.1.ReshardingConfiguration.ReshardingConfiguration.1.NodeGroupId=0001\
         &RegionalConfigurations.RegionalConfiguration.1.ReshardingConfiguration.ReshardingConfiguration.1.PreferredAvailabilityZones.AvailabilityZone.1=us-east-1a\
         &ApplyImmediately=true",
        MediaType::UrlEncodedForm,
    ));
}

#[test]
fn timestamps_and_enums() {
    let input = DescribeEventsInput::builder()
        .source_type(SourceType::ReplicationGroup)
        .start_time(Instant::from_epoch_seconds(1576540098))
        .duration(60)
        .max_records(20)
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    assert_ok(validate_body(
        body_of(&op),
        "Action=DescribeEvents&Version=2015-02-02&SourceType=replication-group\
         &StartTime=2019-12-16T23%3A48%3A18Z&Duration=60&MaxRecords=20",
        MediaType::UrlEncodedForm,
    ));
}

#[test]
fn enum_lists_use_member() {
    let input = DescribeServiceUpdatesInput::builder()
        .service_update_status(ServiceUpdateStatus::Available)
        .service_update_status("brand-new-status")
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    assert_ok(validate_form_params(
        &body_of(&op),
        &[
            "ServiceUpdateStatus.member.1=available",
            "ServiceUpdateStatus.member.2=brand-new-status",
        ],
    ));
}

#[test]
fn replica_configuration_uses_configure_shard() {
    let input = elasticache::input::DecreaseReplicaCountInput::builder()
        .replication_group_id("rg")
        .replica_configuration(
            ConfigureShard::builder()
                .node_group_id("0001")
                .new_replica_count(1)
                .preferred_availability_zones("us-west-2c")
                .build(),
        )
        .replicas_to_remove("rg-0001-002")
        .apply_immediately(true)
        .build();
    let op = input.make_operation(&config()).expect("valid operation");
    let body = body_of(&op);
    assert_ok(require_form_params(
        &body,
        &[
            "ReplicaConfiguration.ConfigureShard.1.NodeGroupId",
            "ReplicaConfiguration.ConfigureShard.1.NewReplicaCount",
            "ReplicaConfiguration.ConfigureShard.1.PreferredAvailabilityZones.PreferredAvailabilityZone.1",
            "ReplicasToRemove.member.1",
        ],
    ));
    assert_ok(forbid_form_params(&body, &["NewReplicaCount"]));
}

#[test]
fn request_carries_signing_and_endpoint_properties() {
    let op = AddTagsToResourceInput::builder()
        .resource_name("my-cluster")
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let properties = op.request().properties();
    assert_eq!(properties.get::<Region>(), Some(&Region::new("us-west-2")));
    assert_eq!(
        properties
            .get::<aws_types::SigningService>()
            .map(|service| service.as_ref()),
        Some("elasticache")
    );
    assert!(aws_endpoint::get_endpoint_resolver(&properties).is_some());
}

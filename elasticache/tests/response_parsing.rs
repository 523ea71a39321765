/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use elasticache::error::{
    DeleteCacheParameterGroupErrorKind, DescribeCacheClustersErrorKind,
};
use elasticache::model::{AutomaticFailoverStatus, MultiAzStatus};
use elasticache::operation::{
    DeleteCacheParameterGroup, DescribeCacheClusters, DescribeReplicationGroups,
};
use elasticache::Instant;
use pretty_assertions::assert_eq;
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("content-type", "text/xml")
        .body(Bytes::from_static(body.as_bytes()))
        .expect("valid response")
}

const DESCRIBE_CACHE_CLUSTERS: &str = r#"<DescribeCacheClustersResponse xmlns="http://elasticache.amazonaws.com/doc/2015-02-02/">
  <DescribeCacheClustersResult>
    <Marker>page-2</Marker>
    <CacheClusters>
      <CacheCluster>
        <CacheClusterId>my-mem-cluster</CacheClusterId>
        <ConfigurationEndpoint>
          <Address>my-mem-cluster.abcdef.cfg.use1.cache.amazonaws.com</Address>
          <Port>11211</Port>
        </ConfigurationEndpoint>
        <CacheNodeType>cache.t3.medium</CacheNodeType>
        <Engine>memcached</Engine>
        <EngineVersion>1.5.16</EngineVersion>
        <CacheClusterStatus>available</CacheClusterStatus>
        <NumCacheNodes>2</NumCacheNodes>
        <PreferredAvailabilityZone>Multiple</PreferredAvailabilityZone>
        <CacheClusterCreateTime>2019-12-16T23:48:18.522Z</CacheClusterCreateTime>
        <CacheSecurityGroups/>
        <CacheNodes>
          <CacheNode>
            <CacheNodeId>0001</CacheNodeId>
            <CacheNodeStatus>available</CacheNodeStatus>
            <Endpoint>
              <Address>my-mem-cluster.abcdef.0001.use1.cache.amazonaws.com</Address>
              <Port>11211</Port>
            </Endpoint>
          </CacheNode>
          <CacheNode>
            <CacheNodeId>0002</CacheNodeId>
            <CacheNodeStatus>available</CacheNodeStatus>
          </CacheNode>
        </CacheNodes>
        <AutoMinorVersionUpgrade>true</AutoMinorVersionUpgrade>
        <SecurityGroups>
          <member>
            <SecurityGroupId>sg-dbe93b48</SecurityGroupId>
            <Status>active</Status>
          </member>
        </SecurityGroups>
        <SomeFutureMember>ignored</SomeFutureMember>
        <AuthTokenEnabled>false</AuthTokenEnabled>
        <TransitEncryptionEnabled>false</TransitEncryptionEnabled>
      </CacheCluster>
    </CacheClusters>
  </DescribeCacheClustersResult>
  <ResponseMetadata>
    <RequestId>ae3e6d3c-b17a-4a65-9d4c-2b4a1e8c2f44</RequestId>
  </ResponseMetadata>
</DescribeCacheClustersResponse>"#;

#[test]
fn parse_describe_cache_clusters() {
    let output = DescribeCacheClusters::new()
        .parse(&response(200, DESCRIBE_CACHE_CLUSTERS))
        .expect("successful response");
    assert_eq!(output.marker(), Some("page-2"));
    let clusters = output.cache_clusters().expect("clusters present");
    assert_eq!(clusters.len(), 1);
    let cluster = &clusters[0];
    assert_eq!(cluster.cache_cluster_id(), Some("my-mem-cluster"));
    assert_eq!(cluster.num_cache_nodes(), Some(2));
    assert_eq!(cluster.auto_minor_version_upgrade(), Some(true));
    assert_eq!(cluster.auth_token_enabled(), Some(false));
    assert_eq!(cluster.at_rest_encryption_enabled(), None);
    assert_eq!(
        cluster.cache_cluster_create_time(),
        Some(&Instant::from_secs_and_nanos(1576540098, 522_000_000))
    );
    assert_eq!(
        cluster
            .configuration_endpoint()
            .and_then(|endpoint| endpoint.port()),
        Some(11211)
    );
    // present but empty lists are distinct from absent ones
    assert_eq!(cluster.cache_security_groups(), Some(&[][..]));
    assert_eq!(cluster.notification_configuration(), None);

    let nodes = cluster.cache_nodes().expect("nodes present");
    let ids: Vec<_> = nodes.iter().filter_map(|node| node.cache_node_id()).collect();
    assert_eq!(ids, vec!["0001", "0002"]);
    assert_eq!(
        nodes[0].endpoint().and_then(|endpoint| endpoint.address()),
        Some("my-mem-cluster.abcdef.0001.use1.cache.amazonaws.com")
    );
    assert!(nodes[1].endpoint().is_none());

    let security_groups = cluster.security_groups().expect("security groups present");
    assert_eq!(security_groups[0].security_group_id(), Some("sg-dbe93b48"));
    assert_eq!(security_groups[0].status(), Some("active"));
}

#[test]
fn parse_replication_group_enums() {
    let body = r#"<DescribeReplicationGroupsResponse xmlns="http://elasticache.amazonaws.com/doc/2015-02-02/">
  <DescribeReplicationGroupsResult>
    <ReplicationGroups>
      <ReplicationGroup>
        <ReplicationGroupId>my-redis-rg</ReplicationGroupId>
        <Status>available</Status>
        <MemberClusters>
          <ClusterId>my-redis-rg-001</ClusterId>
          <ClusterId>my-redis-rg-002</ClusterId>
        </MemberClusters>
        <NodeGroups>
          <NodeGroup>
            <NodeGroupId>0001</NodeGroupId>
            <PrimaryEndpoint>
              <Address>my-redis-rg.abcdef.ng.0001.use1.cache.amazonaws.com</Address>
              <Port>6379</Port>
            </PrimaryEndpoint>
            <NodeGroupMembers>
              <NodeGroupMember>
                <CacheClusterId>my-redis-rg-001</CacheClusterId>
                <CurrentRole>primary</CurrentRole>
              </NodeGroupMember>
            </NodeGroupMembers>
          </NodeGroup>
        </NodeGroups>
        <AutomaticFailover>enabled</AutomaticFailover>
        <MultiAZ>a-status-from-the-future</MultiAZ>
        <ClusterEnabled>false</ClusterEnabled>
      </ReplicationGroup>
    </ReplicationGroups>
  </DescribeReplicationGroupsResult>
</DescribeReplicationGroupsResponse>"#;
    let output = DescribeReplicationGroups::new()
        .parse(&response(200, body))
        .expect("successful response");
    assert_eq!(output.marker(), None);
    let group = &output.replication_groups().expect("groups present")[0];
    assert_eq!(
        group.member_clusters(),
        Some(&["my-redis-rg-001".to_string(), "my-redis-rg-002".to_string()][..])
    );
    assert_eq!(
        group.automatic_failover(),
        Some(&AutomaticFailoverStatus::Enabled)
    );
    assert_eq!(
        group.multi_az(),
        Some(&MultiAzStatus::Unknown("a-status-from-the-future".to_string()))
    );
    let node_group = &group.node_groups().expect("node groups present")[0];
    assert_eq!(
        node_group
            .node_group_members()
            .and_then(|members| members[0].current_role()),
        Some("primary")
    );
}

#[test]
fn wrong_result_wrapper_is_unhandled() {
    let body = "<DescribeCacheClustersResponse><SomethingElse/></DescribeCacheClustersResponse>";
    let err = DescribeCacheClusters::new()
        .parse(&response(200, body))
        .expect_err("result element is required");
    assert!(matches!(err.kind, DescribeCacheClustersErrorKind::Unhandled(_)));
}

#[test]
fn parse_modeled_error() {
    let body = r#"<ErrorResponse xmlns="http://elasticache.amazonaws.com/doc/2015-02-02/">
  <Error>
    <Type>Sender</Type>
    <Code>CacheClusterNotFound</Code>
    <Message>CacheCluster not found: missing-cluster</Message>
  </Error>
  <RequestId>a1e2b3c4-0000-1111-2222-333344445555</RequestId>
</ErrorResponse>"#;
    let err = DescribeCacheClusters::new()
        .parse(&response(404, body))
        .expect_err("error response");
    assert!(err.is_cache_cluster_not_found_fault());
    assert!(!err.is_invalid_parameter_value_exception());
    assert_eq!(err.code(), Some("CacheClusterNotFound"));
    assert_eq!(err.message(), Some("CacheCluster not found: missing-cluster"));
    assert_eq!(
        err.request_id(),
        Some("a1e2b3c4-0000-1111-2222-333344445555")
    );
    assert_eq!(
        err.to_string(),
        "CacheClusterNotFoundFault: CacheCluster not found: missing-cluster"
    );
    assert_eq!(err.error_kind(), None);
    match err.kind {
        DescribeCacheClustersErrorKind::CacheClusterNotFoundFault(fault) => {
            assert_eq!(fault.message(), Some("CacheCluster not found: missing-cluster"))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn unknown_error_code_is_unhandled() {
    let body = r#"<ErrorResponse>
  <Error>
    <Type>Sender</Type>
    <Code>Throttling</Code>
    <Message>Rate exceeded</Message>
  </Error>
  <RequestId>req-1</RequestId>
</ErrorResponse>"#;
    let err = DeleteCacheParameterGroup::new()
        .parse(&response(400, body))
        .expect_err("error response");
    assert!(matches!(err.kind, DeleteCacheParameterGroupErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("Throttling"));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.request_id(), Some("req-1"));
    assert_eq!(err.error_kind(), Some(ErrorKind::ThrottlingError));
}

#[test]
fn error_without_code_is_unhandled() {
    let body = "<ErrorResponse><Error><Message>boom</Message></Error></ErrorResponse>";
    let err = DescribeCacheClusters::new()
        .parse(&response(500, body))
        .expect_err("error response");
    assert!(matches!(err.kind, DescribeCacheClustersErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), Some("boom"));
}

#[test]
fn malformed_error_body_is_unhandled() {
    let err = DescribeCacheClusters::new()
        .parse(&response(503, "<html>Service Unavailable"))
        .expect_err("error response");
    assert!(matches!(err.kind, DescribeCacheClustersErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.request_id(), None);
}

#[test]
fn empty_output_ignores_body() {
    let body = r#"<DeleteCacheParameterGroupResponse xmlns="http://elasticache.amazonaws.com/doc/2015-02-02/">
  <ResponseMetadata>
    <RequestId>d0a3c1f4-5a1e-11e9-9a9c-1f3a2b4c5d6e</RequestId>
  </ResponseMetadata>
</DeleteCacheParameterGroupResponse>"#;
    let output = DeleteCacheParameterGroup::new().parse(&response(200, body));
    assert!(output.is_ok());
    assert!(DeleteCacheParameterGroup::new()
        .parse(&response(200, ""))
        .is_ok());
}

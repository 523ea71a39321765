/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the Smithy AWS Query protocol

use smithy_types::instant::{DateTimeFormatError, Format};
use smithy_types::primitive::Encoder;
use smithy_types::{Instant, Number};
use std::borrow::Cow;
use urlencoding::encode;

/// Writes the top level of a form-urlencoded AWS Query request body.
///
/// ```rust
/// use smithy_query::QueryWriter;
/// let mut out = String::new();
/// let mut writer = QueryWriter::new(&mut out, "DeleteSnapshot", "2015-02-02");
/// writer.prefix("SnapshotName").string("nightly backup");
/// writer.finish();
/// assert_eq!(out, "Action=DeleteSnapshot&Version=2015-02-02&SnapshotName=nightly%20backup");
/// ```
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {
        // parameters are written eagerly, nothing is buffered
    }
}

/// Writes a single named value, or a nested structure/list rooted at that name
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> QueryValueWriter<'a> {
        QueryValueWriter { output, prefix }
    }

    /// Starts a member of the structure rooted at this writer (`Prefix.Member`)
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    /// Starts a list. Unless `flat`, entries are written as `Prefix.<member>.N`, where `<member>`
    /// is `member_override` or `member`.
    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter::new(self.output, self.prefix, flat, member_override)
    }

    pub fn boolean(self, value: bool) {
        self.write_param(Encoder::from(value).encode());
    }

    pub fn string(self, value: &str) {
        self.write_param(value);
    }

    pub fn number(self, value: Number) {
        self.write_param(Encoder::from(value).encode());
    }

    pub fn instant(self, instant: &Instant, format: Format) -> Result<(), DateTimeFormatError> {
        let formatted = instant.fmt(format)?;
        self.write_param(&formatted);
        Ok(())
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }

    fn write_param(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }
}

#[must_use]
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flat: bool,
        member_override: Option<&'a str>,
    ) -> QueryListWriter<'a> {
        QueryListWriter {
            output,
            prefix,
            flat,
            member_override,
            next_index: 1,
        }
    }

    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let entry_prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!(
                "{}.{}.{}",
                self.prefix,
                self.member_override.unwrap_or("member"),
                self.next_index
            )
        };
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(entry_prefix))
    }

    /// Empty lists are sent as a bare `Prefix=` so the service can tell them apart from unset lists
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param_name();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use smithy_types::instant::Format;
    use smithy_types::{Instant, Number};

    #[test]
    fn query_simple() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "DescribeCacheClusters", "2015-02-02");
        writer.prefix("CacheClusterId").string("my-cluster");
        writer.prefix("MaxRecords").number(Number::NegInt(20));
        writer.prefix("ShowCacheNodeInfo").boolean(true);
        writer.finish();
        assert_eq!(
            out,
            "Action=DescribeCacheClusters&Version=2015-02-02\
             &CacheClusterId=my-cluster&MaxRecords=20&ShowCacheNodeInfo=true"
        );
    }

    #[test]
    fn query_nested_structures_and_lists() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "AddTagsToResource", "2015-02-02");
        let mut tags = writer.prefix("Tags").start_list(false, Some("Tag"));
        {
            let mut tag = tags.entry();
            tag.prefix("Key").string("team");
            tag.prefix("Value").string("a&b");
        }
        {
            let mut tag = tags.entry();
            tag.prefix("Key").string("env");
        }
        tags.finish();
        let mut ids = writer.prefix("Ids").start_list(false, None);
        ids.entry().string("one");
        ids.finish();
        let mut flat = writer.prefix("Flat").start_list(true, None);
        flat.entry().string("x");
        flat.finish();
        writer.finish();
        assert_eq!(
            out,
            "Action=AddTagsToResource&Version=2015-02-02\
             &Tags.Tag.1.Key=team&Tags.Tag.1.Value=a%26b&Tags.Tag.2.Key=env\
             &Ids.member.1=one&Flat.1=x"
        );
    }

    #[test]
    fn query_sibling_writers_reborrow() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "ModifyReplicationGroup", "2015-02-02");
        let mut group = writer.prefix("NodeGroup");
        let mut config = group.prefix("Config");
        config.prefix("PrimaryAvailabilityZone").string("us-east-1a");
        config.prefix("ReplicaCount").number(Number::PosInt(2));
        group.prefix("Id").string("0001");
        let mut zones = writer.prefix("Zones").start_list(false, Some("AvailabilityZone"));
        let mut zone = zones.entry();
        zone.prefix("Name").string("us-east-1b");
        zones.entry().string("us-east-1c");
        zones.finish();
        writer.finish();
        assert_eq!(
            out,
            "Action=ModifyReplicationGroup&Version=2015-02-02\
             &NodeGroup.Config.PrimaryAvailabilityZone=us-east-1a&NodeGroup.Config.ReplicaCount=2\
             &NodeGroup.Id=0001\
             &Zones.AvailabilityZone.1.Name=us-east-1b&Zones.AvailabilityZone.2=us-east-1c"
        );
    }

    #[test]
    fn query_empty_list_is_written() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "RemoveTagsFromResource", "2015-02-02");
        writer.prefix("TagKeys").start_list(false, None).finish();
        writer.finish();
        assert_eq!(
            out,
            "Action=RemoveTagsFromResource&Version=2015-02-02&TagKeys="
        );
    }

    #[test]
    fn query_timestamps() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "DescribeEvents", "2015-02-02");
        writer
            .prefix("StartTime")
            .instant(&Instant::from_epoch_seconds(1576540098), Format::DateTime)
            .unwrap();
        writer.finish();
        assert_eq!(
            out,
            "Action=DescribeEvents&Version=2015-02-02&StartTime=2019-12-16T23%3A48%3A18Z"
        );
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the AWS Query protocol.
//!
//! A query body is a sequence of `name=value` pairs joined with `&`. Nested members are addressed
//! by dotted names. List members are numbered from 1:
//!
//! ```text
//! Action=DescribeReservedDBInstancesOfferings&Version=2014-10-31&Filters.Filter.1.Name=n
//! ```

use smithy_types::instant::{Format, InstantError};
use smithy_types::primitive::Encoder;
use smithy_types::Instant;
use std::borrow::Cow;
use urlencoding::encode;

/// Writes the top level of a query body.
///
/// The `Action` and `Version` parameters are always written first.
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

    /// Start writing the top level member named `prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(&mut *self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes a single value (scalar, structure, list or map) under a parameter name.
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> Self {
        QueryValueWriter { output, prefix }
    }

    /// Start writing a member of the structure at this prefix.
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            &mut *self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(if value { "true" } else { "false" });
    }

    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    /// Write a numeric value. Non-finite floats are written as `NaN`, `Infinity` and `-Infinity`.
    pub fn number(mut self, value: impl Into<Encoder>) {
        let mut encoder = value.into();
        self.write_param_name();
        self.output.push_str(encoder.encode());
    }

    pub fn date_time(self, date_time: &Instant, format: Format) -> Result<(), InstantError> {
        let formatted = date_time.fmt(format)?;
        self.string(&formatted);
        Ok(())
    }

    /// Start a list. Non-flat lists nest their entries under `member_override` or `member`.
    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter {
            output: self.output,
            prefix: self.prefix,
            flat,
            member_override,
            next_index: 1,
        }
    }

    /// Start a map. Non-flat maps nest their entries under `entry`.
    pub fn start_map(self, flat: bool, key_name: &'a str, value_name: &'a str) -> QueryMapWriter<'a> {
        QueryMapWriter {
            output: self.output,
            prefix: self.prefix,
            flat,
            key_name,
            value_name,
            next_index: 1,
        }
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

/// Writes the numbered entries of a list.
///
/// A list with no entries writes nothing at all.
#[must_use]
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = if self.flat {
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
        QueryValueWriter::new(&mut *self.output, Cow::Owned(prefix))
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes the numbered key/value entries of a map.
#[must_use]
pub struct QueryMapWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    key_name: &'a str,
    value_name: &'a str,
    next_index: usize,
}

impl<'a> QueryMapWriter<'a> {
    /// Write the key of the next entry and return a writer for its value.
    pub fn entry(&mut self, key: &str) -> QueryValueWriter<'_> {
        let entry_prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!("{}.entry.{}", self.prefix, self.next_index)
        };
        self.next_index += 1;
        self.output.push('&');
        self.output.push_str(&entry_prefix);
        self.output.push('.');
        self.output.push_str(self.key_name);
        self.output.push('=');
        self.output.push_str(&encode(key));
        QueryValueWriter::new(
            &mut *self.output,
            Cow::Owned(format!("{}.{}", entry_prefix, self.value_name)),
        )
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use proptest::prelude::*;
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn action_and_version_come_first() {
        let mut out = String::new();
        let writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0", out);
    }

    #[test]
    fn scalars() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.prefix("MultiAZ").boolean(true);
        writer.prefix("MaxRecords").number(20);
        writer.prefix("Ratio").number(0.5);
        writer.prefix("Big").number(f64::INFINITY);
        writer.prefix("Marker").string("a b&c=d");
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0&MultiAZ=true&MaxRecords=20&Ratio=0.5\
             &Big=Infinity&Marker=a%20b%26c%3Dd",
            out
        );
    }

    #[test]
    fn nested_structures() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        let mut outer = writer.prefix("Outer");
        outer.prefix("Inner").string("value");
        outer.prefix("Flag").boolean(false);
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0&Outer.Inner=value&Outer.Flag=false",
            out
        );
    }

    #[test]
    fn lists_are_one_indexed() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        let mut list = writer.prefix("Names").start_list(false, None);
        list.entry().string("a");
        list.entry().string("b");
        list.finish();
        let mut flat = writer.prefix("Flat").start_list(true, None);
        flat.entry().string("c");
        flat.finish();
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0&Names.member.1=a&Names.member.2=b&Flat.1=c",
            out
        );
    }

    #[test]
    fn nested_lists_with_member_override() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        let mut filters = writer.prefix("Filters").start_list(false, Some("Filter"));
        for (name, values) in [("engine", vec!["mysql", "postgres"]), ("class", vec![])] {
            let mut filter = filters.entry();
            filter.prefix("Name").string(name);
            let mut values_writer = filter.prefix("Values").start_list(false, Some("Value"));
            for value in values {
                values_writer.entry().string(value);
            }
            values_writer.finish();
        }
        filters.finish();
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0\
             &Filters.Filter.1.Name=engine\
             &Filters.Filter.1.Values.Value.1=mysql\
             &Filters.Filter.1.Values.Value.2=postgres\
             &Filters.Filter.2.Name=class",
            out
        );
    }

    #[test]
    fn empty_list_writes_nothing() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.prefix("Empty").start_list(false, None).finish();
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0", out);
    }

    #[test]
    fn maps() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        let mut map = writer.prefix("Tags").start_map(false, "key", "value");
        map.entry("first").string("1");
        map.entry("second key").string("2");
        map.finish();
        let mut flat = writer.prefix("Flat").start_map(true, "k", "v");
        flat.entry("a").number(1);
        flat.finish();
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0\
             &Tags.entry.1.key=first&Tags.entry.1.value=1\
             &Tags.entry.2.key=second%20key&Tags.entry.2.value=2\
             &Flat.1.k=a&Flat.1.v=1",
            out
        );
    }

    #[test]
    fn timestamps() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer
            .prefix("Start")
            .date_time(&Instant::from_secs(1576540098), Format::DateTime)
            .unwrap();
        writer
            .prefix("End")
            .date_time(&Instant::from_secs(1576540098), Format::EpochSeconds)
            .unwrap();
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0&Start=2019-12-16T23%3A48%3A18Z&End=1576540098",
            out
        );
    }

    proptest! {
        #[test]
        fn strings_never_break_pairs(value in ".*") {
            let mut out = String::new();
            let mut writer = QueryWriter::new(&mut out, "A", "1");
            writer.prefix("Value").string(&value);
            writer.finish();
            let pairs: Vec<_> = out.split('&').collect();
            prop_assert_eq!(pairs.len(), 3);
            prop_assert_eq!(pairs[2].matches('=').count(), 1);
        }
    }
}

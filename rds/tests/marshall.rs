/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use protocol_test_helpers::{decoded_form_params, form_params};
use rds::input::DescribeReservedDbInstancesOfferingsInput;
use rds::model::Filter;
use rds::query_ser::DescribeReservedDbInstancesOfferingsMarshaller;
use smithy_http::marshall::Marshall;

fn marshall(input: &DescribeReservedDbInstancesOfferingsInput) -> String {
    let request = DescribeReservedDbInstancesOfferingsMarshaller
        .marshall(input)
        .expect("every input can be marshalled");
    String::from_utf8(request.http().body().bytes().unwrap().to_vec()).unwrap()
}

fn filters() -> impl Strategy<Value = Vec<(Option<String>, Vec<String>)>> {
    prop::collection::vec(
        (
            prop::option::of("[a-z-]{1,12}"),
            prop::collection::vec(".{0,16}", 0..4),
        ),
        0..5,
    )
}

proptest! {
    #[test]
    fn scalars_appear_once(
        offering_id in prop::option::of(".*"),
        class in prop::option::of("db\\.[a-z0-9]{2,3}\\.[a-z0-9]{4,8}"),
        multi_az in prop::option::of(any::<bool>()),
        max_records in prop::option::of(any::<i32>()),
        marker in prop::option::of(".*"),
    ) {
        let input = DescribeReservedDbInstancesOfferingsInput::builder()
            .set_reserved_db_instances_offering_id(offering_id.clone())
            .set_db_instance_class(class.clone())
            .set_multi_az(multi_az)
            .set_max_records(max_records)
            .set_marker(marker.clone())
            .build()
            .unwrap();
        let params = decoded_form_params(&marshall(&input));
        let expected = [
            ("ReservedDBInstancesOfferingId", offering_id),
            ("DBInstanceClass", class),
            ("MultiAZ", multi_az.map(|b| b.to_string())),
            ("MaxRecords", max_records.map(|n| n.to_string())),
            ("Marker", marker),
        ];
        for (key, value) in expected {
            let found: Vec<_> = params.iter().filter(|(k, _)| k == key).map(|(_, v)| v.clone()).collect();
            match value {
                Some(value) => prop_assert_eq!(found, vec![value]),
                None => prop_assert!(found.is_empty()),
            }
        }
    }

    #[test]
    fn lists_are_numbered_in_order(filters in filters()) {
        let mut builder = DescribeReservedDbInstancesOfferingsInput::builder();
        for (name, values) in &filters {
            builder = builder.filters(
                Filter::builder()
                    .set_name(name.clone())
                    .set_values(Some(values.clone()))
                    .build()
                    .unwrap(),
            );
        }
        let input = builder.build().unwrap();
        let params = decoded_form_params(&marshall(&input));
        let mut expected = vec![
            ("Action".to_string(), "DescribeReservedDBInstancesOfferings".to_string()),
            ("Version".to_string(), "2014-10-31".to_string()),
        ];
        for (i, (name, values)) in filters.iter().enumerate() {
            if let Some(name) = name {
                expected.push((format!("Filters.Filter.{}.Name", i + 1), name.clone()));
            }
            for (j, value) in values.iter().enumerate() {
                expected.push((format!("Filters.Filter.{}.Values.Value.{}", i + 1, j + 1), value.clone()));
            }
        }
        prop_assert_eq!(params, expected);
    }

    #[test]
    fn marshalling_is_deterministic(filters in filters(), marker in prop::option::of(".*")) {
        let filters: Vec<Filter> = filters
            .into_iter()
            .map(|(name, values)| Filter::builder().set_name(name).set_values(Some(values)).build().unwrap())
            .collect();
        let input = DescribeReservedDbInstancesOfferingsInput::builder()
            .set_filters(Some(filters))
            .set_marker(marker)
            .build()
            .unwrap();
        prop_assert_eq!(marshall(&input), marshall(&input.clone()));
    }
}

#[test]
fn unset_input_writes_action_and_version() {
    let input = DescribeReservedDbInstancesOfferingsInput::builder()
        .build()
        .unwrap();
    assert_eq!(
        form_params(&marshall(&input)),
        vec!["Action=DescribeReservedDBInstancesOfferings", "Version=2014-10-31"]
    );
}

#[test]
fn unset_and_empty_lists_differ_only_in_the_model() {
    let unset = DescribeReservedDbInstancesOfferingsInput::builder()
        .build()
        .unwrap();
    let empty = DescribeReservedDbInstancesOfferingsInput::builder()
        .set_filters(Some(vec![]))
        .build()
        .unwrap();
    assert_ne!(unset, empty);
    assert_eq!(marshall(&unset), marshall(&empty));
}

#[test]
fn filter_values_are_required() {
    let err = Filter::builder().name("engine").build().unwrap_err();
    assert!(matches!(
        err,
        smithy_http::operation::BuildError::MissingField { field: "values", .. }
    ));
}

#[test]
fn filter_name_is_optional() {
    let filter = Filter::builder().values("mysql").build().expect("values were set");
    assert_eq!(filter.name, None);
    let body = marshall(
        &DescribeReservedDbInstancesOfferingsInput::builder()
            .filters(filter)
            .build()
            .unwrap(),
    );
    assert!(body.contains("Filters.Filter.1.Values.Value.1=mysql"));
    assert!(!body.contains("Filters.Filter.1.Name"));
}

#[test]
fn null_input_produces_no_request() {
    let err = DescribeReservedDbInstancesOfferingsMarshaller
        .try_marshall(None)
        .unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Invalid argument passed to marshall(...)"));
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use rds::error::DescribeReservedDbInstancesOfferingsErrorKind;
use rds::input::DescribeReservedDbInstancesOfferingsInput;
use rds::model::Filter;
use rds::{Client, Config, Rds, Region};
use smithy_http::body::SdkBody;

const NOT_FOUND: &str = r#"<ErrorResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <Error>
    <Type>Sender</Type>
    <Code>ReservedDBInstancesOfferingNotFound</Code>
    <Message>Offering missing-offering not found</Message>
  </Error>
  <RequestId>5e1f2d6a-0000-4000-8000-000000000000</RequestId>
</ErrorResponse>"#;

fn input() -> DescribeReservedDbInstancesOfferingsInput {
    DescribeReservedDbInstancesOfferingsInput::builder()
        .db_instance_class("db.m4.large")
        .filters(
            Filter::builder()
                .name("engine")
                .values("mysql")
                .build()
                .unwrap(),
        )
        .max_records(20)
        .build()
        .unwrap()
}

#[tokio::test]
async fn offerings_are_returned() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://rds.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(SdkBody::from(
                "Action=DescribeReservedDBInstancesOfferings&Version=2014-10-31\
                 &DBInstanceClass=db.m4.large\
                 &Filters.Filter.1.Name=engine&Filters.Filter.1.Values.Value.1=mysql\
                 &MaxRecords=20",
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"<DescribeReservedDBInstancesOfferingsResponse>
  <DescribeReservedDBInstancesOfferingsResult>
    <Marker>next-page</Marker>
    <ReservedDBInstancesOfferings>
      <ReservedDBInstancesOffering>
        <ReservedDBInstancesOfferingId>offering-1</ReservedDBInstancesOfferingId>
        <DBInstanceClass>db.m4.large</DBInstanceClass>
        <MultiAZ>true</MultiAZ>
      </ReservedDBInstancesOffering>
    </ReservedDBInstancesOfferings>
  </DescribeReservedDBInstancesOfferingsResult>
</DescribeReservedDBInstancesOfferingsResponse>"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(
        Config::builder().region(Region::new("us-east-1")).build(),
        conn.clone(),
    );
    let output = client
        .describe_reserved_db_instances_offerings(input())
        .await
        .expect("valid response");
    assert_eq!(output.marker.as_deref(), Some("next-page"));
    let offerings = output.reserved_db_instances_offerings.unwrap();
    assert_eq!(
        offerings[0].reserved_db_instances_offering_id.as_deref(),
        Some("offering-1")
    );
    assert_eq!(offerings[0].multi_az, Some(true));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn offering_not_found() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder().status(404).body(NOT_FOUND).unwrap(),
    )]);
    let client = Client::from_conf_conn(
        Config::builder().region(Region::new("us-east-1")).build(),
        conn,
    );
    let err = client
        .describe_reserved_db_instances_offerings(
            DescribeReservedDbInstancesOfferingsInput::builder()
                .reserved_db_instances_offering_id("missing-offering")
                .build()
                .unwrap(),
        )
        .await
        .expect_err("offering does not exist");
    assert_eq!(err.raw_response().map(|raw| raw.status().as_u16()), Some(404));
    let err = err.into_service_error().expect("modeled error");
    assert!(err.is_reserved_db_instances_offering_not_found_fault());
    assert_eq!(err.request_id(), Some("5e1f2d6a-0000-4000-8000-000000000000"));
    match err.kind {
        DescribeReservedDbInstancesOfferingsErrorKind::ReservedDbInstancesOfferingNotFoundFault(fault) => {
            assert_eq!(fault.message(), Some("Offering missing-offering not found"))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn throttling_is_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(400)
            .body("<ErrorResponse><Error><Code>Throttling</Code></Error></ErrorResponse>")
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(
        Config::builder().region(Region::new("us-east-1")).build(),
        conn,
    );
    let err = client
        .describe_reserved_db_instances_offerings(input())
        .await
        .expect_err("throttled")
        .into_service_error()
        .expect("service error");
    assert_eq!(err.code(), Some("Throttling"));
    assert!(matches!(
        err.kind,
        DescribeReservedDbInstancesOfferingsErrorKind::Unhandled(_)
    ));
}

#[tokio::test]
async fn endpoint_override() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("http://localhost:4566/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(SdkBody::from(
                "Action=DescribeReservedDBInstancesOfferings&Version=2014-10-31\
                 &DBInstanceClass=db.m4.large\
                 &Filters.Filter.1.Name=engine&Filters.Filter.1.Values.Value.1=mysql\
                 &MaxRecords=20",
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                "<DescribeReservedDBInstancesOfferingsResponse>\
                 <DescribeReservedDBInstancesOfferingsResult/>\
                 </DescribeReservedDBInstancesOfferingsResponse>",
            )
            .unwrap(),
    )]);
    let mut client = Client::from_conf_conn(Config::builder().build(), conn.clone());
    let err = client
        .describe_reserved_db_instances_offerings(input())
        .await
        .expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));

    client.set_endpoint("http://localhost:4566").unwrap();
    let output = client
        .describe_reserved_db_instances_offerings(input())
        .await
        .expect("endpoint override needs no region");
    assert_eq!(output.reserved_db_instances_offerings, None);
    conn.assert_requests_match(&[]);
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::DescribeReservedDbInstancesOfferingsInput;
use aws_http::AwsErrorRetryPolicy;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use smithy_http::body::SdkBody;
use smithy_http::marshall::Marshall;
use smithy_http::operation;
use smithy_http::operation::{BuildError, Metadata, Operation};
use smithy_query::QueryWriter;

const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Writes `DescribeReservedDBInstancesOfferings` as an AWS Query request
///
/// Parameters are written in a fixed order after `Action` and `Version`. Unset members are
/// skipped. An explicitly empty `Filters` list writes no entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct DescribeReservedDbInstancesOfferingsMarshaller;

impl DescribeReservedDbInstancesOfferingsMarshaller {
    pub fn serialize(&self, input: &DescribeReservedDbInstancesOfferingsInput) -> String {
        let mut out = String::new();
        let mut writer = QueryWriter::new(
            &mut out,
            "DescribeReservedDBInstancesOfferings",
            crate::API_VERSION,
        );
        if let Some(var_1) = &input.reserved_db_instances_offering_id {
            writer.prefix("ReservedDBInstancesOfferingId").string(var_1);
        }
        if let Some(var_2) = &input.db_instance_class {
            writer.prefix("DBInstanceClass").string(var_2);
        }
        if let Some(var_3) = &input.duration {
            writer.prefix("Duration").string(var_3);
        }
        if let Some(var_4) = &input.product_description {
            writer.prefix("ProductDescription").string(var_4);
        }
        if let Some(var_5) = &input.offering_type {
            writer.prefix("OfferingType").string(var_5);
        }
        if let Some(var_6) = input.multi_az {
            writer.prefix("MultiAZ").boolean(var_6);
        }
        if let Some(var_7) = &input.filters {
            let mut list_8 = writer.prefix("Filters").start_list(false, Some("Filter"));
            for item_9 in var_7 {
                let mut entry_10 = list_8.entry();
                if let Some(var_11) = &item_9.name {
                    entry_10.prefix("Name").string(var_11);
                }
                if let Some(var_12) = &item_9.values {
                    let mut list_13 = entry_10.prefix("Values").start_list(false, Some("Value"));
                    for item_14 in var_12 {
                        list_13.entry().string(item_14);
                    }
                    list_13.finish();
                }
            }
            list_8.finish();
        }
        if let Some(var_15) = input.max_records {
            writer.prefix("MaxRecords").number(var_15);
        }
        if let Some(var_16) = &input.marker {
            writer.prefix("Marker").string(var_16);
        }
        writer.finish();
        out
    }
}

impl Marshall<DescribeReservedDbInstancesOfferingsInput> for DescribeReservedDbInstancesOfferingsMarshaller {
    fn marshall(
        &self,
        input: &DescribeReservedDbInstancesOfferingsInput,
    ) -> Result<operation::Request, BuildError> {
        build_request(self.serialize(input))
    }
}

/// `POST /` with the form-encoded query as body
pub(crate) fn build_request(body: String) -> Result<operation::Request, BuildError> {
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
        .header(CONTENT_LENGTH, body.len())
        .body(SdkBody::from(body))?;
    Ok(operation::Request::new(request))
}

pub(crate) fn make_operation<I, M, O>(
    marshaller: &M,
    input: &I,
    operation_name: &'static str,
    handler: O,
    config: &crate::config::Config,
) -> Result<Operation<O, AwsErrorRetryPolicy>, BuildError>
where
    M: Marshall<I>,
{
    let mut request = marshaller.marshall(input)?;
    config.configure_request(request.properties_mut());
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, "rds"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::DescribeReservedDbInstancesOfferingsInput;
    use crate::model::Filter;
    use crate::query_ser::DescribeReservedDbInstancesOfferingsMarshaller;
    use aws_types::region::Region;
    use protocol_test_helpers::{assert_ok, decoded_form_params, form_params, validate_headers};
    use smithy_http::marshall::Marshall;
    use smithy_http::operation::BuildError;

    fn body(request: &smithy_http::operation::Request) -> &str {
        std::str::from_utf8(request.http().body().bytes().expect("body is in memory"))
            .expect("form bodies are utf-8")
    }

    #[test]
    fn unset_members_write_only_action_and_version() {
        let input = DescribeReservedDbInstancesOfferingsInput::builder()
            .build()
            .unwrap();
        let request = DescribeReservedDbInstancesOfferingsMarshaller
            .marshall(&input)
            .expect("valid input");
        assert_eq!(
            form_params(body(&request)),
            vec!["Action=DescribeReservedDBInstancesOfferings", "Version=2014-10-31"]
        );
        let http = request.http();
        assert_eq!(http.method(), "POST");
        assert_eq!(http.uri(), "/");
        assert_ok(validate_headers(
            http,
            &[("content-type", "application/x-www-form-urlencoded")],
        ));
    }

    #[test]
    fn members_are_written_in_order() {
        let input = DescribeReservedDbInstancesOfferingsInput::builder()
            .marker("page-2")
            .max_records(50)
            .multi_az(false)
            .offering_type("Partial Upfront")
            .product_description("mysql")
            .duration("31536000")
            .db_instance_class("db.m4.large")
            .reserved_db_instances_offering_id("offering-1")
            .filters(
                Filter::builder()
                    .name("engine")
                    .values("mysql")
                    .values("postgres")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let request = DescribeReservedDbInstancesOfferingsMarshaller
            .marshall(&input)
            .unwrap();
        assert_eq!(
            form_params(body(&request)),
            vec![
                "Action=DescribeReservedDBInstancesOfferings",
                "Version=2014-10-31",
                "ReservedDBInstancesOfferingId=offering-1",
                "DBInstanceClass=db.m4.large",
                "Duration=31536000",
                "ProductDescription=mysql",
                "OfferingType=Partial%20Upfront",
                "MultiAZ=false",
                "Filters.Filter.1.Name=engine",
                "Filters.Filter.1.Values.Value.1=mysql",
                "Filters.Filter.1.Values.Value.2=postgres",
                "MaxRecords=50",
                "Marker=page-2",
            ]
        );
        assert!(decoded_form_params(body(&request)).contains(&(
            "OfferingType".to_string(),
            "Partial Upfront".to_string()
        )));
    }

    #[test]
    fn empty_filter_list_is_set_but_writes_nothing() {
        let input = DescribeReservedDbInstancesOfferingsInput::builder()
            .set_filters(Some(vec![]))
            .build()
            .expect("an empty list is a valid value");
        assert_eq!(input.filters, Some(vec![]));
        let request = DescribeReservedDbInstancesOfferingsMarshaller
            .marshall(&input)
            .unwrap();
        assert_eq!(form_params(body(&request)).len(), 2);
    }

    #[test]
    fn filter_with_empty_values_writes_only_its_name() {
        let filter = Filter::builder()
            .name("engine")
            .set_values(Some(vec![]))
            .build()
            .unwrap();
        let input = DescribeReservedDbInstancesOfferingsInput::builder()
            .filters(filter)
            .build()
            .unwrap();
        let request = DescribeReservedDbInstancesOfferingsMarshaller
            .marshall(&input)
            .unwrap();
        assert_eq!(
            form_params(body(&request))[2..],
            ["Filters.Filter.1.Name=engine"]
        );
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = DescribeReservedDbInstancesOfferingsMarshaller
            .try_marshall(None)
            .expect_err("no input");
        assert!(matches!(err, BuildError::MissingInput));
    }

    #[test]
    fn make_operation_configures_the_request() {
        let conf = Config::builder().region(Region::new("us-west-2")).build();
        let op = DescribeReservedDbInstancesOfferingsInput::builder()
            .build()
            .unwrap()
            .make_operation(&conf)
            .unwrap();
        let metadata = op.metadata().expect("metadata is set");
        assert_eq!(metadata.name(), "DescribeReservedDBInstancesOfferings");
        assert_eq!(metadata.service(), "rds");
        assert_eq!(
            op.properties().get::<Region>(),
            Some(&Region::new("us-west-2"))
        );
    }
}

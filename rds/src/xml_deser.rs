/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Decoding of `awsQuery` XML responses

use crate::model::{RecurringCharge, ReservedDbInstancesOffering};
use crate::output::describe_reserved_db_instances_offerings_output;
use roxmltree::{Document, Node};
use smithy_types::primitive::Parse;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct XmlDecodeError {
    msg: Cow<'static, str>,
}

impl XmlDecodeError {
    fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlDecodeError { msg: msg.into() }
    }
}

impl fmt::Display for XmlDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid XML response: {}", self.msg)
    }
}

impl Error for XmlDecodeError {}

impl From<roxmltree::Error> for XmlDecodeError {
    fn from(err: roxmltree::Error) -> Self {
        XmlDecodeError::custom(err.to_string())
    }
}

fn parse_document(body: &[u8]) -> Result<Document<'_>, XmlDecodeError> {
    let body = std::str::from_utf8(body).map_err(|_| XmlDecodeError::custom("body is not UTF-8"))?;
    let doc = Document::parse(body)?;
    let root = doc.root_element();
    if !closes_root(body, root) {
        return Err(XmlDecodeError::custom(format!(
            "<{}> is never closed",
            root.tag_name().name()
        )));
    }
    Ok(doc)
}

// roxmltree accepts a document that ends inside the root element. The last tag must close
// the root: either `</Root>` or a childless `<Root/>`.
fn closes_root(body: &str, root: Node<'_, '_>) -> bool {
    let body = body.trim_end();
    let last_tag = match body.rfind('<') {
        Some(idx) => &body[idx..],
        None => return false,
    };
    match last_tag.strip_prefix("</") {
        Some(closing) => {
            let qualified = closing.trim_end_matches('>').trim_end();
            let local = qualified.rsplit(':').next().unwrap_or(qualified);
            last_tag.ends_with('>') && local == root.tag_name().name()
        }
        None => last_tag.ends_with("/>") && !root.has_children(),
    }
}

fn child_elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    child_elements(node).find(|child| child.tag_name().name() == name)
}

fn expect_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> Result<Node<'a, 'input>, XmlDecodeError> {
    child(node, name).ok_or_else(|| {
        XmlDecodeError::custom(format!(
            "expected <{}> in <{}>",
            name,
            node.tag_name().name()
        ))
    })
}

// `<Marker/>` is an empty string, not a missing value
fn text<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().unwrap_or_default()
}

fn primitive<T: Parse>(node: Node<'_, '_>) -> Result<T, XmlDecodeError> {
    T::parse_smithy_primitive(text(node).trim()).map_err(|err| {
        XmlDecodeError::custom(format!("<{}>: {}", node.tag_name().name(), err))
    })
}

/// Error metadata from an `<ErrorResponse>` body
///
/// ```xml
/// <ErrorResponse>
///   <Error><Type>Sender</Type><Code>...</Code><Message>...</Message></Error>
///   <RequestId>...</RequestId>
/// </ErrorResponse>
/// ```
pub fn parse_generic_error(body: &[u8]) -> Result<smithy_types::Error, XmlDecodeError> {
    let doc = parse_document(body)?;
    let root = doc.root_element();
    if root.tag_name().name() != "ErrorResponse" {
        return Err(XmlDecodeError::custom(format!(
            "expected <ErrorResponse>, found <{}>",
            root.tag_name().name()
        )));
    }
    let error = expect_child(root, "Error")?;
    let mut err_builder = smithy_types::Error::builder().code(text(expect_child(error, "Code")?));
    if let Some(message) = child(error, "Message") {
        err_builder = err_builder.message(text(message));
    }
    if let Some(request_id) = child(root, "RequestId") {
        err_builder = err_builder.request_id(text(request_id));
    }
    Ok(err_builder.build())
}

pub fn deser_operation_describe_reserved_db_instances_offerings(
    body: &[u8],
    mut builder: describe_reserved_db_instances_offerings_output::Builder,
) -> Result<describe_reserved_db_instances_offerings_output::Builder, XmlDecodeError> {
    let doc = parse_document(body)?;
    let root = doc.root_element();
    if root.tag_name().name() != "DescribeReservedDBInstancesOfferingsResponse" {
        return Err(XmlDecodeError::custom(format!(
            "unexpected root element <{}>",
            root.tag_name().name()
        )));
    }
    let result = expect_child(root, "DescribeReservedDBInstancesOfferingsResult")?;
    for node in child_elements(result) {
        match node.tag_name().name() {
            "Marker" => builder = builder.marker(text(node)),
            "ReservedDBInstancesOfferings" => {
                let offerings = child_elements(node)
                    .filter(|n| n.tag_name().name() == "ReservedDBInstancesOffering")
                    .map(deser_reserved_db_instances_offering)
                    .collect::<Result<Vec<_>, _>>()?;
                builder = builder.set_reserved_db_instances_offerings(Some(offerings));
            }
            _ => {}
        }
    }
    Ok(builder)
}

fn deser_reserved_db_instances_offering(
    node: Node<'_, '_>,
) -> Result<ReservedDbInstancesOffering, XmlDecodeError> {
    let mut builder = ReservedDbInstancesOffering::builder();
    for member in child_elements(node) {
        builder = match member.tag_name().name() {
            "ReservedDBInstancesOfferingId" => {
                builder.reserved_db_instances_offering_id(text(member))
            }
            "DBInstanceClass" => builder.db_instance_class(text(member)),
            "Duration" => builder.duration(primitive(member)?),
            "FixedPrice" => builder.fixed_price(primitive(member)?),
            "UsagePrice" => builder.usage_price(primitive(member)?),
            "CurrencyCode" => builder.currency_code(text(member)),
            "ProductDescription" => builder.product_description(text(member)),
            "OfferingType" => builder.offering_type(text(member)),
            "MultiAZ" => builder.multi_az(primitive(member)?),
            "RecurringCharges" => {
                let charges = child_elements(member)
                    .filter(|n| n.tag_name().name() == "RecurringCharge")
                    .map(deser_recurring_charge)
                    .collect::<Result<Vec<_>, _>>()?;
                builder.set_recurring_charges(Some(charges))
            }
            _ => builder,
        };
    }
    Ok(builder.build())
}

fn deser_recurring_charge(node: Node<'_, '_>) -> Result<RecurringCharge, XmlDecodeError> {
    let mut builder = RecurringCharge::builder();
    for member in child_elements(node) {
        builder = match member.tag_name().name() {
            "RecurringChargeAmount" => builder.recurring_charge_amount(primitive(member)?),
            "RecurringChargeFrequency" => builder.recurring_charge_frequency(text(member)),
            _ => builder,
        };
    }
    Ok(builder.build())
}

#[cfg(test)]
mod test {
    use crate::output::DescribeReservedDbInstancesOfferingsOutput;
    use crate::xml_deser::{
        deser_operation_describe_reserved_db_instances_offerings, parse_generic_error,
    };

    const OFFERINGS: &str = r#"<DescribeReservedDBInstancesOfferingsResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <DescribeReservedDBInstancesOfferingsResult>
    <Marker/>
    <ReservedDBInstancesOfferings>
      <ReservedDBInstancesOffering>
        <Duration>31536000</Duration>
        <OfferingType>Partial Upfront</OfferingType>
        <CurrencyCode>USD</CurrencyCode>
        <RecurringCharges>
          <RecurringCharge>
            <RecurringChargeFrequency>Hourly</RecurringChargeFrequency>
            <RecurringChargeAmount>0.123</RecurringChargeAmount>
          </RecurringCharge>
        </RecurringCharges>
        <FixedPrice>162.0</FixedPrice>
        <ProductDescription>mysql</ProductDescription>
        <UsagePrice>0.0</UsagePrice>
        <MultiAZ>false</MultiAZ>
        <ReservedDBInstancesOfferingId>SampleOfferingId</ReservedDBInstancesOfferingId>
        <DBInstanceClass>db.m1.small</DBInstanceClass>
      </ReservedDBInstancesOffering>
    </ReservedDBInstancesOfferings>
  </DescribeReservedDBInstancesOfferingsResult>
  <ResponseMetadata>
    <RequestId>521b420a-2961-11e3-82be-000000000000</RequestId>
  </ResponseMetadata>
</DescribeReservedDBInstancesOfferingsResponse>"#;

    #[test]
    fn offerings_response() {
        let output = deser_operation_describe_reserved_db_instances_offerings(
            OFFERINGS.as_bytes(),
            DescribeReservedDbInstancesOfferingsOutput::builder(),
        )
        .expect("valid response")
        .build();
        assert_eq!(output.marker.as_deref(), Some(""));
        let offerings = output.reserved_db_instances_offerings.unwrap();
        assert_eq!(offerings.len(), 1);
        let offering = &offerings[0];
        assert_eq!(offering.duration, Some(31536000));
        assert_eq!(offering.fixed_price, Some(162.0));
        assert_eq!(offering.multi_az, Some(false));
        assert_eq!(offering.db_instance_class.as_deref(), Some("db.m1.small"));
        let charges = offering.recurring_charges.as_ref().unwrap();
        assert_eq!(charges[0].recurring_charge_amount, Some(0.123));
        assert_eq!(charges[0].recurring_charge_frequency.as_deref(), Some("Hourly"));
    }

    #[test]
    fn empty_offering_list() {
        let body = r#"<DescribeReservedDBInstancesOfferingsResponse>
  <DescribeReservedDBInstancesOfferingsResult>
    <ReservedDBInstancesOfferings/>
  </DescribeReservedDBInstancesOfferingsResult>
</DescribeReservedDBInstancesOfferingsResponse>"#;
        let output = deser_operation_describe_reserved_db_instances_offerings(
            body.as_bytes(),
            DescribeReservedDbInstancesOfferingsOutput::builder(),
        )
        .unwrap()
        .build();
        assert_eq!(output.reserved_db_instances_offerings, Some(vec![]));
        assert_eq!(output.marker, None);
    }

    #[test]
    fn invalid_numbers_are_errors() {
        let body = r#"<DescribeReservedDBInstancesOfferingsResponse>
  <DescribeReservedDBInstancesOfferingsResult>
    <ReservedDBInstancesOfferings>
      <ReservedDBInstancesOffering><Duration>one year</Duration></ReservedDBInstancesOffering>
    </ReservedDBInstancesOfferings>
  </DescribeReservedDBInstancesOfferingsResult>
</DescribeReservedDBInstancesOfferingsResponse>"#;
        let err = deser_operation_describe_reserved_db_instances_offerings(
            body.as_bytes(),
            DescribeReservedDbInstancesOfferingsOutput::builder(),
        )
        .expect_err("duration is not a number");
        assert!(err.to_string().contains("<Duration>"), "{}", err);
    }

    #[test]
    fn error_response() {
        let body = r#"<ErrorResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <Error>
    <Type>Sender</Type>
    <Code>ReservedDBInstancesOfferingNotFound</Code>
    <Message>Offering SampleOfferingId not found</Message>
  </Error>
  <RequestId>a1b2c3</RequestId>
</ErrorResponse>"#;
        let err = parse_generic_error(body.as_bytes()).unwrap();
        assert_eq!(err.code(), Some("ReservedDBInstancesOfferingNotFound"));
        assert_eq!(err.message(), Some("Offering SampleOfferingId not found"));
        assert_eq!(err.request_id(), Some("a1b2c3"));
    }

    #[test]
    fn malformed_documents() {
        assert!(parse_generic_error(b"<ErrorResponse>").is_err());
        assert!(parse_generic_error(b"<ErrorResponse/>").is_err());
        assert!(parse_generic_error(b"<Other/>").is_err());
        // cut off after the code
        assert!(parse_generic_error(b"<ErrorResponse><Error><Code>Throttling</Code>").is_err());
        assert!(
            parse_generic_error(b"<ErrorResponse><Error><Code>Throttling</Code></Error>").is_err()
        );
        assert!(parse_generic_error(b"<ErrorResponse><RequestId>r</RequestId></ErrorResponse>").is_err());
        assert!(deser_operation_describe_reserved_db_instances_offerings(
            b"<DescribeReservedDBInstancesOfferingsResponse><DescribeReservedDBInstancesOfferingsResult><Marker>m</Marker></DescribeReservedDBInstancesOfferingsResult>",
            DescribeReservedDbInstancesOfferingsOutput::builder()
        )
        .is_err());
        let err = parse_generic_error(b"<ErrorResponse><Error><Code>Throttling</Code></Error></ErrorResponse>\n")
            .expect("complete document");
        assert_eq!(err.code(), Some("Throttling"));
        assert!(deser_operation_describe_reserved_db_instances_offerings(
            b"",
            DescribeReservedDbInstancesOfferingsOutput::builder()
        )
        .is_err());
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_xml::decode::{try_data, Document, ScopedDecoder, XmlError};
use std::convert::TryFrom;

/// Parses the generic error metadata out of an AWS Query error body:
///
/// ```xml
/// <ErrorResponse>
///   <Error>
///     <Type>Sender</Type>
///     <Code>CacheClusterNotFound</Code>
///     <Message>CacheCluster not found: my-cluster</Message>
///   </Error>
///   <RequestId>4b5b3e2a-7c4a-11e7-9d35-5f8f3b6b8c4e</RequestId>
/// </ErrorResponse>
/// ```
pub fn parse_generic_error(body: &[u8]) -> Result<smithy_types::Error, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    let mut err_builder = smithy_types::Error::builder();
    while let Some(mut tag) = root.next_tag() {
        match tag.start_el().local() {
            "Error" => {
                while let Some(mut error_field) = tag.next_tag() {
                    match error_field.start_el().local() {
                        "Code" => {
                            err_builder = err_builder.code(try_data(&mut error_field)?);
                        }
                        "Message" => {
                            err_builder = err_builder.message(try_data(&mut error_field)?);
                        }
                        _ => {}
                    }
                }
            }
            "RequestId" => {
                err_builder = err_builder.request_id(try_data(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(err_builder.build())
}

/// Positions a decoder on the `<Error>` element so modeled error members can be read from it
#[allow(unused)]
pub fn error_scope<'a, 'b>(doc: &'a mut Document<'b>) -> Result<ScopedDecoder<'b, 'a>, XmlError> {
    let root = doc
        .next_start_element()
        .ok_or_else(|| XmlError::custom("no root found searching for an Error"))?;
    if !root.matches("ErrorResponse") {
        return Err(XmlError::custom("expected ErrorResponse as root"));
    }

    while let Some(el) = doc.next_start_element() {
        if el.matches("Error") && el.depth() == 1 {
            return Ok(doc.scoped_to(el));
        }
        // otherwise, ignore it
    }
    Err(XmlError::custom("No Error found inside of ErrorResponse"))
}

#[cfg(test)]
mod test {
    use super::{error_scope, parse_generic_error};
    use smithy_xml::decode::{try_data, Document};
    use std::convert::TryFrom;

    const BODY: &[u8] = br#"<ErrorResponse>
  <Error>
    <Type>Sender</Type>
    <Code>ReplicationGroupNotFoundFault</Code>
    <Message>ReplicationGroup not found: rg-1 &amp; friends</Message>
    <Boom/>
  </Error>
  <RequestId>foo-id</RequestId>
</ErrorResponse>"#;

    #[test]
    fn parse_wrapped_error() {
        let parsed = parse_generic_error(BODY).expect("valid body");
        assert_eq!(parsed.request_id(), Some("foo-id"));
        assert_eq!(
            parsed.message(),
            Some("ReplicationGroup not found: rg-1 & friends")
        );
        assert_eq!(parsed.code(), Some("ReplicationGroupNotFoundFault"));
    }

    #[test]
    fn wrong_root_is_still_generic() {
        // the root is not validated, unknown children are skipped
        let parsed = parse_generic_error(b"<Oops><Other>1</Other></Oops>").expect("valid xml");
        assert_eq!(parsed, smithy_types::Error::builder().build());
    }

    #[test]
    fn invalid_xml_is_an_error() {
        assert!(parse_generic_error(b"not xml <").is_err());
    }

    #[test]
    fn error_scope_finds_the_error_element() {
        let mut doc = Document::try_from(BODY).expect("valid");
        let mut error = error_scope(&mut doc).expect("contains an error");
        let mut message = None;
        while let Some(mut tag) = error.next_tag() {
            if tag.start_el().matches("Message") {
                message = Some(try_data(&mut tag).expect("text").to_string());
            }
        }
        assert_eq!(
            message.as_deref(),
            Some("ReplicationGroup not found: rg-1 & friends")
        );
    }

    #[test]
    fn error_scope_requires_error_response() {
        let mut doc = Document::try_from(&b"<Response><Error/></Response>"[..]).expect("valid");
        assert!(error_scope(&mut doc).is_err());
        let mut doc = Document::try_from(&b"<ErrorResponse/>"[..]).expect("valid");
        assert!(error_scope(&mut doc).is_err());
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use smithy_types::instant::DateTimeFormatError;
use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// An HTTP request paired with the handler that knows how to parse its response
#[derive(Debug)]
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

/// An error occurred attempting to build an `Operation` from an input
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to serialize input: {0}")]
    SerializationError(#[from] SerializationError),

    /// An error occurred request construction
    #[error("error constructing operation: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl From<http::Error> for BuildError {
    fn from(err: http::Error) -> Self {
        BuildError::Other(err.into())
    }
}

/// A member of the input couldn't be written to the wire
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("failed to format timestamp: {0}")]
    DateTimeFormatError(#[from] DateTimeFormatError),
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`)
    properties: Rc<RefCell<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: Rc::new(RefCell::new(PropertyBag::new())),
        }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let properties: &mut PropertyBag = &mut self.properties.as_ref().borrow_mut();
            f(self.inner, properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn properties_mut(&mut self) -> RefMut<'_, PropertyBag> {
        self.properties.as_ref().borrow_mut()
    }

    pub fn properties(&self) -> Ref<'_, PropertyBag> {
        self.properties.as_ref().borrow()
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Rc<RefCell<PropertyBag>>) {
        (self.inner, self.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};
    use http::header::CONTENT_TYPE;
    use http::Uri;

    #[test]
    fn augment_shares_properties() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("/"))
                .method("POST")
                .body(SdkBody::from("Action=DeleteSnapshot"))
                .expect("valid request"),
        );
        request.properties_mut().insert("elasticache");
        let request = request
            .augment(|mut req, props| {
                let service = *props.get::<&str>().expect("inserted above");
                req.headers_mut()
                    .insert("x-service", service.parse().expect("valid header"));
                props.insert(7_u8);
                Result::<_, BuildError>::Ok(req)
            })
            .expect("infallible");
        assert_eq!(request.properties().get::<u8>(), Some(&7));
        let (http_req, props) = request.into_parts();
        assert_eq!(http_req.headers().get("x-service").unwrap(), "elasticache");
        assert!(http_req.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(props.as_ref().borrow().len(), 2);
    }

    #[test]
    fn operation_metadata() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let op = Operation::new(request, "handler")
            .with_metadata(Metadata::new("DescribeEvents", "elasticache"));
        assert_eq!(op.metadata().map(|m| m.name()), Some("DescribeEvents"));
        assert_eq!(op.metadata().map(|m| m.service()), Some("elasticache"));
        assert_eq!(op.response_handler(), &"handler");
    }

    #[test]
    fn http_errors_become_build_errors() {
        let err = http::Request::builder()
            .uri("not a uri with spaces")
            .body(SdkBody::empty())
            .expect_err("invalid uri");
        let build_error = BuildError::from(err);
        assert!(matches!(build_error, BuildError::Other(_)));
    }
}

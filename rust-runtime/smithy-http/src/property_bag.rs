/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A typemap used to store configuration for an operation.
//!
//! Middleware reads what it needs (region, endpoint resolver, signing service) out of the bag by
//! type, so adding a new piece of configuration never changes a middleware signature.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

type AnyMap = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

/// A type-map of configuration data.
///
/// `PropertyBag` can be used by operations and middleware to store configuration
/// keyed by type.
#[derive(Default)]
pub struct PropertyBag {
    map: AnyMap,
}

impl PropertyBag {
    /// Create an empty `PropertyBag`.
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: AnyMap::default(),
        }
    }

    /// Insert a type into this `PropertyBag`.
    ///
    /// If a value of this type already existed, it will be returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use smithy_http::property_bag::PropertyBag;
    /// let mut props = PropertyBag::new();
    ///
    /// #[derive(Debug, Eq, PartialEq)]
    /// struct Region(&'static str);
    /// assert!(props.insert(Region("us-east-1")).is_none());
    /// assert_eq!(props.insert(Region("eu-west-1")), Some(Region("us-east-1")));
    /// ```
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    /// Get a reference to a type previously inserted on this `PropertyBag`.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Get a mutable reference to a type previously inserted on this `PropertyBag`.
    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    /// Remove a type from this `PropertyBag`.
    ///
    /// If a value of this type existed, it will be returned.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    /// Number of values stored in the bag
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBag")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use crate::property_bag::PropertyBag;

    #[test]
    fn insert_get_remove() {
        #[derive(Debug, PartialEq)]
        struct SigningName(&'static str);

        let mut props = PropertyBag::new();
        assert!(props.is_empty());
        props.insert(5_i32);
        props.insert(SigningName("elasticache"));
        assert_eq!(props.get::<i32>(), Some(&5));
        assert_eq!(props.get::<SigningName>(), Some(&SigningName("elasticache")));
        assert_eq!(props.get::<u8>(), None);

        if let Some(value) = props.get_mut::<i32>() {
            *value += 1;
        }
        assert_eq!(props.remove::<i32>(), Some(6));
        assert_eq!(props.len(), 1);
    }
}

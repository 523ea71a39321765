/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstraction for testing code that reads the process environment

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Environment variable abstraction
///
/// Environment variables are global to a process and hard to test under Rust's multi-threaded
/// test runner. `Env` reads either the real process environment ([`std::env::var`](std::env::var))
/// or a fixed map.
///
/// Cloning is cheap: a faked environment lives behind an `Arc`.
#[derive(Clone)]
pub struct Env(Arc<Inner>);

enum Inner {
    Real,
    Fake(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl Env {
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            Inner::Real => std::env::var(k),
            Inner::Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Create a fake process environment from a slice of tuples.
    ///
    /// # Example
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let mock_env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
    /// assert_eq!(mock_env.get("AWS_REGION").unwrap(), "eu-west-1");
    /// ```
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        Self(Arc::new(Inner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// Delegates to [`std::env::var`](std::env::var)
    pub fn real() -> Self {
        Self(Arc::new(Inner::Real))
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(hash_map: HashMap<String, String>) -> Self {
        Self(Arc::new(Inner::Fake(hash_map)))
    }
}

impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_ref() {
            Inner::Real => f.write_str("Env::Real"),
            Inner::Fake(_) => f.write_str("Env::Fake"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::collections::HashMap;
    use std::env::VarError;

    #[test]
    fn env_works() {
        let env = Env::from_slice(&[("FOO", "BAR")]);
        assert_eq!(env.get("FOO").unwrap(), "BAR");
        assert_eq!(
            env.get("OTHER").expect_err("no present"),
            VarError::NotPresent
        )
    }

    #[test]
    fn env_from_map() {
        let mut vars = HashMap::new();
        vars.insert("AWS_DEFAULT_REGION".to_string(), "ap-south-1".to_string());
        let env = Env::from(vars);
        assert_eq!(env.get("AWS_DEFAULT_REGION").unwrap(), "ap-south-1");
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting and parsing of Smithy primitives as they appear in text protocols.
//!
//! Floats follow the Smithy conventions: `NaN`, `Infinity` and `-Infinity` are spelled out.
//!
//! ```rust
//! use smithy_types::primitive::{Encoder, Parse};
//! let mut encoder = Encoder::from(17_i32);
//! assert_eq!(encoder.encode(), "17");
//! assert_eq!(f64::parse_smithy_primitive("-Infinity"), Ok(f64::NEG_INFINITY));
//! ```

use crate::Number;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveParseError(&'static str);

impl fmt::Display for PrimitiveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse input as {}", self.0)
    }
}

impl std::error::Error for PrimitiveParseError {}

pub trait Parse
where
    Self: Sized,
{
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError>;
}

impl Parse for bool {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
        match input {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(PrimitiveParseError("bool")),
        }
    }
}

macro_rules! parse_integer {
    ($($ty:ty),*) => {
        $(
            impl Parse for $ty {
                fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
                    FromStr::from_str(input).map_err(|_| PrimitiveParseError(stringify!($ty)))
                }
            }
        )*
    };
}

parse_integer!(i8, i16, i32, i64);

impl Parse for f32 {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
        float::parse_f32(input).map_err(|_| PrimitiveParseError("f32"))
    }
}

impl Parse for f64 {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
        float::parse_f64(input).map_err(|_| PrimitiveParseError("f64"))
    }
}

/// Bit pattern of a float with every `NaN` collapsed to one value.
///
/// Two floats with the same canonical bits are interchangeable, so comparing these gives an
/// equality that is reflexive (`NaN == NaN`) and consistent with hashing. `0.0` and `-0.0`
/// remain distinct.
pub fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

enum Inner {
    Bool(bool),
    I64(i64, itoa::Buffer),
    U64(u64, itoa::Buffer),
    F64(f64, ryu::Buffer),
}

/// Encodes a primitive into its textual wire form without allocating
pub struct Encoder {
    value: Inner,
}

impl Encoder {
    pub fn encode(&mut self) -> &str {
        match &mut self.value {
            Inner::Bool(true) => "true",
            Inner::Bool(false) => "false",
            Inner::I64(v, buf) => buf.format(*v),
            Inner::U64(v, buf) => buf.format(*v),
            Inner::F64(v, buf) => float::format(*v, buf),
        }
    }
}

impl From<bool> for Encoder {
    fn from(input: bool) -> Self {
        Self {
            value: Inner::Bool(input),
        }
    }
}

impl From<i32> for Encoder {
    fn from(input: i32) -> Self {
        Self::from(i64::from(input))
    }
}

impl From<i64> for Encoder {
    fn from(input: i64) -> Self {
        Self {
            value: Inner::I64(input, itoa::Buffer::new()),
        }
    }
}

impl From<u64> for Encoder {
    fn from(input: u64) -> Self {
        Self {
            value: Inner::U64(input, itoa::Buffer::new()),
        }
    }
}

impl From<f32> for Encoder {
    fn from(input: f32) -> Self {
        Self::from(f64::from(input))
    }
}

impl From<f64> for Encoder {
    fn from(input: f64) -> Self {
        Self {
            value: Inner::F64(input, ryu::Buffer::new()),
        }
    }
}

impl From<Number> for Encoder {
    fn from(input: Number) -> Self {
        match input {
            Number::PosInt(v) => Self::from(v),
            Number::NegInt(v) => Self::from(v),
            Number::Float(v) => Self::from(v),
        }
    }
}

mod float {
    use std::num::ParseFloatError;

    const NAN: &str = "NaN";
    const INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";

    pub(super) fn format(value: f64, buf: &mut ryu::Buffer) -> &str {
        if value.is_nan() {
            NAN
        } else if value == f64::INFINITY {
            INFINITY
        } else if value == f64::NEG_INFINITY {
            NEG_INFINITY
        } else {
            buf.format_finite(value)
        }
    }

    pub(super) fn parse_f64(input: &str) -> Result<f64, ParseFloatError> {
        match input {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            other => other.parse(),
        }
    }

    pub(super) fn parse_f32(input: &str) -> Result<f32, ParseFloatError> {
        match input {
            NAN => Ok(f32::NAN),
            INFINITY => Ok(f32::INFINITY),
            NEG_INFINITY => Ok(f32::NEG_INFINITY),
            other => other.parse(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{canonical_bits, Encoder, Parse};
    use crate::Number;

    #[test]
    fn encode_primitives() {
        assert_eq!(Encoder::from(true).encode(), "true");
        assert_eq!(Encoder::from(-42_i32).encode(), "-42");
        assert_eq!(Encoder::from(Number::PosInt(u64::MAX)).encode(), "18446744073709551615");
        assert_eq!(Encoder::from(0.25_f64).encode(), "0.25");
        assert_eq!(Encoder::from(f64::NAN).encode(), "NaN");
        assert_eq!(Encoder::from(f64::NEG_INFINITY).encode(), "-Infinity");
    }

    #[test]
    fn canonical_bits_are_total() {
        let parsed_nan = f64::parse_smithy_primitive("NaN").unwrap();
        assert_eq!(canonical_bits(parsed_nan), canonical_bits(-f64::NAN));
        assert_eq!(canonical_bits(0.25), canonical_bits(0.25));
        assert_ne!(canonical_bits(0.0), canonical_bits(-0.0));
        assert_ne!(canonical_bits(f64::INFINITY), canonical_bits(f64::NAN));
    }

    #[test]
    fn parse_primitives() {
        assert_eq!(bool::parse_smithy_primitive("true"), Ok(true));
        assert!(bool::parse_smithy_primitive("True").is_err());
        assert_eq!(i32::parse_smithy_primitive("6379"), Ok(6379));
        assert!(i32::parse_smithy_primitive("6379.0").is_err());
        assert_eq!(f64::parse_smithy_primitive("0.012"), Ok(0.012));
        assert_eq!(f64::parse_smithy_primitive("Infinity"), Ok(f64::INFINITY));
        assert!(f64::parse_smithy_primitive("NaN").unwrap().is_nan());
    }
}

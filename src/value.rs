//! Raw INI values and their typed views.
//!
//! A [`Value`] is always the trimmed string found on the right-hand side of
//! `=`. Typed access goes through [`Value::to`], which asks a [`FromValue`]
//! implementation to read the string. Nothing is cached: the string stays the
//! single source of truth and every conversion re-reads it.
//!
//! ## Conversion Rules
//!
//! | Target | Accepts | Fails with |
//! |--------|---------|------------|
//! | integers | longest `-?[0-9]+` prefix (`-` only for signed types) | `InvalidArgument`, `OutOfRange` |
//! | `f32`, `f64` | longest decimal/exponent prefix, `inf`, `infinity`, `nan` | `InvalidArgument`, `OutOfRange` |
//! | `bool` | exactly `true`, `True`, `false`, `False` | `InvalidBool` |
//! | `String` | anything | never |
//!
//! Numeric parsing is deliberately prefix based: trailing characters after a
//! valid number are ignored.
//!
//! ```rust
//! use inifile::Value;
//!
//! assert_eq!(Value::from("1#*").to::<i32>(), Ok(1));
//! assert_eq!(Value::from("78.2())").to::<f64>(), Ok(78.2));
//! assert!(Value::from("-1").to::<u32>().is_err());
//! assert!(Value::from("1000000000000").to::<i32>().is_err());
//! assert_eq!(Value::from("1000000000000").to::<i64>(), Ok(1_000_000_000_000));
//! assert_eq!(Value::from("True").to::<bool>(), Ok(true));
//! ```

use crate::error::DecodeError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::IntErrorKind;

/// A raw INI value.
///
/// # Examples
///
/// ```rust
/// use inifile::Value;
///
/// let value = Value::from("8080");
/// assert_eq!(value.as_str(), "8080");
/// assert_eq!(value.to::<u16>(), Ok(8080));
/// assert_eq!(value, "8080");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Value(String);

impl Value {
    /// Creates a value from anything string-like.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Value(raw.into())
    }

    /// Empty value, usable in `static` position.
    pub(crate) const EMPTY: Value = Value(String::new());

    /// Returns the raw string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the raw string into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the string does not read as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::{DecodeError, Value};
    ///
    /// assert_eq!(Value::from("-2").to::<i8>(), Ok(-2));
    /// assert!(matches!(
    ///     Value::from("300").to::<u8>(),
    ///     Err(DecodeError::OutOfRange { .. })
    /// ));
    /// ```
    pub fn to<T: FromValue>(&self) -> Result<T, DecodeError> {
        T::from_value(&self.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value(value.clone())
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.0
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number or boolean")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value(value))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Conversion from a raw INI value string.
///
/// Implemented for every primitive integer, `f32`, `f64`, `bool` and
/// `String`. Implement it for your own types to make them reachable through
/// [`Value::to`].
///
/// # Examples
///
/// ```rust
/// use inifile::{DecodeError, FromValue, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl FromValue for Port {
///     fn from_value(raw: &str) -> Result<Self, DecodeError> {
///         u16::from_value(raw).map(Port)
///     }
/// }
///
/// assert_eq!(Value::from("443").to::<Port>(), Ok(Port(443)));
/// ```
pub trait FromValue: Sized {
    /// Reads `Self` from the raw string.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the string cannot represent `Self`.
    fn from_value(raw: &str) -> Result<Self, DecodeError>;
}

impl FromValue for String {
    fn from_value(raw: &str) -> Result<Self, DecodeError> {
        Ok(raw.to_string())
    }
}

impl FromValue for bool {
    fn from_value(raw: &str) -> Result<Self, DecodeError> {
        match raw {
            "true" | "True" => Ok(true),
            "false" | "False" => Ok(false),
            _ => Err(DecodeError::invalid_bool(raw)),
        }
    }
}

/// Length of the longest `-?[0-9]+` prefix, or `None` if there is no digit.
fn integer_prefix_len(raw: &str, signed: bool) -> Option<usize> {
    let bytes = raw.as_bytes();
    let start = usize::from(signed && bytes.first() == Some(&b'-'));
    let digits = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        None
    } else {
        Some(start + digits)
    }
}

macro_rules! impl_from_value_int {
    ($signed:expr => $($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(raw: &str) -> Result<Self, DecodeError> {
                    let target = stringify!($ty);
                    let len = integer_prefix_len(raw, $signed)
                        .ok_or_else(|| DecodeError::invalid_argument(raw, target))?;

                    raw[..len].parse::<$ty>().map_err(|e| match e.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            DecodeError::out_of_range(raw, target)
                        }
                        _ => DecodeError::invalid_argument(raw, target),
                    })
                }
            }
        )*
    };
}

impl_from_value_int!(true => i8, i16, i32, i64, i128, isize);
impl_from_value_int!(false => u8, u16, u32, u64, u128, usize);

/// Float prefix scan result.
struct FloatPrefix {
    len: usize,
    /// The mantissa has at least one non-zero digit.
    nonzero: bool,
    /// The literal spells out infinity.
    infinite: bool,
}

/// Finds the longest prefix that reads as a decimal float.
fn float_prefix(raw: &str) -> Option<FloatPrefix> {
    let bytes = raw.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));

    let rest = &raw[pos..];
    for (word, infinite) in [("infinity", true), ("inf", true), ("nan", false)] {
        let matches = rest
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word));
        if matches {
            return Some(FloatPrefix {
                len: pos + word.len(),
                nonzero: !infinite,
                infinite,
            });
        }
    }

    let mut digits = 0;
    let mut nonzero = false;
    let mut scan_digits = |pos: &mut usize| {
        while let Some(b) = bytes.get(*pos).filter(|b| b.is_ascii_digit()) {
            nonzero |= *b != b'0';
            digits += 1;
            *pos += 1;
        }
    };

    scan_digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        scan_digits(&mut pos);
    }

    if digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = bytes[exp.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    Some(FloatPrefix {
        len: pos,
        nonzero,
        infinite: false,
    })
}

macro_rules! impl_from_value_float {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(raw: &str) -> Result<Self, DecodeError> {
                    let target = stringify!($ty);
                    let prefix = float_prefix(raw)
                        .ok_or_else(|| DecodeError::invalid_argument(raw, target))?;

                    let number = raw[..prefix.len]
                        .parse::<$ty>()
                        .map_err(|_| DecodeError::invalid_argument(raw, target))?;

                    let overflow = number.is_infinite() && !prefix.infinite;
                    let underflow = number == 0.0 && prefix.nonzero;
                    if overflow || underflow {
                        return Err(DecodeError::out_of_range(raw, target));
                    }

                    Ok(number)
                }
            }
        )*
    };
}

impl_from_value_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_decimal() {
        assert_eq!(Value::from("3").to::<i32>(), Ok(3));
        assert_eq!(Value::from("0").to::<i64>(), Ok(0));
        assert_eq!(Value::from("-2").to::<i32>(), Ok(-2));
    }

    #[test]
    fn test_integer_partial_prefix() {
        assert_eq!(Value::from("1#*").to::<i32>(), Ok(1));
        assert_eq!(Value::from("-1&").to::<i32>(), Ok(-1));
        assert_eq!(Value::from("78)").to::<i32>(), Ok(78));
        assert_eq!(Value::from("123,456").to::<i32>(), Ok(123));
        assert_eq!(Value::from("-123,456").to::<i32>(), Ok(-123));
        assert_eq!(Value::from("7,123,0000").to::<i32>(), Ok(7));
    }

    #[test]
    fn test_integer_from_floating_point_text() {
        assert_eq!(Value::from("1.").to::<i32>(), Ok(1));
        assert_eq!(Value::from("1.8").to::<i32>(), Ok(1));
        assert_eq!(Value::from("-1.8").to::<i32>(), Ok(-1));
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = Value::from("-1").to::<u32>().unwrap_err();
        assert!(matches!(err, DecodeError::InvalidArgument { target: "u32", .. }));
        assert_eq!(Value::from("-1").to::<i32>(), Ok(-1));

        let err = Value::from("1000000000000").to::<i32>().unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(
            Value::from("1000000000000").to::<i64>(),
            Ok(1_000_000_000_000)
        );

        assert!(Value::from("-129").to::<i8>().unwrap_err().is_out_of_range());
        assert_eq!(Value::from("255").to::<u8>(), Ok(255));
    }

    #[test]
    fn test_integer_invalid_argument() {
        for raw in ["#33", "true", "string", "", "+1", " 1", "-"] {
            let err = Value::from(raw).to::<i32>().unwrap_err();
            assert!(
                matches!(err, DecodeError::InvalidArgument { .. }),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_float_decimal_and_scientific() {
        assert_eq!(Value::from("1.06").to::<f32>(), Ok(1.06_f32));
        assert_eq!(Value::from("-1.2").to::<f64>(), Ok(-1.2));
        assert_eq!(Value::from("0").to::<f32>(), Ok(0.0));
        assert_eq!(Value::from("0.000").to::<f64>(), Ok(0.0));
        assert_eq!(Value::from("1e6").to::<f32>(), Ok(1e6_f32));
        assert_eq!(Value::from("-1E2").to::<f64>(), Ok(-1e2));
        assert_eq!(Value::from("1e-1").to::<f32>(), Ok(1e-1_f32));
        assert_eq!(Value::from(".5").to::<f64>(), Ok(0.5));
    }

    #[test]
    fn test_float_partial_prefix() {
        assert_eq!(Value::from("1.0#*").to::<f64>(), Ok(1.0));
        assert_eq!(Value::from("-1-&").to::<f64>(), Ok(-1.0));
        assert_eq!(Value::from("78.2())").to::<f64>(), Ok(78.2));
        assert_eq!(Value::from("2e").to::<f64>(), Ok(2.0));
        assert_eq!(Value::from("2e+x").to::<f64>(), Ok(2.0));
    }

    #[test]
    fn test_float_out_of_range() {
        assert!(Value::from("-1e50").to::<f32>().unwrap_err().is_out_of_range());
        assert!(Value::from("-1e50").to::<f64>().is_ok());

        assert!(Value::from("1e310").to::<f32>().unwrap_err().is_out_of_range());
        assert!(Value::from("1e310").to::<f64>().unwrap_err().is_out_of_range());

        assert!(Value::from("1e-46").to::<f32>().unwrap_err().is_out_of_range());
        assert!(Value::from("1e-46").to::<f64>().is_ok());

        assert!(Value::from("1e-326").to::<f32>().unwrap_err().is_out_of_range());
        assert!(Value::from("1e-326").to::<f64>().unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_float_special_words() {
        assert_eq!(Value::from("inf").to::<f64>(), Ok(f64::INFINITY));
        assert_eq!(Value::from("-Infinity").to::<f32>(), Ok(f32::NEG_INFINITY));
        assert!(Value::from("NaN").to::<f64>().unwrap().is_nan());
    }

    #[test]
    fn test_float_invalid_argument() {
        for raw in ["#33", "true", "string", "", ".", "-.", "e5"] {
            let err = Value::from(raw).to::<f64>().unwrap_err();
            assert!(
                matches!(err, DecodeError::InvalidArgument { .. }),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_bool() {
        assert_eq!(Value::from("True").to::<bool>(), Ok(true));
        assert_eq!(Value::from("true").to::<bool>(), Ok(true));
        assert_eq!(Value::from("False").to::<bool>(), Ok(false));
        assert_eq!(Value::from("false").to::<bool>(), Ok(false));

        for raw in ["TRUE", "1", "ture", "False+", ""] {
            assert_eq!(
                Value::from(raw).to::<bool>(),
                Err(DecodeError::InvalidBool {
                    input: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn test_string_and_from_primitives() {
        assert_eq!(Value::from("a b").to::<String>(), Ok("a b".to_string()));
        assert_eq!(Value::from(42u8), "42");
        assert_eq!(Value::from(-3i64), "-3");
        assert_eq!(Value::from(true), "true");
        assert_eq!(Value::from(1.5f64), "1.5");
        assert!(Value::default().is_empty());
    }

    #[test]
    fn test_value_serde() {
        let value = Value::from("hello");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"hello\"");

        let back: Value = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(back, value);

        let number: Value = serde_json::from_str("42").unwrap();
        assert_eq!(number, "42");

        let flag: Value = serde_json::from_str("false").unwrap();
        assert_eq!(flag.to::<bool>(), Ok(false));
    }
}

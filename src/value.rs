//! Dynamically typed conversion results.
//!
//! Host code that reads `key=value` properties usually knows each key's type
//! only at runtime. [`Kind`] names the target type and [`Value::parse`] runs
//! the matching strict conversion.
//!
//! ```rust
//! use strictconv::{Kind, Radix, Value};
//!
//! let kind: Kind = "uint32".parse().unwrap();
//! assert_eq!(Value::parse(kind, Some("48000"), Radix::DECIMAL), Some(Value::Uint32(48000)));
//! assert_eq!(Value::parse(kind, Some("48k"), Radix::DECIMAL), None);
//! ```

use crate::error::UnknownKind;
use crate::{parse_bool, try_parse_float, try_parse_int, Radix, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The primitive types a string can be converted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    Bool,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 7] = [
        Kind::Int32,
        Kind::Uint32,
        Kind::Int64,
        Kind::Uint64,
        Kind::Float,
        Kind::Double,
        Kind::Bool,
    ];

    /// The lowercase name, as used by [`FromStr`] and serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Int32 => "int32",
            Kind::Uint32 => "uint32",
            Kind::Int64 => "int64",
            Kind::Uint64 => "uint64",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Bool => "bool",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// A successfully converted primitive.
///
/// Serializes adjacently tagged: `{"kind": "int32", "value": -5}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Float(f32),
    Double(f64),
    Bool(bool),
}

impl Value {
    /// Strictly converts `text` to `kind`, or `None` if it is not a valid
    /// value of that kind.
    ///
    /// `radix` only applies to integer kinds. Booleans follow
    /// [`parse_bool`] and therefore always produce a value.
    #[must_use]
    pub fn parse(kind: Kind, text: Option<&str>, radix: Radix) -> Option<Value> {
        if kind == Kind::Bool {
            return Some(Value::Bool(parse_bool(text)));
        }
        let text = text?;
        match Value::try_parse(kind, text, radix) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::trace!(input = text, %kind, %error, "rejected value");
                None
            }
        }
    }

    /// Like [`Value::parse`] for present text, keeping the failure reason.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`](crate::Error) of the underlying strict conversion.
    pub fn try_parse(kind: Kind, text: &str, radix: Radix) -> Result<Value> {
        Ok(match kind {
            Kind::Int32 => Value::Int32(try_parse_int(text, radix)?),
            Kind::Uint32 => Value::Uint32(try_parse_int(text, radix)?),
            Kind::Int64 => Value::Int64(try_parse_int(text, radix)?),
            Kind::Uint64 => Value::Uint64(try_parse_int(text, radix)?),
            Kind::Float => Value::Float(try_parse_float(text)?),
            Kind::Double => Value::Double(try_parse_float(text)?),
            Kind::Bool => Value::Bool(parse_bool(Some(text))),
        })
    }

    /// The kind this value was converted to.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Int32(_) => Kind::Int32,
            Value::Uint32(_) => Kind::Uint32,
            Value::Int64(_) => Kind::Int64,
            Value::Uint64(_) => Kind::Uint64,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::Bool(_) => Kind::Bool,
        }
    }
}

/// Renders the value so that [`Value::parse`] with [`Radix::DECIMAL`] reads
/// it back.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int32(v) => write!(f, "{v}"),
            Value::Uint32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Uint64(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_kind_names_roundtrip() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
        assert_eq!("int".parse::<Kind>(), Err(UnknownKind("int".to_string())));
    }

    #[test]
    fn test_parse_by_kind() {
        assert_eq!(
            Value::parse(Kind::Int32, Some("-12"), Radix::DECIMAL),
            Some(Value::Int32(-12))
        );
        assert_eq!(
            Value::parse(Kind::Uint64, Some("0x10"), Radix::AUTO),
            Some(Value::Uint64(16))
        );
        assert_eq!(
            Value::parse(Kind::Double, Some("0.5"), Radix::DECIMAL),
            Some(Value::Double(0.5))
        );
        assert_eq!(Value::parse(Kind::Float, None, Radix::DECIMAL), None);
        assert_eq!(Value::parse(Kind::Uint32, Some("-1"), Radix::DECIMAL), None);
    }

    #[test]
    fn test_bool_never_fails() {
        assert_eq!(
            Value::parse(Kind::Bool, None, Radix::DECIMAL),
            Some(Value::Bool(false))
        );
        assert_eq!(
            Value::parse(Kind::Bool, Some("1"), Radix::DECIMAL),
            Some(Value::Bool(true))
        );
    }

    #[test]
    fn test_try_parse_reason() {
        assert_eq!(
            Value::try_parse(Kind::Int32, "99999999999", Radix::DECIMAL),
            Err(Error::OutOfRange { kind: "int32" })
        );
    }

    #[test]
    fn test_display_reparses() {
        let values = [
            Value::Int32(i32::MIN),
            Value::Uint64(u64::MAX),
            Value::Double(1e-7),
            Value::Float(3.25),
            Value::Bool(true),
        ];
        for value in values {
            let text = value.to_string();
            assert_eq!(
                Value::parse(value.kind(), Some(text.as_str()), Radix::DECIMAL),
                Some(value),
                "{text}"
            );
        }
    }
}

//! Primitive values carried by declared enum constants.
//!
//! Two notions of equality live side by side:
//! - **strict** (`PartialEq`): same variant and same contents. Used when resolving a member by value, so the
//!   string `"0"` never matches the integer `0`.
//! - **loose** ([`Scalar::loosely_eq`]): compares the `Display` forms. Used by `Enum::is`.

use std::borrow::Cow;
use std::fmt;

/// A primitive constant value.
///
/// ## Notes
/// - `Str` holds a `Cow<'static, str>` so declared constants can live in `const` tables (`Cow::Borrowed`) while
///   runtime candidates (parsed input, JSON) can be owned.
/// - `Float` compares with IEEE semantics, so a `NaN` candidate never resolves.
///
/// ## Examples
/// ```rust
/// use constenum_core::Scalar;
///
/// const DRAFT: Scalar = Scalar::str("draft");
/// assert_eq!(DRAFT, Scalar::from("draft"));
/// assert_ne!(Scalar::from("0"), Scalar::from(0));
/// assert!(Scalar::from("0").loosely_eq(&Scalar::from(0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Cow<'static, str>),
}

impl Scalar {
    /// Build a borrowed string scalar; usable in `const` contexts.
    pub const fn str(s: &'static str) -> Self {
        Scalar::Str(Cow::Borrowed(s))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "str",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Compare the string forms of two values.
    ///
    /// ## Notes
    /// - Intentionally coercive: `Scalar::from("1")` is loosely equal to `Scalar::from(1)`.
    pub fn loosely_eq(&self, other: &Scalar) -> bool {
        self.to_string() == other.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(Cow::Owned(s.to_owned()))
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(Cow::Owned(s))
    }
}

impl From<Cow<'static, str>> for Scalar {
    fn from(s: Cow<'static, str>) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Int(i64::from(i))
    }
}

impl From<u32> for Scalar {
    fn from(i: u32) -> Self {
        Scalar::Int(i64::from(i))
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;

    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::Scalar;

    impl Serialize for Scalar {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Scalar::Bool(b) => serializer.serialize_bool(*b),
                Scalar::Int(i) => serializer.serialize_i64(*i),
                Scalar::Float(x) => serializer.serialize_f64(*x),
                Scalar::Str(s) => serializer.serialize_str(s),
            }
        }
    }

    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Scalar;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, integer, float, or boolean")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
            Ok(Scalar::Bool(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
            Ok(Scalar::Int(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
            i64::try_from(v)
                .map(Scalar::Int)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &"an integer that fits in i64"))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
            Ok(Scalar::Float(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
            Ok(Scalar::from(v))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
            Ok(Scalar::from(v))
        }
    }

    impl<'de> Deserialize<'de> for Scalar {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ScalarVisitor)
        }
    }
}

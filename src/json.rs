//! JSON serialization support for enum instances.
//!
//! An instance crosses the serialization boundary as the string form of its value; the key, ordinal, and type
//! options stay behind. An unset instance serializes as `null`.
//!
//! Deserializing reads a JSON scalar and resolves it strictly by value, so `"1"` and `1` are different inputs.
//! `null` takes the no-value path (unset for nullable types, otherwise the default, otherwise `NoDefaultValue`).

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use constenum_core::Scalar;

use crate::enum_type::EnumType;
use crate::instance::Enum;

impl<T: EnumType> Serialize for Enum<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_unset() {
            serializer.serialize_none()
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de, T: EnumType> Deserialize<'de> for Enum<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Enum::construct(value).map_err(D::Error::custom)
    }
}

/// Trait for types that can be serialized to JSON.
///
/// This is automatically implemented for any type that implements `serde::Serialize`.
pub trait ToJson: Serialize {
    /// Serializes this value to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes this value to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Trait for types that can be deserialized from JSON.
///
/// This is automatically implemented for any type that implements `serde::Deserialize`.
pub trait FromJson: for<'de> Deserialize<'de> {
    /// Deserializes a value from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or names no member of the enum type.
    fn from_json(json: &str) -> Result<Self, serde_json::Error>
    where
        Self: Sized,
    {
        serde_json::from_str(json)
    }
}

// Blanket implementations for all types that implement the required serde traits
impl<T: Serialize + ?Sized> ToJson for T {}
impl<T: for<'de> Deserialize<'de>> FromJson for T {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use constenum_core::{Constant, EnumOptions};

    struct Flag;

    impl EnumType for Flag {
        const NAME: &'static str = "Flag";
        const CONSTANTS: &'static [Constant] = &[
            Constant::new("on", Scalar::Int(1)),
            Constant::new("off", Scalar::Int(0)),
        ];

        fn options() -> EnumOptions {
            EnumOptions::new().with_nullable(true)
        }
    }

    #[test]
    fn serializes_string_form() {
        let on = Enum::<Flag>::from_value(1).unwrap();
        assert_eq!(on.to_json().unwrap(), r#""1""#);
        assert_eq!(Enum::<Flag>::new().unwrap().to_json().unwrap(), "null");
    }

    #[test]
    fn deserializes_strictly() {
        let off = Enum::<Flag>::from_json("0").unwrap();
        assert_eq!(off.key(), Some("off"));

        let err = Enum::<Flag>::from_json(r#""0""#).unwrap_err();
        assert!(err.to_string().starts_with("value `0` (str) not found in enum `Flag`"), "{err}");

        assert!(Enum::<Flag>::from_json("null").unwrap().is_unset());
    }
}

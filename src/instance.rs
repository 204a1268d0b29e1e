//! Enum instances: one resolved member of an [`EnumType`].
//!
//! Resolution rules:
//! - **No value**: a nullable type yields an unset instance; otherwise the declared default is resolved; otherwise
//!   `NoDefaultValue`.
//! - **A value**: matched *strictly* against the declared values, first declaration wins; no match is
//!   `ValueNotFound`.
//! - **A name** ([`Enum::from_name`]): a declared constant name resolves to that constant's value; any other string
//!   is tried as a literal value.
//!
//! Instances are immutable once built and never hold a reference to their descriptor; type-level questions go back
//! through the [`registry`](crate::registry).

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use constenum_core::{EnumError, Scalar};
use indexmap::IndexMap;

use crate::enum_type::EnumType;
use crate::registry;

/// A member of the enum type `T`, or the unset state of a nullable `T`.
///
/// ## Examples
/// ```rust
/// use constenum::prelude::*;
///
/// #[derive(ConstEnum)]
/// #[const_enum(default = draft)]
/// #[constants(draft = "draft", active = "active", archived = "archived", cancelled = "cancelled")]
/// struct Status;
///
/// let status = Enum::<Status>::new()?;
/// assert_eq!(status.value(), Some(&Scalar::from("draft")));
/// assert_eq!(status.ordinal(), Some(0));
///
/// let archived = Enum::<Status>::from_value("archived")?;
/// assert_eq!(archived.ordinal(), Some(2));
/// assert_eq!(Status::archived()?, archived);
/// # Ok::<(), EnumError>(())
/// ```
pub struct Enum<T: EnumType> {
    key: Option<&'static str>,
    value: Option<Scalar>,
    ordinal: Option<usize>,
    marker: PhantomData<fn() -> T>,
}

impl<T: EnumType> Enum<T> {
    /// Construct with no explicit value (nullable / default / `NoDefaultValue`).
    pub fn new() -> Result<Self, EnumError> {
        Self::construct(None)
    }

    /// Construct from an optional raw value.
    ///
    /// ## Errors
    /// - `NoDefaultValue` when `value` is `None`, `T` is not nullable, and `T` declares no default.
    /// - `ValueNotFound` when the value (given or default) matches no declared constant.
    pub fn construct(value: Option<Scalar>) -> Result<Self, EnumError> {
        match value {
            Some(value) => Self::resolve_by_value(value),
            None => {
                let options = T::options();
                if options.nullable {
                    registry::descriptor::<T>();
                    return Ok(Self::unset());
                }
                match options.default {
                    Some(default) => Self::construct(Some(default)),
                    None => Err(EnumError::NoDefaultValue { type_name: T::NAME }),
                }
            }
        }
    }

    /// Construct from a raw value.
    pub fn from_value(value: impl Into<Scalar>) -> Result<Self, EnumError> {
        Self::construct(Some(value.into()))
    }

    /// Construct from another instance's value, which may belong to a different enum type.
    ///
    /// An unset instance carries no value, so it goes down the no-value path.
    pub fn from_instance<U: EnumType>(other: &Enum<U>) -> Result<Self, EnumError> {
        Self::construct(other.value.clone())
    }

    /// Resolve a constant name, falling back to treating `name` as a literal value.
    ///
    /// ```rust
    /// # use constenum::prelude::*;
    /// #[derive(ConstEnum)]
    /// #[constants(open = "O", closed = "C")]
    /// struct Door;
    ///
    /// assert_eq!(Enum::<Door>::from_name("open")?.value(), Some(&Scalar::from("O")));
    /// assert_eq!(Enum::<Door>::from_name("C")?.key(), Some("closed"));
    /// # Ok::<(), EnumError>(())
    /// ```
    pub fn from_name(name: &str) -> Result<Self, EnumError> {
        match registry::descriptor::<T>().get(name) {
            Some(value) => Self::construct(Some(value.clone())),
            None => Self::construct(Some(Scalar::from(name))),
        }
    }

    /// Strictly match `value` against the declared constants.
    ///
    /// The instance keeps the declared value, so a candidate of `-0.0` matching a declared `0.0` displays as `0`.
    pub fn resolve_by_value(value: Scalar) -> Result<Self, EnumError> {
        let descriptor = registry::descriptor::<T>();
        match descriptor.find_by_value(&value) {
            Some((key, ordinal)) => Ok(Self {
                key: Some(key),
                value: descriptor.get(key).cloned(),
                ordinal: Some(ordinal),
                marker: PhantomData,
            }),
            None => {
                tracing::trace!(enum_type = T::NAME, %value, "no declared constant matches value");
                Err(EnumError::ValueNotFound {
                    type_name: T::NAME,
                    value,
                })
            }
        }
    }

    fn unset() -> Self {
        Self {
            key: None,
            value: None,
            ordinal: None,
            marker: PhantomData,
        }
    }

    pub fn value(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }

    /// Name of the constant this instance was resolved from.
    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    /// Zero-based declaration position of [`Enum::key`].
    pub fn ordinal(&self) -> Option<usize> {
        self.ordinal
    }

    /// The ordinal, or `-1` for an unset instance.
    pub fn ordinal_or_sentinel(&self) -> i64 {
        self.ordinal
            .and_then(|ordinal| i64::try_from(ordinal).ok())
            .unwrap_or(-1)
    }

    /// True for the unset state of a nullable type.
    pub fn is_unset(&self) -> bool {
        self.key.is_none()
    }

    /// Loose comparison: true iff the string forms of this instance and `other` are equal.
    ///
    /// Unlike resolution, this coerces: a member with value `1` "is" `"1"`.
    pub fn is(&self, other: impl fmt::Display) -> bool {
        self.to_string() == other.to_string()
    }

    /// All constants of `T` (name -> value), in declaration order.
    pub fn values() -> &'static IndexMap<&'static str, Scalar> {
        registry::values::<T>()
    }

    /// The ordinal of every constant of `T`, in declaration order.
    pub fn ordinals() -> &'static IndexMap<&'static str, usize> {
        registry::ordinals::<T>()
    }

    /// Constant names of `T`, in declaration order.
    pub fn keys() -> Vec<&'static str> {
        registry::keys::<T>()
    }

    /// One instance per declared constant, in ordinal order.
    pub fn all() -> Vec<Self> {
        let descriptor = registry::descriptor::<T>();
        descriptor
            .constants()
            .iter()
            .enumerate()
            .map(|(ordinal, (key, value))| Self {
                key: Some(*key),
                value: Some(value.clone()),
                ordinal: Some(ordinal),
                marker: PhantomData,
            })
            .collect()
    }
}

impl<T: EnumType> Clone for Enum<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            value: self.value.clone(),
            ordinal: self.ordinal,
            marker: PhantomData,
        }
    }
}

impl<T: EnumType> fmt::Debug for Enum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(T::NAME)
            .field("key", &self.key)
            .field("value", &self.value)
            .field("ordinal", &self.ordinal)
            .finish()
    }
}

/// The string form of the value; empty for an unset instance.
impl<T: EnumType> fmt::Display for Enum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => fmt::Display::fmt(value, f),
            None => Ok(()),
        }
    }
}

impl<T: EnumType> PartialEq for Enum<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.ordinal == other.ordinal && self.value == other.value
    }
}

/// Orders by ordinal; the unset state sorts first.
impl<T: EnumType> PartialOrd for Enum<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.ordinal.cmp(&other.ordinal) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl<T: EnumType> FromStr for Enum<T> {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl<T: EnumType> TryFrom<Scalar> for Enum<T> {
    type Error = EnumError;

    fn try_from(value: Scalar) -> Result<Self, Self::Error> {
        Self::construct(Some(value))
    }
}

impl<T: EnumType> From<Enum<T>> for Option<Scalar> {
    fn from(instance: Enum<T>) -> Self {
        instance.value
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use constenum_core::{Constant, EnumOptions, ErrorKind};

    struct Digit;

    impl EnumType for Digit {
        const NAME: &'static str = "Digit";
        const CONSTANTS: &'static [Constant] = &[
            Constant::new("zero", Scalar::Int(0)),
            Constant::new("one", Scalar::Int(1)),
            Constant::new("two", Scalar::Int(2)),
        ];

        fn options() -> EnumOptions {
            EnumOptions::new().with_default(0)
        }
    }

    struct Optional;

    impl EnumType for Optional {
        const NAME: &'static str = "Optional";
        const CONSTANTS: &'static [Constant] = &[Constant::new("yes", Scalar::Bool(true))];

        fn options() -> EnumOptions {
            EnumOptions::new().with_nullable(true).with_default(true)
        }
    }

    struct Gauge;

    impl EnumType for Gauge {
        const NAME: &'static str = "Gauge";
        const CONSTANTS: &'static [Constant] = &[
            Constant::new("zero", Scalar::Float(0.0)),
            Constant::new("full", Scalar::Float(1.0)),
        ];
    }

    struct Bare;

    impl EnumType for Bare {
        const NAME: &'static str = "Bare";
        const CONSTANTS: &'static [Constant] = &[];
    }

    #[test]
    fn integer_values_match_strictly() {
        let one = Enum::<Digit>::from_value(1).unwrap();
        assert_eq!(one.key(), Some("one"));

        let err = Enum::<Digit>::from_value("1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueNotFound);
    }

    #[test]
    fn falsy_values_are_not_absent() {
        // Zero is a real value, not "no value".
        let zero = Enum::<Digit>::from_value(0).unwrap();
        assert_eq!(zero.ordinal(), Some(0));
        assert_eq!(Enum::<Digit>::new().unwrap(), zero);
    }

    #[test]
    fn loose_is_crosses_types() {
        let two = Enum::<Digit>::from_value(2).unwrap();
        assert!(two.is(2));
        assert!(two.is("2"));
        assert!(two.is(Scalar::from(2)));
        assert!(!two.is(2.5));
    }

    #[test]
    fn nullable_ignores_default() {
        let unset = Enum::<Optional>::new().unwrap();
        assert!(unset.is_unset());
        assert_eq!(unset.key(), None);
        assert_eq!(unset.value(), None);
        assert_eq!(unset.ordinal(), None);
        assert_eq!(unset.ordinal_or_sentinel(), -1);
        assert_eq!(unset.to_string(), "");
        assert!(unset.is(""));
    }

    #[test]
    fn empty_type_rejects_every_value() {
        assert!(Enum::<Bare>::keys().is_empty());
        let err = Enum::<Bare>::from_value("x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueNotFound);
        let err = Enum::<Bare>::new().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoDefaultValue);
    }

    #[test]
    fn ordering_follows_ordinals() {
        let mut members = Enum::<Digit>::all();
        members.reverse();
        members.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let keys: Vec<_> = members.iter().filter_map(Enum::key).collect();
        assert_eq!(keys, vec!["zero", "one", "two"]);

        let unset = Enum::<Optional>::new().unwrap();
        let yes = Enum::<Optional>::from_value(true).unwrap();
        assert!(unset < yes);
    }

    #[test]
    fn from_instance_unwraps_value() {
        let unset = Enum::<Optional>::new().unwrap();
        // No value carried over, so the default path applies.
        let digit = Enum::<Digit>::from_instance(&unset).unwrap();
        assert_eq!(digit.key(), Some("zero"));

        let one = Enum::<Digit>::from_value(1).unwrap();
        let err = Enum::<Optional>::from_instance(&one).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueNotFound);
    }

    #[test]
    fn matched_instance_keeps_declared_value() {
        let zero = Enum::<Gauge>::from_value(-0.0).unwrap();
        assert_eq!(zero.key(), Some("zero"));
        assert_eq!(zero.to_string(), "0");
        assert!(zero.value().unwrap().as_float().unwrap().is_sign_positive());
    }

    #[test]
    fn converts_into_its_value() {
        let two: Option<Scalar> = Enum::<Digit>::from_value(2).unwrap().into();
        assert_eq!(two, Some(Scalar::Int(2)));

        let unset: Option<Scalar> = Enum::<Optional>::new().unwrap().into();
        assert_eq!(unset, None);
    }

    #[test]
    fn debug_uses_the_type_name() {
        let one = Enum::<Digit>::from_value(1).unwrap();
        assert_eq!(
            format!("{one:?}"),
            r#"Digit { key: Some("one"), value: Some(Int(1)), ordinal: Some(1) }"#
        );
    }
}

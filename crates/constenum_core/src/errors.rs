//! Canonical error taxonomy for resolving enum members.
//!
//! There are exactly two failure modes, both raised synchronously by the constructing call and never retried:
//! - `NoDefaultValue`: no value was given, the type is not nullable, and it declares no default.
//! - `ValueNotFound`: the given value is not (strictly) equal to any declared constant.

use miette::Diagnostic;
use thiserror::Error;

use crate::scalar::Scalar;

/// Stable identifier for an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoDefaultValue,
    ValueNotFound,
}

impl ErrorKind {
    /// Return the canonical spelling for an error kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NoDefaultValue => "NoDefaultValue",
            ErrorKind::ValueNotFound => "ValueNotFound",
        }
    }

    /// Resolve a canonical spelling back to its kind.
    pub fn from_str(name: &str) -> Option<ErrorKind> {
        match name {
            "NoDefaultValue" => Some(ErrorKind::NoDefaultValue),
            "ValueNotFound" => Some(ErrorKind::ValueNotFound),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while constructing an enum instance.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum EnumError {
    #[error("no default value exists for enum `{type_name}`")]
    #[diagnostic(
        code(constenum::no_default_value),
        help("pass an explicit value, declare a default, or mark the type nullable")
    )]
    NoDefaultValue { type_name: &'static str },

    #[error("value `{value}` ({}) not found in enum `{type_name}`", .value.type_name())]
    #[diagnostic(
        code(constenum::value_not_found),
        help("values are matched strictly: the string \"1\" does not match the integer 1")
    )]
    ValueNotFound { type_name: &'static str, value: Scalar },
}

impl EnumError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnumError::NoDefaultValue { .. } => ErrorKind::NoDefaultValue,
            EnumError::ValueNotFound { .. } => ErrorKind::ValueNotFound,
        }
    }

    /// Name of the enum type the error was raised for.
    pub fn type_name(&self) -> &'static str {
        match self {
            EnumError::NoDefaultValue { type_name } | EnumError::ValueNotFound { type_name, .. } => *type_name,
        }
    }
}

//! Per-type configuration for value-backed enums.

use crate::scalar::Scalar;

/// How an enum type behaves when it is constructed without a value.
///
/// - `nullable`: construction with no value yields an "unset" instance (no key, no value, no ordinal).
/// - `default`: the value to resolve instead, when the type is not nullable.
///
/// With neither set, constructing without a value fails with `NoDefaultValue`. A nullable type never consults its
/// default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumOptions {
    pub nullable: bool,
    pub default: Option<Scalar>,
}

impl EnumOptions {
    pub const fn new() -> Self {
        Self {
            nullable: false,
            default: None,
        }
    }

    /// Allow instances with no value.
    pub const fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the value used when construction is requested without one.
    pub fn with_default(mut self, default: impl Into<Scalar>) -> Self {
        self.default = Some(default.into());
        self
    }
}

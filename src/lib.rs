#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Value-backed enum types.
//!
//! An enum type here is a named, closed set of `name = value` constants (strings, integers, floats, or booleans)
//! declared on a marker type. This crate provides, per type:
//! - lookup by value (strict) and by name (`Status::draft()`, [`Enum::from_name`]),
//! - ordinals (zero-based declaration order),
//! - a default value or a nullable "unset" state for construction without a value,
//! - loose string-based comparison ([`Enum::is`]) and `Display`,
//! - JSON serialization of the value's string form (feature `json`).
//!
//! ```rust
//! use constenum::prelude::*;
//!
//! #[derive(ConstEnum)]
//! #[const_enum(default = draft)]
//! #[constants(draft = "draft", active = "active", archived = "archived", cancelled = "cancelled")]
//! struct Status;
//!
//! assert_eq!(Enum::<Status>::new()?.to_string(), "draft");
//! assert_eq!(Enum::<Status>::from_value("archived")?.ordinal(), Some(2));
//! assert_eq!(Enum::<Status>::keys(), ["draft", "active", "archived", "cancelled"]);
//! assert!(Enum::<Status>::from_value("nope").is_err());
//! # Ok::<(), EnumError>(())
//! ```
//!
//! ## Panic Policy
//!
//! Resolution failures are values, never panics: every fallible operation returns [`EnumError`]
//! (`NoDefaultValue` or `ValueNotFound`). `.unwrap()` and `.expect()` are reserved for tests.
//!
//! ## Concurrency
//!
//! Descriptors are built lazily, once per type, behind a thread-safe guard in [`registry`]. After that, reads take
//! a shared lock only to find the `'static` descriptor; instances never lock.

// Generated code refers to `::constenum`, including inside this crate's own tests.
extern crate self as constenum;

pub mod enum_type;
pub mod instance;
pub mod prelude;
pub mod registry;

#[cfg(feature = "json")]
pub mod json;

pub use constenum_core::{Constant, Descriptor, EnumError, EnumOptions, ErrorKind, Scalar};
pub use enum_type::EnumType;
pub use instance::Enum;

#[cfg(feature = "json")]
pub use json::{FromJson, ToJson};

#[cfg(feature = "derive")]
pub use constenum_derive::ConstEnum;

//! Provide the shared, pure vocabulary behind `constenum` value-backed enums.
//!
//! This crate is intentionally small. It contains the types that both the runtime (`constenum`) and the derive
//! macros (`constenum_derive`) agree on:
//! - [`Scalar`]: the primitive value a declared constant carries,
//! - [`Constant`]: one declared `name = value` pair,
//! - [`Descriptor`]: the ordered constant table of one enum type plus its derived ordinals,
//! - [`EnumOptions`]: per-type configuration (nullability and default value),
//! - [`EnumError`]: the two ways resolving an enum member can fail.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state. The process-wide descriptor registry lives in
//!   the runtime crate.

#![deny(clippy::unwrap_used)]

pub mod descriptor;
pub mod errors;
pub mod options;
pub mod scalar;

pub use descriptor::{Constant, Descriptor};
pub use errors::{EnumError, ErrorKind};
pub use options::EnumOptions;
pub use scalar::Scalar;

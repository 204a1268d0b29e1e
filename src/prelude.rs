//! Prelude module for common imports.
//!
//! ```ignore
//! use constenum::prelude::*;
//! ```

pub use crate::enum_type::EnumType;
pub use crate::instance::Enum;
pub use constenum_core::{Constant, EnumError, EnumOptions, ErrorKind, Scalar};

#[cfg(feature = "json")]
pub use crate::json::{FromJson, ToJson};

// Re-export the derive macro; it lives in a separate proc-macro crate.
#[cfg(feature = "derive")]
pub use constenum_derive::ConstEnum;

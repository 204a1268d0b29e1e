//! Process-wide registry of enum descriptors.
//!
//! Each [`EnumType`] gets exactly one [`Descriptor`], built lazily on first use and kept for the lifetime of the
//! process. Descriptors are leaked into `'static` storage once inserted, so callers hold plain references and never a
//! lock guard.
//!
//! ## Notes
//! - Building happens **outside** the lock: a subtype's descriptor asks the registry for its parent's, which would
//!   deadlock under a held write guard.
//! - Two threads may race to build the same descriptor. Both build, only the first insert is kept, and the loser's
//!   copy is dropped without being leaked. Every caller observes the same `&'static Descriptor`.
//! - Inheritance cycles (`A extends B extends A`) recurse without bound.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::LazyLock;

use constenum_core::{Descriptor, Scalar};
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::enum_type::EnumType;

static DESCRIPTORS: LazyLock<RwLock<HashMap<TypeId, &'static Descriptor>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Return the descriptor for `T`, building and caching it on first use.
pub fn descriptor<T: EnumType>() -> &'static Descriptor {
    let id = TypeId::of::<T>();
    if let Some(found) = DESCRIPTORS.read().get(&id).copied() {
        return found;
    }

    let built = build::<T>();
    let mut descriptors = DESCRIPTORS.write();
    *descriptors.entry(id).or_insert_with(|| Box::leak(Box::new(built)))
}

/// Whether `T`'s descriptor has been built yet.
pub fn is_cached<T: EnumType>() -> bool {
    DESCRIPTORS.read().contains_key(&TypeId::of::<T>())
}

/// Number of descriptors built so far.
pub fn cached_count() -> usize {
    DESCRIPTORS.read().len()
}

/// All constants of `T` (name -> value), in declaration order.
pub fn values<T: EnumType>() -> &'static IndexMap<&'static str, Scalar> {
    descriptor::<T>().constants()
}

/// The ordinal of every constant of `T`, in declaration order.
pub fn ordinals<T: EnumType>() -> &'static IndexMap<&'static str, usize> {
    descriptor::<T>().ordinals()
}

/// Constant names of `T`, in declaration order.
pub fn keys<T: EnumType>() -> Vec<&'static str> {
    descriptor::<T>().keys().collect()
}

#[tracing::instrument(level = "debug", skip_all, fields(enum_type = T::NAME))]
fn build<T: EnumType>() -> Descriptor {
    let inherited = T::inherited();
    let inherited_count = inherited.len();
    let descriptor = Descriptor::new(T::NAME, T::CONSTANTS.iter().cloned().chain(inherited));

    tracing::debug!(
        constants = descriptor.len(),
        own = T::CONSTANTS.len(),
        inherited = inherited_count,
        "built enum descriptor"
    );
    descriptor
}

#[cfg(test)]
mod tests {
    use super::*;
    use constenum_core::Constant;

    struct Colour;

    impl EnumType for Colour {
        const NAME: &'static str = "Colour";
        const CONSTANTS: &'static [Constant] = &[
            Constant::new("red", Scalar::str("#f00")),
            Constant::new("green", Scalar::str("#0f0")),
            Constant::new("blue", Scalar::str("#00f")),
        ];
    }

    struct NeverUsed;

    impl EnumType for NeverUsed {
        const NAME: &'static str = "NeverUsed";
        const CONSTANTS: &'static [Constant] = &[];
    }

    #[test]
    fn descriptor_is_built_once_and_shared() {
        let first = descriptor::<Colour>();
        let second = descriptor::<Colour>();
        assert!(std::ptr::eq(first, second));
        assert!(is_cached::<Colour>());
        assert!(cached_count() >= 1);
    }

    #[test]
    fn accessors_preserve_declaration_order() {
        assert_eq!(keys::<Colour>(), vec!["red", "green", "blue"]);
        let ordinals: Vec<_> = ordinals::<Colour>().values().copied().collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
        assert_eq!(values::<Colour>().get("blue"), Some(&Scalar::str("#00f")));
    }

    #[test]
    fn lookups_never_touch_unused_types() {
        assert!(!is_cached::<NeverUsed>());
    }
}

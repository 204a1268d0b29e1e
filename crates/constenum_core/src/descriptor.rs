//! Ordered constant tables and the ordinals derived from them.

use indexmap::IndexMap;

use crate::scalar::Scalar;

/// One declared `name = value` pair of an enum type.
///
/// `Constant` is built with a `const fn` so enum types can expose their declarations as a `&'static [Constant]`.
///
/// ## Examples
/// ```rust
/// use constenum_core::{Constant, Scalar};
///
/// const DECLARED: &[Constant] = &[
///     Constant::new("draft", Scalar::str("draft")),
///     Constant::new("active", Scalar::str("active")),
/// ];
/// assert_eq!(DECLARED[1].name, "active");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: &'static str,
    pub value: Scalar,
}

impl Constant {
    pub const fn new(name: &'static str, value: Scalar) -> Self {
        Self { name, value }
    }
}

/// Cached metadata for one enum type: its constants in declaration order and each constant's ordinal.
///
/// ## Notes
/// - `constants` and `ordinals` always share the same key set, and ordinals are exactly `0..len()` in
///   declaration order. Both maps are built once in [`Descriptor::new`] and never change afterwards.
/// - When a name is declared twice, the first declaration wins (keeps its position and value). This is what makes a
///   subtype's own constants shadow the ones it inherits.
/// - Values are not required to be unique; [`Descriptor::find_by_value`] returns the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    type_name: &'static str,
    constants: IndexMap<&'static str, Scalar>,
    ordinals: IndexMap<&'static str, usize>,
}

impl Descriptor {
    /// Build a descriptor from constants listed in declaration order.
    ///
    /// ## Parameters
    /// - `type_name`: name of the enum type, used in diagnostics.
    /// - `constants`: declared constants, own declarations first, then inherited ones.
    ///
    /// ## Examples
    /// ```rust
    /// use constenum_core::{Constant, Descriptor, Scalar};
    ///
    /// let d = Descriptor::new(
    ///     "Level",
    ///     [Constant::new("low", Scalar::Int(1)), Constant::new("high", Scalar::Int(9))],
    /// );
    /// assert_eq!(d.ordinal_of("high"), Some(1));
    /// ```
    pub fn new(type_name: &'static str, constants: impl IntoIterator<Item = Constant>) -> Self {
        let mut table: IndexMap<&'static str, Scalar> = IndexMap::new();
        for constant in constants {
            table.entry(constant.name).or_insert(constant.value);
        }

        let ordinals = table
            .keys()
            .enumerate()
            .map(|(ordinal, name)| (*name, ordinal))
            .collect();

        Self {
            type_name,
            constants: table,
            ordinals,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name -> value, in declaration order.
    pub fn constants(&self) -> &IndexMap<&'static str, Scalar> {
        &self.constants
    }

    /// Name -> ordinal, in declaration order.
    pub fn ordinals(&self) -> &IndexMap<&'static str, usize> {
        &self.ordinals
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constants.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Look up a declared value by constant name.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.constants.get(name)
    }

    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.ordinals.get(name).copied()
    }

    /// Find the first constant (in declaration order) whose value is strictly equal to `value`.
    ///
    /// ## Returns
    /// - `Some((name, ordinal))` for the first match, `None` if no declared value matches.
    pub fn find_by_value(&self, value: &Scalar) -> Option<(&'static str, usize)> {
        let (name, _) = self.constants.iter().find(|(_, declared)| *declared == value)?;
        let ordinal = self.ordinal_of(name)?;
        Some((*name, ordinal))
    }

    /// The constants as owned pairs, in declaration order.
    pub fn to_constants(&self) -> Vec<Constant> {
        self.constants
            .iter()
            .map(|(name, value)| Constant::new(*name, value.clone()))
            .collect()
    }
}

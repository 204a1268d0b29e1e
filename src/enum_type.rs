//! The trait every value-backed enum type implements.

use constenum_core::{Constant, EnumOptions};

/// A named, closed set of `name = value` constants.
///
/// Implementations are usually generated with `#[derive(ConstEnum)]` on a unit struct, but writing one by hand is
/// just as valid:
///
/// ```rust
/// use constenum::{Constant, Enum, EnumOptions, EnumType, Scalar};
///
/// struct Level;
///
/// impl EnumType for Level {
///     const NAME: &'static str = "Level";
///     const CONSTANTS: &'static [Constant] = &[
///         Constant::new("low", Scalar::Int(1)),
///         Constant::new("high", Scalar::Int(9)),
///     ];
///
///     fn options() -> EnumOptions {
///         EnumOptions::new().with_default(1)
///     }
/// }
///
/// let level = Enum::<Level>::new()?;
/// assert_eq!(level.key(), Some("low"));
/// # Ok::<(), constenum::EnumError>(())
/// ```
///
/// ## Notes
/// - `CONSTANTS` lists this type's own declarations in order. Inherited constants come from [`EnumType::inherited`]
///   and are placed after the own ones; a name declared in both keeps the own declaration.
/// - The `'static` bound lets the registry key descriptors by `TypeId`.
pub trait EnumType: 'static {
    /// Type name used in errors and logs.
    const NAME: &'static str;

    /// Own constants, in declaration order.
    const CONSTANTS: &'static [Constant];

    /// Nullability and default value. Strict (neither) unless overridden.
    fn options() -> EnumOptions {
        EnumOptions::new()
    }

    /// Constants contributed by a parent type.
    fn inherited() -> Vec<Constant> {
        Vec::new()
    }
}

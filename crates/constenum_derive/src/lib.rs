//! Derive macros for declaring `constenum` value-backed enums.
//!
//! `#[derive(ConstEnum)]` turns a marker struct plus a few attributes into:
//! - an `EnumType` implementation (type name, constant table in declaration order, options, parent type),
//! - one named factory per declared constant (`Status::draft()`), which resolves through `Enum::from_name`.
//!
//! # Example
//! ```ignore
//! #[derive(ConstEnum)]
//! #[const_enum(default = draft)]
//! #[constants(draft = "draft", active = "active", archived = "archived", cancelled = "cancelled")]
//! pub struct Status;
//!
//! // Generates (roughly):
//! impl constenum::EnumType for Status {
//!     const NAME: &'static str = "Status";
//!     const CONSTANTS: &'static [constenum::Constant] = &[
//!         constenum::Constant::new("draft", constenum::Scalar::str("draft")),
//!         // ...
//!     ];
//!     fn options() -> constenum::EnumOptions {
//!         constenum::EnumOptions::new().with_nullable(false).with_default(constenum::Scalar::str("draft"))
//!     }
//! }
//!
//! impl Status {
//!     pub fn draft() -> Result<constenum::Enum<Self>, constenum::EnumError> { /* ... */ }
//!     // ...
//! }
//! ```
//!
//! Supported attributes:
//! - `#[constants(name = literal, ...)]`: may repeat; constants keep the order they are written in.
//! - `#[const_enum(default = literal)]` or `#[const_enum(default = constant_name)]`
//! - `#[const_enum(nullable)]`
//! - `#[const_enum(extends = path::To::Parent)]`: inherit the parent's constants after this type's own.
//! - `#[const_enum(name = "Display")]`: override the type name used in errors.
//! - `#[const_enum(factories = false)]`: skip the per-member factory functions.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Expr, ExprLit, ExprUnary, Ident, Lit, LitBool, LitStr, Path, UnOp, parse_macro_input};

/// Generates an `EnumType` implementation and per-member factories.
///
/// See the crate docs for the accepted attributes.
#[proc_macro_derive(ConstEnum, attributes(const_enum, constants))]
pub fn derive_const_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// A constant as written in `#[constants(...)]`.
struct Declared {
    ident: Ident,
    name: String,
    value: TokenStream2,
}

struct EnumAttrs {
    name: Option<LitStr>,
    nullable: bool,
    default: Option<Expr>,
    extends: Option<Path>,
    factories: bool,
    constants: Vec<Declared>,
}

impl Default for EnumAttrs {
    fn default() -> Self {
        Self {
            name: None,
            nullable: false,
            default: None,
            extends: None,
            factories: true,
            constants: Vec::new(),
        }
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !matches!(input.data, Data::Struct(_)) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ConstEnum can only be derived for structs (usually a unit struct marker)",
        ));
    }

    let attrs = parse_attrs(input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let type_name = match &attrs.name {
        Some(name) => name.value(),
        None => ident.unraw().to_string(),
    };

    let names = attrs.constants.iter().map(|c| &c.name);
    let values = attrs.constants.iter().map(|c| &c.value);

    let nullable = attrs.nullable;
    let default = match &attrs.default {
        Some(expr) => {
            let value = default_tokens(expr, &attrs.constants)?;
            quote! { .with_default(#value) }
        }
        None => quote! {},
    };

    let inherited = attrs.extends.as_ref().map(|parent| {
        quote! {
            fn inherited() -> ::std::vec::Vec<::constenum::Constant> {
                ::constenum::registry::descriptor::<#parent>().to_constants()
            }
        }
    });

    let factories = if attrs.factories {
        let fns = attrs.constants.iter().map(|c| {
            let fn_ident = &c.ident;
            let name = &c.name;
            let doc = format!("Build the `{name}` member of `{type_name}`.");
            quote! {
                #[doc = #doc]
                pub fn #fn_ident() -> ::core::result::Result<::constenum::Enum<Self>, ::constenum::EnumError> {
                    ::constenum::Enum::<Self>::from_name(#name)
                }
            }
        });
        quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                #(#fns)*
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #impl_generics ::constenum::EnumType for #ident #ty_generics #where_clause {
            const NAME: &'static str = #type_name;
            const CONSTANTS: &'static [::constenum::Constant] = &[
                #(::constenum::Constant::new(#names, #values)),*
            ];

            fn options() -> ::constenum::EnumOptions {
                ::constenum::EnumOptions::new().with_nullable(#nullable) #default
            }

            #inherited
        }

        #factories
    })
}

fn parse_attrs(input: &DeriveInput) -> syn::Result<EnumAttrs> {
    let mut attrs = EnumAttrs::default();

    for attr in &input.attrs {
        if attr.path().is_ident("const_enum") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("nullable") {
                    attrs.nullable = true;
                } else if meta.path.is_ident("default") {
                    attrs.default = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("extends") {
                    attrs.extends = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("name") {
                    attrs.name = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("factories") {
                    let enabled: LitBool = meta.value()?.parse()?;
                    attrs.factories = enabled.value;
                } else {
                    return Err(meta.error(
                        "unsupported const_enum attribute; expected `default`, `nullable`, `extends`, `name`, or `factories`",
                    ));
                }
                Ok(())
            })?;
        } else if attr.path().is_ident("constants") {
            attr.parse_nested_meta(|meta| {
                let ident = meta
                    .path
                    .get_ident()
                    .cloned()
                    .ok_or_else(|| meta.error("constant names must be plain identifiers"))?;
                let expr: Expr = meta.value()?.parse()?;
                let value = scalar_tokens(&expr)?;
                let name = ident.unraw().to_string();
                if attrs.constants.iter().any(|c| c.name == name) {
                    return Err(meta.error(format!("constant `{name}` is declared more than once")));
                }
                attrs.constants.push(Declared { ident, name, value });
                Ok(())
            })?;
        }
    }

    Ok(attrs)
}

/// Resolve `default = ...`: a bare identifier names one of this type's constants, anything else must be a literal.
fn default_tokens(expr: &Expr, constants: &[Declared]) -> syn::Result<TokenStream2> {
    let ident = match expr {
        Expr::Path(path) => path.path.get_ident(),
        _ => None,
    };
    let Some(ident) = ident else {
        return scalar_tokens(expr);
    };

    let name = ident.unraw().to_string();
    constants
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.value.clone())
        .ok_or_else(|| {
            syn::Error::new_spanned(
                ident,
                format!("default `{name}` is not a constant declared on this type; use a literal value instead"),
            )
        })
}

/// Lower a literal expression to tokens that build a `constenum::Scalar`.
fn scalar_tokens(expr: &Expr) -> syn::Result<TokenStream2> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => lit_tokens(lit, false),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit { lit, .. }) => lit_tokens(lit, true),
            other => Err(unsupported_value(other)),
        },
        // Declarations produced by other macros may arrive wrapped in invisible groups.
        Expr::Group(group) => scalar_tokens(&group.expr),
        other => Err(unsupported_value(other)),
    }
}

fn lit_tokens(lit: &Lit, negative: bool) -> syn::Result<TokenStream2> {
    match lit {
        Lit::Str(s) if !negative => Ok(quote! { ::constenum::Scalar::str(#s) }),
        Lit::Bool(b) if !negative => Ok(quote! { ::constenum::Scalar::Bool(#b) }),
        Lit::Int(i) => {
            let magnitude = i.base10_parse::<i128>()?;
            let value = if negative { -magnitude } else { magnitude };
            let value = i64::try_from(value)
                .map_err(|_| syn::Error::new_spanned(i, "integer constant does not fit in i64"))?;
            Ok(quote! { ::constenum::Scalar::Int(#value) })
        }
        Lit::Float(f) => {
            let magnitude = f.base10_parse::<f64>()?;
            let value = if negative { -magnitude } else { magnitude };
            Ok(quote! { ::constenum::Scalar::Float(#value) })
        }
        other => Err(unsupported_value(other)),
    }
}

fn unsupported_value(tokens: impl quote::ToTokens) -> syn::Error {
    syn::Error::new_spanned(
        tokens,
        "constant values must be string, integer, float, or boolean literals",
    )
}

#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//! Currently this is the [`shelf_error`] attribute, which turns a plain enum into
//! a `thiserror` error with optional human context attached at the call site.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! shelf-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants that carry a source
///   field, so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is declared.
/// * **Formatting Helper**: Emits a private `format_context` function for `#[error(...)]`
///   strings, rendering `" (context)"` or nothing.
///
/// # Rules
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant must use named fields; tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants wrapping an upstream error (a field named `source`, or marked
///    `#[source]`/`#[from]`) must also declare a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use shelf_derive::shelf_error;
/// use std::borrow::Cow;
///
/// #[shelf_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?
///         .try_deserialize()
///         .map_err(|_| "Malformed settings".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn shelf_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

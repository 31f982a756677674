//! See [`Uncodable`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static CODEC_ATTRIBUTE_NAME: &str = "codec";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Structural Codec Derivation
///
/// `#[derive(Uncodable)]` implements the following traits:
///
/// - `Typed`, describing the type's fields or cases;
/// - `Reflect`, plus `Product` (for structs) or `Sum` (for enums);
/// - `Construct`;
/// - `Decode`.
///
/// Structs are products. Named fields are named, tuple fields are
/// positional. Unit structs and fieldless structs are degenerate products.
///
/// Enums are sums: each variant is a case named after the variant, and its
/// fields are the case payload.
///
/// ## Type Attributes
///
/// ```rust, ignore
/// #[derive(Uncodable)]
/// #[codec(case_name_key = "kind", payload_key = "data", inline_payload)]
/// enum Message { /* ... */ }
/// ```
///
/// - `case_name_key = ".."`: the key holding the case name (default `"type"`).
/// - `payload_key = ".."`: the key holding the payload (default `"payload"`).
/// - `inline_payload`: merge payload entries next to the case name.
/// - `remainder = ".."`: mixed products put their positional fields in a
///   sequence under this key (the default strategy, under `"remainder"`).
/// - `indices_as_names`: mixed products key their positional fields by
///   declaration index instead.
/// - `custom(encode = path, decode = path)`: mixed products are handled by a
///   `CustomStrategy` made of these two functions.
/// - `customized`: start from `<Self as Customized>::customization()`,
///   which the type implements by hand; other attributes apply on top.
/// - `native`: convert through serde (`Serialize` and `DeserializeOwned`
///   are required) instead of the structural codec. Not combinable with the
///   attributes above.
///
/// ## Field Attributes
///
/// - `#[codec(rename = "..")]`: the name of the field on the wire. On a
///   tuple field, this makes the field named.
/// - `#[codec(positional)]`: make a named field positional.
///
/// Fields mixing both kinds form a mixed product:
///
/// ```rust, ignore
/// #[derive(Uncodable)]
/// struct Triple(u8, #[codec(rename = "b")] u8, u8);
/// // {"b": 1, "remainder": [0, 2]}
/// ```
///
/// ## Variant Attributes
///
/// - `#[codec(rename = "..")]`: the case name on the wire.
#[proc_macro_derive(Uncodable, attributes(codec))]
pub fn derive_uncodable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_codec_impls(ast)
}

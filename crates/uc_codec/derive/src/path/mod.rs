//! This independent module provides the paths generated code refers to,
//! so that a change in the layout of `uc_codec` only touches this module.
//!
//! The only special feature is the path of `uc_codec` itself,
//! see [`uc_codec`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `uc_codec` crate.
///
/// 1. For crates that depend on `uc_codec`, `::uc_codec` is returned.
/// 2. For crates that depend on `uncodable`, `::uncodable::codec` is returned.
/// 3. For other situations, `::uc_codec` is returned, but this may be incorrect.
///
/// Reading the caller's manifest is relatively expensive, so the path is
/// resolved once per derive and passed around.
pub(crate) fn uc_codec() -> syn::Path {
    uc_macro_utils::Manifest::crate_path("uc_codec")
}

// -----------------------------------------------------------------------------
// Modules

mod build;
mod cell;
mod codec;
mod info;
mod registry;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use build::*;
pub(crate) use cell::*;
pub(crate) use codec::*;
pub(crate) use info::*;
pub(crate) use registry::*;

#[inline(always)]
pub(crate) fn macro_utils_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn codec_error_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::CodecError
    }
}

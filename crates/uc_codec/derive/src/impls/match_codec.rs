use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::CodecDerive;

/// Provided for `#[derive(Uncodable)]`.
pub(crate) fn match_codec_impls(ast: DeriveInput) -> TokenStream {
    // Parse type kind, attributes and fields.
    let codec_derive = match CodecDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let codec_impls: proc_macro2::TokenStream = match codec_derive {
        CodecDerive::Struct(info) => crate::impls::impl_struct(&info),
        CodecDerive::Enum(info) => crate::impls::impl_enum(&info),
        CodecDerive::Native(meta) => crate::impls::impl_native(&meta),
    };

    TokenStream::from(quote! {
        const _: () = {
            #codec_impls
        };
    })
}

use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn construct_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::build::Construct
    }
}

#[inline(always)]
pub(crate) fn field_source_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::build::FieldSource
    }
}

use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::impls::GenericTypeInfoCell
    }
}

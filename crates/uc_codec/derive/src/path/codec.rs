use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn decode_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::codec::Decode
    }
}

#[inline(always)]
pub(crate) fn decoder_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::codec::Decoder
    }
}

#[inline(always)]
pub(crate) fn product_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::ops::Product
    }
}

#[inline(always)]
pub(crate) fn sum_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::ops::Sum
    }
}

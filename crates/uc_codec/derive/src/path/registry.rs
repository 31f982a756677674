use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn customization_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::registry::Customization
    }
}

#[inline(always)]
pub(crate) fn customized_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::registry::Customized
    }
}

#[inline(always)]
pub(crate) fn mixed_strategy_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::registry::MixedStrategy
    }
}

#[inline(always)]
pub(crate) fn custom_strategy_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::registry::CustomStrategy
    }
}

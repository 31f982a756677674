use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn typed_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn case_info_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::info::CaseInfo
    }
}

#[inline(always)]
pub(crate) fn product_info_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::info::ProductInfo
    }
}

#[inline(always)]
pub(crate) fn sum_info_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::info::SumInfo
    }
}

#[inline(always)]
pub(crate) fn native_info_(uc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #uc_codec_path::info::NativeInfo
    }
}

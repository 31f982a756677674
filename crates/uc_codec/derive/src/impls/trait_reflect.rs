use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{CodecMeta, FieldBound};

/// Generate implementation code for `Reflect`, exposing the value as
/// `ReflectRef::<kind>(self)`.
pub(crate) fn impl_trait_reflect(meta: &CodecMeta, kind: TokenStream) -> TokenStream {
    let uc_codec_path = meta.uc_codec_path();
    let reflect_ = crate::path::reflect_(uc_codec_path);
    let reflect_ref_ = crate::path::reflect_ref_(uc_codec_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(FieldBound::Reflect);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }
        }
    }
}

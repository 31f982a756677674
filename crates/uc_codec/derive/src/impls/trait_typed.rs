use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{CodecMeta, FieldBound};

/// Generate implementation code for `Typed`.
///
/// For param `type_info_tokens`, see the `to_info_tokens` of
/// [`CodecStruct`] and [`CodecEnum`].
///
/// [`CodecStruct`]: crate::derive_data::CodecStruct
/// [`CodecEnum`]: crate::derive_data::CodecEnum
pub(crate) fn impl_trait_typed(meta: &CodecMeta, type_info_tokens: TokenStream) -> TokenStream {
    let uc_codec_path = meta.uc_codec_path();
    let typed_ = crate::path::typed_(uc_codec_path);
    let type_info_ = crate::path::type_info_(uc_codec_path);

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(uc_codec_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(uc_codec_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(FieldBound::Typed);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}

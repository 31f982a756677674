use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{CodecMeta, FieldBound};

/// Generate implementation code for `Decode`, forwarding to `decode_method`
/// of the `Decoder` (`decode_structural` or `decode_native`).
pub(crate) fn impl_trait_decode(meta: &CodecMeta, decode_method: TokenStream) -> TokenStream {
    let uc_codec_path = meta.uc_codec_path();
    let decode_ = crate::path::decode_(uc_codec_path);
    let decoder_ = crate::path::decoder_(uc_codec_path);
    let codec_error_ = crate::path::codec_error_(uc_codec_path);
    let macro_utils_ = crate::path::macro_utils_(uc_codec_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(FieldBound::Decode);

    quote! {
        impl #impl_generics #decode_ for #ident #ty_generics #where_clause {
            #[inline]
            fn decode(decoder: #decoder_<'_>) -> #macro_utils_::Result<Self, #codec_error_> {
                decoder.#decode_method()
            }
        }
    }
}

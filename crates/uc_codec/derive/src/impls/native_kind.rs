use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_decode, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::CodecMeta;

/// Implement the codec traits for a `#[codec(native)]` type, which converts
/// itself through serde.
pub(crate) fn impl_native(meta: &CodecMeta) -> TokenStream {
    let uc_codec_path = meta.uc_codec_path();
    let type_info_ = crate::path::type_info_(uc_codec_path);
    let native_info_ = crate::path::native_info_(uc_codec_path);

    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote!(#type_info_::Native(#native_info_::new::<Self>())),
    );
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Native));
    let decode_trait_tokens = impl_trait_decode(meta, quote!(decode_native));

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #decode_trait_tokens
    }
}

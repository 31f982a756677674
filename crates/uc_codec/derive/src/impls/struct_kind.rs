use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_decode, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::{CodecStruct, FieldBound};

/// Implement the codec traits for a struct.
pub(crate) fn impl_struct(info: &CodecStruct) -> TokenStream {
    let meta = info.meta();

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());
    let product_trait_tokens = impl_trait_product(info);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Product));
    let construct_trait_tokens = impl_struct_construct(info);
    let decode_trait_tokens = impl_trait_decode(meta, quote!(decode_structural));

    quote! {
        #typed_trait_tokens

        #product_trait_tokens

        #reflect_trait_tokens

        #construct_trait_tokens

        #decode_trait_tokens
    }
}

fn impl_trait_product(info: &CodecStruct) -> TokenStream {
    let meta = info.meta();
    let uc_codec_path = meta.uc_codec_path();
    let product_ = crate::path::product_(uc_codec_path);
    let reflect_ = crate::path::reflect_(uc_codec_path);
    let macro_utils_ = crate::path::macro_utils_(uc_codec_path);

    let field_len = info.fields.len();
    let field_at_body = if info.fields.is_empty() {
        quote!(#macro_utils_::None)
    } else {
        let indices = info.fields.iter().map(|field| field.index);
        let members = info.fields.iter().map(|field| field.member());
        quote! {
            match index {
                #( #indices => #macro_utils_::Some(&self.#members as &dyn #reflect_), )*
                _ => #macro_utils_::None,
            }
        }
    };
    let index_ident = if info.fields.is_empty() {
        quote!(_index)
    } else {
        quote!(index)
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(FieldBound::Reflect);

    quote! {
        impl #impl_generics #product_ for #ident #ty_generics #where_clause {
            fn field_at(&self, #index_ident: usize) -> #macro_utils_::Option<&dyn #reflect_> {
                #field_at_body
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}

fn impl_struct_construct(info: &CodecStruct) -> TokenStream {
    let meta = info.meta();
    let uc_codec_path = meta.uc_codec_path();
    let construct_ = crate::path::construct_(uc_codec_path);
    let field_source_ = crate::path::field_source_(uc_codec_path);
    let typed_ = crate::path::typed_(uc_codec_path);
    let codec_error_ = crate::path::codec_error_(uc_codec_path);
    let macro_utils_ = crate::path::macro_utils_(uc_codec_path);

    let (source_ident, body) = if info.fields.is_empty() {
        let value = info.kind.construct(quote!(Self), &info.fields, core::iter::empty());
        (quote!(_source), quote!(#macro_utils_::Ok(#value)))
    } else {
        let values = info.fields.iter().map(|field| {
            let index = field.index;
            quote!(source.field(#macro_utils_::field_at(fields, #index)?)?)
        });
        let value = info.kind.construct(quote!(Self), &info.fields, values);
        (
            quote!(source),
            quote! {
                let fields = #macro_utils_::product_fields(<Self as #typed_>::type_info())?;
                #macro_utils_::Ok(#value)
            },
        )
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(FieldBound::Decode);

    quote! {
        impl #impl_generics #construct_ for #ident #ty_generics #where_clause {
            fn construct<__S: #field_source_>(
                _tag: usize,
                #source_ident: &mut __S,
            ) -> #macro_utils_::Result<Self, #codec_error_> {
                #body
            }
        }
    }
}

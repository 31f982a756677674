use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_decode, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::{CodecEnum, FieldBound};

/// Implement the codec traits for an enum.
pub(crate) fn impl_enum(info: &CodecEnum) -> TokenStream {
    let meta = info.meta();

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());
    let sum_trait_tokens = impl_trait_sum(info);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Sum));
    let construct_trait_tokens = impl_enum_construct(info);
    let decode_trait_tokens = impl_trait_decode(meta, quote!(decode_structural));

    quote! {
        #typed_trait_tokens

        #sum_trait_tokens

        #reflect_trait_tokens

        #construct_trait_tokens

        #decode_trait_tokens
    }
}

fn impl_trait_sum(info: &CodecEnum) -> TokenStream {
    let meta = info.meta();
    let uc_codec_path = meta.uc_codec_path();
    let sum_ = crate::path::sum_(uc_codec_path);
    let reflect_ = crate::path::reflect_(uc_codec_path);
    let macro_utils_ = crate::path::macro_utils_(uc_codec_path);

    let any_fields = info.variants.iter().any(|variant| !variant.fields.is_empty());
    let index_ident = if any_fields { quote!(index) } else { quote!(_index) };

    let (variant_index_body, field_at_body, field_len_body) = if info.variants.is_empty() {
        (quote!(match *self {}), quote!(match *self {}), quote!(match *self {}))
    } else {
        let variant_index_arms = info.variants.iter().map(|variant| {
            let path = variant.path();
            let tag = variant.tag;
            quote!(#path { .. } => #tag,)
        });

        let field_at_arms = info.variants.iter().map(|variant| {
            let path = variant.path();
            if variant.fields.is_empty() {
                return quote!(#path { .. } => #macro_utils_::None,);
            }

            let pattern = variant.kind.pattern(path, &variant.fields);
            let indices = variant.fields.iter().map(|field| field.index);
            let bindings = variant.fields.iter().map(|field| field.binding());
            quote! {
                #pattern => match index {
                    #( #indices => #macro_utils_::Some(#bindings as &dyn #reflect_), )*
                    _ => #macro_utils_::None,
                },
            }
        });

        let field_len_arms = info.variants.iter().map(|variant| {
            let path = variant.path();
            let len = variant.fields.len();
            quote!(#path { .. } => #len,)
        });

        (
            quote!(match self { #(#variant_index_arms)* }),
            quote!(match self { #(#field_at_arms)* }),
            quote!(match self { #(#field_len_arms)* }),
        )
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(FieldBound::Reflect);

    quote! {
        impl #impl_generics #sum_ for #ident #ty_generics #where_clause {
            fn variant_index(&self) -> usize {
                #variant_index_body
            }

            fn field_at(&self, #index_ident: usize) -> #macro_utils_::Option<&dyn #reflect_> {
                #field_at_body
            }

            fn field_len(&self) -> usize {
                #field_len_body
            }
        }
    }
}

fn impl_enum_construct(info: &CodecEnum) -> TokenStream {
    let meta = info.meta();
    let uc_codec_path = meta.uc_codec_path();
    let construct_ = crate::path::construct_(uc_codec_path);
    let field_source_ = crate::path::field_source_(uc_codec_path);
    let typed_ = crate::path::typed_(uc_codec_path);
    let codec_error_ = crate::path::codec_error_(uc_codec_path);
    let macro_utils_ = crate::path::macro_utils_(uc_codec_path);

    let any_fields = info.variants.iter().any(|variant| !variant.fields.is_empty());
    let source_ident = if any_fields { quote!(source) } else { quote!(_source) };

    let arms = info.variants.iter().map(|variant| {
        let tag = variant.tag;
        let path = variant.path();

        if variant.fields.is_empty() {
            let value = variant.kind.construct(path, &variant.fields, core::iter::empty());
            return quote!(#tag => #macro_utils_::Ok(#value),);
        }

        let values = variant.fields.iter().map(|field| {
            let index = field.index;
            quote!(source.field(#macro_utils_::field_at(fields, #index)?)?)
        });
        let value = variant.kind.construct(path, &variant.fields, values);
        quote! {
            #tag => {
                let fields = #macro_utils_::case_fields(<Self as #typed_>::type_info(), #tag)?;
                #macro_utils_::Ok(#value)
            }
        }
    });

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(FieldBound::Decode);

    quote! {
        impl #impl_generics #construct_ for #ident #ty_generics #where_clause {
            fn construct<__S: #field_source_>(
                tag: usize,
                #source_ident: &mut __S,
            ) -> #macro_utils_::Result<Self, #codec_error_> {
                match tag {
                    #(#arms)*
                    _ => #macro_utils_::Err(#macro_utils_::invalid_tag(
                        <Self as #typed_>::type_info(),
                        tag,
                    )),
                }
            }
        }
    }
}

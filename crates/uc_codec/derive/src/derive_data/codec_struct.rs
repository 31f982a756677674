use proc_macro2::TokenStream;
use quote::quote;

use super::{CodecField, CodecMeta, FieldsKind};

/// A struct, described as a product of its fields.
pub(crate) struct CodecStruct<'a> {
    pub meta: CodecMeta<'a>,
    pub kind: FieldsKind,
    pub fields: Vec<CodecField<'a>>,
}

impl<'a> CodecStruct<'a> {
    pub fn new(mut meta: CodecMeta<'a>, kind: FieldsKind, fields: Vec<CodecField<'a>>) -> Self {
        meta.set_active_types(fields.iter().map(|field| field.data.ty.clone()));
        Self { meta, kind, fields }
    }

    #[inline]
    pub fn meta(&self) -> &CodecMeta<'a> {
        &self.meta
    }

    /// Generates a `TokenStream` for `TypeInfo::Product` construction.
    pub fn to_info_tokens(&self) -> TokenStream {
        let uc_codec_path = self.meta.uc_codec_path();
        let type_info_ = crate::path::type_info_(uc_codec_path);
        let product_info_ = crate::path::product_info_(uc_codec_path);

        let fields = self
            .fields
            .iter()
            .map(|field| field.to_info_tokens(uc_codec_path));
        let with_customization = self.meta.with_customization_expression();

        quote! {
            #type_info_::Product(
                #product_info_::new::<Self>(&[ #(#fields),* ])
                    #with_customization
            )
        }
    }
}

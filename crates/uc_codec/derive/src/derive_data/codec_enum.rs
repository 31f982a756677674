use proc_macro2::TokenStream;
use quote::quote;
use syn::Variant;

use super::{CodecField, CodecMeta, FieldAttributes, FieldsKind};

/// An enum, described as a sum of its variants.
pub(crate) struct CodecEnum<'a> {
    pub meta: CodecMeta<'a>,
    pub variants: Vec<CodecVariant<'a>>,
}

/// A variant, i.e. a case whose payload is its fields.
pub(crate) struct CodecVariant<'a> {
    pub data: &'a Variant,
    /// Declaration index, used as the case tag.
    pub tag: usize,
    /// The case name on the wire.
    pub name: String,
    pub kind: FieldsKind,
    pub fields: Vec<CodecField<'a>>,
}

impl<'a> CodecVariant<'a> {
    pub fn new(data: &'a Variant, tag: usize) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
        if let Some(span) = attrs.positional {
            return Err(syn::Error::new(span, "`positional` only applies to fields"));
        }

        let name = match attrs.rename {
            Some(rename) => rename.value(),
            None => data.ident.to_string(),
        };

        Ok(Self {
            data,
            tag,
            name,
            kind: FieldsKind::of(&data.fields),
            fields: CodecField::collect(&data.fields)?,
        })
    }

    /// `Self::Variant`
    #[inline]
    pub fn path(&self) -> TokenStream {
        let ident = &self.data.ident;
        quote!(Self::#ident)
    }

    /// Generates a `TokenStream` for `CaseInfo` construction.
    pub fn to_info_tokens(&self, uc_codec_path: &syn::Path) -> TokenStream {
        let case_info_ = crate::path::case_info_(uc_codec_path);
        let tag = self.tag;
        let name = &self.name;

        if self.fields.is_empty() {
            return quote!(#case_info_::unit(#tag, #name));
        }

        let fields = self
            .fields
            .iter()
            .map(|field| field.to_info_tokens(uc_codec_path));
        quote!(#case_info_::new(#tag, #name, &[ #(#fields),* ]))
    }
}

impl<'a> CodecEnum<'a> {
    pub fn new(mut meta: CodecMeta<'a>, variants: Vec<CodecVariant<'a>>) -> syn::Result<Self> {
        for (at, variant) in variants.iter().enumerate() {
            if variants[..at].iter().any(|prev| prev.name == variant.name) {
                return Err(syn::Error::new_spanned(
                    variant.data,
                    format!("duplicate case name `{}`", variant.name),
                ));
            }
        }

        meta.set_active_types(
            variants
                .iter()
                .flat_map(|variant| &variant.fields)
                .map(|field| field.data.ty.clone()),
        );
        Ok(Self { meta, variants })
    }

    #[inline]
    pub fn meta(&self) -> &CodecMeta<'a> {
        &self.meta
    }

    /// Generates a `TokenStream` for `TypeInfo::Sum` construction.
    pub fn to_info_tokens(&self) -> TokenStream {
        let uc_codec_path = self.meta.uc_codec_path();
        let type_info_ = crate::path::type_info_(uc_codec_path);
        let sum_info_ = crate::path::sum_info_(uc_codec_path);

        let cases = self
            .variants
            .iter()
            .map(|variant| variant.to_info_tokens(uc_codec_path));
        let with_customization = self.meta.with_customization_expression();

        quote! {
            #type_info_::Sum(
                #sum_info_::new::<Self>(&[ #(#cases),* ])
                    #with_customization
            )
        }
    }
}

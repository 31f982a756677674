use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Field, Fields, Ident, Index, Member};

use super::FieldAttributes;

/// How the fields of a struct or variant are declared in Rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldsKind {
    Named,
    Unnamed,
    Unit,
}

impl FieldsKind {
    #[inline]
    pub fn of(fields: &Fields) -> Self {
        match fields {
            Fields::Named(_) => Self::Named,
            Fields::Unnamed(_) => Self::Unnamed,
            Fields::Unit => Self::Unit,
        }
    }

    /// An expression building `path` from one expression per field.
    pub fn construct(
        self,
        path: TokenStream,
        fields: &[CodecField],
        values: impl Iterator<Item = TokenStream>,
    ) -> TokenStream {
        match self {
            Self::Named => {
                let members = fields.iter().map(CodecField::member);
                quote!(#path { #(#members: #values,)* })
            }
            Self::Unnamed => quote!(#path( #(#values,)* )),
            Self::Unit => path,
        }
    }

    /// A pattern matching `path` that binds every field by reference to
    /// [`CodecField::binding`].
    pub fn pattern(self, path: TokenStream, fields: &[CodecField]) -> TokenStream {
        let bindings = fields.iter().map(CodecField::binding);
        match self {
            Self::Named => {
                let members = fields.iter().map(CodecField::member);
                quote!(#path { #(#members: #bindings,)* })
            }
            Self::Unnamed => quote!(#path( #(#bindings,)* )),
            Self::Unit => path,
        }
    }
}

/// A field of a struct or of an enum variant.
pub(crate) struct CodecField<'a> {
    pub data: &'a Field,
    /// Declaration index.
    pub index: usize,
    /// The name on the wire; `None` for positional fields.
    pub name: Option<String>,
}

impl<'a> CodecField<'a> {
    pub fn new(data: &'a Field, index: usize) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&data.attrs)?;

        let name = match (&attrs.rename, &data.ident) {
            (Some(rename), _) => Some(rename.value()),
            (None, _) if attrs.positional.is_some() => None,
            (None, Some(ident)) => Some(ident.to_string()),
            (None, None) => None,
        };

        Ok(Self { data, index, name })
    }

    /// Parse all fields, rejecting two fields with the same wire name.
    pub fn collect(fields: &'a Fields) -> syn::Result<Vec<Self>> {
        let fields = fields
            .iter()
            .enumerate()
            .map(|(index, field)| Self::new(field, index))
            .collect::<syn::Result<Vec<_>>>()?;

        for (at, field) in fields.iter().enumerate() {
            if let Some(name) = &field.name
                && fields[..at].iter().any(|prev| prev.name.as_ref() == Some(name))
            {
                return Err(syn::Error::new_spanned(
                    field.data,
                    format!("duplicate field name `{name}`"),
                ));
            }
        }

        Ok(fields)
    }

    /// `self.a` / `self.0` accessor.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(self.index)),
        }
    }

    /// Identifier the field is bound to in patterns.
    #[inline]
    pub fn binding(&self) -> Ident {
        format_ident!("__field_{}", self.index)
    }

    /// Generate `FieldInfo::named::<T>("name", 0)` or `FieldInfo::positional::<T>(0)`.
    pub fn to_info_tokens(&self, uc_codec_path: &syn::Path) -> TokenStream {
        let field_info_ = crate::path::field_info_(uc_codec_path);
        let ty = &self.data.ty;
        let index = self.index;

        match &self.name {
            Some(name) => quote!(#field_info_::named::<#ty>(#name, #index)),
            None => quote!(#field_info_::positional::<#ty>(#index)),
        }
    }
}

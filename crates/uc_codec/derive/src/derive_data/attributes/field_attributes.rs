use proc_macro2::Span;
use syn::{Attribute, LitStr, spanned::Spanned};

use super::set_once;
use crate::CODEC_ATTRIBUTE_NAME;

/// Field and variant attributes.
///
/// - `#[codec(rename = "b")]`: the field's (or case's) name on the wire.
///   Naming a tuple field this way makes it a named field.
/// - `#[codec(positional)]`: treat a named struct field as positional.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub positional: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(CODEC_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    set_once(&mut this.rename, value, &meta)
                } else if meta.path.is_ident("positional") {
                    set_once(&mut this.positional, meta.path.span(), &meta)
                } else {
                    Err(meta.error("unknown field attribute"))
                }
            })?;
        }

        if let (Some(span), Some(_)) = (this.positional, &this.rename) {
            return Err(syn::Error::new(
                span,
                "a field cannot be both `positional` and renamed",
            ));
        }

        Ok(this)
    }
}

use syn::{Data, DeriveInput};

use super::{CodecEnum, CodecField, CodecMeta, CodecStruct, CodecVariant, FieldsKind, TypeAttributes};

/// The parsed derive input, by the kind of impls it gets.
pub(crate) enum CodecDerive<'a> {
    Struct(CodecStruct<'a>),
    Enum(CodecEnum<'a>),
    /// `#[codec(native)]`: converts through serde.
    Native(CodecMeta<'a>),
}

impl<'a> CodecDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let native = attrs.native.is_some();
        let meta = CodecMeta::new(attrs, &input.ident, &input.generics);

        if native {
            return Ok(Self::Native(meta));
        }

        match &input.data {
            Data::Struct(data) => {
                let fields = CodecField::collect(&data.fields)?;
                Ok(Self::Struct(CodecStruct::new(
                    meta,
                    FieldsKind::of(&data.fields),
                    fields,
                )))
            }
            Data::Enum(data) => {
                let variants = data
                    .variants
                    .iter()
                    .enumerate()
                    .map(|(tag, variant)| CodecVariant::new(variant, tag))
                    .collect::<syn::Result<Vec<_>>>()?;
                Ok(Self::Enum(CodecEnum::new(meta, variants)?))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "unions are not supported by `Uncodable`",
            )),
        }
    }
}

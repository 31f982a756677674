use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, LitStr, Path, spanned::Spanned};

use super::set_once;
use crate::CODEC_ATTRIBUTE_NAME;

/// The mixed strategy chosen through attributes.
#[derive(Debug)]
pub(crate) enum StrategyAttr {
    /// `#[codec(remainder = "rest")]`
    Remainder(LitStr),
    /// `#[codec(indices_as_names)]`
    IndicesAsNames,
    /// `#[codec(custom(encode = path, decode = path))]`
    Custom { encode: Path, decode: Path },
}

/// Type-level attributes.
///
/// ```ignore
/// #[derive(Uncodable)]
/// #[codec(case_name_key = "kind", payload_key = "data", inline_payload)]
/// #[codec(remainder = "rest")]
/// enum Foo { /* ... */ }
/// ```
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    pub case_name_key: Option<LitStr>,
    pub payload_key: Option<LitStr>,
    pub inline_payload: Option<Span>,
    pub strategy: Option<StrategyAttr>,
    /// The type implements `Customized` itself; attributes are applied on top.
    pub customized: Option<Span>,
    /// Convert through serde instead of the structural codec.
    pub native: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(CODEC_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("case_name_key") {
                    let value: LitStr = meta.value()?.parse()?;
                    set_once(&mut this.case_name_key, value, &meta)
                } else if meta.path.is_ident("payload_key") {
                    let value: LitStr = meta.value()?.parse()?;
                    set_once(&mut this.payload_key, value, &meta)
                } else if meta.path.is_ident("inline_payload") {
                    set_once(&mut this.inline_payload, span, &meta)
                } else if meta.path.is_ident("remainder") {
                    let value: LitStr = meta.value()?.parse()?;
                    set_once(&mut this.strategy, StrategyAttr::Remainder(value), &meta)
                } else if meta.path.is_ident("indices_as_names") {
                    set_once(&mut this.strategy, StrategyAttr::IndicesAsNames, &meta)
                } else if meta.path.is_ident("custom") {
                    let mut encode = None;
                    let mut decode = None;
                    meta.parse_nested_meta(|inner| {
                        if inner.path.is_ident("encode") {
                            let value: Path = inner.value()?.parse()?;
                            set_once(&mut encode, value, &inner)
                        } else if inner.path.is_ident("decode") {
                            let value: Path = inner.value()?.parse()?;
                            set_once(&mut decode, value, &inner)
                        } else {
                            Err(inner.error("expected `encode` or `decode`"))
                        }
                    })?;
                    let (Some(encode), Some(decode)) = (encode, decode) else {
                        return Err(meta.error("`custom` needs both `encode` and `decode`"));
                    };
                    set_once(&mut this.strategy, StrategyAttr::Custom { encode, decode }, &meta)
                } else if meta.path.is_ident("customized") {
                    set_once(&mut this.customized, span, &meta)
                } else if meta.path.is_ident("native") {
                    set_once(&mut this.native, span, &meta)
                } else {
                    Err(meta.error("unknown type attribute"))
                }
            })?;
        }

        if let Some(span) = this.native
            && this.has_customization()
        {
            return Err(syn::Error::new(
                span,
                "`native` types are not customizable",
            ));
        }

        Ok(this)
    }

    #[inline]
    pub fn has_customization(&self) -> bool {
        self.case_name_key.is_some()
            || self.payload_key.is_some()
            || self.inline_payload.is_some()
            || self.strategy.is_some()
            || self.customized.is_some()
    }

    /// If no customization is declared, this function returns an empty
    /// token stream.
    ///
    /// Otherwise, it returns content similar to this:
    ///
    /// ```ignore
    /// .with_customization(
    ///     _path_::Customization::new()
    ///         .with_case_name_key("kind")
    ///         .with_inline_payload(true)
    /// )
    /// ```
    pub fn get_expression_with(&self, uc_codec_path: &Path) -> TokenStream {
        if !self.has_customization() {
            return crate::utils::empty();
        }

        let base = if self.customized.is_some() {
            let customized_ = crate::path::customized_(uc_codec_path);
            quote!(<Self as #customized_>::customization())
        } else {
            let customization_ = crate::path::customization_(uc_codec_path);
            quote!(#customization_::new())
        };

        let case_name_key = self
            .case_name_key
            .as_ref()
            .map(|key| quote!(.with_case_name_key(#key)));
        let payload_key = self
            .payload_key
            .as_ref()
            .map(|key| quote!(.with_payload_key(#key)));
        let inline_payload = self
            .inline_payload
            .map(|_| quote!(.with_inline_payload(true)));

        let strategy = self.strategy.as_ref().map(|strategy| {
            let mixed_strategy_ = crate::path::mixed_strategy_(uc_codec_path);
            let value = match strategy {
                StrategyAttr::Remainder(key) => quote!(#mixed_strategy_::remainder(#key)),
                StrategyAttr::IndicesAsNames => quote!(#mixed_strategy_::UseIndicesAsNames),
                StrategyAttr::Custom { encode, decode } => {
                    let custom_strategy_ = crate::path::custom_strategy_(uc_codec_path);
                    quote!(#mixed_strategy_::Custom(#custom_strategy_::new(#encode, #decode)))
                }
            };
            quote!(.with_mixed_strategy(#value))
        });

        quote! {
            .with_customization(
                #base
                    #case_name_key
                    #payload_key
                    #inline_payload
                    #strategy
            )
        }
    }
}

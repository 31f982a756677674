use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;

/// The trait every generic field type must implement, per generated impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldBound {
    /// `Typed`, for the `Typed` impl.
    Typed,
    /// `Typed + Reflect`, for `Reflect` and the access traits.
    Reflect,
    /// `Decode`, for `Construct` and `Decode`.
    Decode,
}

pub(crate) struct CodecMeta<'a> {
    uc_codec_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    active_types: Vec<Type>,
}

impl core::fmt::Debug for CodecMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CodecMeta")
            .field("uc_codec_path", &self.uc_codec_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> CodecMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            uc_codec_path: crate::path::uc_codec(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        }
    }

    /// Record the field types, used to bound generic fields.
    pub(super) fn set_active_types(&mut self, types: impl Iterator<Item = Type>) {
        for ty in types {
            if !self.active_types.contains(&ty) {
                self.active_types.push(ty);
            }
        }
    }

    #[inline]
    pub fn uc_codec_path(&self) -> &Path {
        &self.uc_codec_path
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// Whether the type info must be stored per instantiation.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// Generate `.with_customization(...)`, or nothing.
    #[inline]
    pub fn with_customization_expression(&self) -> TokenStream {
        self.attrs.get_expression_with(&self.uc_codec_path)
    }

    /// Return `impl_generics`, `ty_generics` and the where clause for an
    /// impl of this type.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// let ident = meta.ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(FieldBound::Reflect);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// `Typed` requires `'static`, so generic types are bounded by
    /// `Self: 'static`. Every field type that mentions a type parameter is
    /// bounded by `bound`; other field types are checked by the compiler
    /// directly.
    pub fn split_generics(
        &self,
        bound: FieldBound,
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        if self.impl_with_generic() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let bound = match bound {
            FieldBound::Typed => crate::path::typed_(&self.uc_codec_path),
            FieldBound::Reflect => {
                let typed_ = crate::path::typed_(&self.uc_codec_path);
                let reflect_ = crate::path::reflect_(&self.uc_codec_path);
                quote!(#typed_ + #reflect_)
            }
            FieldBound::Decode => crate::path::decode_(&self.uc_codec_path),
        };

        let type_params: Vec<&Ident> = self.generics.type_params().map(|p| &p.ident).collect();
        if !type_params.is_empty() {
            for ty in &self.active_types {
                if is_any_ident_in_token_stream(&type_params, ty.to_token_stream()) {
                    generic_where_clause.extend(quote! { #ty: #bound, });
                }
            }
        }

        (impl_generics, ty_generics, generic_where_clause)
    }
}

// Do any of the identifiers in `idents` appear in `token_stream`?
fn is_any_ident_in_token_stream(idents: &[&Ident], token_stream: TokenStream) -> bool {
    token_stream.into_iter().any(|token_tree| match token_tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&&ident),
        proc_macro2::TokenTree::Group(group) => is_any_ident_in_token_stream(idents, group.stream()),
        _ => false,
    })
}

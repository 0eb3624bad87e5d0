use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, also the source name in the mapping
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[auto]`
    pub(crate) auto: Option<syn::Attribute>,

    /// Optional database column name
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::default();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.spanned(attr, "duplicate #[key] attribute");
                } else if errs.take(attr.meta.require_path_only()).is_some() {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if attrs.auto.is_some() {
                    errs.spanned(attr, "duplicate #[auto] attribute");
                } else if errs.take(attr.meta.require_path_only()).is_some() {
                    attrs.auto = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.spanned(attr, "duplicate #[column] attribute");
                } else {
                    attrs.column = errs.take(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("table") {
                errs.spanned(attr, "#[table] goes on the model, not on a field");
            }
        }

        if let (Some(auto), None) = (&attrs.auto, &attrs.key) {
            errs.spanned(auto, "#[auto] requires #[key]");
        }

        errs.finish()?;

        Ok(Self {
            ident: ident.clone(),
            attrs,
            ty: field.ty.clone(),
        })
    }

    /// Name of the field in the in-memory record, without any `r#` prefix.
    pub(crate) fn source_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Column the field is stored in.
    pub(crate) fn column_name(&self) -> String {
        match &self.attrs.column {
            Some(column) => column.name.value(),
            None => self.source_name(),
        }
    }
}

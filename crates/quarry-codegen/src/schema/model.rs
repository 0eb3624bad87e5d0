use super::{ErrorSet, Field, ModelAttr};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Model {
    /// Model visibility
    pub(crate) vis: syn::Visibility,

    /// Model identifier
    pub(crate) ident: syn::Ident,

    /// Model level attributes
    pub(crate) attrs: ModelAttr,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Identifier of the generated struct holding field paths
    pub(crate) field_struct_ident: syn::Ident,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model parameters are not supported",
            ));
        }

        let mut errs = ErrorSet::default();
        let mut attrs = ModelAttr::default();

        errs.take(attrs.populate_from_ast(&ast.attrs));

        let fields: Vec<_> = node
            .named
            .iter()
            .filter_map(|node| errs.take(Field::from_ast(node)))
            .collect();

        errs.finish()?;

        Ok(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            attrs,
            fields,
            field_struct_ident: quote::format_ident!("{}Fields", ast.ident),
        })
    }

    /// Name of the entity, also the default table name.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// A zero-sized struct with one path method per field, returned by
    /// `Model::fields()`.
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let quarry = &self.quarry;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let field_struct_ident = &self.model.field_struct_ident;

        let methods = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let source = field.source_name();

            quote! {
                #vis fn #ident(&self) -> #quarry::Path<#ty> {
                    #quarry::Path::new(#source)
                }
            }
        });

        quote! {
            #[derive(Debug, Clone, Copy)]
            #vis struct #field_struct_ident;

            impl #field_struct_ident {
                #( #methods )*
            }

            impl #model_ident {
                #vis fn fields() -> #field_struct_ident {
                    #field_struct_ident
                }
            }
        }
    }
}

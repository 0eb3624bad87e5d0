use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let quarry = &self.quarry;
        let model_ident = &self.model.ident;
        let name = self.model.name();

        let table = self
            .model
            .attrs
            .table
            .as_ref()
            .map(|table| quote!(.table(#table)));

        let fields = self.model.fields.iter().map(|field| {
            let source = field.source_name();

            let column = field
                .attrs
                .column
                .as_ref()
                .map(|column| {
                    let name = &column.name;
                    quote!(.column(#name))
                });

            let key = field.attrs.key.as_ref().map(|_| quote!(.key()));
            let auto = field.attrs.auto.as_ref().map(|_| quote!(.auto_increment()));

            quote! {
                .field(#quarry::Field::new(#source) #column #key #auto)
            }
        });

        quote! {
            impl #quarry::Entity for #model_ident {
                fn describe() -> #quarry::Result<#quarry::EntityMapping> {
                    #quarry::EntityMapping::builder(#name)
                        #table
                        #( #fields )*
                        .build()
                }
            }
        }
    }
}

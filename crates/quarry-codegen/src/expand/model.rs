use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let quarry = &self.quarry;
        let model_ident = &self.model.ident;

        let to_values = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            quote!(#quarry::Primitive::to_value(&self.#ident))
        });

        let load_fields = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let column = field.column_name();
            let source = field.source_name();

            quote! {
                #ident: #quarry::load_field::<#ty>(row, #column, #source)?,
            }
        });

        quote! {
            impl #quarry::Model for #model_ident {
                fn to_record(&self) -> #quarry::ValueRecord {
                    #quarry::ValueRecord::from_vec(#quarry::Vec::from([
                        #( #to_values ),*
                    ]))
                }

                fn load(row: &#quarry::Row) -> #quarry::Result<Self> {
                    Ok(Self {
                        #( #load_fields )*
                    })
                }
            }
        }
    }
}

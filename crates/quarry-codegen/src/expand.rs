mod entity;
mod fields;
mod model;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for quarry types
    quarry: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let entity_impl = self.expand_entity_impl();
        let model_impl = self.expand_model_impl();
        let field_struct = self.expand_field_struct();

        wrap_in_const(quote! {
            #entity_impl
            #model_impl
            #field_struct
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        quarry: quote!(_quarry::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use quarry as _quarry;
            #code
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote::quote;

    fn expand(input: proc_macro2::TokenStream) -> syn::Result<String> {
        crate::generate(input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn describes_attributes() {
        let out = expand(quote! {
            #[table = "ORT_Test"]
            struct Test {
                #[key]
                #[auto]
                my_property: i32,

                #[column("[Name]")]
                name: String,
            }
        })
        .unwrap();

        assert!(out.contains(&quote!(.table("ORT_Test")).to_string()));
        assert!(out.contains(&quote!(Field::new("my_property").key().auto_increment()).to_string()));
        assert!(out.contains(&quote!(Field::new("name").column("[Name]")).to_string()));
        assert!(out.contains("TestFields"));
    }

    #[test]
    fn auto_requires_key() {
        let err = expand(quote! {
            struct Test {
                #[auto]
                id: i32,
            }
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "#[auto] requires #[key]");
    }

    #[test]
    fn rejects_tuple_structs() {
        let err = expand(quote! {
            struct Test(i32);
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "model fields must be named");
    }

    #[test]
    fn rejects_duplicate_attributes() {
        let err = expand(quote! {
            #[table = "a"]
            #[table = "b"]
            struct Test {
                #[key]
                #[key]
                id: i32,
            }
        })
        .unwrap_err();

        let messages: Vec<_> = err.into_iter().map(|err| err.to_string()).collect();
        assert_eq!(
            messages,
            ["duplicate `table` attribute", "duplicate #[key] attribute"]
        );
    }

    #[test]
    fn raw_identifiers_map_without_prefix() {
        let out = expand(quote! {
            struct Item {
                #[key]
                id: i32,
                r#type: String,
            }
        })
        .unwrap();

        assert!(out.contains(&quote!(Field::new("type")).to_string()));
        assert!(out.contains(&quote!(load_field::<String>(row, "type", "type")).to_string()));
        assert!(!out.contains("\"r#type\""));
    }

    #[test]
    fn rejects_malformed_column() {
        let err = expand(quote! {
            struct Test {
                #[column(name)]
                id: i32,
            }
        })
        .unwrap_err();

        assert!(err.to_string().contains("expected string literal"));
    }
}

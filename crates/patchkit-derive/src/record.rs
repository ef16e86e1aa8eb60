use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, GenericArgument, PathArguments, Type};

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "Record can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "Record can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let models = fields.iter().map(|field| {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();

        match classify_field(&field.ty) {
            FieldShape::Plain(ty) => quote! {
                ::patchkit::model::FieldModel {
                    name: #field_name,
                    kind: <#ty as ::patchkit::traits::FieldValue>::KIND,
                    optional: false,
                },
            },
            FieldShape::Optional(inner) => quote! {
                ::patchkit::model::FieldModel {
                    name: #field_name,
                    kind: <#inner as ::patchkit::traits::FieldValue>::KIND,
                    optional: true,
                },
            },
        }
    });

    let get_arms = fields.iter().map(|field| {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();

        match classify_field(&field.ty) {
            FieldShape::Plain(_) => quote! {
                #field_name => Some(FieldValue::to_value(&self.#field_ident)),
            },
            FieldShape::Optional(_) => quote! {
                #field_name => match self.#field_ident.as_ref() {
                    Some(inner) => Some(FieldValue::to_value(inner)),
                    None => Some(Value::Null),
                },
            },
        }
    });

    let set_arms = fields.iter().map(|field| {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();

        match classify_field(&field.ty) {
            FieldShape::Plain(ty) => quote! {
                #field_name => match <#ty as FieldValue>::from_value(&value) {
                    Some(converted) => {
                        self.#field_ident = converted;
                        Ok(())
                    }
                    None if value.is_null() => Err(FieldError::unexpected_null(#field_name)),
                    None => Err(FieldError::mismatch(#field_name, &value)),
                },
            },
            FieldShape::Optional(inner) => quote! {
                #field_name => {
                    if value.is_null() {
                        self.#field_ident = None;
                        Ok(())
                    } else {
                        match <#inner as FieldValue>::from_value(&value) {
                            Some(converted) => {
                                self.#field_ident = Some(converted);
                                Ok(())
                            }
                            None => Err(FieldError::mismatch(#field_name, &value)),
                        }
                    }
                }
            },
        }
    });

    quote! {
        impl #impl_generics ::patchkit::traits::Record for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::patchkit::model::FieldModel] = &[
                #(#models)*
            ];

            fn get_value(&self, field: &str) -> Option<::patchkit::value::Value> {
                use ::patchkit::{traits::FieldValue, value::Value};

                match field {
                    #(#get_arms)*
                    _ => None,
                }
            }

            fn set_value(
                &mut self,
                field: &str,
                value: ::patchkit::value::Value,
            ) -> Result<(), ::patchkit::update::FieldError> {
                use ::patchkit::{traits::FieldValue, update::FieldError, value::Value};

                match field {
                    #(#set_arms)*
                    _ => Err(FieldError::unknown(field)),
                }
            }
        }
    }
}

///
/// FieldShape
///

enum FieldShape<'a> {
    Plain(&'a Type),
    Optional(&'a Type),
}

fn classify_field(ty: &Type) -> FieldShape<'_> {
    option_inner(ty).map_or(FieldShape::Plain(ty), FieldShape::Optional)
}

/// The wrapped type of an `Option<T>` path, detected syntactically by the
/// last path segment.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

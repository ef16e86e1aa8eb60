use proc_macro::TokenStream;

mod record;

/// Derive the `Record` capability for a struct with named fields: the
/// static field table plus name-addressed `get_value`/`set_value`.
///
/// `Option<T>` fields declare the wrapped shape with the optional flag
/// set; every other field type must implement `FieldValue`.
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

struct KeyedAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for KeyedAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(KeyedAttribute { crate_path: path })
    }
}

/// Derive macro for payloads that are looked up by one of their fields.
///
/// Exactly one named field must carry `#[key]`. The generated `Keyed` impl
/// returns a reference to that field, which `List::find_key` compares with `==`.
#[proc_macro_derive(Keyed, attributes(keyed, key))]
pub fn keyed_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::mola_linked };

    for attr in &input.attrs {
        if attr.path().is_ident("keyed") {
            match attr.parse_args::<KeyedAttribute>() {
                Ok(keyed_attr) => {
                    let path = keyed_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let owned_path = quote! { #crate_path::linked_list::owned };

    let fields = if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        fields
    } else {
        return syn::Error::new_spanned(
            &input,
            "Keyed derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let mut key_field: Option<&Field> = None;
    for field in fields.named.iter() {
        if !field.attrs.iter().any(|attr| attr.path().is_ident("key")) {
            continue;
        }
        if key_field.is_some() {
            return syn::Error::new_spanned(field, "Only one field may be marked `#[key]`")
                .to_compile_error()
                .into();
        }
        key_field = Some(field);
    }

    let key_field = match key_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field marked `#[key]`")
                .to_compile_error()
                .into();
        }
    };

    let key_ident = &key_field.ident;
    let key_type = &key_field.ty;

    let expanded = quote! {
        impl #impl_generics #owned_path::traits::Keyed for #struct_name #ty_generics #where_clause {
            type Key = #key_type;

            #[inline]
            fn key(&self) -> &Self::Key {
                &self.#key_ident
            }
        }
    };

    TokenStream::from(expanded)
}

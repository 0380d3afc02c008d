extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Type, TypePath};

/// Implements `Located` for a struct by finding its field of type `Coords`. Both `Located` and
/// `Coords` must be in scope where the derive is used.
#[proc_macro_derive(Located)]
pub fn located_derive(input: TokenStream) -> TokenStream {
  let ast = syn::parse_macro_input!(input as DeriveInput);
  match impl_located(&ast) {
    Ok(gen) => gen.into(),
    Err(e) => e.to_compile_error().into(),
  }
}

fn is_coords(f: &Field) -> bool {
  match f.ty {
    Type::Path(TypePath { qself: None, ref path }) => path.is_ident("Coords"),
    _ => false,
  }
}

fn impl_located(ast: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
  let name = &ast.ident;
  let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
  // Find the field of the struct which holds the coordinates
  if let Data::Struct(ref sstruct) = ast.data {
    if let Fields::Named(ref fields) = sstruct.fields {
      let maybe_field = fields.named.iter().find(|f| is_coords(f));
      if let Some(Field { ident: Some(identity), .. }) = maybe_field {
        Ok(quote! {
          impl #impl_generics Located for #name #ty_generics #where_clause {
            fn coords(&self) -> Coords { self.#identity }
          }
        })
      } else {
        Err(syn::Error::new_spanned(name, "No field with type Coords found"))
      }
    } else {
      Err(syn::Error::new_spanned(name, "No named fields (must declare a Coords field)!"))
    }
  } else {
    Err(syn::Error::new_spanned(name, "Must be used on struct"))
  }
}

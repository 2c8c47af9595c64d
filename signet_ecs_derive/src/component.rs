use quote::quote;
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let gen = quote! {
        impl signet_ecs::components::Component for #name {}
    };
    gen.into()
}

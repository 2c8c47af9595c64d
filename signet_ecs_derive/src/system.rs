use quote::quote;
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_system(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    // The annotated struct must declare an `entities: EntitySet` field.
    let gen = quote! {
        impl signet_ecs::systems::System for #name {
            #[inline(always)]
            fn entities(&self) -> &signet_ecs::systems::EntitySet {
                &self.entities
            }

            #[inline(always)]
            fn entities_mut(&mut self) -> &mut signet_ecs::systems::EntitySet {
                &mut self.entities
            }
        }
    };
    gen.into()
}

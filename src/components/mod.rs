mod component;
mod component_id;
mod component_registry;
mod component_store;

pub use component::*;
pub use component_id::*;
pub use component_registry::*;
pub use component_store::*;
pub use signet_ecs_derive::Component;

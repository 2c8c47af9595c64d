//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be registered with an [EcsContext](crate::context::EcsContext)
//! and given a required [Signature](crate::Signature) before entities can be
//! routed to it.

mod system;
mod system_registry;

pub use system::*;
pub(crate) use system_registry::*;
pub use signet_ecs_derive::System;

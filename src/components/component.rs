/// A marker for plain data records that can be attached to an
/// [entity](crate::entities::Entity).
///
/// A component describes one aspect of an entity (position, velocity, ...)
/// and holds no behaviour. Each type must be registered with
/// [EcsContext::register_component](crate::context::EcsContext::register_component)
/// before it can be attached.
pub trait Component: 'static {}

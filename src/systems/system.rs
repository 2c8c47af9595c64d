use crate::entities::Entity;
use std::collections::BTreeSet;

/// The set of entities currently routed to a [System].
///
/// Ordered so that iteration within a frame is deterministic.
pub type EntitySet = BTreeSet<Entity>;

/// A unit of per-frame logic fed by signature matching.
///
/// The trait exposes the membership set and nothing else: the registry
/// inserts and erases entities as signatures change, and the concrete
/// system's behaviour lives outside the trait, in functions that walk
/// [entities](System::entities) and reach component data through the
/// [EcsContext](crate::context::EcsContext). A system never stores
/// component values of its own.
///
/// `#[derive(System)]` implements the trait for any struct with an
/// `entities: EntitySet` field.
pub trait System: 'static {
	/// The entities whose signatures satisfy this system's required signature.
	fn entities(&self) -> &EntitySet;

	/// **This accessor exists for membership bookkeeping and should not be
	/// called by user code.** A system cannot place itself into or out of
	/// its own membership set.
	fn entities_mut(&mut self) -> &mut EntitySet;
}

use crate::components::{Component, ComponentId, ComponentRegistry};
use crate::entities::{Entity, EntityRegistry};
use crate::systems::{System, SystemRegistry};
use crate::Signature;
use std::cell::RefCell;
use std::rc::Rc;

/// The façade composing the entity, component and system registries.
///
/// All entity and component mutation must flow through the [EcsContext] so
/// that signatures and system membership never drift out of sync with
/// actual component ownership. The context is an ordinary owned value:
/// construct one and pass it to whatever drives your frame loop.
///
/// Every precondition violation (double registration, unregistered type,
/// out-of-range entity, missing component) is a contract violation and
/// panics rather than returning a recoverable error.
pub struct EcsContext {
	entities: EntityRegistry,
	components: ComponentRegistry,
	systems: SystemRegistry,
}

impl EcsContext {
	pub fn new() -> Self {
		Self {
			entities: EntityRegistry::new(),
			components: ComponentRegistry::new(),
			systems: SystemRegistry::new(),
		}
	}

	/// Create a new entity with an empty signature and no components.
	pub fn create_entity(&mut self) -> Entity {
		self.entities.create()
	}

	/// Destroy `entity`, dropping every component it held and erasing it
	/// from every system's membership set. Its ID returns to the recycle
	/// pool and may eventually be reissued.
	pub fn destroy_entity(&mut self, entity: Entity) {
		self.entities.destroy(entity);
		self.components.entity_destroyed(entity);
		self.systems.entity_destroyed(entity);
	}

	/// Register the component type `T`, assigning it the next type-code.
	pub fn register_component<T: Component>(&mut self) {
		self.components.register::<T>();
	}

	/// Attach `value` to `entity`, set the matching signature bit and
	/// re-evaluate system membership.
	pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) {
		self.components.insert(entity, value);

		let mut signature = self.entities.signature(entity);
		signature.set(self.components.component_id::<T>().index(), true);
		self.entities.set_signature(entity, signature);

		self.systems.entity_signature_changed(entity, signature);
	}

	/// Detach and return `entity`'s `T`, clear the matching signature bit
	/// and re-evaluate system membership.
	pub fn remove_component<T: Component>(&mut self, entity: Entity) -> T {
		let value = self.components.remove::<T>(entity);

		let mut signature = self.entities.signature(entity);
		signature.set(self.components.component_id::<T>().index(), false);
		self.entities.set_signature(entity, signature);

		self.systems.entity_signature_changed(entity, signature);
		value
	}

	pub fn get_component<T: Component>(&self, entity: Entity) -> &T {
		self.components.get(entity)
	}

	pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
		self.components.get_mut(entity)
	}

	/// The type-code assigned to `T` at registration; used to build
	/// required [Signature]s for systems.
	pub fn component_id<T: Component>(&self) -> ComponentId {
		self.components.component_id::<T>()
	}

	/// The signature currently recorded for `entity`.
	pub fn signature(&self, entity: Entity) -> Signature {
		self.entities.signature(entity)
	}

	/// Construct the shared instance of system `S`. The returned handle is
	/// how callers reach the system's membership set during their update
	/// pass; the registry keeps the membership current through it.
	pub fn register_system<S: System + Default>(&mut self) -> Rc<RefCell<S>> {
		self.systems.register::<S>()
	}

	/// Record the signature an entity must satisfy to belong to `S`.
	/// Call once, immediately after [register_system](Self::register_system).
	pub fn set_system_signature<S: System>(&mut self, signature: Signature) {
		self.systems.set_signature::<S>(signature);
	}
}

impl Default for EcsContext {
	fn default() -> Self {
		Self::new()
	}
}

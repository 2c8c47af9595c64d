use crate::components::{Component, ComponentId, ComponentStore, ErasedStore};
use crate::entities::Entity;
use crate::MAX_COMPONENT_TYPES;
use std::collections::HashMap;
use std::any::{type_name, TypeId};

/// Maps component types to their [ComponentId] type-codes and owns one
/// [ComponentStore] per registered type.
///
/// Typed operations route through `TypeId` to the matching store; the
/// type-erased [lifecycle hook](ErasedStore::entity_destroyed) lets entity
/// destruction sweep every store without knowing the concrete types.
pub struct ComponentRegistry {
	ids: HashMap<TypeId, ComponentId>,
	stores: HashMap<TypeId, Box<dyn ErasedStore>>,
	next_id: u16,
}

impl ComponentRegistry {
	pub fn new() -> Self {
		Self {
			ids: HashMap::new(),
			stores: HashMap::new(),
			next_id: 0,
		}
	}

	/// Assign the next unused type-code to `T` and allocate its store.
	pub fn register<T: Component>(&mut self) {
		let key = TypeId::of::<T>();
		assert!(
			!self.ids.contains_key(&key),
			"component type registered more than once"
		);
		assert!(
			(self.next_id as usize) < MAX_COMPONENT_TYPES,
			"too many component types registered"
		);

		let id = ComponentId(self.next_id);
		self.next_id += 1;

		self.ids.insert(key, id);
		self.stores.insert(key, Box::new(ComponentStore::<T>::new()));

		log::debug!("registered component type {} as {:?}", type_name::<T>(), id);
	}

	/// The type-code assigned to `T` at registration.
	pub fn component_id<T: Component>(&self) -> ComponentId {
		match self.ids.get(&TypeId::of::<T>()) {
			Some(id) => *id,
			None => panic!("component type {} used before registration", type_name::<T>()),
		}
	}

	pub fn insert<T: Component>(&mut self, entity: Entity, value: T) {
		self.store_mut::<T>().insert(entity, value);
	}

	pub fn remove<T: Component>(&mut self, entity: Entity) -> T {
		self.store_mut::<T>().remove(entity)
	}

	pub fn get<T: Component>(&self, entity: Entity) -> &T {
		self.store::<T>().get(entity)
	}

	pub fn get_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
		self.store_mut::<T>().get_mut(entity)
	}

	/// Forward `entity`'s destruction to every registered store, whether or
	/// not the entity held that component type.
	pub fn entity_destroyed(&mut self, entity: Entity) {
		for store in self.stores.values_mut() {
			store.entity_destroyed(entity);
		}
	}

	fn store<T: Component>(&self) -> &ComponentStore<T> {
		self.stores
			.get(&TypeId::of::<T>())
			.and_then(|store| store.as_any().downcast_ref())
			.unwrap_or_else(|| {
				panic!("component type {} used before registration", type_name::<T>())
			})
	}

	fn store_mut<T: Component>(&mut self) -> &mut ComponentStore<T> {
		self.stores
			.get_mut(&TypeId::of::<T>())
			.and_then(|store| store.as_any_mut().downcast_mut())
			.unwrap_or_else(|| {
				panic!("component type {} used before registration", type_name::<T>())
			})
	}
}

impl Default for ComponentRegistry {
	fn default() -> Self {
		Self::new()
	}
}

use crate::entities::Entity;
use crate::systems::System;
use crate::Signature;
use std::collections::HashMap;
use std::any::{type_name, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

/// Owns one shared instance of every registered [System] and its required
/// [Signature], and keeps each system's membership set in sync with entity
/// signatures.
pub(crate) struct SystemRegistry {
	signatures: HashMap<TypeId, Signature>,
	systems: HashMap<TypeId, Rc<RefCell<dyn System>>>,
}

impl SystemRegistry {
	pub fn new() -> Self {
		Self {
			signatures: HashMap::new(),
			systems: HashMap::new(),
		}
	}

	/// Construct the shared instance of `S` with an empty membership set.
	/// The returned handle stays valid for the registry's lifetime.
	pub fn register<S: System + Default>(&mut self) -> Rc<RefCell<S>> {
		let key = TypeId::of::<S>();
		assert!(
			!self.systems.contains_key(&key),
			"system registered more than once"
		);

		let system = Rc::new(RefCell::new(S::default()));
		let erased: Rc<RefCell<dyn System>> = system.clone();
		self.systems.insert(key, erased);

		log::debug!("registered system {}", type_name::<S>());
		system
	}

	/// Record the signature an entity must satisfy to be routed to `S`.
	/// Expected once per system, before any entity mutation.
	pub fn set_signature<S: System>(&mut self, signature: Signature) {
		assert!(
			self.systems.contains_key(&TypeId::of::<S>()),
			"system used before registration"
		);

		self.signatures.insert(TypeId::of::<S>(), signature);
	}

	/// Erase `entity` from every membership set unconditionally.
	pub fn entity_destroyed(&mut self, entity: Entity) {
		for system in self.systems.values() {
			system.borrow_mut().entities_mut().remove(&entity);
		}
	}

	/// Re-evaluate `entity`'s membership in every system against its new
	/// signature. Each system is checked in full; membership transitions
	/// happen only here and in [entity_destroyed](Self::entity_destroyed).
	pub fn entity_signature_changed(&mut self, entity: Entity, signature: Signature) {
		for (key, system) in &self.systems {
			// A system whose signature was never set requires nothing and
			// matches every entity.
			let required = self.signatures.get(key).copied().unwrap_or_default();
			let mut system = system.borrow_mut();

			if signature.contains(&required) {
				system.entities_mut().insert(entity);
			} else {
				system.entities_mut().remove(&entity);
			}
		}
	}
}

impl Default for SystemRegistry {
	fn default() -> Self {
		Self::new()
	}
}

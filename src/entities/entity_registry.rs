use crate::entities::Entity;
use crate::{Signature, MAX_ENTITIES};
use std::collections::VecDeque;

/// Issues and recycles [Entity] handles and tracks each entity's [Signature].
///
/// The registry seeds its recycle pool with every ID in ascending order and
/// reuses released IDs oldest-first, so a destroyed ID cycles through the
/// whole pool before it is reissued.
pub struct EntityRegistry {
	available: VecDeque<Entity>,
	signatures: Vec<Signature>,
	living: usize,
}

impl EntityRegistry {
	pub fn new() -> Self {
		Self {
			available: (0..MAX_ENTITIES as u32).map(Entity).collect(),
			signatures: vec![Signature::default(); MAX_ENTITIES],
			living: 0,
		}
	}

	/// Take the next available ID from the recycle pool.
	pub fn create(&mut self) -> Entity {
		assert!(self.living < MAX_ENTITIES, "too many entities in existence");

		let entity = self.available.pop_front().unwrap();
		self.living += 1;

		log::trace!("created entity {}", entity.0);
		entity
	}

	/// Reset `entity`'s signature and return its ID to the recycle pool.
	///
	/// The registry does not track which components the entity held; callers
	/// must cascade destruction into the component and system registries
	/// before the ID becomes eligible for reuse.
	pub fn destroy(&mut self, entity: Entity) {
		assert!(entity.index() < MAX_ENTITIES, "entity out of range");

		self.signatures[entity.index()].clear();
		self.available.push_back(entity);
		self.living -= 1;

		log::trace!("destroyed entity {}", entity.0);
	}

	pub fn set_signature(&mut self, entity: Entity, signature: Signature) {
		assert!(entity.index() < MAX_ENTITIES, "entity out of range");

		self.signatures[entity.index()] = signature;
	}

	pub fn signature(&self, entity: Entity) -> Signature {
		assert!(entity.index() < MAX_ENTITIES, "entity out of range");

		self.signatures[entity.index()]
	}

	/// The number of currently live entities.
	pub fn living_count(&self) -> usize {
		self.living
	}
}

impl Default for EntityRegistry {
	fn default() -> Self {
		Self::new()
	}
}

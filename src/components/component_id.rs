//! A unique runtime identifier tied to a [Component](crate::components::Component) type.
//!
//! Type-codes are handed out in registration order, so a fixed registration
//! sequence always produces the same codes. They index directly into
//! [Signature](crate::Signature) bits.

use crate::data_structures::BitField;

/// The type-code assigned to a registered
/// [Component](crate::components::Component) type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(pub(crate) u16);

impl ComponentId {
	/// The [Signature](crate::Signature) bit position of this type-code.
	#[inline(always)]
	pub fn index(&self) -> usize {
		self.0 as usize
	}
}

impl From<&[ComponentId]> for BitField {
	fn from(ids: &[ComponentId]) -> Self {
		let mut bitfield = BitField::new();
		for id in ids {
			bitfield.set(id.index(), true);
		}

		bitfield
	}
}

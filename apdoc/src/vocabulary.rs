//! Static ActivityStreams knowledge used to expand compact values.
//!
//! Tables are keyed by vocabulary type name. Types without their own property table fall
//! back to the base [`OBJECT`] table, which is always present.

use crate::strenum;

pub const OBJECT: &str = "Object";

/// JSON-LD context of the ActivityStreams vocabulary
pub const ACTIVITYSTREAMS: &str = "https://www.w3.org/ns/activitystreams";

/// sentinel seeding diagnostic paths of objects without a declared type
pub const UNKNOWN_TYPE: &str = "UnknownType";

/// declared type -> (property -> type implied for a compact scalar under that property)
static PROPERTY_TYPES: &[(&str, &[(&str, &str)])] = &[
	(OBJECT, &[
		("icon", "Image"),
		("image", "Image"),
		("url", "Link"),
	]),
];

/// type -> property holding the value of the whole object when flattened to a scalar
static DEFAULT_PROPERTIES: &[(&str, &str)] = &[
	("Image", "url"),
	("Link", "href"),
	("Mention", "href"),
];

fn property_table(declared: &str) -> &'static [(&'static str, &'static str)] {
	let lookup = |t: &str| PROPERTY_TYPES.iter().find(|(k, _)| *k == t).map(|(_, table)| *table);
	lookup(declared)
		.or_else(|| lookup(OBJECT))
		.unwrap_or_default()
}

/// type implied for a scalar found under `property` of an object declaring `declared`
pub fn implied_type(declared: &str, property: &str) -> Option<&'static str> {
	property_table(declared)
		.iter()
		.find(|(k, _)| *k == property)
		.map(|(_, t)| *t)
}

pub fn default_property(vocabulary_type: &str) -> Option<&'static str> {
	DEFAULT_PROPERTIES
		.iter()
		.find(|(k, _)| *k == vocabulary_type)
		.map(|(_, p)| *p)
}

strenum! {
	pub enum ActorType {
		Application,
		Group,
		Organization,
		Person,
		Service;
	};

	pub enum CollectionType {
		Collection,
		OrderedCollection;
	};

	pub enum AddresseeType {
		Mention;
		Actor(ActorType),
		Collection(CollectionType)
	};
}

use std::collections::BTreeSet;

use crate::{vocabulary::AddresseeType, Object};

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

/// id-list properties addressing an object
const ADDRESSING: [&str; 6] = ["bto", "bcc", "to", "cc", "audience", "attributedTo"];

pub trait Addressed {
	/// every addressee of an activity, its target, its object and what both reply to
	fn recipient_set(&self) -> BTreeSet<String>;

	fn recipients(&self) -> Vec<String> {
		self.recipient_set().into_iter().collect()
	}
}

impl Addressed for Object {
	fn recipient_set(&self) -> BTreeSet<String> {
		let mut out = BTreeSet::new();
		let object = self.object("object");

		// replies chains are followed one hop only
		for node in [
			self,
			&self.object("target"),
			&object,
			&object.object("inReplyTo"),
			&self.object("inReplyTo"),
		] {
			collect(node, &mut out);
		}

		out
	}
}

fn collect(node: &Object, out: &mut BTreeSet<String>) {
	for key in ADDRESSING {
		out.extend(node.ids(key).into_iter().filter(|id| !id.is_empty()));
	}

	let actor = node.str("actor");
	if !actor.is_empty() {
		out.insert(actor);
	}

	for tag in node.list("tag") {
		if AddresseeType::try_from(tag.object_type().as_str()).is_err() {
			continue;
		}
		let id = tag.default_value();
		if !id.is_empty() {
			out.insert(id);
		}
	}
}

use std::{cell::RefCell, rc::Rc};

use crate::Error;

#[derive(Debug, Default)]
struct Sinks {
	fatal: Vec<Error>,
	non_fatal: Vec<Error>,
}

/// Error accumulator shared by every object of one document tree.
///
/// The root object creates it and every derived child holds a clone of the same handle, so
/// all failures swallowed by convenience getters anywhere in the tree end up in one place.
/// Sinks are append-only: inspect them once a traversal is done to decide whether the
/// document was usable.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics(Rc<RefCell<Sinks>>);

impl Diagnostics {
	pub fn new() -> Self {
		Self::default()
	}

	/// store an error in the fatal or non-fatal sink depending on its kind
	pub fn record(&self, err: Error) {
		tracing::debug!("recording {} diagnostic: {err}", if err.is_fatal() { "fatal" } else { "non-fatal" });
		let mut sinks = self.0.borrow_mut();
		if err.is_fatal() {
			sinks.fatal.push(err);
		} else {
			sinks.non_fatal.push(err);
		}
	}

	pub fn errors(&self) -> Vec<Error> {
		self.0.borrow().fatal.clone()
	}

	pub fn non_fatal_errors(&self) -> Vec<Error> {
		self.0.borrow().non_fatal.clone()
	}

	pub fn has_fatal(&self) -> bool {
		!self.0.borrow().fatal.is_empty()
	}

	/// true if both handles append to the same sinks
	pub fn shares_sinks_with(&self, other: &Diagnostics) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

mod coerce;
mod expand;
mod lang;
mod mutate;

use std::{cell::RefCell, rc::Rc};

use serde_json::{Map, Value};

use crate::{vocabulary, Diagnostics, Error, ErrorKind};

/// language used by documents which don't configure one
pub const DEFAULT_LANG: &str = "en";

/// one hop from a node of the document to one of its children
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
	Key(String),
	Index(usize),
}

/// A node of a loosely typed ActivityPub document.
///
/// Every read is available in two flavors: `fetch_*` hands back the value together with
/// whatever went wrong, while the short getters (`str`, `int`, `object`...) record failures
/// in the [`Diagnostics`] of the whole tree and return a zero value, so that a partially
/// malformed document can still be walked end to end.
///
/// Children expanded from nested objects point into the same document as their parent:
/// edits done through one are visible when re-reading through the other. Children
/// synthesized from compact scalars own a fresh mapping. Cloning an `Object` clones the
/// handle, not the data; use [`Object::to_value`] for a detached copy.
#[derive(Debug, Clone)]
pub struct Object {
	doc: Rc<RefCell<Value>>,
	at: Vec<Step>,
	path: Vec<String>,
	lang: String,
	diagnostics: Diagnostics,
}

fn resolve<'v>(mut node: &'v Value, at: &[Step]) -> Option<&'v Map<String, Value>> {
	for step in at {
		node = match step {
			Step::Key(key) => node.as_object()?.get(key)?,
			Step::Index(idx) => node.as_array()?.get(*idx)?,
		};
	}
	node.as_object()
}

fn resolve_mut<'v>(mut node: &'v mut Value, at: &[Step]) -> Option<&'v mut Map<String, Value>> {
	for step in at {
		node = match step {
			Step::Key(key) => node.as_object_mut()?.get_mut(key)?,
			Step::Index(idx) => node.as_array_mut()?.get_mut(*idx)?,
		};
	}
	node.as_object_mut()
}

impl Object {
	/// build the root of a new document tree, reading text in [`DEFAULT_LANG`]
	pub fn new(data: Map<String, Value>) -> Self {
		Self::with_lang(data, DEFAULT_LANG)
	}

	/// build the root of a new document tree with its own default language
	pub fn with_lang(data: Map<String, Value>, lang: &str) -> Self {
		let mut obj = Object {
			doc: Rc::new(RefCell::new(Value::Object(data))),
			at: Vec::new(),
			path: Vec::new(),
			lang: lang.to_string(),
			diagnostics: Diagnostics::new(),
		};
		let ty = obj.object_type();
		obj.path.push(if ty.is_empty() { vocabulary::UNKNOWN_TYPE.to_string() } else { ty });
		obj
	}

	/// child pointing inside this same document
	fn descend(&self, key: &str, at: Vec<Step>) -> Object {
		Object {
			doc: self.doc.clone(),
			at,
			path: self.child_path(key),
			lang: self.lang.clone(),
			diagnostics: self.diagnostics.clone(),
		}
	}

	/// child over a mapping which is not part of this document
	fn synthesize(&self, key: &str, data: Map<String, Value>) -> Object {
		Object {
			doc: Rc::new(RefCell::new(Value::Object(data))),
			at: Vec::new(),
			path: self.child_path(key),
			lang: self.lang.clone(),
			diagnostics: self.diagnostics.clone(),
		}
	}

	fn child_path(&self, key: &str) -> Vec<String> {
		let mut path = self.path.clone();
		path.push(key.to_string());
		path
	}

	fn step_into(&self, step: Step) -> Vec<Step> {
		let mut at = self.at.clone();
		at.push(step);
		at
	}

	/// run `f` on the raw value at `key`, if present
	fn peek<R>(&self, key: &str, f: impl FnOnce(&Value) -> R) -> Option<R> {
		let doc = self.doc.borrow();
		resolve(&doc, &self.at)?.get(key).map(f)
	}

	pub(crate) fn error(&self, kind: ErrorKind, op: &'static str, key: &str, detail: impl ToString) -> Error {
		Error {
			kind,
			op,
			path: self.child_path(key).join("."),
			detail: detail.to_string(),
		}
	}

	/// swallow a failed read into the tree-wide accumulator
	fn swallow<T: Default>(&self, res: Result<T, Error>) -> T {
		match res {
			Ok(x) => x,
			Err(e) => {
				self.diagnostics.record(e);
				T::default()
			},
		}
	}

	fn swallow_partial<T>(&self, (value, err): (T, Option<Error>)) -> T {
		if let Some(err) = err {
			self.diagnostics.record(err);
		}
		value
	}

	pub fn id(&self) -> String {
		self.str("id")
	}

	pub fn object_type(&self) -> String {
		self.str("type")
	}

	/// raw `@context` rendered as string (first entry if many)
	pub fn context(&self) -> String {
		self.str("@context")
	}

	/// language used when a language-aware read doesn't ask for a specific one
	pub fn lang(&self) -> &str {
		&self.lang
	}

	/// diagnostic breadcrumb from document root to this node
	pub fn path(&self) -> &[String] {
		&self.path
	}

	pub fn contains(&self, key: &str) -> bool {
		self.peek(key, |_| ()).is_some()
	}

	pub fn keys(&self) -> Vec<String> {
		let doc = self.doc.borrow();
		resolve(&doc, &self.at)
			.map(|map| map.keys().cloned().collect())
			.unwrap_or_default()
	}

	/// detached copy of the raw data of this node
	pub fn to_map(&self) -> Map<String, Value> {
		let doc = self.doc.borrow();
		resolve(&doc, &self.at).cloned().unwrap_or_default()
	}

	pub fn to_value(&self) -> Value {
		Value::Object(self.to_map())
	}

	/// raw value at `key`, detached from the document
	pub fn get(&self, key: &str) -> Option<Value> {
		self.peek(key, Value::clone)
	}

	/// fatal failures recorded anywhere in this document tree
	pub fn errors(&self) -> Vec<Error> {
		self.diagnostics.errors()
	}

	/// informational failures (missing translations) recorded anywhere in this document tree
	pub fn non_fatal_errors(&self) -> Vec<Error> {
		self.diagnostics.non_fatal_errors()
	}

	pub fn diagnostics(&self) -> &Diagnostics {
		&self.diagnostics
	}
}

impl From<Map<String, Value>> for Object {
	fn from(data: Map<String, Value>) -> Self {
		Object::new(data)
	}
}

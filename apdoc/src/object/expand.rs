use serde_json::{Map, Value};

use crate::{vocabulary, Error, ErrorKind};

use super::{Object, Step};

impl Object {
	fn at_key(&self, key: &str) -> Vec<Step> {
		self.step_into(Step::Key(key.to_string()))
	}

	fn at_item(&self, key: &str, idx: usize) -> Vec<Step> {
		let mut at = self.at_key(key);
		at.push(Step::Index(idx));
		at
	}

	/// type as written in the document, without going through expansion
	fn declared_type(&self) -> String {
		self.peek("type", |raw| match raw {
			Value::String(t) => Some(t.clone()),
			Value::Array(types) => types.iter().find_map(|t| t.as_str()).map(str::to_string),
			_ => None,
		})
			.flatten()
			.unwrap_or_default()
	}

	/// turn a compact scalar found under `key` into a structured mapping
	fn compact(&self, key: &str, scalar: Value) -> Map<String, Value> {
		let mut data = Map::new();
		match vocabulary::implied_type(&self.declared_type(), key) {
			Some(implied) => {
				let prop = vocabulary::default_property(implied).unwrap_or("id");
				data.insert("type".to_string(), Value::String(implied.to_string()));
				data.insert(prop.to_string(), scalar);
			},
			// bare scalar with no known shape: treat it as a reference by id
			None => {
				data.insert("id".to_string(), scalar);
			},
		}
		data
	}

	fn expand_value(&self, key: &str, at: Vec<Step>, raw: &Value, op: &'static str) -> Result<Object, Error> {
		match raw {
			Value::Object(_) => Ok(self.descend(key, at)),
			Value::String(_) | Value::Number(_) | Value::Bool(_) =>
				Ok(self.synthesize(key, self.compact(key, raw.clone()))),
			Value::Null | Value::Array(_) =>
				Err(self.error(ErrorKind::KeyTypeNotObject, op, key, raw)),
		}
	}

	/// expand the value at `key`, or its first element if it's a list
	pub(super) fn expand_first(&self, key: &str, op: &'static str) -> Result<Option<Object>, Error> {
		self.peek(key, |raw| match raw {
			Value::Array(items) => items
				.first()
				.map(|first| self.expand_value(key, self.at_item(key, 0), first, op))
				.transpose(),
			_ => self.expand_value(key, self.at_key(key), raw, op).map(Some),
		})
			.unwrap_or(Ok(None))
	}

	/// expand every element at `key`, stopping at the first one which can't be expanded
	pub(super) fn expand_all(&self, key: &str, op: &'static str) -> (Vec<Object>, Option<Error>) {
		self.peek(key, |raw| match raw {
			Value::Array(items) => {
				let mut out = Vec::with_capacity(items.len());
				for (idx, item) in items.iter().enumerate() {
					match self.expand_value(key, self.at_item(key, idx), item, op) {
						Ok(obj) => out.push(obj),
						Err(e) => return (out, Some(e)),
					}
				}
				(out, None)
			},
			_ => match self.expand_value(key, self.at_key(key), raw, op) {
				Ok(obj) => (vec![obj], None),
				Err(e) => (Vec::new(), Some(e)),
			},
		})
			.unwrap_or_default()
	}

	pub fn fetch_object(&self, key: &str) -> Result<Option<Object>, Error> {
		self.expand_first(key, "fetch_object")
	}

	/// child object at `key`; an empty detached object if absent or unreadable
	pub fn object(&self, key: &str) -> Object {
		self.swallow(self.fetch_object(key))
			.unwrap_or_else(|| self.synthesize(key, Map::new()))
	}

	pub fn fetch_list(&self, key: &str) -> (Vec<Object>, Option<Error>) {
		self.expand_all(key, "fetch_list")
	}

	/// every object at `key`, up to the first one which can't be expanded
	pub fn list(&self, key: &str) -> Vec<Object> {
		self.swallow_partial(self.fetch_list(key))
	}

	/// value standing for this whole object when a scalar is expected
	pub fn default_value(&self) -> String {
		match vocabulary::default_property(&self.object_type()) {
			Some(prop) => self.str(prop),
			None => self.id(),
		}
	}
}

use serde_json::{Map, Number, Value};

use crate::{Error, ErrorKind};

use super::{resolve_mut, Object};

impl Object {
	/// apply `f` to the mapping backing this node, if it's still part of its document
	fn edit<R>(&mut self, op: &'static str, key: &str, f: impl FnOnce(&mut Map<String, Value>) -> R) -> Option<R> {
		let applied = {
			let mut doc = self.doc.borrow_mut();
			resolve_mut(&mut doc, &self.at).map(f)
		};
		if applied.is_none() {
			tracing::warn!("{op}: '{}' was removed from its document, not editing '{key}'", self.path.join("."));
			self.diagnostics.record(self.error(ErrorKind::KeyNotObject, op, key, "node detached from document"));
		}
		applied
	}

	pub fn del(&mut self, key: &str) {
		self.edit("del", key, |map| map.remove(key));
	}

	/// store any raw value, replacing what was at `key`
	pub fn set(&mut self, key: &str, value: Value) {
		self.edit("set", key, |map| map.insert(key.to_string(), value));
	}

	pub fn set_str(&mut self, key: &str, value: &str) {
		self.set(key, Value::String(value.to_string()));
	}

	/// non finite numbers can't be represented in json and are not stored
	pub fn set_num(&mut self, key: &str, value: f64) {
		match Number::from_f64(value) {
			Some(n) => self.set(key, Value::Number(n)),
			None => tracing::warn!("set_num: refusing to store non-finite number {value} as '{key}'"),
		}
	}

	pub fn set_int(&mut self, key: &str, value: i64) {
		self.set(key, Value::Number(Number::from(value)));
	}

	pub fn set_bool(&mut self, key: &str, value: bool) {
		self.set(key, Value::Bool(value));
	}

	pub fn set_list(&mut self, key: &str, value: Vec<Value>) {
		self.set(key, Value::Array(value));
	}

	/// store a nested object, provided all its values are strings, numbers, bools, objects or lists
	pub fn set_object(&mut self, key: &str, value: Map<String, Value>) -> Result<(), Error> {
		if let Some((k, v)) = value.iter().find(|(_, v)| v.is_null()) {
			return Err(self.error(ErrorKind::KeyTypeNotObject, "set_object", key, format!("{k} = {v}")));
		}
		self.set(key, Value::Object(value));
		Ok(())
	}

	/// Append `values` to the list at `key`, in order.
	///
	/// Creates the list if `key` is missing; a non-list value becomes the first element.
	pub fn append_list(&mut self, key: &str, values: impl IntoIterator<Item = Value>) {
		// values may be lazily read from this same document
		let values: Vec<Value> = values.into_iter().collect();
		self.edit("append_list", key, |map| {
			let mut list = match map.remove(key) {
				None => Vec::new(),
				Some(Value::Array(list)) => list,
				Some(other) => vec![other],
			};
			list.extend(values);
			map.insert(key.to_string(), Value::Array(list));
		});
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{doc, ErrorKind};

	#[test]
	fn deleting_properties() {
		let mut obj = doc(json!({ "a": 1, "b": 2, "inner": { "c": 3, "d": 4 } }));
		assert_eq!(obj.int("a"), 1);
		assert_eq!(obj.int("b"), 2);
		obj.del("b");
		assert_eq!(obj.int("a"), 1);
		assert_eq!(obj.int("b"), 0);
		assert!(!obj.contains("b"));

		let mut inner = obj.object("inner");
		assert_eq!(inner.int("c"), 3);
		inner.del("c");
		assert_eq!(inner.int("c"), 0);
		assert_eq!(inner.int("d"), 4);

		let refetched = obj.object("inner");
		assert_eq!(refetched.int("c"), 0);
		assert_eq!(refetched.int("d"), 4);

		obj.del("inner");
		let gone = obj.object("inner");
		assert_eq!(gone.int("c"), 0);
		assert_eq!(gone.int("d"), 0);
		assert!(obj.errors().is_empty());
	}

	#[test]
	fn setters_replace_values() {
		let mut obj = doc(json!({ "type": "Note", "sensitive": "yes", "tag": [] }));
		obj.set_str("name", "hello");
		obj.set_num("width", 640.0);
		obj.set_num("ratio", 1.5);
		obj.set_int("height", 480);
		obj.set_bool("sensitive", true);
		obj.set_list("tag", vec![json!({ "type": "Mention", "href": "http://example.com/@bob" })]);

		assert_eq!(obj.str("name"), "hello");
		assert_eq!(obj.int("width"), 640);
		assert_eq!(obj.str("ratio"), "1.5");
		assert_eq!(obj.int("height"), 480);
		assert!(obj.bool("sensitive"));
		assert_eq!(obj.str("tag"), "http://example.com/@bob");

		obj.set_num("nan", f64::NAN);
		assert!(!obj.contains("nan"));
		assert!(obj.errors().is_empty());
	}

	#[test]
	fn set_object_validates_values() {
		let mut obj = doc(json!({ "type": "Note" }));
		let good = json!({ "type": "Image", "url": "http://example.com/a.png", "width": 10, "tags": [], "nested": {} });
		assert!(obj.set_object("icon", good.as_object().cloned().unwrap_or_default()).is_ok());
		assert_eq!(obj.str("icon"), "http://example.com/a.png");

		let bad = json!({ "type": "Image", "url": null });
		let err = obj.set_object("image", bad.as_object().cloned().unwrap_or_default()).err();
		assert!(err.is_some_and(|e| e.is(ErrorKind::KeyTypeNotObject) && e.detail.starts_with("url")));
		assert!(!obj.contains("image"));
	}

	#[test]
	fn append_list_creates_and_coerces() {
		let mut obj = doc(json!({ "to": "http://example.com/a", "cc": ["http://example.com/b"] }));
		obj.append_list("to", [json!("http://example.com/c"), json!("http://example.com/d")]);
		obj.append_list("cc", [json!("http://example.com/e")]);
		obj.append_list("bcc", [json!("http://example.com/f")]);

		assert_eq!(obj.ids("to"), vec!["http://example.com/a", "http://example.com/c", "http://example.com/d"]);
		assert_eq!(obj.ids("cc"), vec!["http://example.com/b", "http://example.com/e"]);
		assert_eq!(obj.ids("bcc"), vec!["http://example.com/f"]);
	}

	#[test]
	fn append_values_read_from_same_document() {
		let mut obj = doc(json!({
			"type": "Note",
			"cc": ["http://example.com/@bob/followers"],
			"tag": [
				{ "type": "Mention", "href": "http://example.com/@alice" },
				{ "type": "Mention", "href": "http://example.com/@carl" },
			],
		}));
		let tags = obj.list("tag");
		obj.append_list("cc", tags.iter().map(|t| json!(t.default_value())));
		let to = obj.ids("cc");
		obj.append_list("to", to.into_iter().map(serde_json::Value::String));

		let expected = vec![
			"http://example.com/@bob/followers",
			"http://example.com/@alice",
			"http://example.com/@carl",
		];
		assert_eq!(obj.ids("cc"), expected);
		assert_eq!(obj.ids("to"), expected);
		assert!(obj.errors().is_empty());
	}

	#[test]
	fn edits_through_children_reach_the_document() {
		let obj = doc(json!({ "type": "Create", "object": { "type": "Note", "tag": [{ "type": "Hashtag" }] } }));
		let mut note = obj.object("object");
		note.set_str("content", "hello");
		let mut tag = note.list("tag").remove(0);
		tag.set_str("name", "#rust");

		assert_eq!(obj.object("object").str("content"), "hello");
		assert_eq!(obj.to_value()["object"]["tag"][0]["name"], json!("#rust"));
	}

	#[test]
	fn scalar_expansions_are_detached() {
		let obj = doc(json!({ "type": "Note", "url": "http://example.com/a" }));
		let mut link = obj.object("url");
		link.set_str("mediaType", "text/html");
		assert_eq!(link.str("mediaType"), "text/html");
		assert_eq!(obj.get("url"), Some(json!("http://example.com/a")));
	}

	#[test]
	fn editing_removed_children_is_reported() {
		let mut obj = doc(json!({ "type": "Note", "replies": { "type": "Collection" } }));
		let mut replies = obj.object("replies");
		obj.del("replies");
		replies.set_int("totalItems", 3);
		assert!(!obj.contains("replies"));
		let errors = obj.errors();
		assert_eq!(errors.len(), 1);
		assert!(errors[0].is(ErrorKind::KeyNotObject));
		assert_eq!(errors[0].path, "Note.replies.totalItems");
	}
}

use serde_json::Value;

use crate::{getter, Error, ErrorKind};

use super::Object;

impl Object {
	getter! { name -> lang }
	getter! { summary -> lang }
	getter! { content -> lang }

	/// Text of `key` in language `lang`, looked up in the `<key>Map` companion object.
	///
	/// An empty `lang` means the object's own language. When the requested translation is
	/// missing the object's language is tried next, and its value is handed back together
	/// with the original [`ErrorKind::LangNotFound`]. When there is no language map at all,
	/// the plain value of `key` is returned with [`ErrorKind::LangMapNotFound`].
	pub fn fetch_lang(&self, key: &str, lang: &str) -> (String, Option<Error>) {
		let lang = if lang.is_empty() { self.lang.as_str() } else { lang };
		if lang.is_empty() {
			let err = self.error(ErrorKind::LangNotFound, "fetch_lang", key, "no language requested or configured");
			return (self.str(key), Some(err));
		}

		let map_key = format!("{key}Map");
		if !self.peek(&map_key, Value::is_object).unwrap_or(false) {
			let err = self.error(ErrorKind::LangMapNotFound, "fetch_lang", key, format!("no {map_key}"));
			return (self.str(key), Some(err));
		}

		let translations = self.descend(&map_key, self.step_into(super::Step::Key(map_key.clone())));
		let detail = match translations.fetch_str(lang) {
			Ok(text) if !text.is_empty() => return (text, None),
			Ok(_) => format!("in {lang:?}"),
			Err(cause) => format!("in {lang:?} ({cause})"),
		};

		let missing = self.error(ErrorKind::LangNotFound, "fetch_lang", key, detail);
		if lang != self.lang {
			let (fallback, _) = self.fetch_lang(key, &self.lang);
			(fallback, Some(missing))
		} else {
			(self.str(key), Some(missing))
		}
	}

	/// text of `key` in `lang`, recording missing translations as non-fatal diagnostics
	pub fn lang_str(&self, key: &str, lang: &str) -> String {
		self.swallow_partial(self.fetch_lang(key, lang))
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{doc, ErrorKind, Object};

	fn note() -> Object {
		doc(json!({
			"@context": "https://www.w3.org/ns/activitystreams",
			"name": "Cane Sugar Processing",
			"type": "Note",
			"summaryMap": {
				"en": "A simple <em>note</em>",
				"es": "Una <em>nota</em> sencilla",
				"zh-Hans": "一段<em>简单的</em>笔记",
			},
			"contentMap": {
				"es": "Una <em>nota</em> sencilla",
			},
		}))
	}

	#[test]
	fn summary_falls_back_to_default_language() {
		let obj = note();

		let (default, err) = obj.fetch_lang("summary", "");
		assert_eq!(default, "A simple <em>note</em>");
		assert!(err.is_none());
		assert_eq!(obj.summary(""), default);

		let (es, err) = obj.fetch_lang("summary", "es");
		assert_eq!(es, "Una <em>nota</em> sencilla");
		assert!(err.is_none());
		assert_eq!(obj.summary("es"), es);

		let (other, err) = obj.fetch_summary("other");
		assert_eq!(other, "A simple <em>note</em>");
		let err = err.expect("missing translation should be reported");
		assert!(err.is(ErrorKind::LangNotFound));
		assert!(!err.is_fatal());
		assert_eq!(obj.summary("other"), other);

		assert!(obj.errors().is_empty());
		assert_eq!(obj.non_fatal_errors().len(), 1);
	}

	#[test]
	fn name_without_map_returns_plain_value() {
		let obj = note();
		for lang in ["", "es", "other"] {
			let (name, err) = obj.fetch_lang("name", lang);
			assert_eq!(name, "Cane Sugar Processing");
			assert!(err.is_some_and(|e| e.is(ErrorKind::LangMapNotFound) && !e.is_fatal()));
			assert_eq!(obj.name(lang), "Cane Sugar Processing");
		}
		assert!(obj.errors().is_empty());
		assert_eq!(obj.non_fatal_errors().len(), 3);
	}

	#[test]
	fn content_missing_in_default_language() {
		let obj = note();

		let (default, err) = obj.fetch_lang("content", "");
		assert_eq!(default, "");
		assert!(err.is_some_and(|e| e.is(ErrorKind::LangNotFound)));

		let (es, err) = obj.fetch_lang("content", "es");
		assert_eq!(es, "Una <em>nota</em> sencilla");
		assert!(err.is_none());

		let (other, err) = obj.fetch_lang("content", "other");
		assert_eq!(other, "");
		assert!(err.is_some_and(|e| e.is(ErrorKind::LangNotFound) && e.detail.contains("other")));

		assert_eq!(obj.content("other"), "");
		assert!(obj.errors().is_empty());
		assert!(!obj.non_fatal_errors().is_empty());
	}

	#[test]
	fn unreadable_translation_keeps_its_cause() {
		let obj = doc(json!({
			"type": "Note",
			"summary": "plain",
			"summaryMap": { "en": [null], "es": "hola" },
		}));

		let (text, err) = obj.fetch_summary("");
		assert_eq!(text, "plain");
		let err = err.expect("unreadable translation should be reported");
		assert!(err.is(ErrorKind::LangNotFound));
		assert!(err.detail.contains("Note.summaryMap.en"), "{}", err.detail);
		assert!(err.detail.contains(&ErrorKind::KeyTypeNotObject.to_string()), "{}", err.detail);

		let (text, err) = obj.fetch_summary("fr");
		assert_eq!(text, "plain");
		assert!(err.is_some_and(|e| e.is(ErrorKind::LangNotFound) && !e.detail.contains("summaryMap.en")));
		assert!(obj.errors().is_empty());
	}

	#[test]
	fn children_resolve_their_own_maps() {
		let obj = doc(json!({
			"type": "Object",
			"name": "test",
			"image": {
				"type": "Image",
				"nameMap": { "en": "image" },
				"url": "http://example.com/image.jpg",
			},
		}));

		let img = obj.object("image");
		let (name, err) = img.fetch_lang("name", "en");
		assert_eq!(name, "image");
		assert!(err.is_none());

		let (name, err) = img.fetch_lang("name", "es");
		assert_eq!(name, "image");
		assert!(err.is_some_and(|e| e.is(ErrorKind::LangNotFound) && e.path == "Object.image.name"));
	}

	#[test]
	fn configured_language_is_used_for_empty_requests() {
		let obj = Object::with_lang(
			json!({ "summaryMap": { "en": "hello", "es": "hola" } }).as_object().cloned().unwrap_or_default(),
			"es",
		);
		assert_eq!(obj.summary(""), "hola");
		assert_eq!(obj.summary("en"), "hello");
		assert_eq!(obj.summary("fr"), "hola");

		let unconfigured = Object::with_lang(
			json!({ "summary": "plain", "summaryMap": { "en": "hello" } }).as_object().cloned().unwrap_or_default(),
			"",
		);
		let (text, err) = unconfigured.fetch_lang("summary", "");
		assert_eq!(text, "plain");
		assert!(err.is_some_and(|e| e.is(ErrorKind::LangNotFound)));
		let (text, err) = unconfigured.fetch_lang("summary", "fr");
		assert_eq!(text, "plain");
		assert!(err.is_some_and(|e| e.is(ErrorKind::LangNotFound)));
	}
}

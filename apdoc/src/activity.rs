use serde_json::{Map, Value};

use crate::{vocabulary::ACTIVITYSTREAMS, Object};

/// properties shared between a Create activity and the object it creates
const CREATE_ACTIVITY_ATTRS: [&str; 6] = ["audience", "bcc", "bto", "cc", "to", "published"];

/// Wrap `obj` in a new `Create` activity.
///
/// Addressing and `published` are copied on the activity too, while the whole object minus
/// its `@context` ends up nested under `object`. The activity is a new document with its own
/// diagnostics, reading text in the same language as `obj`.
pub fn create_activity(obj: &Object) -> Object {
	let mut data = obj.to_map();

	let mut activity = Map::new();
	activity.insert("@context".to_string(), Value::String(ACTIVITYSTREAMS.to_string()));
	activity.insert("type".to_string(), Value::String("Create".to_string()));
	for key in CREATE_ACTIVITY_ATTRS {
		if let Some(value) = data.get(key) {
			activity.insert(key.to_string(), value.clone());
		}
	}

	data.remove("@context");
	activity.insert("object".to_string(), Value::Object(data));

	Object::with_lang(activity, obj.lang())
}

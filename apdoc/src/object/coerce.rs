use chrono::{DateTime, Utc};
use serde_json::{Number, Value};

use crate::{Error, ErrorKind};

use super::Object;

/// plain decimal notation, no exponent and no trailing zeros
fn format_number(n: &Number) -> String {
	match n.as_f64() {
		Some(f) if n.is_f64() => f.to_string(),
		_ => n.to_string(),
	}
}

/// same literals accepted by most config formats: 1, t, T, TRUE, true, True and negations
fn parse_bool(s: &str) -> Option<bool> {
	match s {
		"1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
		"0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
		_ => None,
	}
}

impl Object {
	pub fn fetch_str(&self, key: &str) -> Result<String, Error> {
		let scalar = self.peek(key, |raw| match raw {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(format_number(n)),
			Value::Bool(b) => Some(b.to_string()),
			Value::Null => Some(raw.to_string()),
			Value::Object(_) | Value::Array(_) => None,
		});

		match scalar {
			None => Ok(String::new()), // missing
			Some(Some(s)) => Ok(s),
			Some(None) => Ok(
				self.expand_first(key, "fetch_str")?
					.map(|obj| obj.default_value())
					.unwrap_or_default()
			),
		}
	}

	pub fn str(&self, key: &str) -> String {
		self.swallow(self.fetch_str(key))
	}

	pub fn fetch_int(&self, key: &str) -> Result<i64, Error> {
		self.peek(key, |raw| match raw {
			Value::Number(n) => Ok(match n.as_i64() {
				Some(i) => i,
				None => n.as_f64().unwrap_or_default().round() as i64,
			}),
			Value::String(s) => s.parse::<i64>()
				.map_err(|_| self.error(ErrorKind::InvalidInt, "fetch_int", key, raw)),
			_ => Err(self.error(ErrorKind::InvalidInt, "fetch_int", key, raw)),
		})
			.unwrap_or(Ok(0))
	}

	pub fn int(&self, key: &str) -> i64 {
		self.swallow(self.fetch_int(key))
	}

	pub fn fetch_float(&self, key: &str) -> Result<f64, Error> {
		self.peek(key, |raw| match raw {
			Value::Number(n) => Ok(n.as_f64().unwrap_or_default()),
			Value::String(s) => s.parse::<f64>()
				.map_err(|_| self.error(ErrorKind::InvalidFloat, "fetch_float", key, raw)),
			_ => Err(self.error(ErrorKind::InvalidFloat, "fetch_float", key, raw)),
		})
			.unwrap_or(Ok(0.0))
	}

	pub fn float(&self, key: &str) -> f64 {
		self.swallow(self.fetch_float(key))
	}

	pub fn fetch_bool(&self, key: &str) -> Result<bool, Error> {
		self.peek(key, |raw| match raw {
			Value::Bool(b) => Ok(*b),
			Value::String(s) => parse_bool(s)
				.ok_or_else(|| self.error(ErrorKind::InvalidBool, "fetch_bool", key, raw)),
			// numbers never fail: anything not rounding to 1 is false
			Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f.round() == 1.0)),
			_ => Err(self.error(ErrorKind::InvalidBool, "fetch_bool", key, raw)),
		})
			.unwrap_or(Ok(false))
	}

	pub fn bool(&self, key: &str) -> bool {
		self.swallow(self.fetch_bool(key))
	}

	/// RFC-3339 timestamp normalized to UTC; unix epoch when missing
	pub fn fetch_time(&self, key: &str) -> Result<DateTime<Utc>, Error> {
		self.peek(key, |raw| match raw {
			Value::String(s) => DateTime::parse_from_rfc3339(s)
				.map(|t| t.with_timezone(&Utc))
				.map_err(|e| self.error(ErrorKind::InvalidTime, "fetch_time", key, format!("{raw} ({e})"))),
			_ => Err(self.error(ErrorKind::InvalidTime, "fetch_time", key, raw)),
		})
			.unwrap_or_else(|| Ok(DateTime::default()))
	}

	pub fn time(&self, key: &str) -> DateTime<Utc> {
		self.swallow(self.fetch_time(key))
	}

	/// Identifiers at `key`: a single string or a list of strings.
	///
	/// Non-string list entries are skipped and reported together in one error, while the
	/// valid ids are still returned.
	pub fn fetch_ids(&self, key: &str) -> (Vec<String>, Option<Error>) {
		self.peek(key, |raw| match raw {
			Value::String(id) => (vec![id.clone()], None),
			Value::Array(items) => {
				let mut ids = Vec::with_capacity(items.len());
				let mut invalid = Vec::new();
				for (idx, item) in items.iter().enumerate() {
					match item {
						Value::String(id) => ids.push(id.clone()),
						other => invalid.push(format!("{idx}: {other}")),
					}
				}
				if invalid.is_empty() {
					(ids, None)
				} else {
					let err = self.error(ErrorKind::InvalidIds, "fetch_ids", key, invalid.join(", "));
					(ids, Some(err))
				}
			},
			_ => (Vec::new(), Some(self.error(ErrorKind::InvalidIds, "fetch_ids", key, raw))),
		})
			.unwrap_or_default()
	}

	pub fn ids(&self, key: &str) -> Vec<String> {
		self.swallow_partial(self.fetch_ids(key))
	}
}

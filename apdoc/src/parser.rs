use serde_json::Value;

use crate::{Config, Object, ParseError};

/// Decodes raw json into the root [`Object`] of a document tree.
#[derive(Debug, Clone, Default)]
pub struct Parser {
	/// overrides [`crate::DEFAULT_LANG`] for parsed documents
	pub language: Option<String>,
}

impl From<&Config> for Parser {
	fn from(cfg: &Config) -> Self {
		Parser { language: Some(cfg.language.clone()) }
	}
}

impl Parser {
	pub fn parse(&self, input: impl std::io::Read) -> Result<Object, ParseError> {
		self.parse_value(serde_json::from_reader(input)?)
	}

	pub fn parse_str(&self, input: &str) -> Result<Object, ParseError> {
		self.parse_value(serde_json::from_str(input)?)
	}

	pub fn parse_value(&self, value: Value) -> Result<Object, ParseError> {
		let data = match value {
			Value::Object(data) => data,
			Value::Null => return Err(ParseError::NotAnObject("null")),
			Value::Bool(_) => return Err(ParseError::NotAnObject("bool")),
			Value::Number(_) => return Err(ParseError::NotAnObject("number")),
			Value::String(_) => return Err(ParseError::NotAnObject("string")),
			Value::Array(_) => return Err(ParseError::NotAnObject("array")),
		};

		Ok(match self.language.as_deref() {
			Some(lang) if !lang.is_empty() => Object::with_lang(data, lang),
			_ => Object::new(data),
		})
	}
}

/// what went wrong while reading a document property
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
	#[error("unable to decode key as object")]
	KeyNotObject,

	#[error("unable to decode type as object")]
	KeyTypeNotObject,

	#[error("unable to decode value as bool")]
	InvalidBool,

	#[error("unable to decode value as float")]
	InvalidFloat,

	#[error("unable to decode value as int")]
	InvalidInt,

	#[error("unable to decode value as time")]
	InvalidTime,

	#[error("unable to decode value as ids")]
	InvalidIds,

	#[error("key not translated to given language")]
	LangNotFound,

	#[error("key has no language map")]
	LangMapNotFound,
}

impl ErrorKind {
	/// missing translations are expected and don't make a document unusable
	pub fn is_fatal(&self) -> bool {
		!matches!(self, ErrorKind::LangNotFound | ErrorKind::LangMapNotFound)
	}
}

/// a failed read, carrying where in the document it happened
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{op}: {path}: {detail}: {kind}")]
pub struct Error {
	pub kind: ErrorKind,
	/// operation that failed, such as `fetch_int`
	pub op: &'static str,
	/// dotted breadcrumb from document root down to the offending key
	pub path: String,
	/// rendering of the offending value or lookup
	pub detail: String,
}

impl Error {
	pub fn is(&self, kind: ErrorKind) -> bool {
		self.kind == kind
	}

	pub fn is_fatal(&self) -> bool {
		self.kind.is_fatal()
	}
}

/// failures decoding raw input into a document
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("document root must be a json object, got {0}")]
	NotAnObject(&'static str),
}

//! Forgiving, typed access to loosely structured ActivityPub documents.
//!
//! Documents found in the wild encode the same property as a string, an object or a list,
//! depending on who produced them. [`Object`] reads any of these shapes as the type the caller
//! asks for, degrading to a zero value plus a recorded [`Error`] instead of failing.

pub(crate) mod macros;
pub(crate) use macros::{strenum, getter};

mod error;
pub use error::{Error, ErrorKind, ParseError};

mod diagnostics;
pub use diagnostics::Diagnostics;

pub mod vocabulary;

mod object;
pub use object::{Object, DEFAULT_LANG};

#[cfg(feature = "shortcuts")]
mod shortcuts;

pub mod target;
pub use target::Addressed;

mod activity;
pub use activity::create_activity;

mod config;
pub use config::Config;

mod parser;
pub use parser::Parser;

#[cfg(test)]
pub(crate) fn doc(value: serde_json::Value) -> Object {
	Parser::default().parse_value(value).expect("test documents must be json objects")
}

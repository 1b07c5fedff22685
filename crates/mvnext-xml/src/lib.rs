//! Format-preserving XML handling for mvnext
//!
//! Provides parsing, path queries and surgical edits over XML documents.
//! Edits splice text into the original source instead of re-serializing a
//! rebuilt tree, so comments, attribute order and whitespace survive.

pub mod diff;
pub mod document;
pub mod edit;
pub mod element;
pub mod error;
pub mod format;
pub mod path;

pub use diff::unified_diff;
pub use document::{NodeMatch, XmlDocument};
pub use edit::{Edit, EditKind};
pub use element::Element;
pub use error::{Error, Result};
pub use format::{DEFAULT_INDENT, LineEnding};
pub use path::XPath;

//! A comment-preserving parser for INI and `.editorconfig` files.
//!
//! Besides keys and values, the parsed [`IniDocument`] keeps the comments found
//! around headers and entries, every value that was overwritten by a repeated
//! key, and the names of sections whose header appeared more than once.
//!
//! ```
//! let doc = ini_core::parse_str("[*.md] # docs\ntrim_trailing_whitespace = false\n");
//! let md = doc.section("*.md").unwrap();
//! assert_eq!(md.value("trim_trailing_whitespace"), Some("false"));
//! assert_eq!(md.section_comments(), ["docs".to_string()]);
//! ```

pub mod api;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
mod serialization;

pub use api::{parse_file, parse_lines, parse_reader, parse_str};
pub use ast::{Entry, IniDocument, IniSection};
pub use error::IniError;
pub use serialization::Value;

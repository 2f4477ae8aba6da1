//! A lenient URI parser and mutable URI value type.
//!
//! The [`Uri`] type parses any string into scheme, user, host, port, path,
//! query, and fragment without ever failing: absent components are empty,
//! an input with no scheme delimiter is treated as all path, and a malformed
//! percent escape leaves that component's original text in place. Components
//! are stored percent-decoded and re-encoded on serialization.
//!
//! The query is an ordered key/value map with web form conventions: `'+'`
//! decodes to a space, `';'` separates pairs interchangeably with `'&'`, and
//! serialization order always equals parse order.
//!
//! # Examples
//!
//! ## Parsing a URI into its components
//!
//! ```rust
//! use weburi::Uri;
//!
//! let uri = Uri::parse("https://files.example.com/sites/team/Shared%20Documents?web=1#top");
//! assert_eq!(uri.host(), "files.example.com");
//! assert_eq!(uri.path(), "/sites/team/Shared Documents");
//! assert_eq!(uri.query_parameter("web"), Some("1"));
//! assert_eq!(uri.fragment(), "top");
//! ```
//!
//! ## Editing components
//!
//! ```rust
//! use weburi::Uri;
//!
//! let mut uri = Uri::parse("https://example.com/docs");
//! uri.set_query_parameter("version", "12", true);
//! uri.set_fragment("history");
//! assert_eq!(uri.to_string(), "https://example.com/docs?version=12#history");
//! ```
//!
//! ## Comparing
//!
//! ```rust
//! use weburi::Uri;
//!
//! let left = Uri::parse("HTTP://Example.com/a?x=1&y=2");
//! let right = Uri::parse("http://example.com/a/?y=2&x=1");
//!
//! // Strict: scheme and host fold case, query order matters.
//! assert!(!left.equals(&right));
//! // Relaxed: everything folds, query order is ignored.
//! assert!(left.equivalent(&right));
//! ```

mod utility;

pub mod authority;
pub mod path;
pub mod query;
pub mod uri;

pub use self::authority::Authority;
pub use self::path::Path;
pub use self::query::Query;
pub use self::uri::{ToStringOptions, Uri, UriOptions, UriPart};

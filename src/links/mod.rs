//! Link discovery: extraction, deduplication and resolution.
//!
//! A page body goes through these steps in order:
//!
//! - [`extract`] - Pattern scan for `href="...<ext>"` values
//! - [`dedup`] - Drop repeated values, first occurrence wins
//! - [`resolve`] - Join relative values onto the base URL and validate
//!
//! # Examples
//!
//! ```rust
//! use docharvest::links::{dedup, parse_base, resolve, LinkExtractor};
//! use docharvest::FileKind;
//!
//! let page = r#"
//!     <a href="/docs/sheet1.pdf">Sheet 1</a>
//!     <a href="/docs/sheet1.pdf">Sheet 1 (again)</a>
//!     <a href="https://other.com/x.pdf">Other</a>
//! "#;
//! let base = parse_base("https://www.example.com").unwrap();
//! let urls: Vec<_> = dedup(LinkExtractor::new(FileKind::Pdf).extract(page))
//!     .iter()
//!     .filter_map(|c| resolve(&base, c).ok())
//!     .collect();
//!
//! assert_eq!(urls.len(), 2);
//! assert_eq!(urls[0].as_str(), "https://www.example.com/docs/sheet1.pdf");
//! ```

pub mod dedup;
pub mod extract;
pub mod resolve;

pub use dedup::dedup;
pub use extract::LinkExtractor;
pub use resolve::{parse_base, resolve, validate};

//! Shared utility functions.
//!
//! - [`filename`] - Deterministic conversion of a URL into a safe local filename
//! - [`dirs`] - Output directory preparation
//!
//! # Examples
//!
//! ```rust
//! use docharvest::utils::sanitize_filename;
//! use docharvest::FileKind;
//!
//! let name = sanitize_filename("https://example.com/a/Safety Data!!.pdf", FileKind::Pdf);
//! assert_eq!(name, "safety_data.pdf");
//! ```

pub mod dirs;
pub mod filename;

pub use dirs::ensure_directory;
pub use filename::sanitize_filename;

//! Progress bars for a harvest run.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Coordination of the main bar and the per-document bars
//!
//! # Examples
//!
//! ```rust
//! use docharvest::progress::{ProgressBarOpts, StyleOptions};
//!
//! // Keep the default main bar, hide the per-document bars.
//! let style_options = StyleOptions::new(
//!     StyleOptions::default().main().clone(),
//!     ProgressBarOpts::hidden(),
//! );
//! assert!(style_options.is_enabled());
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};

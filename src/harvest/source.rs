//! Where candidate URLs come from.

use crate::error::Result;
use crate::links::parse_base;
use std::ops::RangeInclusive;
use url::Url;

/// Placeholder replaced by the numeric ID in an ID template.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Producer of candidate URLs for a harvest run.
#[derive(Debug, Clone)]
pub enum Source {
    /// Scrape seed pages for links; relative links resolve against `base`.
    Pages {
        /// Pages fetched, in order, for their body text.
        seeds: Vec<String>,
        /// Base URL relative links are joined onto.
        base: Url,
    },
    /// Build one URL per ID of a bounded range.
    Ids {
        /// URL template, see [`format_id_url`].
        template: String,
        /// IDs to enumerate, both ends included.
        ids: RangeInclusive<u64>,
    },
}

impl Source {
    /// Page-scrape source.
    ///
    /// ```rust
    /// use docharvest::harvest::Source;
    ///
    /// let source = Source::pages(["https://www.example.com/sds/"], "https://www.example.com")?;
    /// # Ok::<(), docharvest::Error>(())
    /// ```
    pub fn pages<I, S>(seeds: I, base: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Source::Pages {
            seeds: seeds.into_iter().map(Into::into).collect(),
            base: parse_base(base)?,
        })
    }

    /// ID-enumeration source.
    pub fn ids(template: impl Into<String>, ids: RangeInclusive<u64>) -> Self {
        Source::Ids {
            template: template.into(),
            ids,
        }
    }
}

/// Builds the URL for `id` from `template`.
///
/// Every `{id}` in the template is replaced; a template without the
/// placeholder gets the ID appended.
///
/// ```rust
/// use docharvest::harvest::format_id_url;
///
/// assert_eq!(format_id_url("https://x.com/doc?id={id}", 7), "https://x.com/doc?id=7");
/// assert_eq!(format_id_url("https://x.com/doc/", 7), "https://x.com/doc/7");
/// ```
pub fn format_id_url(template: &str, id: u64) -> String {
    if template.contains(ID_PLACEHOLDER) {
        template.replace(ID_PLACEHOLDER, &id.to_string())
    } else {
        format!("{}{}", template, id)
    }
}

//! Resolution of candidate links against a base URL.
//!
//! Extracted links are often relative (`/docs/sheet.pdf`). They are joined
//! onto the site's base URL before being requested; absolute links are kept
//! as they are. Whatever comes out must be an absolute `http` or `https`
//! URL with a host, anything else is rejected.

use crate::error::{Error, Result};
use url::{ParseError, Url};

/// Parses the base URL relative links are resolved against.
pub fn parse_base(base: &str) -> Result<Url> {
    let url = Url::parse(base)
        .map_err(|e| Error::InvalidUrl(format!("The base \"{}\" cannot be parsed: {}", base, e)))?;
    validate(url)
}

/// Resolves `candidate` against `base` and validates the result.
///
/// ```rust
/// use docharvest::links::{parse_base, resolve};
///
/// let base = parse_base("https://www.example.com").unwrap();
/// let url = resolve(&base, "/docs/sheet1.pdf").unwrap();
/// assert_eq!(url.as_str(), "https://www.example.com/docs/sheet1.pdf");
///
/// let url = resolve(&base, "https://other.com/x.pdf").unwrap();
/// assert_eq!(url.as_str(), "https://other.com/x.pdf");
/// ```
pub fn resolve(base: &Url, candidate: &str) -> Result<Url> {
    let url = match Url::parse(candidate) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => base.join(candidate).map_err(|e| {
            Error::InvalidUrl(format!(
                "The url \"{}\" cannot be joined onto \"{}\": {}",
                candidate, base, e
            ))
        })?,
        Err(e) => {
            return Err(Error::InvalidUrl(format!(
                "The url \"{}\" cannot be parsed: {}",
                candidate, e
            )))
        }
    };
    validate(url)
}

/// Accepts only absolute http(s) URLs that carry a host.
pub fn validate(url: Url) -> Result<Url> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "The url \"{}\" does not use http or https",
            url
        )));
    }
    if !url.has_host() {
        return Err(Error::InvalidUrl(format!(
            "The url \"{}\" does not contain a host",
            url
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base("https://www.example.com").unwrap()
    }

    #[test]
    fn test_relative_path() {
        let url = resolve(&base(), "/docs/a.pdf").unwrap();
        assert_eq!(url.as_str(), "https://www.example.com/docs/a.pdf");
    }

    #[test]
    fn test_relative_without_leading_slash() {
        let url = resolve(&base(), "docs/a.pdf").unwrap();
        assert_eq!(url.as_str(), "https://www.example.com/docs/a.pdf");
    }

    #[test]
    fn test_protocol_relative() {
        let url = resolve(&base(), "//cdn.example.net/a.pdf").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.net/a.pdf");
    }

    #[test]
    fn test_absolute_is_kept() {
        let url = resolve(&base(), "http://other.com/x.pdf").unwrap();
        assert_eq!(url.as_str(), "http://other.com/x.pdf");
    }

    #[test]
    fn test_other_schemes_are_rejected() {
        assert!(matches!(
            resolve(&base(), "mailto:someone@example.com?subject=a.pdf"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            resolve(&base(), "ftp://files.example.com/a.pdf"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_unparsable_is_rejected() {
        assert!(matches!(
            resolve(&base(), "http://[::1/a.pdf"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_invalid_base() {
        assert!(parse_base("not a url").is_err());
        assert!(parse_base("file:///tmp").is_err());
    }
}

//! Local fallback image references.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};

/// Number of images the gallery shows, hero included.
pub const GALLERY_SIZE: usize = 7;

/// Hardcoded local images, hero first.
pub const FALLBACK_IMAGES: [&str; GALLERY_SIZE] = [
    "/static/images/fallback-star.jpg",
    "/static/images/fallback1.jpg",
    "/static/images/fallback2.jpg",
    "/static/images/fallback3.jpg",
    "/static/images/fallback4.jpg",
    "/static/images/fallback5.jpg",
    "/static/images/fallback6.jpg",
];

/// A non-empty ordered list of local image references.
///
/// Local references are assumed always resolvable, so loading this set has no
/// error path once it has been constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FallbackSet {
    urls: Vec<String>,
}

impl FallbackSet {
    pub fn new(urls: Vec<String>) -> Result<Self> {
        if urls.is_empty() {
            return Err(StudioError::config("fallback image list must not be empty"));
        }
        if urls.iter().any(|url| url.trim().is_empty()) {
            return Err(StudioError::config("fallback image list contains a blank entry"));
        }
        Ok(Self { urls })
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl Default for FallbackSet {
    fn default() -> Self {
        Self {
            urls: FALLBACK_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for FallbackSet {
    type Error = StudioError;

    fn try_from(urls: Vec<String>) -> Result<Self> {
        Self::new(urls)
    }
}

impl From<FallbackSet> for Vec<String> {
    fn from(set: FallbackSet) -> Self {
        set.urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_seven_entries() {
        let set = FallbackSet::default();
        assert_eq!(set.len(), GALLERY_SIZE);
        assert_eq!(set.urls()[0], "/static/images/fallback-star.jpg");
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(FallbackSet::new(Vec::new()).unwrap_err().is_config());
        assert!(FallbackSet::new(vec!["a.jpg".into(), " ".into()]).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_str::<FallbackSet>("[]");
        assert!(err.is_err());
        let ok: FallbackSet = serde_json::from_str(r#"["/a.jpg"]"#).expect("valid list");
        assert_eq!(ok.urls(), ["/a.jpg".to_string()]);
    }
}

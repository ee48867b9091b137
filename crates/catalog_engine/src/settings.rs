use std::time::Duration;

use url::Url;

use crate::{ApiError, FailureKind};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    /// Pre-issued API token sent as a bearer credential.
    pub api_token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{base_url} is not an http(s) base url"),
            ));
        }
        Ok(Self {
            base_url,
            api_token: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.api_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Display URL for a media `url` as stored by the backend.
    ///
    /// Relative urls are appended to the base path, so a base of
    /// `https://host/cms` serves `/uploads/a.png` from `/cms/uploads/a.png`.
    pub fn asset_url(&self, url: &str) -> String {
        if let Ok(absolute) = Url::parse(url) {
            return absolute.into();
        }
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (url, None),
        };
        let mut asset = self.base_url.clone();
        asset.set_query(query);
        asset.set_fragment(None);
        if let Ok(mut segments) = asset.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|segment| !segment.is_empty()));
        }
        asset.into()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiSettings;
    use crate::FailureKind;

    #[test]
    fn rejects_non_http_base() {
        let err = ApiSettings::new("mailto:admin@example.com").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
        let err = ApiSettings::new("not a url").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }

    #[test]
    fn blank_token_is_dropped() {
        let settings = ApiSettings::new("http://localhost:1337")
            .unwrap()
            .with_token(Some("  ".into()));
        assert_eq!(settings.api_token, None);
    }

    #[test]
    fn relative_asset_urls_join_the_base() {
        let settings = ApiSettings::new("http://localhost:1337").unwrap();
        assert_eq!(
            settings.asset_url("/uploads/lamp.png"),
            "http://localhost:1337/uploads/lamp.png"
        );
        assert_eq!(
            settings.asset_url("https://cdn.example.com/lamp.png"),
            "https://cdn.example.com/lamp.png"
        );
    }

    #[test]
    fn relative_asset_urls_keep_the_base_path() {
        let settings = ApiSettings::new("https://example.com/cms").unwrap();
        assert_eq!(
            settings.asset_url("/uploads/a.png"),
            "https://example.com/cms/uploads/a.png"
        );
        let settings = ApiSettings::new("https://example.com/cms/").unwrap();
        assert_eq!(
            settings.asset_url("uploads/a.png?v=2"),
            "https://example.com/cms/uploads/a.png?v=2"
        );
    }
}

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;

/// How long a remote image may take before we give up on it
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where an artwork's image bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// http(s) URL
    Remote(String),
    /// Local file, from a plain path or a `file://` URI
    Local(PathBuf),
}

/// HTTP client shared by every remote image load; clones share one
/// connection pool
pub fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;
    Ok(client)
}

impl ImageSource {
    pub fn parse(uri: &str) -> Self {
        let lower = uri.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Remote(uri.to_string())
        } else if lower.starts_with("file://") {
            ImageSource::Local(PathBuf::from(&uri["file://".len()..]))
        } else {
            ImageSource::Local(PathBuf::from(uri))
        }
    }

    /// Read the raw image bytes
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<u8>> {
        match self {
            ImageSource::Remote(url) => {
                let response = client.get(url).send().await?.error_for_status()?;
                let bytes = response.bytes().await?;
                tracing::debug!("🌐 Fetched {} bytes from {}", bytes.len(), url);
                Ok(bytes.to_vec())
            }
            ImageSource::Local(path) => {
                let bytes = tokio::fs::read(path).await?;
                tracing::debug!("📁 Read {} bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote() {
        assert_eq!(
            ImageSource::parse("https://picsum.photos/400/300?random=1"),
            ImageSource::Remote("https://picsum.photos/400/300?random=1".into())
        );
        assert!(matches!(ImageSource::parse("HTTP://example.com/a.png"), ImageSource::Remote(_)));
    }

    #[test]
    fn test_parse_local() {
        assert_eq!(
            ImageSource::parse("file:///srv/art/forest.png"),
            ImageSource::Local(PathBuf::from("/srv/art/forest.png"))
        );
        assert_eq!(
            ImageSource::parse("art/forest.png"),
            ImageSource::Local(PathBuf::from("art/forest.png"))
        );
    }
}

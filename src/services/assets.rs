use base64::{Engine as _, engine::general_purpose::STANDARD};
use url::Url;

use crate::models::error::AppError;

/// MIME type inferred from the file extension. Anything but `.png` is served as JPEG.
pub fn mime_for(path: &str) -> &'static str {
    let is_png = path
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("png"));

    if is_png { "image/png" } else { "image/jpeg" }
}

/// Encodes image bytes as an embeddable `data:` URI.
pub fn to_data_uri(path: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes))
}

/// Resolves an asset path against the page URL.
pub fn resolve_asset_url(page_url: &str, path: &str) -> Result<String, AppError> {
    Url::parse(page_url)
        .and_then(|base| base.join(path))
        .map(String::from)
        .map_err(|e| AppError::Asset(format!("Invalid asset URL for {path}: {e}")))
}

/// Fetches `path` relative to the page and returns it as a `data:` URI.
pub async fn load_data_uri(page_url: &str, path: &str) -> Result<String, AppError> {
    let url = resolve_asset_url(page_url, path)?;

    let response = reqwest::get(&url)
        .await
        .map_err(|e| AppError::Asset(format!("Failed to fetch {path}: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Asset(format!(
            "Failed to fetch {path}: {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Asset(format!("Failed to read {path}: {e}")))?;

    Ok(to_data_uri(path, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_by_extension() {
        assert_eq!(mime_for("static/logo.png"), "image/png");
        assert_eq!(mime_for("static/LOGO.PNG"), "image/png");
        assert_eq!(mime_for("static/logo_text.jpg"), "image/jpeg");
        assert_eq!(mime_for("static/logo"), "image/jpeg");
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(to_data_uri("a.png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_resolve_relative_to_page() {
        assert_eq!(
            resolve_asset_url("http://kiosk.local/dash/?lang=de", "static/logo.png").unwrap(),
            "http://kiosk.local/dash/static/logo.png"
        );
        assert!(resolve_asset_url("not a url", "static/logo.png").is_err());
    }
}

//! Asset download adapter backed by `fetch` and an object-URL anchor click.

use platform_host::{AssetDownloadFuture, AssetDownloadService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser download adapter.
///
/// Fetches the asset as a blob, points a temporary anchor at an object URL with the `download`
/// attribute set, clicks it, then revokes the URL.
pub struct WebAssetDownloadService;

impl AssetDownloadService for WebAssetDownloadService {
    fn download<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::download_asset(url, file_name).await })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_fallback_reports_missing_browser() {
        let err = block_on(WebAssetDownloadService.download("https://cdn.example/a.png", "a.png"))
            .unwrap_err();
        assert!(err.contains("browser"));
    }
}

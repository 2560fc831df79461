//! Host-side execution of reducer effects.
//!
//! The runtime never reaches for browser APIs directly when saving assets or alerting the user;
//! it goes through the services injected via [`HostServices`] so native tests can swap in
//! in-memory adapters.

use std::rc::Rc;

use catalog_core::{CatalogEffect, DownloadRequest};
use leptos::{logging, spawn_local};
use platform_host::{AssetDownloadService, HostServices, NotificationService};

#[derive(Clone)]
/// Host service bundle for catalog side effects.
pub struct CatalogHostContext {
    downloads: Rc<dyn AssetDownloadService>,
    notifications: Rc<dyn NotificationService>,
    host_strategy_name: &'static str,
}

impl Default for CatalogHostContext {
    fn default() -> Self {
        Self::new(HostServices::noop())
    }
}

impl CatalogHostContext {
    /// Creates a host context from an injected [`HostServices`] bundle.
    pub fn new(host_services: HostServices) -> Self {
        Self {
            downloads: host_services.downloads,
            notifications: host_services.notifications,
            host_strategy_name: host_services.host_strategy.as_str(),
        }
    }

    /// Returns the configured asset download service.
    pub fn asset_download_service(&self) -> Rc<dyn AssetDownloadService> {
        self.downloads.clone()
    }

    /// Returns the configured notification service.
    pub fn notification_service(&self) -> Rc<dyn NotificationService> {
        self.notifications.clone()
    }

    /// Returns the selected host strategy token.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes one reducer-emitted effect.
    pub fn run_effect(&self, effect: CatalogEffect) {
        match effect {
            CatalogEffect::DownloadAsset(request) => {
                let host = self.clone();
                spawn_local(async move {
                    let _ = host.download(&request).await;
                });
            }
            CatalogEffect::ScrollToTop => scroll_to_top(),
        }
    }

    /// Fetches and saves one asset.
    ///
    /// A failure is logged and reported to the user through the notification service before
    /// being returned.
    ///
    /// # Errors
    ///
    /// Returns the download service's error message.
    pub async fn download(&self, request: &DownloadRequest) -> Result<(), String> {
        let result = self
            .downloads
            .download(&request.url, &request.file_name)
            .await;
        if let Err(err) = &result {
            logging::warn!("asset download failed for `{}`: {err}", request.url);
            if let Err(err) = self
                .notifications
                .notify("", &request.failure_message())
                .await
            {
                logging::warn!("download failure alert failed: {err}");
            }
        }
        result
    }
}

fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

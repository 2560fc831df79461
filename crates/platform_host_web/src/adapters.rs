use std::rc::Rc;

use platform_host::{
    AssetDownloadFuture, AssetDownloadService, HostServices, HostStrategy,
    NoopAssetDownloadService, NoopNotificationService, NotificationFuture, NotificationService,
};

use crate::{WebAlertService, WebAssetDownloadService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete download backend behind [`AssetDownloadService`].
#[derive(Debug, Clone, Copy)]
pub enum AssetDownloadServiceAdapter {
    /// Browser fetch + anchor download.
    Browser(WebAssetDownloadService),
    /// No-op fallback.
    Stub(NoopAssetDownloadService),
}

impl AssetDownloadService for AssetDownloadServiceAdapter {
    fn download<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.download(url, file_name),
            Self::Stub(service) => service.download(url, file_name),
        }
    }
}

/// Adapter enum that erases the concrete notification backend behind [`NotificationService`].
#[derive(Debug, Clone, Copy)]
pub enum NotificationServiceAdapter {
    /// Browser `window.alert`.
    Browser(WebAlertService),
    /// No-op fallback.
    Stub(NoopNotificationService),
}

impl NotificationService for NotificationServiceAdapter {
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.notify(title, body),
            Self::Stub(service) => service.notify(title, body),
        }
    }
}

/// Builds the download adapter for the compile-time selected host strategy.
pub fn asset_download_service() -> AssetDownloadServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => AssetDownloadServiceAdapter::Browser(WebAssetDownloadService),
        HostStrategy::Stub => AssetDownloadServiceAdapter::Stub(NoopAssetDownloadService),
    }
}

/// Builds the notification adapter for the compile-time selected host strategy.
pub fn notification_service() -> NotificationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => NotificationServiceAdapter::Browser(WebAlertService),
        HostStrategy::Stub => NotificationServiceAdapter::Stub(NoopNotificationService),
    }
}

/// Assembles the host bundle injected into the catalog runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        downloads: Rc::new(asset_download_service()),
        notifications: Rc::new(notification_service()),
        host_strategy: selected_host_strategy(),
    }
}

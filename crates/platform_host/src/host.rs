//! Host-bundle model for browser and native runtime composition.

use std::rc::Rc;

use crate::{
    AssetDownloadService, MemoryAssetDownloadService, MemoryNotificationService,
    NoopAssetDownloadService, NoopNotificationService, NotificationService,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// Placeholder adapters for native builds and tests.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the catalog runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `catalog_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Asset download service.
    pub downloads: Rc<dyn AssetDownloadService>,
    /// Notification delivery service.
    pub notifications: Rc<dyn NotificationService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op adapters.
    pub fn noop() -> Self {
        Self {
            downloads: Rc::new(NoopAssetDownloadService),
            notifications: Rc::new(NoopNotificationService),
            host_strategy: HostStrategy::Stub,
        }
    }

    /// Bundle backed by the given in-memory adapters, for tests that inspect host traffic.
    pub fn in_memory(
        downloads: MemoryAssetDownloadService,
        notifications: MemoryNotificationService,
    ) -> Self {
        Self {
            downloads: Rc::new(downloads),
            notifications: Rc::new(notifications),
            host_strategy: HostStrategy::Stub,
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn in_memory_bundle_shares_recorders_with_caller() {
        let downloads = MemoryAssetDownloadService::default();
        let notifications = MemoryNotificationService::default();
        let host = HostServices::in_memory(downloads.clone(), notifications.clone());

        block_on(host.downloads.download("https://cdn.example/a.png", "Owl.png"))
            .expect("download");
        block_on(host.notifications.notify("", "hello")).expect("notify");

        assert_eq!(downloads.requests().len(), 1);
        assert_eq!(notifications.notifications()[0].body, "hello");
        assert_eq!(host.host_strategy.as_str(), "stub");
    }
}

//! Typed host-service contracts shared by the catalog runtime and browser adapters.
//!
//! This crate is the API-first boundary for side effects the catalog cannot perform on its own:
//! saving image assets and surfacing user-visible alerts. Concrete browser adapters live in
//! `platform_host_web`; the no-op and in-memory adapters here back native builds and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod download;
pub mod host;
pub mod notifications;

pub use download::{
    AssetDownloadFuture, AssetDownloadService, MemoryAssetDownloadService,
    NoopAssetDownloadService, RecordedDownload,
};
pub use host::{HostServices, HostStrategy};
pub use notifications::{
    MemoryNotificationService, NoopNotificationService, NotificationFuture, NotificationService,
    RecordedNotification,
};

//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for asset downloads and user
//! alerts. DOM and fetch interop lives in `bridge`, which compiles to inert fallbacks off
//! `wasm32` so native tests can link the adapters.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod download;
pub mod notifications;

pub use adapters::{
    asset_download_service, build_host_services, host_strategy_name, notification_service,
    selected_host_strategy, AssetDownloadServiceAdapter, NotificationServiceAdapter,
};
pub use download::WebAssetDownloadService;
pub use notifications::WebAlertService;

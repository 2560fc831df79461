//! Notification adapter backed by the blocking `window.alert` dialog.

use platform_host::{NotificationFuture, NotificationService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser alert adapter. Needs no permission grant, unlike the Notifications API.
pub struct WebAlertService;

impl NotificationService for WebAlertService {
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let rendered = if title.trim().is_empty() {
                body.to_string()
            } else {
                format!("{title}: {body}")
            };
            bridge::alert(&rendered).map_err(|err| format!("alert dispatch failed: {err}"))
        })
    }
}

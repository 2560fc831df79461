//! Notification service contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for user-visible notifications.
pub trait NotificationService {
    /// Dispatches a notification message. Hosts without a title slot render `body` only.
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification service for unsupported targets.
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn notify<'a>(
        &'a self,
        _title: &'a str,
        _body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One notification observed by [`MemoryNotificationService`].
pub struct RecordedNotification {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

#[derive(Debug, Clone, Default)]
/// In-memory notification service that records every message.
pub struct MemoryNotificationService {
    inner: Rc<RefCell<Vec<RecordedNotification>>>,
}

impl MemoryNotificationService {
    /// Notifications observed so far, in call order.
    pub fn notifications(&self) -> Vec<RecordedNotification> {
        self.inner.borrow().clone()
    }
}

impl NotificationService for MemoryNotificationService {
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().push(RecordedNotification {
                title: title.to_string(),
                body: body.to_string(),
            });
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_notification_service_records_messages() {
        let service = MemoryNotificationService::default();
        let service_obj: &dyn NotificationService = &service;
        block_on(service_obj.notify("Download failed", "Failed to download \"Owl.png\"."))
            .expect("notify");
        assert_eq!(
            service.notifications(),
            vec![RecordedNotification {
                title: "Download failed".to_string(),
                body: "Failed to download \"Owl.png\".".to_string(),
            }]
        );
    }
}

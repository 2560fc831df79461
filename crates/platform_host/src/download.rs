//! Asset download service contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`AssetDownloadService`].
pub type AssetDownloadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that fetches a remote asset and hands it to the user as a saved file.
pub trait AssetDownloadService {
    /// Fetches `url` and saves the bytes under `file_name`.
    fn download<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op download service for unsupported targets.
pub struct NoopAssetDownloadService;

impl AssetDownloadService for NoopAssetDownloadService {
    fn download<'a>(
        &'a self,
        _url: &'a str,
        _file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One download request observed by [`MemoryAssetDownloadService`].
pub struct RecordedDownload {
    /// Requested asset URL.
    pub url: String,
    /// Requested file name.
    pub file_name: String,
}

#[derive(Debug, Clone, Default)]
/// In-memory download service that records requests and can be told to fail.
pub struct MemoryAssetDownloadService {
    requests: Rc<RefCell<Vec<RecordedDownload>>>,
    failure: Rc<RefCell<Option<String>>>,
}

impl MemoryAssetDownloadService {
    /// Makes every subsequent download fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.borrow_mut() = Some(message.into());
    }

    /// Requests observed so far, in call order.
    pub fn requests(&self) -> Vec<RecordedDownload> {
        self.requests.borrow().clone()
    }
}

impl AssetDownloadService for MemoryAssetDownloadService {
    fn download<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(RecordedDownload {
                url: url.to_string(),
                file_name: file_name.to_string(),
            });
            match self.failure.borrow().as_ref() {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_download_service_records_requests_in_order() {
        let service = MemoryAssetDownloadService::default();
        let service_obj: &dyn AssetDownloadService = &service;

        block_on(service_obj.download("https://cdn.example/a.png", "Owl.png")).expect("download");
        block_on(service_obj.download("https://cdn.example/b.png", "Taxi.png")).expect("download");

        assert_eq!(
            service.requests(),
            vec![
                RecordedDownload {
                    url: "https://cdn.example/a.png".to_string(),
                    file_name: "Owl.png".to_string(),
                },
                RecordedDownload {
                    url: "https://cdn.example/b.png".to_string(),
                    file_name: "Taxi.png".to_string(),
                },
            ]
        );
    }

    #[test]
    fn memory_download_service_reports_configured_failure() {
        let service = MemoryAssetDownloadService::default();
        service.fail_with("status 404");
        let err = block_on(service.download("https://cdn.example/a.png", "Owl.png")).unwrap_err();
        assert_eq!(err, "status 404");
        assert_eq!(service.requests().len(), 1);
    }

    #[test]
    fn noop_download_service_succeeds() {
        let service = NoopAssetDownloadService;
        block_on(service.download("https://cdn.example/a.png", "Owl.png")).expect("download");
    }
}

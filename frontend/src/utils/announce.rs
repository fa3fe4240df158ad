//! Deferred loading of the announcement banner.
//!
//! The header starts a load after mounting and keeps the outcome in an
//! [`AnnounceSlot`]. Failures never reach the UI; callers may observe them
//! through an error callback.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use shared::Announcement;
use thiserror::Error;

use crate::api::{ApiClient, FetchError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnounceError {
    #[error("failed to fetch announcement: {0}")]
    Fetch(#[from] FetchError),
    #[error("no open announcement")]
    Empty,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AnnounceSlot {
    #[default]
    Pending,
    Ready(Announcement),
    Failed,
}

impl AnnounceSlot {
    pub fn from_result(result: &Result<Announcement, AnnounceError>) -> Self {
        match result {
            Ok(announcement) => AnnounceSlot::Ready(announcement.clone()),
            Err(_) => AnnounceSlot::Failed,
        }
    }

    /// The announcement to show on `path`, if any. Never shown on the root page.
    pub fn visible_on(&self, path: &str) -> Option<&Announcement> {
        if is_root_path(path) {
            return None;
        }
        match self {
            AnnounceSlot::Ready(announcement) => Some(announcement),
            AnnounceSlot::Pending | AnnounceSlot::Failed => None,
        }
    }
}

pub fn is_root_path(path: &str) -> bool {
    path.is_empty() || path == "/"
}

pub type AnnounceFuture = LocalBoxFuture<'static, Result<Announcement, AnnounceError>>;

/// Produces a fresh announcement load each time it is invoked.
#[derive(Clone)]
pub struct AnnounceLoader(Rc<dyn Fn() -> AnnounceFuture>);

impl AnnounceLoader {
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Announcement, AnnounceError>> + 'static,
    {
        Self(Rc::new(move || Box::pin(load()) as AnnounceFuture))
    }

    /// Loads the newest open announcement published at `url`.
    pub fn from_url(url: String) -> Self {
        Self::new(move || {
            let url = url.clone();
            async move {
                ApiClient::latest_announcement(&url)
                    .await?
                    .ok_or(AnnounceError::Empty)
            }
        })
    }

    pub fn load(&self) -> AnnounceFuture {
        (self.0)()
    }
}

/// Tracks whether the component that started a load is still alive.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one load and hands the result to `apply`, unless the guard was
/// unmounted in the meantime. Returns whether `apply` ran.
pub async fn load_announcement<F>(loader: AnnounceLoader, guard: MountGuard, apply: F) -> bool
where
    F: FnOnce(Result<Announcement, AnnounceError>),
{
    let result = loader.load().await;
    if !guard.is_mounted() {
        log::debug!("announcement load finished after unmount, discarding");
        return false;
    }
    apply(result);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn sample() -> Announcement {
        Announcement {
            id: 12,
            title: "Scheduled maintenance".to_string(),
            body: Some("Back **soon**".to_string()),
            url: Some("https://example.com/issues/12".to_string()),
        }
    }

    #[test]
    fn test_root_path_never_shows_banner() {
        let slot = AnnounceSlot::Ready(sample());
        assert_eq!(slot.visible_on("/"), None);
        assert_eq!(slot.visible_on(""), None);
    }

    #[test]
    fn test_banner_visible_only_when_ready() {
        assert_eq!(AnnounceSlot::Pending.visible_on("/matches"), None);
        assert_eq!(AnnounceSlot::Failed.visible_on("/matches"), None);
        assert_eq!(
            AnnounceSlot::Ready(sample()).visible_on("/matches"),
            Some(&sample())
        );
    }

    #[test]
    fn test_slot_from_result() {
        assert_eq!(AnnounceSlot::from_result(&Ok(sample())), AnnounceSlot::Ready(sample()));
        assert_eq!(
            AnnounceSlot::from_result(&Err(AnnounceError::Empty)),
            AnnounceSlot::Failed
        );
    }

    #[test]
    fn test_load_applies_result_while_mounted() {
        let loader = AnnounceLoader::new(|| async { Ok(sample()) });
        let seen = RefCell::new(None);

        let applied = block_on(load_announcement(loader, MountGuard::new(), |result| {
            *seen.borrow_mut() = Some(result);
        }));

        assert!(applied);
        assert_eq!(seen.into_inner(), Some(Ok(sample())));
    }

    #[test]
    fn test_load_failure_is_passed_through() {
        let loader = AnnounceLoader::new(|| async {
            Err(AnnounceError::Fetch(FetchError::Status(503)))
        });
        let seen = RefCell::new(None);

        block_on(load_announcement(loader, MountGuard::new(), |result| {
            *seen.borrow_mut() = Some(result);
        }));

        assert_eq!(
            seen.into_inner(),
            Some(Err(AnnounceError::Fetch(FetchError::Status(503))))
        );
    }

    #[test]
    fn test_load_discarded_after_unmount() {
        let guard = MountGuard::new();
        let loader = AnnounceLoader::new(|| async { Ok(sample()) });
        guard.unmount();

        let applied = block_on(load_announcement(loader, guard.clone(), |_| {
            panic!("result must not be applied after unmount");
        }));

        assert!(!applied);
        assert!(!guard.is_mounted());
    }

    #[test]
    fn test_loader_can_run_repeatedly() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let loader = AnnounceLoader::new(move || {
            counter.set(counter.get() + 1);
            async { Err(AnnounceError::Empty) }
        });

        assert_eq!(block_on(loader.load()), Err(AnnounceError::Empty));
        assert_eq!(block_on(loader.load()), Err(AnnounceError::Empty));
        assert_eq!(calls.get(), 2);
    }
}

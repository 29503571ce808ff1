//! Navigation handle shared with UI outside the pager
//!
//! The handle is created by the application and passed to whoever needs to
//! flip pages (arrows, buttons inside other pages). A navigator mounts itself
//! on it while it is shown; when nothing is mounted every accessor returns a
//! safe default, so stale clones never fail.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::{NavigatorId, PageId, SwipeNavigator};
use crate::error::{NavigatorError, Result};

/// Cloneable access point to the mounted navigator
#[derive(Clone, Default)]
pub struct NavigationHandle {
    slot: Arc<RwLock<Option<Arc<SwipeNavigator>>>>,
}

impl NavigationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `navigator` as the target of this handle.
    ///
    /// Fails if a different navigator is already mounted. The returned guard
    /// unmounts on drop.
    pub fn mount(&self, navigator: &Arc<SwipeNavigator>) -> Result<MountGuard> {
        let mut slot = self.slot.write();
        if let Some(existing) = slot.as_ref() {
            if existing.id() != navigator.id() {
                warn!(
                    "Refusing to mount navigator {}: handle owned by {}",
                    navigator.id(),
                    existing.id()
                );
                return Err(NavigatorError::HandleOccupied(existing.id()));
            }
        }
        *slot = Some(navigator.clone());
        drop(slot);

        debug!("Mounted navigator {}", navigator.id());
        Ok(MountGuard {
            handle: self.clone(),
            id: navigator.id(),
        })
    }

    /// Remove the navigator `id` if it is the one mounted. Safe to repeat.
    pub fn unmount(&self, id: NavigatorId) -> bool {
        let removed = {
            let mut slot = self.slot.write();
            let owned = slot.as_ref().map(|nav| nav.id() == id).unwrap_or(false);
            if owned {
                slot.take()
            } else {
                None
            }
        };

        match removed {
            Some(_) => {
                debug!("Unmounted navigator {}", id);
                true
            }
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.read().is_some()
    }

    pub fn mounted_id(&self) -> Option<NavigatorId> {
        self.slot.read().as_ref().map(|nav| nav.id())
    }

    /// The mounted navigator, if any
    pub fn navigator(&self) -> Option<Arc<SwipeNavigator>> {
        self.slot.read().clone()
    }

    /// Navigate the mounted navigator. Returns false when nothing is mounted.
    pub fn navigate_to(&self, index: usize) -> bool {
        match self.navigator() {
            Some(nav) => {
                nav.navigate_to(index);
                true
            }
            None => {
                debug!("navigate_to({}) with no navigator mounted", index);
                false
            }
        }
    }

    /// Step relative to the current page. Returns false when nothing is mounted.
    pub fn navigate_by(&self, delta: isize) -> bool {
        match self.navigator() {
            Some(nav) => {
                nav.navigate_by(delta);
                true
            }
            None => false,
        }
    }

    /// Navigate to the page carrying `id`
    pub fn navigate_to_page(&self, id: PageId) -> bool {
        self.navigator()
            .map(|nav| nav.navigate_to_page(id))
            .unwrap_or(false)
    }

    /// Current page, or the home page index when nothing is mounted
    pub fn current_page(&self) -> usize {
        self.navigator().map(|nav| nav.current_page()).unwrap_or(1)
    }

    pub fn page_id(&self) -> PageId {
        self.navigator()
            .map(|nav| nav.page_id())
            .unwrap_or(PageId::HOME)
    }

    pub fn page_ids(&self) -> Vec<PageId> {
        self.navigator()
            .map(|nav| nav.page_ids())
            .unwrap_or_else(|| PageId::DEFAULT_ORDER.to_vec())
    }

    pub fn page_count(&self) -> Option<usize> {
        self.navigator().map(|nav| nav.page_count())
    }
}

/// Keeps a navigator mounted; unmounts it on drop
pub struct MountGuard {
    handle: NavigationHandle,
    id: NavigatorId,
}

impl MountGuard {
    pub fn id(&self) -> NavigatorId {
        self.id
    }

    pub fn handle(&self) -> &NavigationHandle {
        &self.handle
    }

    /// Unmount now; dropping the guard afterwards is harmless
    pub fn unmount(&self) -> bool {
        self.handle.unmount(self.id)
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.handle.unmount(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(pages: usize) -> Arc<SwipeNavigator> {
        Arc::new(
            SwipeNavigator::builder(pages)
                .container_width(400.0)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_defaults_before_mount() {
        let handle = NavigationHandle::new();
        assert!(!handle.is_mounted());
        assert_eq!(handle.current_page(), 1);
        assert_eq!(handle.page_id(), PageId::Chat);
        assert_eq!(handle.page_ids(), PageId::DEFAULT_ORDER.to_vec());
        assert!(!handle.navigate_to(2));
    }

    #[test]
    fn test_mounted_handle_reflects_navigator() {
        let handle = NavigationHandle::new();
        let navigator = nav(3);
        let _guard = handle.mount(&navigator).unwrap();

        assert!(handle.is_mounted());
        assert_eq!(handle.page_ids().len(), 3);
        assert!(handle.navigate_to(2));
        assert_eq!(navigator.current_page(), 2);
        assert_eq!(handle.page_id(), PageId::Discover);
    }

    #[test]
    fn test_mismatched_ids_report_default_length() {
        let handle = NavigationHandle::new();
        let navigator = Arc::new(
            SwipeNavigator::builder(3)
                .page_ids(vec![PageId::Tools])
                .build_with_fallback()
                .unwrap(),
        );
        let _guard = handle.mount(&navigator).unwrap();
        assert_eq!(handle.page_ids().len(), PageId::DEFAULT_ORDER.len());
    }

    #[test]
    fn test_drop_guard_unmounts() {
        let handle = NavigationHandle::new();
        let stale = handle.clone();
        let navigator = nav(3);
        {
            let _guard = handle.mount(&navigator).unwrap();
            navigator.navigate_to(0);
            assert_eq!(stale.current_page(), 0);
        }
        assert!(!handle.is_mounted());
        assert_eq!(stale.current_page(), 1);
        assert_eq!(stale.page_id(), PageId::HOME);
        assert!(!stale.navigate_to(0));
    }

    #[test]
    fn test_double_unmount_is_harmless() {
        let handle = NavigationHandle::new();
        let navigator = nav(2);
        let guard = handle.mount(&navigator).unwrap();
        assert!(guard.unmount());
        assert!(!guard.unmount());
        assert!(!handle.unmount(navigator.id()));
        drop(guard);
        assert!(!handle.is_mounted());
    }

    #[test]
    fn test_second_navigator_cannot_take_over() {
        let handle = NavigationHandle::new();
        let first = nav(3);
        let second = nav(2);
        let _guard = handle.mount(&first).unwrap();

        let err = handle.mount(&second).err().unwrap();
        assert!(matches!(err, NavigatorError::HandleOccupied(id) if id == first.id()));
        assert_eq!(handle.mounted_id(), Some(first.id()));

        // Unmounting the wrong navigator leaves the owner in place
        assert!(!handle.unmount(second.id()));
        assert!(handle.is_mounted());
    }

    #[test]
    fn test_remount_same_navigator() {
        let handle = NavigationHandle::new();
        let navigator = nav(3);
        let first = handle.mount(&navigator).unwrap();
        let second = handle.mount(&navigator).unwrap();
        drop(first);
        // Both guards refer to the same navigator; the first drop unmounts it
        assert!(!handle.is_mounted());
        drop(second);
        assert!(!handle.is_mounted());
    }

    #[test]
    fn test_callback_can_use_handle() {
        let handle = NavigationHandle::new();
        let observer = handle.clone();
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = seen.clone();
        let navigator = Arc::new(
            SwipeNavigator::builder(4)
                .on_page_change(move |index, _| {
                    sink.lock().push((index, observer.current_page()));
                })
                .build()
                .unwrap(),
        );
        let guard = handle.mount(&navigator).unwrap();
        handle.navigate_to(3);
        assert_eq!(seen.lock().as_slice(), &[(3, 3)]);
        drop(guard);
    }
}

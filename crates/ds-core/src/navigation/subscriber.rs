//! Page change subscriber trait

use super::PageId;

/// Trait for components that need to respond to page changes
pub trait PageChangeSubscriber: Send + Sync {
    /// Called synchronously after the current page changed, before the
    /// transition animation has finished
    fn on_page_change(&self, index: usize, page_id: PageId);
}

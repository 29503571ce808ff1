use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod engine;
mod gesture;
mod handle;
mod page;
mod spring;
mod subscriber;

pub use engine::{PageChangeCallback, SwipeNavigator, SwipeNavigatorBuilder};
pub use gesture::{
    resolve_release, rubber_band, Axis, GestureSample, GestureTracker, ReleaseOutcome,
    ReleaseTrigger, SwipeDirection, TrackerEvent,
};
pub use handle::{MountGuard, NavigationHandle};
pub use page::{PageId, PageSet};
pub use spring::SpringAnimation;
pub use subscriber::PageChangeSubscriber;

/// Unique identifier of a navigator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigatorId(Uuid);

impl NavigatorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NavigatorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NavigatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a navigator's state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    /// Visible page, always in `[0, page_count - 1]`
    pub current_page: usize,

    /// Whether a horizontal drag is in progress
    pub is_dragging: bool,

    /// Last measured width of the pager
    pub container_width: f32,
}

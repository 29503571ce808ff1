//! Core functionality for the DeepStack mobile swipe navigator
//!
//! This crate holds the headless navigation logic: page identities, gesture
//! resolution, the transition spring and the handle other UI uses to flip
//! pages. Rendering lives in `ds-ui`.

pub mod config;
pub mod error;
pub mod haptics;
pub mod navigation;

// Re-export commonly used types
pub use config::{GestureConfig, HapticConfig, SpringConfig, SwipeConfig};
pub use error::NavigatorError;
pub use haptics::{HapticPulse, Haptics, NoopHaptics, TracingHaptics};
pub use navigation::{
    GestureSample, GestureTracker, MountGuard, NavigationHandle, NavigationState, NavigatorId,
    PageChangeSubscriber, PageId, PageSet, SwipeNavigator, TrackerEvent,
};

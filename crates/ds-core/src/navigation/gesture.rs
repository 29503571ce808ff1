//! Drag gesture recognition and release resolution
//!
//! The pager only owns the horizontal axis. Raw pointer movement is fed to a
//! [`GestureTracker`], which locks each gesture to the axis it moves along
//! first; vertical gestures are left to whatever scrolls inside the page.
//! When a horizontal drag is released, [`resolve_release`] decides which page
//! the strip lands on.

use crate::config::GestureConfig;

/// Offset and speed of a drag at the moment it was released
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    /// Horizontal travel since the drag started, positive to the right
    pub offset: f32,
    /// Horizontal release speed in points per second, positive to the right
    pub velocity: f32,
}

impl GestureSample {
    pub fn new(offset: f32, velocity: f32) -> Self {
        Self { offset, velocity }
    }
}

/// Which neighbour a gesture points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Rightward drag, reveals the page to the left
    Previous,
    /// Leftward drag, reveals the page to the right
    Next,
}

/// What made a release count as a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseTrigger {
    /// Distance or velocity passed its threshold
    Threshold,
    /// Distance passed the container width ratio
    WidthRatio,
}

/// Result of resolving a released drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseOutcome {
    pub from: usize,
    pub to: usize,
    pub direction: Option<SwipeDirection>,
    pub trigger: Option<ReleaseTrigger>,
}

impl ReleaseOutcome {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Decide the landing page for a released drag.
///
/// Two independent triggers are combined: distance-or-velocity thresholds,
/// checked first, and a fraction of the container width. A direction that
/// would leave `[0, page_count - 1]` keeps the current page.
pub fn resolve_release(
    current: usize,
    page_count: usize,
    sample: GestureSample,
    container_width: f32,
    config: &GestureConfig,
) -> ReleaseOutcome {
    let GestureSample { offset, velocity } = sample;

    let by_threshold = if offset > config.distance_threshold || velocity > config.velocity_threshold {
        Some(SwipeDirection::Previous)
    } else if offset < -config.distance_threshold || velocity < -config.velocity_threshold {
        Some(SwipeDirection::Next)
    } else {
        None
    };

    let ratio_distance = container_width.max(0.0) * config.width_ratio_threshold;
    let by_ratio = if container_width > 0.0 && offset.abs() > ratio_distance {
        if offset > 0.0 {
            Some(SwipeDirection::Previous)
        } else {
            Some(SwipeDirection::Next)
        }
    } else {
        None
    };

    let (direction, trigger) = match (by_threshold, by_ratio) {
        (Some(dir), _) => (Some(dir), Some(ReleaseTrigger::Threshold)),
        (None, Some(dir)) => (Some(dir), Some(ReleaseTrigger::WidthRatio)),
        (None, None) => (None, None),
    };

    let to = match direction {
        Some(SwipeDirection::Previous) if current > 0 => current - 1,
        Some(SwipeDirection::Next) if current + 1 < page_count => current + 1,
        _ => current,
    };

    ReleaseOutcome {
        from: current,
        to,
        direction,
        trigger,
    }
}

/// Apply elastic resistance to a strip offset outside `[min, max]`
pub fn rubber_band(offset: f32, min: f32, max: f32, elastic: f32) -> f32 {
    if offset > max {
        max + (offset - max) * elastic
    } else if offset < min {
        min + (offset - min) * elastic
    } else {
        offset
    }
}

/// Axis a gesture has been locked to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Undecided,
    Horizontal,
    Vertical,
}

/// What the pager should do after feeding pointer input to the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerEvent {
    /// No gesture in progress
    Idle,
    /// Pointer is down but hasn't moved past the slop yet
    Pending,
    /// Gesture locked horizontal: start a drag at this offset
    DragStarted { offset: f32 },
    /// Horizontal drag moved
    Dragged { offset: f32 },
    /// Horizontal drag released
    Released(GestureSample),
    /// Gesture belongs to the vertical axis
    Ignored,
}

/// Locks pointer gestures to an axis
#[derive(Debug, Clone)]
pub struct GestureTracker {
    slop: f32,
    origin: Option<(f32, f32)>,
    axis: Axis,
    offset: f32,
}

impl GestureTracker {
    pub fn new(slop: f32) -> Self {
        Self {
            slop,
            origin: None,
            axis: Axis::Undecided,
            offset: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn is_horizontal(&self) -> bool {
        self.origin.is_some() && self.axis == Axis::Horizontal
    }

    /// Pointer went down at `(x, y)`
    pub fn press(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
        self.axis = Axis::Undecided;
        self.offset = 0.0;
    }

    /// Pointer moved to `(x, y)` while down
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> TrackerEvent {
        let Some((ox, oy)) = self.origin else {
            return TrackerEvent::Idle;
        };
        let (dx, dy) = (x - ox, y - oy);

        match self.axis {
            Axis::Undecided => {
                if dx.hypot(dy) <= self.slop {
                    return TrackerEvent::Pending;
                }
                if dx.abs() > dy.abs() {
                    self.axis = Axis::Horizontal;
                    self.offset = dx;
                    TrackerEvent::DragStarted { offset: dx }
                } else {
                    self.axis = Axis::Vertical;
                    TrackerEvent::Ignored
                }
            }
            Axis::Horizontal => {
                self.offset = dx;
                TrackerEvent::Dragged { offset: dx }
            }
            Axis::Vertical => TrackerEvent::Ignored,
        }
    }

    /// Pointer released with the given horizontal speed
    pub fn release(&mut self, velocity_x: f32) -> TrackerEvent {
        let event = match (self.origin, self.axis) {
            (Some(_), Axis::Horizontal) => {
                TrackerEvent::Released(GestureSample::new(self.offset, velocity_x))
            }
            (Some(_), Axis::Vertical) => TrackerEvent::Ignored,
            _ => TrackerEvent::Idle,
        };
        self.cancel();
        event
    }

    /// Forget the current gesture
    pub fn cancel(&mut self) {
        self.origin = None;
        self.axis = Axis::Undecided;
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GestureConfig {
        GestureConfig::default()
    }

    #[test]
    fn test_long_left_drag_goes_next() {
        let out = resolve_release(1, 3, GestureSample::new(-80.0, 0.0), 400.0, &config());
        assert_eq!(out.to, 2);
        assert_eq!(out.direction, Some(SwipeDirection::Next));
        assert_eq!(out.trigger, Some(ReleaseTrigger::Threshold));
    }

    #[test]
    fn test_fast_short_flick_goes_next() {
        let out = resolve_release(0, 2, GestureSample::new(-10.0, -900.0), 400.0, &config());
        assert_eq!(out.to, 1);
    }

    #[test]
    fn test_right_drag_on_first_page_stays() {
        let out = resolve_release(0, 3, GestureSample::new(300.0, 1200.0), 400.0, &config());
        assert_eq!(out.to, 0);
        assert!(!out.changed());
        assert_eq!(out.direction, Some(SwipeDirection::Previous));
    }

    #[test]
    fn test_small_slow_drag_stays() {
        let out = resolve_release(1, 3, GestureSample::new(20.0, 100.0), 400.0, &config());
        assert_eq!(out.to, 1);
        assert_eq!(out.direction, None);
    }

    #[test]
    fn test_width_ratio_trigger() {
        // Distance threshold raised past the ratio distance so only the ratio fires
        let cfg = GestureConfig {
            distance_threshold: 500.0,
            ..config()
        };
        let out = resolve_release(1, 3, GestureSample::new(130.0, 0.0), 400.0, &cfg);
        assert_eq!(out.to, 0);
        assert_eq!(out.trigger, Some(ReleaseTrigger::WidthRatio));
    }

    #[test]
    fn test_threshold_checked_before_ratio() {
        // Leftward travel past the ratio but rightward fling wins
        let out = resolve_release(1, 3, GestureSample::new(-20.0, 800.0), 40.0, &config());
        assert_eq!(out.to, 0);
    }

    #[test]
    fn test_rubber_band() {
        assert_eq!(rubber_band(-100.0, -800.0, 0.0, 0.2), -100.0);
        assert_eq!(rubber_band(100.0, -800.0, 0.0, 0.2), 20.0);
        assert_eq!(rubber_band(-900.0, -800.0, 0.0, 0.2), -820.0);
        assert_eq!(rubber_band(50.0, -800.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_tracker_locks_horizontal() {
        let mut tracker = GestureTracker::new(8.0);
        tracker.press(100.0, 100.0);
        assert_eq!(tracker.pointer_moved(103.0, 101.0), TrackerEvent::Pending);
        assert_eq!(
            tracker.pointer_moved(80.0, 104.0),
            TrackerEvent::DragStarted { offset: -20.0 }
        );
        assert_eq!(
            tracker.pointer_moved(40.0, 150.0),
            TrackerEvent::Dragged { offset: -60.0 }
        );
        assert_eq!(
            tracker.release(-300.0),
            TrackerEvent::Released(GestureSample::new(-60.0, -300.0))
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_tracker_ignores_vertical_scroll() {
        let mut tracker = GestureTracker::new(8.0);
        tracker.press(100.0, 100.0);
        assert_eq!(tracker.pointer_moved(102.0, 130.0), TrackerEvent::Ignored);
        // Later sideways motion doesn't steal the gesture
        assert_eq!(tracker.pointer_moved(20.0, 140.0), TrackerEvent::Ignored);
        assert_eq!(tracker.axis(), Axis::Vertical);
        assert_eq!(tracker.release(-2000.0), TrackerEvent::Ignored);
    }

    #[test]
    fn test_tracker_tap_is_idle() {
        let mut tracker = GestureTracker::new(8.0);
        assert_eq!(tracker.pointer_moved(1.0, 1.0), TrackerEvent::Idle);
        tracker.press(0.0, 0.0);
        assert_eq!(tracker.release(0.0), TrackerEvent::Idle);
    }
}

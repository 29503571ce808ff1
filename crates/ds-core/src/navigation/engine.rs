//! Swipe navigator implementation

use super::gesture::{resolve_release, rubber_band, GestureSample, ReleaseOutcome};
use super::spring::SpringAnimation;
use super::{NavigationState, NavigatorId, PageChangeSubscriber, PageId, PageSet};
use crate::config::SwipeConfig;
use crate::error::Result;
use crate::haptics::{HapticPulse, Haptics, TracingHaptics};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Callback invoked with the new page index and its id
pub type PageChangeCallback = Box<dyn Fn(usize, PageId) + Send + Sync>;

/// Widths closer than this are treated as unchanged
const WIDTH_EPSILON: f32 = 0.5;

/// Navigation state stored internally
#[derive(Debug, Clone)]
struct NavigatorInner {
    state: NavigationState,
    /// Strip offset when the current drag began
    drag_base: f32,
    spring: SpringAnimation,
}

impl NavigatorInner {
    fn rest_offset(&self, page: usize) -> f32 {
        -(page as f32) * self.state.container_width
    }
}

/// Builder for [`SwipeNavigator`]
pub struct SwipeNavigatorBuilder {
    page_count: usize,
    page_ids: Option<Vec<PageId>>,
    initial_page: Option<usize>,
    container_width: f32,
    config: SwipeConfig,
    on_page_change: Option<PageChangeCallback>,
    haptics: Option<Arc<dyn Haptics>>,
}

impl SwipeNavigatorBuilder {
    fn new(page_count: usize) -> Self {
        Self {
            page_count,
            page_ids: None,
            initial_page: None,
            container_width: 0.0,
            config: SwipeConfig::default(),
            on_page_change: None,
            haptics: None,
        }
    }

    /// Ids for each page, in order
    pub fn page_ids(mut self, ids: Vec<PageId>) -> Self {
        self.page_ids = Some(ids);
        self
    }

    /// Page shown first; clamped into range
    pub fn initial_page(mut self, index: usize) -> Self {
        self.initial_page = Some(index);
        self
    }

    /// Width known before the first measurement
    pub fn container_width(mut self, width: f32) -> Self {
        self.container_width = width.max(0.0);
        self
    }

    pub fn config(mut self, config: SwipeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_page_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize, PageId) + Send + Sync + 'static,
    {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    pub fn haptics(mut self, haptics: Arc<dyn Haptics>) -> Self {
        self.haptics = Some(haptics);
        self
    }

    /// Build, rejecting id lists that don't match the page count
    pub fn build(self) -> Result<SwipeNavigator> {
        let pages = PageSet::new(self.page_count, self.page_ids.clone())?;
        self.finish(pages)
    }

    /// Build, substituting the built-in id list when the supplied ids don't fit
    pub fn build_with_fallback(self) -> Result<SwipeNavigator> {
        let pages = PageSet::with_fallback(self.page_count, self.page_ids.clone())?;
        self.finish(pages)
    }

    fn finish(self, pages: PageSet) -> Result<SwipeNavigator> {
        self.config.validate()?;

        let current_page =
            pages.clamp(self.initial_page.unwrap_or(self.config.default_initial_page));
        let state = NavigationState {
            current_page,
            is_dragging: false,
            container_width: self.container_width,
        };
        let rest = -(current_page as f32) * state.container_width;

        let navigator = SwipeNavigator {
            id: NavigatorId::new(),
            pages,
            config: self.config,
            inner: RwLock::new(NavigatorInner {
                state,
                drag_base: rest,
                spring: SpringAnimation::at_rest(rest),
            }),
            subscribers: RwLock::new(Vec::new()),
            on_page_change: self.on_page_change,
            haptics: self
                .haptics
                .unwrap_or_else(|| Arc::new(TracingHaptics) as Arc<dyn Haptics>),
        };

        debug!(
            "Created navigator {} with {} pages, starting on {} ({})",
            navigator.id,
            navigator.pages.len(),
            current_page,
            navigator.pages.id_at(current_page)
        );
        Ok(navigator)
    }
}

/// Horizontally paged navigator: current page, drag state and strip offset
pub struct SwipeNavigator {
    id: NavigatorId,
    pages: PageSet,
    config: SwipeConfig,
    inner: RwLock<NavigatorInner>,
    subscribers: RwLock<Vec<Weak<dyn PageChangeSubscriber>>>,
    on_page_change: Option<PageChangeCallback>,
    haptics: Arc<dyn Haptics>,
}

impl SwipeNavigator {
    /// Start building a navigator over `page_count` pages
    pub fn builder(page_count: usize) -> SwipeNavigatorBuilder {
        SwipeNavigatorBuilder::new(page_count)
    }

    pub fn id(&self) -> NavigatorId {
        self.id
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn pages(&self) -> &PageSet {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> usize {
        self.inner.read().state.current_page
    }

    pub fn page_id(&self) -> PageId {
        self.pages.id_at(self.current_page())
    }

    pub fn page_ids(&self) -> Vec<PageId> {
        self.pages.ids().to_vec()
    }

    pub fn state(&self) -> NavigationState {
        self.inner.read().state
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.read().state.is_dragging
    }

    /// Single-page navigators don't drag
    pub fn drag_enabled(&self) -> bool {
        self.pages.len() > 1
    }

    /// Displayed strip offset in points (0 for the first page, negative beyond)
    pub fn offset(&self) -> f32 {
        self.inner.read().spring.position()
    }

    /// Whether a transition is still in flight
    pub fn is_animating(&self) -> bool {
        self.inner.read().spring.is_active()
    }

    /// Resting offset of `page` at the current width
    pub fn rest_offset(&self, page: usize) -> f32 {
        self.inner.read().rest_offset(page)
    }

    /// Navigate to a page; out-of-range indices are clamped.
    ///
    /// Returns whether the page changed. Asking for the current page only
    /// re-aims the animation.
    pub fn navigate_to(&self, index: usize) -> bool {
        let target = self.pages.clamp(index);

        let changed = {
            let mut inner = self.inner.write();
            inner.state.is_dragging = false;
            let previous = inner.state.current_page;
            inner.state.current_page = target;
            let rest = inner.rest_offset(target);
            inner.spring.retarget(rest);
            previous != target
        };

        if changed {
            self.page_changed(target);
        }
        changed
    }

    /// Navigate relative to the current page, clamping at both ends
    pub fn navigate_by(&self, delta: isize) -> bool {
        let target = (self.current_page() as isize).saturating_add(delta).max(0) as usize;
        self.navigate_to(target)
    }

    /// Navigate to the page carrying `id`; false if no page has it
    pub fn navigate_to_page(&self, id: PageId) -> bool {
        match self.pages.index_of(id) {
            Some(index) => self.navigate_to(index),
            None => {
                debug!("Navigator {} has no page {}", self.id, id);
                false
            }
        }
    }

    /// A horizontal drag began
    pub fn drag_start(&self) -> bool {
        if !self.drag_enabled() {
            return false;
        }

        {
            let mut inner = self.inner.write();
            let displayed = inner.spring.position();
            inner.state.is_dragging = true;
            inner.drag_base = displayed;
            inner.spring.hold(displayed);
        }

        trace!("Navigator {} drag started", self.id);
        self.pulse(HapticPulse::DragStart);
        true
    }

    /// The drag moved; `offset` is the horizontal travel since it began.
    /// Returns the displayed strip offset.
    pub fn drag_update(&self, offset: f32) -> f32 {
        let mut inner = self.inner.write();
        if !inner.state.is_dragging {
            return inner.spring.position();
        }

        let last_page = self.pages.len() - 1;
        let min = inner.rest_offset(last_page);
        let raw = inner.drag_base + offset;
        let displayed = rubber_band(raw, min, 0.0, self.config.gesture.drag_elastic);
        inner.spring.hold(displayed);
        displayed
    }

    /// The drag was released. Returns `None` when no drag was active.
    pub fn drag_end(&self, sample: GestureSample) -> Option<ReleaseOutcome> {
        let outcome = {
            let mut inner = self.inner.write();
            if !inner.state.is_dragging {
                return None;
            }
            inner.state.is_dragging = false;

            let outcome = resolve_release(
                inner.state.current_page,
                self.pages.len(),
                sample,
                inner.state.container_width,
                &self.config.gesture,
            );
            inner.state.current_page = outcome.to;
            let rest = inner.rest_offset(outcome.to);
            inner.spring.launch(rest, sample.velocity);
            outcome
        };

        debug!(
            "Navigator {} drag released at offset {:.1} velocity {:.1}: {} -> {}",
            self.id, sample.offset, sample.velocity, outcome.from, outcome.to
        );

        if outcome.changed() {
            self.page_changed(outcome.to);
        }
        Some(outcome)
    }

    /// Record a new container width. Returns whether it changed.
    pub fn set_container_width(&self, width: f32) -> bool {
        if !width.is_finite() || width <= 0.0 {
            return false;
        }

        let mut inner = self.inner.write();
        if (inner.state.container_width - width).abs() < WIDTH_EPSILON {
            return false;
        }

        let old = inner.state.container_width;
        inner.state.container_width = width;
        if !inner.state.is_dragging {
            let rest = inner.rest_offset(inner.state.current_page);
            if inner.spring.is_active() {
                inner.spring.retarget(rest);
            } else {
                inner.spring.hold(rest);
            }
        }
        drop(inner);

        debug!("Navigator {} container width {:.1} -> {:.1}", self.id, old, width);
        true
    }

    /// Advance the transition by `dt` seconds; returns the displayed offset
    pub fn tick(&self, dt: f32) -> f32 {
        let mut inner = self.inner.write();
        if inner.state.is_dragging {
            return inner.spring.position();
        }
        inner.spring.step(dt, &self.config.spring)
    }

    /// Add a subscriber; it is dropped from the list once its last `Arc` goes
    pub fn add_subscriber(&self, subscriber: Arc<dyn PageChangeSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    fn pulse(&self, pulse: HapticPulse) {
        let haptics = &self.config.haptics;
        if haptics.enabled {
            self.haptics.pulse(pulse, pulse.duration_ms(haptics));
        }
    }

    /// Runs with no lock held so observers may call back into the navigator
    fn page_changed(&self, index: usize) {
        let page_id = self.pages.id_at(index);
        self.pulse(HapticPulse::PageChange);
        debug!("Navigator {} moved to page {} ({})", self.id, index, page_id);

        if let Some(callback) = &self.on_page_change {
            callback(index, page_id);
        }

        let live: Vec<Arc<dyn PageChangeSubscriber>> = {
            let mut subscribers = self.subscribers.write();
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for subscriber in live {
            subscriber.on_page_change(index, page_id);
        }
    }
}

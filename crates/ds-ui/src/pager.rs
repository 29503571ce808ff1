//! Horizontally paged swipe strip
//! Renders every page side by side and lets the user flip between them by
//! dragging, by clicking the indicator or through the navigation handle.

use std::sync::Arc;

use ds_core::{
    GestureTracker, MountGuard, NavigationHandle, NavigatorError, PageId, SwipeNavigator,
    TrackerEvent,
};
use egui::{Layout, Pos2, Rect, Response, Sense, Ui, Vec2};
use tracing::trace;

use crate::indicator::{PageIndicator, PageIndicatorStyle};
use crate::widget_utils::WidgetId;

/// Swipe pager widget
pub struct SwipePager {
    /// Navigation logic shared with the handle
    navigator: Arc<SwipeNavigator>,

    /// Axis lock for raw pointer input
    tracker: GestureTracker,

    /// Marker row
    indicator: PageIndicator,

    /// Draw the indicator at all
    show_indicator: bool,

    /// Keeps the navigator reachable through the handle while the pager lives
    mount: MountGuard,
}

impl SwipePager {
    /// Create a pager and mount its navigator on `handle`
    pub fn new(
        navigator: Arc<SwipeNavigator>,
        handle: &NavigationHandle,
    ) -> Result<Self, NavigatorError> {
        let mount = handle.mount(&navigator)?;
        let tracker = GestureTracker::new(navigator.config().gesture.axis_lock_slop);

        Ok(Self {
            navigator,
            tracker,
            indicator: PageIndicator::default(),
            show_indicator: true,
            mount,
        })
    }

    /// Set indicator style
    pub fn with_indicator_style(mut self, style: PageIndicatorStyle) -> Self {
        self.indicator = PageIndicator::new(style);
        self
    }

    pub fn with_indicator(mut self, show: bool) -> Self {
        self.show_indicator = show;
        self
    }

    pub fn navigator(&self) -> &Arc<SwipeNavigator> {
        &self.navigator
    }

    pub fn handle(&self) -> &NavigationHandle {
        self.mount.handle()
    }

    /// Show the pager filling the available space.
    ///
    /// `add_page` is called for every page at least partly in view.
    pub fn show<F>(&mut self, ui: &mut Ui, mut add_page: F) -> Response
    where
        F: FnMut(&mut Ui, usize, PageId),
    {
        let size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        // Layout may have changed since last frame
        self.navigator.set_container_width(rect.width());

        self.handle_pointer(ui, rect);

        let dt = ui.input(|i| i.stable_dt);
        let offset = self.navigator.tick(dt);

        for index in 0..self.navigator.page_count() {
            let page = page_rect(rect, index, offset);
            if page.intersect(rect).width() <= 0.0 {
                continue;
            }

            let page_id = self.navigator.pages().id_at(index);
            let mut child = ui.child_ui(page, Layout::top_down(egui::Align::Min));
            child.set_clip_rect(page.intersect(rect));
            let id = WidgetId::new("swipe_pager")
                .with(self.navigator.id())
                .index(index)
                .id();
            child.push_id(id, |ui| add_page(ui, index, page_id));
        }

        if self.show_indicator {
            self.indicator.ui(ui, rect, &self.navigator);
        }

        if self.navigator.is_animating() || self.tracker.is_horizontal() {
            ui.ctx().request_repaint();
        }

        response
    }

    fn drag_id(&self) -> egui::Id {
        WidgetId::new("swipe_pager").with(self.navigator.id()).id()
    }

    /// Feed raw pointer input through the axis lock into the navigator
    fn handle_pointer(&mut self, ui: &Ui, rect: Rect) {
        if !self.navigator.drag_enabled() {
            self.tracker.cancel();
            return;
        }

        let (pressed, down, pos, velocity) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.interact_pos(),
                i.pointer.velocity(),
            )
        });

        if pressed {
            if let Some(pos) = pos.filter(|p| rect.contains(*p)) {
                self.tracker.press(pos.x, pos.y);
            }
        }

        if !self.tracker.is_tracking() {
            return;
        }

        if !down {
            if let TrackerEvent::Released(sample) = self.tracker.release(velocity.x) {
                self.navigator.drag_end(sample);
            }
            return;
        }

        if let Some(pos) = pos {
            match self.tracker.pointer_moved(pos.x, pos.y) {
                TrackerEvent::DragStarted { offset } => {
                    self.navigator.drag_start();
                    self.navigator.drag_update(offset);
                }
                TrackerEvent::Dragged { offset } => {
                    let displayed = self.navigator.drag_update(offset);
                    trace!("drag offset {:.1} displayed {:.1}", offset, displayed);
                }
                _ => {}
            }
        }

        // A horizontal swipe owns the pointer so page scroll areas don't follow it
        if self.tracker.is_horizontal() {
            let id = self.drag_id();
            ui.memory_mut(|mem| mem.set_dragged_id(id));
        }
    }
}

/// Rect of page `index` when the strip is translated by `offset`
pub fn page_rect(container: Rect, index: usize, offset: f32) -> Rect {
    let x = container.left() + index as f32 * container.width() + offset;
    Rect::from_min_size(Pos2::new(x, container.top()), Vec2::new(container.width(), container.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_input::{press, release, Screen};
    use egui::{Event, ScrollArea};
    use parking_lot::Mutex;

    fn container() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(400.0, 700.0))
    }

    #[test]
    fn test_page_rects_at_rest() {
        let rect = page_rect(container(), 1, -400.0);
        assert_eq!(rect, container());
        assert!(!page_rect(container(), 0, -400.0).intersects(rect.shrink(1.0)));
        assert_eq!(page_rect(container(), 2, -400.0).left(), 410.0);
    }

    #[test]
    fn test_neighbour_visible_mid_drag() {
        let next = page_rect(container(), 2, -500.0);
        assert!(next.intersects(container()));
        assert_eq!(next.left(), 310.0);
    }

    #[test]
    fn test_pager_mounts_and_unmounts() {
        let handle = NavigationHandle::new();
        let navigator = Arc::new(SwipeNavigator::builder(3).build().unwrap());
        let pager = SwipePager::new(navigator.clone(), &handle).unwrap();
        assert_eq!(handle.mounted_id(), Some(navigator.id()));

        let other = Arc::new(SwipeNavigator::builder(2).build().unwrap());
        assert!(SwipePager::new(other, &handle).is_err());

        drop(pager);
        assert!(!handle.is_mounted());
        assert_eq!(handle.current_page(), 1);
    }

    type Calls = Arc<Mutex<Vec<(usize, PageId)>>>;

    /// A three-page pager on page 1 whose pages are tall scroll areas
    struct Swipe {
        screen: Screen,
        pager: SwipePager,
        navigator: Arc<SwipeNavigator>,
        calls: Calls,
        _handle: NavigationHandle,
    }

    impl Swipe {
        fn new() -> Self {
            let calls: Calls = Arc::new(Mutex::new(Vec::new()));
            let sink = calls.clone();
            let navigator = Arc::new(
                SwipeNavigator::builder(3)
                    .on_page_change(move |index, id| sink.lock().push((index, id)))
                    .build()
                    .unwrap(),
            );
            let handle = NavigationHandle::new();
            let pager = SwipePager::new(navigator.clone(), &handle).unwrap();
            Self {
                screen: Screen::default(),
                pager,
                navigator,
                calls,
                _handle: handle,
            }
        }

        /// One frame; returns the scroll offset of page 1's content
        fn frame(&mut self, dt: f64, events: Vec<Event>) -> f32 {
            let pager = &mut self.pager;
            let mut scroll = 0.0;
            self.screen.frame(dt, events, |ui| {
                pager.show(ui, |ui, index, _| {
                    let output = ScrollArea::vertical().show(ui, |ui| {
                        for line in 0..100 {
                            ui.label(format!("line {}", line));
                        }
                    });
                    if index == 1 {
                        scroll = output.state.offset.y;
                    }
                });
            });
            scroll
        }

        /// Press at `from`, move to `to` in `steps` frames `dt` apart, release.
        /// Returns the largest scroll offset seen on page 1.
        fn drag(&mut self, from: Pos2, to: Pos2, steps: usize, dt: f64) -> f32 {
            let mut scroll = self.frame(1.0 / 60.0, vec![Event::PointerMoved(from)]);
            scroll = scroll.max(self.frame(dt, vec![press(from)]));
            for step in 1..=steps {
                let pos = from + (to - from) * (step as f32 / steps as f32);
                scroll = scroll.max(self.frame(dt, vec![Event::PointerMoved(pos)]));
            }
            scroll.max(self.frame(dt, vec![release(to)]))
        }

        fn calls(&self) -> Vec<(usize, PageId)> {
            self.calls.lock().clone()
        }
    }

    #[test]
    fn test_slow_long_drag_left_goes_next() {
        let mut swipe = Swipe::new();
        swipe.drag(Pos2::new(300.0, 400.0), Pos2::new(50.0, 400.0), 10, 0.1);

        assert_eq!(swipe.navigator.current_page(), 2);
        assert!(!swipe.navigator.is_dragging());
        assert_eq!(swipe.calls(), vec![(2, PageId::Discover)]);
    }

    #[test]
    fn test_short_fast_flick_left_goes_next() {
        let mut swipe = Swipe::new();
        // 40 points in 32 ms: under the distance threshold, over the velocity one
        swipe.drag(Pos2::new(300.0, 400.0), Pos2::new(260.0, 400.0), 4, 0.008);

        assert_eq!(swipe.navigator.current_page(), 2);
        assert_eq!(swipe.calls(), vec![(2, PageId::Discover)]);
    }

    #[test]
    fn test_short_slow_drag_springs_back() {
        let mut swipe = Swipe::new();
        swipe.drag(Pos2::new(300.0, 400.0), Pos2::new(270.0, 400.0), 6, 0.1);

        assert_eq!(swipe.navigator.current_page(), 1);
        assert!(swipe.calls().is_empty());
    }

    #[test]
    fn test_vertical_drag_scrolls_page_and_keeps_it() {
        let mut swipe = Swipe::new();
        let scroll = swipe.drag(Pos2::new(200.0, 600.0), Pos2::new(215.0, 300.0), 10, 1.0 / 60.0);

        assert_eq!(swipe.navigator.current_page(), 1);
        assert!(swipe.calls().is_empty());
        assert!(scroll > 100.0, "page content should scroll, got {}", scroll);
    }

    #[test]
    fn test_horizontal_swipe_does_not_scroll_page() {
        let mut swipe = Swipe::new();
        let scroll = swipe.drag(Pos2::new(300.0, 600.0), Pos2::new(100.0, 540.0), 10, 1.0 / 60.0);

        assert_eq!(swipe.navigator.current_page(), 2);
        assert_eq!(scroll, 0.0);
    }
}

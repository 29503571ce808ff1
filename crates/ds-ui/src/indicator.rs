//! Page indicator drawn over the bottom of the swipe strip
//!
//! One marker per page; the current page's marker is elongated. Clicking a
//! marker jumps straight to that page.

use ds_core::SwipeNavigator;
use egui::{Color32, Pos2, Rect, Rounding, Sense, Ui, Vec2};

use crate::widget_utils::WidgetId;

/// Indicator geometry and colors
#[derive(Debug, Clone)]
pub struct PageIndicatorStyle {
    /// Diameter of an inactive marker
    pub dot_size: f32,

    /// Width of the current page's marker
    pub active_width: f32,

    /// Gap between markers
    pub spacing: f32,

    /// Distance from the bottom of the pager
    pub bottom_margin: f32,

    /// Extra clickable margin around each marker
    pub hit_padding: f32,

    pub active_color: Color32,
    pub inactive_color: Color32,
    pub hover_color: Color32,
}

impl Default for PageIndicatorStyle {
    fn default() -> Self {
        Self {
            dot_size: 8.0,
            active_width: 24.0,
            spacing: 8.0,
            bottom_margin: 16.0,
            hit_padding: 6.0,
            active_color: crate::theme::accent_color(),
            inactive_color: Color32::from_gray(90),
            hover_color: Color32::from_gray(150),
        }
    }
}

/// Lay out `count` markers centred horizontally in `area`, bottom aligned
pub fn marker_rects(area: Rect, count: usize, active: usize, style: &PageIndicatorStyle) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let total = (count - 1) as f32 * (style.dot_size + style.spacing) + style.active_width;
    let mut x = area.center().x - total / 2.0;
    let top = area.bottom() - style.bottom_margin - style.dot_size;

    (0..count)
        .map(|i| {
            let width = if i == active { style.active_width } else { style.dot_size };
            let rect = Rect::from_min_size(Pos2::new(x, top), Vec2::new(width, style.dot_size));
            x += width + style.spacing;
            rect
        })
        .collect()
}

/// Page indicator widget
#[derive(Debug, Clone, Default)]
pub struct PageIndicator {
    style: PageIndicatorStyle,
}

impl PageIndicator {
    pub fn new(style: PageIndicatorStyle) -> Self {
        Self { style }
    }

    /// Draw the markers inside `area`; returns the marker that was clicked
    pub fn ui(&self, ui: &mut Ui, area: Rect, navigator: &SwipeNavigator) -> Option<usize> {
        let count = navigator.page_count();
        let active = navigator.current_page();
        let interactive = count > 1;
        let mut clicked = None;

        for (i, rect) in marker_rects(area, count, active, &self.style).into_iter().enumerate() {
            let mut color = if i == active {
                self.style.active_color
            } else {
                self.style.inactive_color
            };

            if interactive {
                let id = WidgetId::new("page_marker").with(navigator.id()).index(i).id();
                let response = ui.interact(rect.expand(self.style.hit_padding), id, Sense::click());
                if response.hovered() && i != active {
                    color = self.style.hover_color;
                }
                if response
                    .on_hover_text(navigator.pages().id_at(i).title())
                    .clicked()
                {
                    clicked = Some(i);
                }
            }

            ui.painter()
                .rect_filled(rect, Rounding::same(self.style.dot_size / 2.0), color);
        }

        if let Some(index) = clicked {
            navigator.navigate_to(index);
        }
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_input::{press, release, Screen};
    use ds_core::PageId;
    use egui::Event;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn area() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 800.0))
    }

    #[test]
    fn test_active_marker_is_elongated() {
        let style = PageIndicatorStyle::default();
        let rects = marker_rects(area(), 4, 1, &style);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[1].width(), style.active_width);
        for i in [0, 2, 3] {
            assert_eq!(rects[i].width(), style.dot_size);
        }
    }

    #[test]
    fn test_markers_are_centred_and_ordered() {
        let style = PageIndicatorStyle::default();
        let rects = marker_rects(area(), 3, 0, &style);
        let left = rects[0].left();
        let right = rects[2].right();
        assert!(((left + right) / 2.0 - 200.0).abs() < 1e-3);
        assert!(rects[0].right() < rects[1].left());
        assert!(rects[1].right() < rects[2].left());
        assert_eq!(rects[0].bottom(), 800.0 - style.bottom_margin);
    }

    #[test]
    fn test_single_marker() {
        let style = PageIndicatorStyle::default();
        let rects = marker_rects(area(), 1, 0, &style);
        assert_eq!(rects.len(), 1);
        assert!((rects[0].center().x - 200.0).abs() < 1e-3);
        assert!(marker_rects(area(), 0, 0, &style).is_empty());
    }

    /// Hover, press and release on `target`; returns what `ui` reported each frame
    fn click(navigator: &SwipeNavigator, target: Pos2) -> Vec<Option<usize>> {
        let indicator = PageIndicator::default();
        let mut screen = Screen::default();
        let mut reported = Vec::new();
        for events in [
            vec![Event::PointerMoved(target)],
            vec![press(target)],
            vec![release(target)],
        ] {
            screen.frame(1.0 / 60.0, events, |ui| {
                reported.push(indicator.ui(ui, Screen::rect(), navigator));
            });
        }
        reported
    }

    #[test]
    fn test_clicking_a_marker_navigates() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let navigator = SwipeNavigator::builder(3)
            .initial_page(0)
            .container_width(400.0)
            .on_page_change(move |index, id| sink.lock().push((index, id)))
            .build()
            .unwrap();

        let style = PageIndicatorStyle::default();
        let target = marker_rects(Screen::rect(), 3, 0, &style)[2].center();
        let reported = click(&navigator, target);

        assert_eq!(reported, vec![None, None, Some(2)]);
        assert_eq!(navigator.current_page(), 2);
        assert_eq!(calls.lock().as_slice(), &[(2, PageId::Discover)]);
    }

    #[test]
    fn test_single_marker_is_not_clickable() {
        let navigator = SwipeNavigator::builder(1).container_width(400.0).build().unwrap();
        let style = PageIndicatorStyle::default();
        let target = marker_rects(Screen::rect(), 1, 0, &style)[0].center();

        let reported = click(&navigator, target);

        assert!(reported.iter().all(Option::is_none));
        assert_eq!(navigator.current_page(), 0);
    }
}

use ds_core::{NavigationHandle, PageId};
use egui::{Align, Button, CentralPanel, Context, Frame, Layout, RichText, TopBottomPanel, Ui};

use crate::icons;
use crate::pager::SwipePager;

/// Shell configuration
pub struct ShellConfig {
    pub show_header: bool,
    pub header_height: f32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_header: true,
            header_height: 52.0,
        }
    }
}

/// Render the mobile shell: header bar on top, swipe pager filling the rest
pub fn mobile_shell<F>(
    ctx: &Context,
    config: &ShellConfig,
    handle: &NavigationHandle,
    pager: &mut SwipePager,
    add_page: F,
) where
    F: FnMut(&mut Ui, usize, PageId),
{
    if config.show_header {
        TopBottomPanel::top("deepstack_header")
            .exact_height(config.header_height)
            .show(ctx, |ui| header_bar(ui, handle));
    }

    CentralPanel::default()
        .frame(Frame::none().fill(ctx.style().visuals.extreme_bg_color))
        .show(ctx, |ui| {
            pager.show(ui, add_page);
        });
}

/// Header with previous/next arrows around the current page title.
///
/// Only talks to the pager through the handle, so it works from anywhere.
pub fn header_bar(ui: &mut Ui, handle: &NavigationHandle) {
    let current = handle.current_page();
    let count = handle.page_count().unwrap_or(0);
    let mounted = handle.is_mounted();

    ui.horizontal_centered(|ui| {
        let back = ui.add_enabled(mounted && current > 0, Button::new(icons::PREVIOUS));
        if back.on_hover_text("Previous page").clicked() {
            handle.navigate_by(-1);
        }

        ui.label(RichText::new(handle.page_id().title()).heading().strong());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let forward = ui.add_enabled(mounted && current + 1 < count, Button::new(icons::NEXT));
            if forward.on_hover_text("Next page").clicked() {
                handle.navigate_by(1);
            }

            if count > 0 {
                ui.label(
                    RichText::new(format!("{} / {}", current + 1, count))
                        .color(crate::theme::muted_text_color()),
                );
            }
        });
    });
}

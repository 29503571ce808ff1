//! User interface components for the DeepStack mobile client
//!
//! This crate provides the egui-based swipe pager, its page indicator and
//! the surrounding shell.

pub mod indicator;
pub mod pager;
pub mod shell;
pub mod theme;
pub mod widget_utils;

#[cfg(test)]
mod test_input;

/// Re-export commonly used types
pub use indicator::{PageIndicator, PageIndicatorStyle};
pub use pager::SwipePager;
pub use shell::{header_bar, mobile_shell, ShellConfig};
pub use theme::{apply_theme, Theme};
pub use widget_utils::{page_widget_id, ScrollAreaExt, WidgetId};

// Common icon definitions
pub mod icons {
    pub const PREVIOUS: &str = "◀";
    pub const NEXT: &str = "▶";
    pub const TOOLS: &str = "🛠";
    pub const CHAT: &str = "💬";
    pub const DISCOVER: &str = "🔭";
    pub const PREDICTIONS: &str = "📈";

    /// Icon for a page
    pub fn for_page(page: ds_core::PageId) -> &'static str {
        match page {
            ds_core::PageId::Tools => TOOLS,
            ds_core::PageId::Chat => CHAT,
            ds_core::PageId::Discover => DISCOVER,
            ds_core::PageId::Predictions => PREDICTIONS,
        }
    }
}

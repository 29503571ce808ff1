//! Widget id helpers
//!
//! Pages are laid out side by side and may contain the same widgets, so every
//! id is built from the navigator id and the page index to stay unique across
//! the strip.

use egui::{Id, ScrollArea};
use std::fmt::Display;

/// Widget ID builder that ensures unique IDs by combining multiple components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    /// Create a new widget ID builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add a page or marker index
    pub fn index(self, idx: usize) -> Self {
        self.with(format!("idx_{}", idx))
    }

    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Extension trait for ScrollArea to easily add unique IDs
pub trait ScrollAreaExt {
    fn id_builder(self, builder: WidgetId) -> Self;
}

impl ScrollAreaExt for ScrollArea {
    fn id_builder(self, builder: WidgetId) -> Self {
        self.id_source(builder.build())
    }
}

/// Id for a widget that appears once per page
pub fn page_widget_id(base: impl Display, page: usize) -> WidgetId {
    WidgetId::new(base).with("page").index(page)
}

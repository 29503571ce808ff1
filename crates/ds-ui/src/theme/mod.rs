use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;
use tracing::debug;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
    /// Multiplier for every font size; phones want larger text
    pub text_scale: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "DeepStack Dark".to_string(),
            dark_mode: true,
            text_scale: 1.0,
        }
    }
}

/// Apply the DeepStack mobile theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    debug!("Applying theme {} (scale {:.2})", theme.name, theme.text_scale);

    let mut style = Style::default();
    let mut visuals = if theme.dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    if theme.dark_mode {
        let bg_color = Color32::from_rgb(12, 14, 18);
        let panel_bg = Color32::from_rgb(18, 21, 27);
        let widget_bg = Color32::from_rgb(28, 32, 40);
        let hover_color = Color32::from_rgb(38, 44, 55);
        let text_color = Color32::from_rgb(225, 228, 235);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());
    }

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(10.0);
    }

    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    // Finger-sized targets
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 10.0);
    style.spacing.interact_size.y = 40.0;

    let scale = theme.text_scale;
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0 * scale, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0 * scale, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(15.0 * scale, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0 * scale, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0 * scale, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Accent used for the active page marker and selections
pub fn accent_color() -> Color32 {
    Color32::from_rgb(64, 156, 255)
}

/// Color for gains
pub fn positive_color() -> Color32 {
    Color32::from_rgb(38, 200, 120)
}

/// Color for losses
pub fn negative_color() -> Color32 {
    Color32::from_rgb(235, 77, 75)
}

pub fn muted_text_color() -> Color32 {
    Color32::from_rgb(140, 146, 160)
}

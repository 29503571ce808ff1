//! Placeholder page contents for the demo shell
//!
//! Real pages are backed by chat, market data and prediction-market services
//! that this client only consumes; the demo shows static samples so the
//! swipe strip has something to move.

use std::sync::Arc;

use ds_core::{NavigationHandle, PageId};
use ds_ui::{icons, page_widget_id, theme, ScrollAreaExt};
use egui::{ProgressBar, RichText, ScrollArea, Ui};
use parking_lot::Mutex;

/// Most page changes kept in the history list
const HISTORY_LIMIT: usize = 50;

/// Page changes recorded from the navigator callback
#[derive(Default)]
pub struct PageHistory {
    visits: Mutex<Vec<(usize, PageId)>>,
}

impl PageHistory {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record(&self, index: usize, page: PageId) {
        let mut visits = self.visits.lock();
        visits.push((index, page));
        if visits.len() > HISTORY_LIMIT {
            let excess = visits.len() - HISTORY_LIMIT;
            visits.drain(..excess);
        }
    }

    /// Newest first
    pub fn recent(&self) -> Vec<(usize, PageId)> {
        self.visits.lock().iter().rev().copied().collect()
    }
}

struct Quote {
    symbol: &'static str,
    price: f64,
    change_pct: f64,
}

const WATCHLIST: &[Quote] = &[
    Quote { symbol: "AAPL", price: 228.14, change_pct: 0.84 },
    Quote { symbol: "NVDA", price: 131.60, change_pct: -1.92 },
    Quote { symbol: "MSFT", price: 417.46, change_pct: 0.21 },
    Quote { symbol: "TSLA", price: 248.50, change_pct: 3.05 },
    Quote { symbol: "AMZN", price: 186.51, change_pct: -0.47 },
    Quote { symbol: "SPY", price: 573.17, change_pct: 0.12 },
];

const MARKETS: &[(&str, f32)] = &[
    ("Fed cuts rates at next meeting", 0.72),
    ("S&P 500 closes year above 6000", 0.41),
    ("BTC above $100k by March", 0.33),
    ("Recession declared this year", 0.14),
];

/// Draw page `index`
pub fn page_ui(ui: &mut Ui, index: usize, page: PageId, handle: &NavigationHandle, history: &PageHistory) {
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.heading(format!("{} {}", icons::for_page(page), page.title()));
    });
    ui.add_space(8.0);

    ScrollArea::vertical()
        .id_builder(page_widget_id("page_scroll", index))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(4.0);
            match page {
                PageId::Tools => tools_page(ui, history),
                PageId::Chat => chat_page(ui, handle),
                PageId::Discover => discover_page(ui),
                PageId::Predictions => predictions_page(ui),
            }
            // Room for the page indicator
            ui.add_space(48.0);
        });
}

fn tools_page(ui: &mut Ui, history: &PageHistory) {
    ui.label(RichText::new("Navigation history").strong());
    let recent = history.recent();
    if recent.is_empty() {
        ui.label(RichText::new("Swipe to another page to start a history.").color(theme::muted_text_color()));
    }
    for (index, page) in recent {
        ui.label(format!("{} {}  (page {})", icons::for_page(page), page.title(), index + 1));
    }
}

fn chat_page(ui: &mut Ui, handle: &NavigationHandle) {
    ui.label("Ask about a ticker, a thesis or a market.");
    ui.add_space(8.0);
    ui.label(RichText::new("Shortcuts").color(theme::muted_text_color()));
    ui.horizontal_wrapped(|ui| {
        for target in [PageId::Discover, PageId::Predictions, PageId::Tools] {
            let label = format!("{} {}", icons::for_page(target), target.title());
            if ui.button(label).clicked() {
                handle.navigate_to_page(target);
            }
        }
    });
    ui.add_space(12.0);
    for line in 0..30 {
        ui.label(RichText::new(format!("Earlier message {}", line + 1)).color(theme::muted_text_color()));
    }
}

fn discover_page(ui: &mut Ui) {
    for quote in WATCHLIST {
        ui.horizontal(|ui| {
            ui.label(RichText::new(quote.symbol).strong().monospace());
            ui.label(format!("{:.2}", quote.price));
            let color = if quote.change_pct >= 0.0 {
                theme::positive_color()
            } else {
                theme::negative_color()
            };
            ui.label(RichText::new(format!("{:+.2}%", quote.change_pct)).color(color));
        });
        ui.separator();
    }
}

fn predictions_page(ui: &mut Ui) {
    for (question, yes) in MARKETS {
        ui.label(*question);
        ui.add(ProgressBar::new(*yes).text(format!("Yes {:.0}%", yes * 100.0)));
        ui.add_space(6.0);
    }
}

//! DeepStack mobile shell entry point

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ds_core::{NavigationHandle, PageId, SwipeConfig, SwipeNavigator, TracingHaptics};
use ds_ui::{ShellConfig, SwipePager, Theme};

mod pages;

use pages::PageHistory;

/// Environment variable naming an optional swipe config JSON file
const CONFIG_ENV: &str = "DEEPSTACK_SWIPE_CONFIG";

/// Main application state
struct DeepStackMobileApp {
    /// Handle shared with the header and page shortcuts
    handle: NavigationHandle,

    /// Swipe strip, owns the mount on `handle`
    pager: SwipePager,

    /// Shell layout
    shell: ShellConfig,

    /// Page changes seen by the navigator callback
    history: Arc<PageHistory>,
}

impl DeepStackMobileApp {
    fn new(config: SwipeConfig) -> Result<Self> {
        let handle = NavigationHandle::new();
        let history = PageHistory::shared();

        let recorder = history.clone();
        let navigator = SwipeNavigator::builder(PageId::DEFAULT_ORDER.len())
            .page_ids(PageId::DEFAULT_ORDER.to_vec())
            .config(config)
            .haptics(Arc::new(TracingHaptics))
            .on_page_change(move |index, page| {
                info!("Page changed to {} ({})", index, page);
                recorder.record(index, page);
            })
            .build()?;

        let pager = SwipePager::new(Arc::new(navigator), &handle)?;

        Ok(Self {
            handle,
            pager,
            shell: ShellConfig::default(),
            history,
        })
    }
}

impl eframe::App for DeepStackMobileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let handle = self.handle.clone();
        let history = self.history.clone();

        ds_ui::mobile_shell(ctx, &self.shell, &self.handle, &mut self.pager, |ui, index, page| {
            pages::page_ui(ui, index, page, &handle, &history);
        });
    }
}

/// Load the swipe config named by `DEEPSTACK_SWIPE_CONFIG`, falling back to defaults
fn load_swipe_config() -> SwipeConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return SwipeConfig::default();
    };

    match SwipeConfig::load(&path) {
        Ok(config) => {
            info!("Using swipe config from {}", path);
            config
        }
        Err(e) => {
            warn!("Ignoring swipe config {}: {}", path, e);
            SwipeConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting DeepStack mobile shell");

    let app = DeepStackMobileApp::new(load_swipe_config())?;

    // Phone-sized window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 844.0])
            .with_min_inner_size([320.0, 480.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "DeepStack",
        options,
        Box::new(move |cc| {
            ds_ui::apply_theme(&cc.egui_ctx, &Theme::default());
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

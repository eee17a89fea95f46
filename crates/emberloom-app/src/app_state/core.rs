//! EmberloomApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use url::Url;
use winit::window::Window;

use emberloom_common::ErrorJournal;
use emberloom_config::EmberloomConfig;
use emberloom_loader::{LoadStatus, StatusScreen, StatusStream, WebResourceLoader};
use emberloom_platform::MonitorHandle;
use emberloom_webview::{GameView, OverlayView};

use crate::boot::BootSequence;

/// Top-level application state.
pub struct EmberloomApp {
    pub(super) config: EmberloomConfig,
    /// Target of every load in this run.
    pub(super) endpoint: Url,
    pub(super) boot: BootSequence,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) overlay: Option<OverlayView>,
    pub(super) game_view: Option<GameView>,

    // Loading
    pub(super) loader: Option<WebResourceLoader>,
    pub(super) statuses: Option<StatusStream>,
    pub(super) status: LoadStatus,
    pub(super) screen: StatusScreen,
    pub(super) journal: ErrorJournal,

    // Connectivity
    pub(super) monitor: Option<MonitorHandle>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl EmberloomApp {
    pub fn new(config: EmberloomConfig, endpoint: Url, skip_splash: bool) -> Self {
        let mut boot = BootSequence::new(&config.startup.splash);
        if skip_splash {
            boot.skip();
        }
        let status = LoadStatus::Standby;
        Self {
            config,
            endpoint,
            boot,
            window: None,
            overlay: None,
            game_view: None,
            loader: None,
            statuses: None,
            screen: StatusScreen::from(&status),
            status,
            journal: ErrorJournal::default(),
            monitor: None,
            tokio_runtime: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}

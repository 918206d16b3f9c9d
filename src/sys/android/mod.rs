use std::sync::OnceLock;

use android_activity::{AndroidApp, MainEvent};

use crate::{Foreground, ForegroundId, ScreenError, ScreenProperties, ScreenProvider};

// `DisplayMetrics.DENSITY_DEFAULT`, the density at which one pixel is one logical unit.
const BASELINE_DPI: f64 = 160.0;

/// There is only one native activity per process.
pub const ACTIVITY_ID: ForegroundId = 0;

static APP: OnceLock<AndroidApp> = OnceLock::new();

/// Hand the application to the built-in provider.
///
/// This must be called from `android_main` before the first query, calling it again has no
/// effect.
pub fn init(app: &AndroidApp) {
    if APP.set(app.clone()).is_err() {
        log::debug!("screen provider was already initialized");
    }
}

/// Feed an activity lifecycle event into `foreground`.
pub fn track_lifecycle(foreground: &Foreground, event: &MainEvent<'_>) {
    match event {
        MainEvent::InitWindow { .. } => foreground.created(ACTIVITY_ID),
        MainEvent::Start => foreground.started(ACTIVITY_ID),
        MainEvent::Resume { .. } => foreground.resumed(ACTIVITY_ID),
        MainEvent::Pause => foreground.paused(ACTIVITY_ID),
        MainEvent::Stop => foreground.stopped(ACTIVITY_ID),
        MainEvent::Destroy => foreground.destroyed(ACTIVITY_ID),
        _ => {}
    }
}

/// Screen metrics read from the activity's configuration.
#[derive(Debug, Clone)]
pub struct PlatformScreen {
    app: AndroidApp,
}

impl PlatformScreen {
    /// Create a provider for the application passed to [`init`].
    pub fn new() -> Result<PlatformScreen, ScreenError> {
        APP.get()
            .cloned()
            .map(PlatformScreen::with_app)
            .ok_or(ScreenError::Uninitialized)
    }

    pub fn with_app(app: AndroidApp) -> PlatformScreen {
        PlatformScreen { app }
    }
}

impl ScreenProvider for PlatformScreen {
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        let config = self.app.config();
        let dpi = config.density().ok_or(ScreenError::MissingDensity)?;
        let density = f64::from(dpi) / BASELINE_DPI;

        // The configuration describes the display whether or not the activity has a window yet,
        // unlike `native_window`, which is only the size of the surface.
        ScreenProperties::checked(
            to_pixels(config.screen_width_dp(), density),
            to_pixels(config.screen_height_dp(), density),
            density,
        )
    }
}

// `Configuration.SCREEN_WIDTH_DP_UNDEFINED` is 0, which maps to an unknown size as well.
fn to_pixels(dp: Option<i32>, density: f64) -> i32 {
    match dp {
        Some(dp) if dp > 0 => (f64::from(dp) * density).round() as i32,
        _ => 0,
    }
}

use objc2::rc::Id;
use objc2_app_kit::NSScreen;
use objc2_foundation::MainThreadMarker;

use crate::{ScreenError, ScreenProperties, ScreenProvider};

/// Screen metrics of the main `NSScreen`.
///
/// AppKit may only be used from the main thread, so this type can only be created (and used)
/// there.
#[derive(Debug, Clone, Copy)]
pub struct PlatformScreen {
    mtm: MainThreadMarker,
}

impl PlatformScreen {
    pub fn new() -> Result<PlatformScreen, ScreenError> {
        MainThreadMarker::new()
            .map(|mtm| PlatformScreen { mtm })
            .ok_or(ScreenError::NotMainThread)
    }
}

impl ScreenProvider for PlatformScreen {
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        // NOTE: the "main" screen is the one containing the key window, which is what a user of
        //       this library is looking at. It's None when running headless.
        let screen: Id<NSScreen> =
            unsafe { NSScreen::mainScreen(self.mtm) }.ok_or(ScreenError::MissingDensity)?;
        let scale = unsafe { screen.backingScaleFactor() };
        // The frame is in points, convert it to pixels.
        let frame = unsafe { screen.frame() };

        ScreenProperties::checked(
            (frame.size.width * scale) as i32,
            (frame.size.height * scale) as i32,
            scale,
        )
    }
}

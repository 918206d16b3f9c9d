use objc2::rc::Id;
use objc2_foundation::MainThreadMarker;
use objc2_ui_kit::UIScreen;

use crate::{ScreenError, ScreenProperties, ScreenProvider};

/// Screen metrics of `UIScreen.mainScreen`.
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
        let screen: Id<UIScreen> = unsafe { UIScreen::mainScreen(self.mtm) };
        let scale = unsafe { screen.scale() };
        // Bounds are in points and follow the current interface orientation.
        let bounds = unsafe { screen.bounds() };

        ScreenProperties::checked(
            (bounds.size.width * scale) as i32,
            (bounds.size.height * scale) as i32,
            scale,
        )
    }
}

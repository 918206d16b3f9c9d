use std::{ffi::OsStr, iter, os::windows::ffi::OsStrExt, thread};

use windows_sys::Win32::{
    Graphics::Gdi::{
        GetDC, GetDeviceCaps, ReleaseDC, DESKTOPHORZRES, DESKTOPVERTRES, GET_DEVICE_CAPS_INDEX,
        HDC, HORZRES, LOGPIXELSX,
    },
    UI::WindowsAndMessaging::{MessageBoxW, MB_ICONINFORMATION, MB_OK},
};

use crate::{Message, ScreenError, ScreenProperties, ScreenProvider};

// Logical pixels per inch at 100% scaling.
const BASELINE_DPI: f64 = 96.0;

/// Screen metrics of the primary monitor, read from the desktop device context.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformScreen {}

impl PlatformScreen {
    pub fn new() -> Result<PlatformScreen, ScreenError> {
        Ok(PlatformScreen {})
    }
}

impl ScreenProvider for PlatformScreen {
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        let dc = DesktopDc::acquire()?;

        // NOTE: DESKTOPHORZRES/DESKTOPVERTRES report the real resolution even when the process
        //       isn't DPI aware, while HORZRES is virtualized to the scaled resolution. They may
        //       still report 0 on some remote sessions, in which case the size is left unknown.
        let pixel_width = dc.caps(DESKTOPHORZRES).max(0);
        let pixel_height = dc.caps(DESKTOPVERTRES).max(0);
        let density = density(pixel_width, dc.caps(HORZRES), dc.caps(LOGPIXELSX))
            .ok_or(ScreenError::MissingDensity)?;

        ScreenProperties::checked(pixel_width, pixel_height, density)
    }

    fn present(&self, message: &Message) -> Result<(), ScreenError> {
        let text = to_wide(&message.text);
        let title = to_wide(&message.title);

        // MessageBoxW runs its own modal loop until dismissed, so give it a thread of its own.
        thread::Builder::new()
            .name("screenprops-message".to_owned())
            .spawn(move || unsafe {
                MessageBoxW(0, text.as_ptr(), title.as_ptr(), MB_OK | MB_ICONINFORMATION);
            })?;
        Ok(())
    }
}

// LOGPIXELSX is stuck at 96 for processes without a DPI awareness manifest (most Rust binaries),
// so the ratio between physical and virtualized resolution is preferred.
fn density(physical_width: i32, logical_width: i32, dpi: i32) -> Option<f64> {
    if physical_width > 0 && logical_width > 0 {
        Some(f64::from(physical_width) / f64::from(logical_width))
    } else if dpi > 0 {
        Some(f64::from(dpi) / BASELINE_DPI)
    } else {
        None
    }
}

// Device context of the whole screen, released on drop.
struct DesktopDc {
    inner: HDC,
}

impl DesktopDc {
    fn acquire() -> Result<DesktopDc, ScreenError> {
        let inner = unsafe { GetDC(0) };
        if inner == 0 {
            Err(ScreenError::last_os_error())
        } else {
            Ok(DesktopDc { inner })
        }
    }

    fn caps(&self, index: GET_DEVICE_CAPS_INDEX) -> i32 {
        unsafe { GetDeviceCaps(self.inner, index) }
    }
}

impl Drop for DesktopDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(0, self.inner);
        }
    }
}

fn to_wide(value: &str) -> Vec<u16> {
    OsStr::new(value)
        .encode_wide()
        .chain(iter::once(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wide_is_nul_terminated() {
        assert_eq!(to_wide("OK"), vec![b'O' as u16, b'K' as u16, 0]);
    }

    #[test]
    fn test_query_reports_density() {
        let properties = PlatformScreen::new().unwrap().query().unwrap();
        assert!(properties.density() > 0.0);
    }

    #[test]
    fn test_density_from_virtualized_resolution() {
        // 1920 x 1080 at 150% in a process that isn't DPI aware.
        assert_eq!(density(1920, 1280, 96), Some(1.5));
        assert_eq!(density(1920, 1920, 144), Some(1.0));
    }

    #[test]
    fn test_density_falls_back_to_dpi() {
        assert_eq!(density(0, 1280, 144), Some(1.5));
        assert_eq!(density(1920, 0, 120), Some(1.25));
        assert_eq!(density(0, 0, 0), None);
    }

    #[test]
    fn test_scaled_width_matches_horzres() {
        let properties = PlatformScreen::new().unwrap().query().unwrap();
        let dc = DesktopDc::acquire().unwrap();
        let horzres = f64::from(dc.caps(HORZRES));
        if properties.is_complete() && horzres > 0.0 {
            let scaled = f64::from(properties.pixel_width()) / properties.density();
            assert!((scaled - horzres).abs() < 1.0, "{scaled} vs {horzres}");
        }
    }
}

use std::fmt;

use super::ScreenError;

/// The pixel size and density of a screen at the time it was queried.
///
/// A pixel dimension of zero means the platform could not report it, not that the screen has no
/// size. Use [`pixel_size`](Self::pixel_size) or [`size`](Self::size) to tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenProperties {
    pixel_width: i32,
    pixel_height: i32,
    density: f64,
}

impl ScreenProperties {
    /// Create properties from raw values without validating them.
    pub const fn new(pixel_width: i32, pixel_height: i32, density: f64) -> ScreenProperties {
        ScreenProperties {
            pixel_width,
            pixel_height,
            density,
        }
    }

    /// Create properties from values reported by a platform, rejecting densities that would make
    /// the logical size meaningless.
    pub fn checked(
        pixel_width: i32,
        pixel_height: i32,
        density: f64,
    ) -> Result<ScreenProperties, ScreenError> {
        if density.is_finite() && density > 0.0 {
            Ok(ScreenProperties::new(pixel_width, pixel_height, density))
        } else {
            Err(ScreenError::InvalidDensity(density))
        }
    }

    /// Horizontal resolution in device pixels.
    #[inline]
    pub const fn pixel_width(&self) -> i32 {
        self.pixel_width
    }

    /// Vertical resolution in device pixels.
    #[inline]
    pub const fn pixel_height(&self) -> i32 {
        self.pixel_height
    }

    /// Number of device pixels per logical unit.
    #[inline]
    pub const fn density(&self) -> f64 {
        self.density
    }

    /// Width in logical units, truncated toward zero.
    #[inline]
    pub fn width(&self) -> i32 {
        to_logical(self.pixel_width, self.density)
    }

    /// Height in logical units, truncated toward zero.
    #[inline]
    pub fn height(&self) -> i32 {
        to_logical(self.pixel_height, self.density)
    }

    /// Whether the platform reported both pixel dimensions.
    pub const fn is_complete(&self) -> bool {
        self.pixel_width != 0 && self.pixel_height != 0
    }

    /// The pixel size, or `None` if the platform could not report it.
    pub const fn pixel_size(&self) -> Option<(i32, i32)> {
        if self.is_complete() {
            Some((self.pixel_width, self.pixel_height))
        } else {
            None
        }
    }

    /// The logical size, or `None` if the platform could not report the pixel size.
    pub fn size(&self) -> Option<(i32, i32)> {
        self.is_complete().then(|| (self.width(), self.height()))
    }
}

// `as` truncates toward zero, saturates on overflow and maps NaN to zero.
fn to_logical(pixels: i32, density: f64) -> i32 {
    (f64::from(pixels) / density) as i32
}

impl fmt::Display for ScreenProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Density: {}", self.density)?;
        match (self.size(), self.pixel_size()) {
            (Some((width, height)), Some((pixel_width, pixel_height))) => {
                writeln!(f, "Scaled Size: {} x {}", width, height)?;
                write!(f, "Pixel Size: {} x {}", pixel_width, pixel_height)
            }
            _ => {
                writeln!(f, "Scaled Size: unknown")?;
                write!(f, "Pixel Size: unknown")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_size() {
        let properties = ScreenProperties::new(1080, 1920, 3.0);
        assert_eq!(properties.width(), 360);
        assert_eq!(properties.height(), 640);
    }

    #[test]
    fn test_logical_size_truncates() {
        let properties = ScreenProperties::new(1080, 2340, 2.625);
        // 411.43 x 891.43
        assert_eq!(properties.width(), 411);
        assert_eq!(properties.height(), 891);

        let properties = ScreenProperties::new(1366, 768, 1.5);
        assert_eq!(properties.width(), 910);
        assert_eq!(properties.height(), 512);
    }

    #[test]
    fn test_logical_size_matches_division() {
        for density in [0.75, 1.0, 1.25, 1.5, 2.0, 2.75, 3.0, 3.5, 4.0] {
            for pixels in [0, 1, 479, 480, 720, 1080, 1440, 2160, 3840] {
                let properties = ScreenProperties::new(pixels, pixels, density);
                let expected = (f64::from(pixels) / density).floor() as i32;
                assert_eq!(properties.width(), expected, "{pixels} px at {density}");
                assert_eq!(properties.height(), expected, "{pixels} px at {density}");
            }
        }
    }

    #[test]
    fn test_incomplete_metrics() {
        let properties = ScreenProperties::new(0, 0, 2.0);
        assert_eq!(properties.width(), 0);
        assert_eq!(properties.height(), 0);
        assert_eq!(properties.density(), 2.0);
        assert!(!properties.is_complete());
        assert_eq!(properties.pixel_size(), None);
        assert_eq!(properties.size(), None);
    }

    #[test]
    fn test_complete_metrics() {
        let properties = ScreenProperties::new(400, 800, 2.0);
        assert!(properties.is_complete());
        assert_eq!(properties.pixel_size(), Some((400, 800)));
        assert_eq!(properties.size(), Some((200, 400)));
    }

    #[test]
    fn test_checked_rejects_bad_density() {
        for density in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = ScreenProperties::checked(100, 100, density);
            assert!(
                matches!(result, Err(ScreenError::InvalidDensity(_))),
                "accepted {density}"
            );
        }
        assert!(ScreenProperties::checked(0, 0, 0.5).is_ok());
    }

    #[test]
    fn test_display() {
        let properties = ScreenProperties::new(400, 800, 2.0);
        assert_eq!(
            properties.to_string(),
            "Density: 2\nScaled Size: 200 x 400\nPixel Size: 400 x 800"
        );

        let properties = ScreenProperties::new(1080, 2340, 2.625);
        assert_eq!(
            properties.to_string(),
            "Density: 2.625\nScaled Size: 411 x 891\nPixel Size: 1080 x 2340"
        );
    }

    #[test]
    fn test_display_unknown_size() {
        let properties = ScreenProperties::new(0, 0, 2.0);
        assert_eq!(
            properties.to_string(),
            "Density: 2\nScaled Size: unknown\nPixel Size: unknown"
        );
    }

    #[test]
    fn test_display_partially_unknown_size() {
        let properties = ScreenProperties::new(1080, 0, 3.0);
        assert!(!properties.is_complete());
        assert_eq!(properties.pixel_size(), None);
        assert_eq!(properties.size(), None);
        assert_eq!(
            properties.to_string(),
            "Density: 3\nScaled Size: unknown\nPixel Size: unknown"
        );
    }
}

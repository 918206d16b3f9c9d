mod provider;
mod recording;

pub use provider::{FailingProvider, FixedProvider, QueryCounter, SequenceProvider};
pub use recording::{Presented, RecordingProvider};

use screenprops::ScreenProperties;

/// 1080 x 1920 pixels at density 3, a common phone in portrait.
pub const PHONE: ScreenProperties = ScreenProperties::new(1080, 1920, 3.0);

/// The same phone rotated to landscape.
pub const PHONE_LANDSCAPE: ScreenProperties = ScreenProperties::new(1920, 1080, 3.0);

/// What an older platform without a pixel size API reports.
pub const LEGACY: ScreenProperties = ScreenProperties::new(0, 0, 2.0);

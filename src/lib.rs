//! Cross-platform access to the pixel size and density of the main screen.
//!
//! Each supported target has one native [`ScreenProvider`]. The [`Screen`] facade binds to the
//! provider for the current target (or to one passed in explicitly) and exposes the
//! platform-neutral queries.
//!
//! ```no_run
//! use screenprops::{Screen, ScreenError};
//!
//! fn main() -> Result<(), ScreenError> {
//!     let screen = Screen::platform();
//!     let properties = screen.properties()?;
//!     println!("{properties}");
//!     Ok(())
//! }
//! ```

pub use foreground::{Foreground, ForegroundId};
pub use protocol::{
    Message, MessageStyle, Platform, Screen, ScreenError, ScreenProperties, ScreenProvider,
};
pub use queue::{MessageQueue, MessageReceiver, Queued};
pub use registry::{ProviderFactory, Registry};
#[cfg(any(
    target_os = "android",
    target_os = "ios",
    target_os = "macos",
    target_os = "windows"
))]
pub use sys::PlatformScreen;
#[cfg(target_os = "android")]
pub use sys::{init, track_lifecycle, ACTIVITY_ID};

mod foreground;
mod protocol;
mod queue;
mod registry;
mod sys;

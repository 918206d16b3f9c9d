use std::{error::Error, fmt, io};

use crate::foreground::ForegroundId;

pub use self::{properties::ScreenProperties, screen::Screen};

mod properties;
mod screen;

/// Title used when presenting screen properties.
pub const PRESENTATION_TITLE: &str = "Screen Properties";

/// Label of the button that dismisses a presented message.
pub const DISMISS_LABEL: &str = "OK";

/// The operating system family a provider is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows (Win32 desktop).
    Windows,
    /// macOS (AppKit).
    MacOs,
    /// iOS (UIKit).
    Ios,
    /// Android (NDK native activity).
    Android,
    /// Any target without a built-in provider.
    Other,
}

impl Platform {
    /// The platform this crate was compiled for.
    pub const fn current() -> Platform {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A native source of screen metrics.
///
/// Implementations must read the live display state on every call to [`query`](Self::query),
/// the device may have rotated or changed resolution in between.
pub trait ScreenProvider {
    /// Query the main screen.
    ///
    /// Pixel dimensions the platform cannot report are left at zero. A missing or non-positive
    /// density is an error.
    fn query(&self) -> Result<ScreenProperties, ScreenError>;

    /// Hand a message to the platform's presentation service (dialog, toast, message box).
    ///
    /// This must not block the caller until the message is dismissed.
    fn present(&self, message: &Message) -> Result<(), ScreenError> {
        let _ = message;
        Err(ScreenError::PresentationUnsupported)
    }
}

impl<P: ScreenProvider + ?Sized> ScreenProvider for Box<P> {
    #[inline]
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        (**self).query()
    }

    #[inline]
    fn present(&self, message: &Message) -> Result<(), ScreenError> {
        (**self).present(message)
    }
}

impl<P: ScreenProvider + ?Sized> ScreenProvider for &P {
    #[inline]
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        (**self).query()
    }

    #[inline]
    fn present(&self, message: &Message) -> Result<(), ScreenError> {
        (**self).present(message)
    }
}

/// How a presented message should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// A modal dialog attached to the given foreground window.
    Dialog(ForegroundId),
    /// A transient notification, used when no window is in the foreground.
    Toast,
}

/// A human-readable message to be presented by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub text: String,
    /// Label of the acknowledgment button.
    pub dismiss: String,
    pub style: MessageStyle,
}

impl Message {
    /// Create a dialog-less message with the default title and dismiss label.
    pub fn new(text: impl Into<String>) -> Message {
        Message {
            title: PRESENTATION_TITLE.to_owned(),
            text: text.into(),
            dismiss: DISMISS_LABEL.to_owned(),
            style: MessageStyle::Toast,
        }
    }

    pub fn with_style(mut self, style: MessageStyle) -> Message {
        self.style = style;
        self
    }
}

/// An error produced while querying or presenting screen properties.
#[derive(Debug)]
pub enum ScreenError {
    /// No provider is registered for the platform.
    UnsupportedPlatform(Platform),
    /// The platform could not report a density.
    MissingDensity,
    /// The platform reported a density that is zero, negative, or not finite.
    InvalidDensity(f64),
    /// The native API may only be used from the main (UI) thread.
    NotMainThread,
    /// The provider needs a handle from the host application that was never supplied.
    Uninitialized,
    /// The provider has no way of presenting messages.
    PresentationUnsupported,
    /// The receiving end of a message queue no longer exists.
    Disconnected,
    /// A native call failed.
    OsError(io::Error),
}

impl ScreenError {
    #[cfg(target_os = "windows")]
    pub(crate) fn last_os_error() -> ScreenError {
        ScreenError::OsError(io::Error::last_os_error())
    }
}

impl Error for ScreenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScreenError::OsError(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::UnsupportedPlatform(platform) => {
                write!(f, "screen properties are not supported on `{}`", platform)
            }
            ScreenError::MissingDensity => {
                write!(f, "the platform did not report a screen density")
            }
            ScreenError::InvalidDensity(density) => {
                write!(f, "the platform reported an invalid screen density `{}`", density)
            }
            ScreenError::NotMainThread => {
                write!(f, "screen properties must be queried from the main thread")
            }
            ScreenError::Uninitialized => {
                write!(f, "the screen provider was used before it was initialized")
            }
            ScreenError::PresentationUnsupported => {
                write!(f, "the provider cannot present messages")
            }
            ScreenError::Disconnected => write!(f, "the message receiver was dropped"),
            ScreenError::OsError(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<io::Error> for ScreenError {
    fn from(err: io::Error) -> Self {
        Self::OsError(err)
    }
}

use crate::{protocol::Platform, registry::Registry};

#[cfg(target_os = "android")]
#[path = "android/mod.rs"]
mod platform;
#[cfg(target_os = "ios")]
#[path = "ios/mod.rs"]
mod platform;
#[cfg(target_os = "macos")]
#[path = "macos/mod.rs"]
mod platform;
#[cfg(target_os = "windows")]
#[path = "windows/mod.rs"]
mod platform;

#[cfg(any(
    target_os = "android",
    target_os = "ios",
    target_os = "macos",
    target_os = "windows"
))]
pub use platform::*;

/// Add the provider compiled for the current target to `registry`.
#[cfg(any(
    target_os = "android",
    target_os = "ios",
    target_os = "macos",
    target_os = "windows"
))]
pub fn register_builtin(registry: &mut Registry) {
    registry.register(Platform::current(), PlatformScreen::new);
}

// Nothing to register, every query fails with `UnsupportedPlatform`.
#[cfg(not(any(
    target_os = "android",
    target_os = "ios",
    target_os = "macos",
    target_os = "windows"
)))]
pub fn register_builtin(registry: &mut Registry) {
    let _ = registry;
    log::debug!("no built-in screen provider for `{}`", Platform::current());
}

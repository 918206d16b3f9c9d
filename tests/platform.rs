use screenprops::{Platform, Registry, Screen, ScreenError};

#[macro_use]
extern crate libtest_mimic_collect;

// NOTE: AppKit and UIKit may only be queried from the main thread, which `cargo test` doesn't run
//       tests on. libtest_mimic runs them on the main thread as long as --test-threads=1 is passed.
//
//       relevant issue: https://github.com/rust-lang/rust/issues/104053
fn main() {
    libtest_mimic_collect::TestCollection::run();
}

fn supported() -> bool {
    Platform::current() != Platform::Other
}

#[test]
fn test_builtin_registry() -> Result<(), String> {
    let registry = Registry::builtin();
    if registry.supports(Platform::current()) == supported() {
        Ok(())
    } else {
        Err(format!("unexpected built-in registry {registry:?}"))
    }
}

#[test]
fn test_query() -> Result<(), String> {
    let screen = Screen::platform();
    match screen.properties() {
        Ok(properties) if supported() => {
            if properties.density() <= 0.0 {
                return Err(format!("non-positive density in {properties:?}"));
            }
            if screen.density().map_err(|err| err.to_string())? != properties.density() {
                return Err("density() disagrees with properties()".to_owned());
            }
            Ok(())
        }
        // Headless CI machines may have no screen at all.
        Err(ScreenError::MissingDensity) if supported() => Ok(()),
        Err(ScreenError::UnsupportedPlatform(platform)) if !supported() => {
            if platform == Platform::current() {
                Ok(())
            } else {
                Err(format!("unsupported error names `{platform}`"))
            }
        }
        other => Err(format!("unexpected result {other:?}")),
    }
}

#[test]
fn test_query_is_idempotent() -> Result<(), String> {
    let screen = Screen::platform();
    match (screen.properties(), screen.properties()) {
        (Ok(first), Ok(second)) if first != second => {
            Err(format!("{first:?} changed to {second:?} without any display change"))
        }
        (Ok(_), Ok(_)) => Ok(()),
        (Err(first), Err(second)) if first.to_string() == second.to_string() => Ok(()),
        (first, second) => Err(format!("inconsistent results {first:?} and {second:?}")),
    }
}

#[test]
fn test_unsupported_is_not_defaulted() -> Result<(), String> {
    let screen = Screen::from_registry_for(Registry::builtin(), Platform::Other);
    match screen.properties() {
        Err(ScreenError::UnsupportedPlatform(Platform::Other)) => Ok(()),
        other => Err(format!("expected an unsupported platform error, got {other:?}")),
    }
}

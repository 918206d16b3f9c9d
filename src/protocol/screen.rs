use std::{cell::OnceCell, fmt};

use crate::{
    protocol::{Message, Platform, ScreenError, ScreenProperties, ScreenProvider},
    registry::Registry,
};

/// The platform-neutral entry point for screen metrics.
///
/// A `Screen` either owns an explicitly injected provider ([`Screen::new`]) or resolves one from a
/// [`Registry`] the first time it is needed. Once resolved, the same provider is reused for every
/// call. The properties themselves are never cached.
pub struct Screen {
    provider: OnceCell<Box<dyn ScreenProvider>>,
    registry: Option<Registry>,
    platform: Platform,
}

impl Screen {
    /// Bind the facade to the given provider.
    pub fn new(provider: impl ScreenProvider + 'static) -> Screen {
        Screen {
            provider: OnceCell::from(Box::new(provider) as Box<dyn ScreenProvider>),
            registry: None,
            platform: Platform::current(),
        }
    }

    /// Bind the facade to the built-in provider for the current platform.
    ///
    /// The provider is resolved lazily, so on an unsupported platform this succeeds and the first
    /// query fails with [`ScreenError::UnsupportedPlatform`].
    pub fn platform() -> Screen {
        Screen::from_registry(Registry::builtin())
    }

    /// Bind the facade to whatever `registry` provides for the current platform.
    pub fn from_registry(registry: Registry) -> Screen {
        Screen::from_registry_for(registry, Platform::current())
    }

    /// Bind the facade to whatever `registry` provides for `platform`.
    pub fn from_registry_for(registry: Registry, platform: Platform) -> Screen {
        Screen {
            provider: OnceCell::new(),
            registry: Some(registry),
            platform,
        }
    }

    /// The platform this facade resolves its provider for.
    pub fn target(&self) -> Platform {
        self.platform
    }

    /// Query the current properties of the main screen.
    pub fn properties(&self) -> Result<ScreenProperties, ScreenError> {
        let properties = self.provider()?.query()?;
        log::trace!("queried screen properties {:?}", properties);
        if !properties.is_complete() {
            log::warn!("screen provider did not report the pixel size of the screen");
        }
        Ok(properties)
    }

    /// Query the current density of the main screen.
    #[inline]
    pub fn density(&self) -> Result<f64, ScreenError> {
        Ok(self.properties()?.density())
    }

    /// Query the current properties and format them as a presentable message.
    pub fn message(&self) -> Result<Message, ScreenError> {
        Ok(Message::new(self.properties()?.to_string()))
    }

    /// Query the current properties and present them through the provider.
    ///
    /// This returns as soon as the message has been handed off, it does not wait for the message
    /// to be dismissed.
    pub fn show_properties(&self) -> Result<(), ScreenError> {
        let message = self.message()?;
        self.provider()?.present(&message)
    }

    fn provider(&self) -> Result<&dyn ScreenProvider, ScreenError> {
        if let Some(provider) = self.provider.get() {
            return Ok(&**provider);
        }

        let provider = match &self.registry {
            Some(registry) => registry.resolve(self.platform)?,
            None => return Err(ScreenError::UnsupportedPlatform(self.platform)),
        };
        log::debug!("resolved screen provider for `{}`", self.platform);
        Ok(&**self.provider.get_or_init(|| provider))
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("platform", &self.platform)
            .field("resolved", &self.provider.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    struct Counting {
        queries: Rc<Cell<usize>>,
    }

    impl ScreenProvider for Counting {
        fn query(&self) -> Result<ScreenProperties, ScreenError> {
            self.queries.set(self.queries.get() + 1);
            ScreenProperties::checked(400, 800, 2.0)
        }
    }

    #[test]
    fn test_properties_are_not_cached() {
        let queries = Rc::new(Cell::new(0));
        let screen = Screen::new(Counting {
            queries: queries.clone(),
        });

        assert_eq!(screen.properties().unwrap(), screen.properties().unwrap());
        assert_eq!(screen.density().unwrap(), 2.0);
        assert_eq!(queries.get(), 3);
    }

    #[test]
    fn test_message() {
        let screen = Screen::new(Counting {
            queries: Rc::default(),
        });
        let message = screen.message().unwrap();
        assert_eq!(message.title, "Screen Properties");
        assert_eq!(message.dismiss, "OK");
        assert_eq!(
            message.text,
            "Density: 2\nScaled Size: 200 x 400\nPixel Size: 400 x 800"
        );
    }

    #[test]
    fn test_empty_registry_is_unsupported() {
        let screen = Screen::from_registry_for(Registry::new(), Platform::Android);
        assert!(matches!(
            screen.properties(),
            Err(ScreenError::UnsupportedPlatform(Platform::Android))
        ));
        assert!(matches!(
            screen.density(),
            Err(ScreenError::UnsupportedPlatform(Platform::Android))
        ));
        assert!(matches!(
            screen.show_properties(),
            Err(ScreenError::UnsupportedPlatform(Platform::Android))
        ));
    }

    #[test]
    fn test_show_without_presentation() {
        let screen = Screen::new(Counting {
            queries: Rc::default(),
        });
        assert!(matches!(
            screen.show_properties(),
            Err(ScreenError::PresentationUnsupported)
        ));
    }
}

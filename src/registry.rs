use std::{collections::HashMap, fmt};

use crate::{
    protocol::{Platform, ScreenError, ScreenProvider},
    sys,
};

/// Constructs the provider for a platform.
pub type ProviderFactory = Box<dyn Fn() -> Result<Box<dyn ScreenProvider>, ScreenError>>;

/// A table of provider factories keyed by platform.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<Platform, ProviderFactory>,
}

impl Registry {
    /// An empty registry, every platform is unsupported.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// A registry holding the provider compiled for the current target, if there is one.
    pub fn builtin() -> Registry {
        let mut registry = Registry::new();
        sys::register_builtin(&mut registry);
        registry
    }

    /// Register a factory for `platform`, replacing any existing one.
    pub fn register<F, P>(&mut self, platform: Platform, factory: F) -> &mut Registry
    where
        F: Fn() -> Result<P, ScreenError> + 'static,
        P: ScreenProvider + 'static,
    {
        self.factories.insert(
            platform,
            Box::new(move || {
                factory().map(|provider| Box::new(provider) as Box<dyn ScreenProvider>)
            }),
        );
        self
    }

    /// Builder-style version of [`register`](Self::register).
    pub fn with<F, P>(mut self, platform: Platform, factory: F) -> Registry
    where
        F: Fn() -> Result<P, ScreenError> + 'static,
        P: ScreenProvider + 'static,
    {
        self.register(platform, factory);
        self
    }

    pub fn supports(&self, platform: Platform) -> bool {
        self.factories.contains_key(&platform)
    }

    /// Construct the provider registered for `platform`.
    pub fn resolve(&self, platform: Platform) -> Result<Box<dyn ScreenProvider>, ScreenError> {
        match self.factories.get(&platform) {
            Some(factory) => factory(),
            None => Err(ScreenError::UnsupportedPlatform(platform)),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

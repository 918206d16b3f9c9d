use std::{cell::Cell, rc::Rc};

use screenprops::{ScreenError, ScreenProperties, ScreenProvider};

/// A shared count of how many times a provider was queried.
#[derive(Debug, Clone, Default)]
pub struct QueryCounter(Rc<Cell<usize>>);

impl QueryCounter {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Always reports the same properties, like a device that is never rotated.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    properties: ScreenProperties,
    queries: QueryCounter,
}

impl FixedProvider {
    pub fn new(properties: ScreenProperties) -> FixedProvider {
        FixedProvider {
            properties,
            queries: QueryCounter::default(),
        }
    }

    pub fn counter(&self) -> QueryCounter {
        self.queries.clone()
    }
}

impl ScreenProvider for FixedProvider {
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        self.queries.increment();
        ScreenProperties::checked(
            self.properties.pixel_width(),
            self.properties.pixel_height(),
            self.properties.density(),
        )
    }
}

/// Reports each of the given properties in turn, then keeps reporting the last one.
#[derive(Debug)]
pub struct SequenceProvider {
    states: Vec<ScreenProperties>,
    queries: QueryCounter,
}

impl SequenceProvider {
    pub fn new(states: Vec<ScreenProperties>) -> SequenceProvider {
        SequenceProvider {
            states,
            queries: QueryCounter::default(),
        }
    }

    pub fn counter(&self) -> QueryCounter {
        self.queries.clone()
    }
}

impl ScreenProvider for SequenceProvider {
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        let index = self.queries.get().min(self.states.len().saturating_sub(1));
        self.queries.increment();
        self.states
            .get(index)
            .copied()
            .ok_or(ScreenError::MissingDensity)
    }
}

/// Fails every query with the error produced by `error`.
#[derive(Debug, Clone, Copy)]
pub struct FailingProvider {
    error: fn() -> ScreenError,
}

impl FailingProvider {
    pub fn new(error: fn() -> ScreenError) -> FailingProvider {
        FailingProvider { error }
    }
}

impl ScreenProvider for FailingProvider {
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        Err((self.error)())
    }
}

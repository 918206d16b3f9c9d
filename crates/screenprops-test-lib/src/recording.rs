use std::{cell::RefCell, rc::Rc};

use screenprops::{Message, ScreenError, ScreenProperties, ScreenProvider};

/// Messages handed to a [`RecordingProvider`], in order.
#[derive(Debug, Clone, Default)]
pub struct Presented(Rc<RefCell<Vec<Message>>>);

impl Presented {
    pub fn messages(&self) -> Vec<Message> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Wraps a provider and records every message presented through it instead of showing it.
#[derive(Debug)]
pub struct RecordingProvider<P> {
    inner: P,
    presented: Presented,
}

impl<P> RecordingProvider<P> {
    pub fn new(inner: P) -> RecordingProvider<P> {
        RecordingProvider {
            inner,
            presented: Presented::default(),
        }
    }

    pub fn presented(&self) -> Presented {
        self.presented.clone()
    }
}

impl<P: ScreenProvider> ScreenProvider for RecordingProvider<P> {
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        self.inner.query()
    }

    fn present(&self, message: &Message) -> Result<(), ScreenError> {
        self.presented.0.borrow_mut().push(message.clone());
        Ok(())
    }
}

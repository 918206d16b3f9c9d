use std::sync::Arc;

use flume::{Receiver, Sender, TryRecvError};

use crate::{
    foreground::Foreground,
    protocol::{Message, MessageStyle, ScreenError, ScreenProperties, ScreenProvider},
};

/// The sending half of a message channel drained by the host's UI loop.
///
/// Sending never blocks, the host decides when (and how) to render each message.
#[derive(Debug, Clone)]
pub struct MessageQueue {
    sender: Sender<Message>,
}

/// The receiving half of a [`MessageQueue`], owned by the host's UI loop.
#[derive(Debug, Clone)]
pub struct MessageReceiver {
    receiver: Receiver<Message>,
}

impl MessageQueue {
    pub fn unbounded() -> (MessageQueue, MessageReceiver) {
        let (sender, receiver) = flume::unbounded();
        (MessageQueue { sender }, MessageReceiver { receiver })
    }

    pub fn send(&self, message: Message) -> Result<(), ScreenError> {
        self.sender
            .send(message)
            .map_err(|_| ScreenError::Disconnected)
    }
}

impl MessageReceiver {
    /// The next pending message, without waiting.
    pub fn try_recv(&self) -> Result<Option<Message>, ScreenError> {
        match self.receiver.try_recv() {
            Ok(message) => Ok(Some(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ScreenError::Disconnected),
        }
    }

    /// Wait for the next message.
    pub fn recv(&self) -> Result<Message, ScreenError> {
        self.receiver.recv().map_err(|_| ScreenError::Disconnected)
    }

    /// Every message that is currently pending.
    pub fn drain(&self) -> impl Iterator<Item = Message> + '_ {
        self.receiver.try_iter()
    }
}

/// Wraps a provider so that presented messages are forwarded to a [`MessageQueue`].
///
/// When a [`Foreground`] is attached, messages become dialogs on the foreground window, or toasts
/// when there is none.
#[derive(Debug)]
pub struct Queued<P> {
    inner: P,
    queue: MessageQueue,
    foreground: Option<Arc<Foreground>>,
}

impl<P> Queued<P> {
    pub fn new(inner: P, queue: MessageQueue) -> Queued<P> {
        Queued {
            inner,
            queue,
            foreground: None,
        }
    }

    pub fn with_foreground(mut self, foreground: Arc<Foreground>) -> Queued<P> {
        self.foreground = Some(foreground);
        self
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: ScreenProvider> ScreenProvider for Queued<P> {
    #[inline]
    fn query(&self) -> Result<ScreenProperties, ScreenError> {
        self.inner.query()
    }

    fn present(&self, message: &Message) -> Result<(), ScreenError> {
        let style = match self.foreground.as_ref().and_then(|fg| fg.current()) {
            Some(id) => MessageStyle::Dialog(id),
            None => MessageStyle::Toast,
        };
        self.queue.send(message.clone().with_style(style))
    }
}

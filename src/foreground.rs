use std::sync::RwLock;

/// An identifier the host assigns to each of its windows or activities.
pub type ForegroundId = u64;

/// Remembers which window or activity is currently in the foreground.
///
/// This is a passive cache, the host keeps it current by forwarding its lifecycle notifications.
/// Presentation reads it to decide whether a message can be attached to a window or has to be
/// shown as a toast.
#[derive(Debug, Default)]
pub struct Foreground {
    current: RwLock<Option<ForegroundId>>,
}

impl Foreground {
    pub fn new() -> Foreground {
        Foreground::default()
    }

    /// The window currently in the foreground, if any.
    pub fn current(&self) -> Option<ForegroundId> {
        // A poisoned lock still holds a valid `Option`, there is no invariant to break.
        match self.current.read() {
            Ok(current) => *current,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn created(&self, id: ForegroundId) {
        self.set(Some(id));
    }

    pub fn started(&self, id: ForegroundId) {
        self.set(Some(id));
    }

    pub fn resumed(&self, id: ForegroundId) {
        self.set(Some(id));
    }

    /// The window left the foreground, so nothing may be attached to it anymore.
    pub fn paused(&self, id: ForegroundId) {
        let _ = id;
        self.set(None);
    }

    pub fn stopped(&self, id: ForegroundId) {
        let _ = id;
    }

    pub fn destroyed(&self, id: ForegroundId) {
        let _ = id;
    }

    fn set(&self, value: Option<ForegroundId>) {
        match self.current.write() {
            Ok(mut current) => *current = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}

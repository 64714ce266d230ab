use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::action::Action;
use crate::error::BusError;

pub type Handler = Arc<dyn Fn(Action) + Send + Sync>;

struct Subscription {
    actions: Vec<Action>,
    handler: Handler,
}

/// In-process publish/subscribe registry with named topics, standing in
/// for the OS broadcast registry the original platform provides.
///
/// Cloning shares the underlying registry. Delivery is serial per
/// `publish` call; handlers run outside the registry lock, so a handler
/// may re-enter the bus (e.g. to unregister itself).
#[derive(Clone, Default)]
pub struct ActionBus {
    inner: Arc<Mutex<HashMap<&'static str, Subscription>>>,
}

impl ActionBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `subscriber` for the given actions.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::AlreadyRegistered`] if the subscriber name is
    /// already taken; the existing subscription is left untouched.
    pub fn register(
        &self,
        subscriber: &'static str,
        actions: &[Action],
        handler: Handler,
    ) -> std::result::Result<(), BusError> {
        let mut registry = self.lock();
        if registry.contains_key(subscriber) {
            return Err(BusError::AlreadyRegistered { subscriber });
        }
        registry.insert(
            subscriber,
            Subscription {
                actions: actions.to_vec(),
                handler,
            },
        );
        debug!(subscriber, ?actions, "subscriber registered");
        Ok(())
    }

    /// Remove the subscription registered under `subscriber`.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::NotRegistered`] when no such subscription
    /// exists.
    pub fn unregister(&self, subscriber: &'static str) -> std::result::Result<(), BusError> {
        if self.lock().remove(subscriber).is_none() {
            return Err(BusError::NotRegistered { subscriber });
        }
        debug!(subscriber, "subscriber unregistered");
        Ok(())
    }

    /// Deliver `action` to every subscriber whose filter contains it.
    pub fn publish(&self, action: Action) {
        // Snapshot the matching handlers so delivery happens without the
        // registry lock held.
        let handlers: Vec<Handler> = self
            .lock()
            .values()
            .filter(|sub| sub.actions.contains(&action))
            .map(|sub| Arc::clone(&sub.handler))
            .collect();

        debug!(%action, subscribers = handlers.len(), "publishing action");
        for handler in handlers {
            handler(action);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<&'static str, Subscription>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

//! Change notification for document mutations.
//!
//! Observers are called synchronously, in subscription order, after each
//! intent that actually changed the document. No-ops never notify.
//!
//! Observers must be `Send` so a document can be moved behind a lock shared
//! across threads.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{EmojiArt, EmojiId, Position};

/// A single applied mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DocumentChange {
    /// The background reference was replaced.
    BackgroundChanged {
        /// The new reference, `None` when cleared.
        background: Option<Url>,
    },
    /// An emoji was appended.
    EmojiAdded {
        /// The new emoji's id.
        id: EmojiId,
    },
    /// An emoji was removed.
    EmojiRemoved {
        /// The removed emoji's id.
        id: EmojiId,
    },
    /// An emoji was moved.
    EmojiMoved {
        /// The moved emoji's id.
        id: EmojiId,
        /// Its new position.
        position: Position,
    },
    /// An emoji was resized.
    EmojiResized {
        /// The resized emoji's id.
        id: EmojiId,
        /// Its new size.
        size: i32,
    },
}

/// Receives document changes.
pub trait DocumentObserver: Send {
    /// Called after `change` has been applied; `art` is the updated document.
    fn on_change(&mut self, change: &DocumentChange, art: &EmojiArt);
}

impl<F> DocumentObserver for F
where
    F: FnMut(&DocumentChange, &EmojiArt) + Send,
{
    fn on_change(&mut self, change: &DocumentChange, art: &EmojiArt) {
        self(change, art);
    }
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered set of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(SubscriptionId, Box<dyn DocumentObserver>)>,
    next_id: u64,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl DocumentObserver + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Deliver a change to every observer.
    pub fn notify(&mut self, change: &DocumentChange, art: &EmojiArt) {
        for (_, observer) in &mut self.observers {
            observer.on_change(change, art);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();

        let first = Arc::clone(&log);
        registry.subscribe(move |_: &DocumentChange, _: &EmojiArt| {
            first.lock().expect("lock").push(1);
        });
        let second = Arc::clone(&log);
        registry.subscribe(move |_: &DocumentChange, _: &EmojiArt| {
            second.lock().expect("lock").push(2);
        });

        let change = DocumentChange::EmojiAdded {
            id: EmojiId::from_raw(1),
        };
        registry.notify(&change, &EmojiArt::new());

        assert_eq!(*log.lock().expect("lock"), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut registry = ObserverRegistry::new();
        let counter = Arc::clone(&count);
        let id = registry.subscribe(move |_: &DocumentChange, _: &EmojiArt| {
            *counter.lock().expect("lock") += 1;
        });

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.notify(
            &DocumentChange::BackgroundChanged { background: None },
            &EmojiArt::new(),
        );
        assert_eq!(*count.lock().expect("lock"), 0);
    }

    #[test]
    fn test_change_serializes_tagged() {
        let change = DocumentChange::EmojiMoved {
            id: EmojiId::from_raw(3),
            position: Position::new(5, -2),
        };
        let json = serde_json::to_value(&change).expect("serialize");
        assert_eq!(json["type"], "EmojiMoved");
        assert_eq!(json["data"]["id"], 3);
        assert_eq!(json["data"]["position"]["y"], -2);
    }
}

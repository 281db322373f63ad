// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Environment event streams with explicit subscription lifetimes.
//!
//! The page owns one `EventSource` per stream (scroll, visibility,
//! resize). Handlers stay registered while their `Subscription` lives.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

type Handler<E> = Box<dyn FnMut(&E)>;

struct Registry<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
    // Ids dropped while an emit was in flight. Cleared by the outermost emit.
    removed: HashSet<u64>,
    // Nesting level of `emit` calls currently running.
    emitting: u32,
}

impl<E> Registry<E> {
    fn remove(&mut self, id: u64) {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        if self.handlers.len() == before {
            self.removed.insert(id);
        }
    }
}

/// A stream of events of type `E`.
pub struct EventSource<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Default for EventSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> EventSource<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
                removed: HashSet::new(),
                emitting: 0,
            })),
        }
    }

    /// Register a handler. It is called until the subscription is dropped.
    pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, Box::new(handler)));
            id
        };

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().remove(id);
                }
            })),
        }
    }

    /// Deliver an event to every live handler in subscription order.
    pub fn emit(&self, event: &E) {
        let mut active = {
            let mut registry = self.registry.borrow_mut();
            registry.emitting += 1;
            std::mem::take(&mut registry.handlers)
        };
        for (_, handler) in active.iter_mut() {
            handler(event);
        }

        let mut registry = self.registry.borrow_mut();
        registry.emitting -= 1;
        let Registry {
            handlers, removed, ..
        } = &mut *registry;
        active.retain(|(id, _)| !removed.contains(id));
        handlers.retain(|(id, _)| !removed.contains(id));
        // Keep handlers subscribed during the emit after the existing ones.
        active.append(handlers);
        *handlers = active;
        if registry.emitting == 0 {
            registry.removed.clear();
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Live registration of a handler. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    #[cfg(test)]
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_handlers_receive_until_unsubscribed() {
        let source = EventSource::<f32>::new();
        let seen = Rc::new(Cell::new(0.0));

        let sink = seen.clone();
        let sub = source.subscribe(move |y| sink.set(*y));
        source.emit(&120.0);
        assert_eq!(seen.get(), 120.0);

        sub.unsubscribe();
        source.emit(&300.0);
        assert_eq!(seen.get(), 120.0);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let source = EventSource::<u32>::new();
        let count = Rc::new(Cell::new(0));
        {
            let c = count.clone();
            let _sub = source.subscribe(move |_| c.set(c.get() + 1));
            source.emit(&1);
            assert_eq!(source.subscriber_count(), 1);
        }
        source.emit(&2);
        assert_eq!(count.get(), 1);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_source_is_harmless() {
        let source = EventSource::<u32>::new();
        let sub = source.subscribe(|_| {});
        drop(source);
        drop(sub);
    }

    #[test]
    fn test_unsubscribe_during_emit() {
        let source = EventSource::<u32>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0));

        let s = slot.clone();
        let c = count.clone();
        let sub = source.subscribe(move |_| {
            c.set(c.get() + 1);
            s.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        source.emit(&1);
        source.emit(&2);
        assert_eq!(count.get(), 1);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_then_reemit_from_handler() {
        let source = Rc::new(EventSource::<u32>::new());
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0));

        let s = slot.clone();
        let c = count.clone();
        let weak = Rc::downgrade(&source);
        let sub = source.subscribe(move |value| {
            c.set(c.get() + 1);
            s.borrow_mut().take();
            if *value == 1 {
                if let Some(source) = weak.upgrade() {
                    source.emit(&2);
                }
            }
        });
        *slot.borrow_mut() = Some(sub);

        source.emit(&1);
        source.emit(&3);
        assert_eq!(count.get(), 1);
        assert_eq!(source.subscriber_count(), 0);
    }
}

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::event::{InputEvent, Propagation};

/// Receives input events from an [`InputDispatcher`]
pub trait InputListener {
    /// Handle one event and report whether default handling should stop
    fn on_event(&mut self, event: &InputEvent) -> Propagation;
}

/// Identifier handed out for every registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type SharedListener = Rc<RefCell<dyn InputListener>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, SharedListener)>,
}

impl Registry {
    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }
}

/// Single-threaded event target that input listeners attach to.
///
/// Stands in for the document/window the host toolkit delivers events to.
/// Listeners are kept until their [`Subscription`] is cancelled or dropped.
#[derive(Clone, Default)]
pub struct InputDispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl InputDispatcher {
    /// Create a dispatcher with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays attached for as long as the returned
    /// subscription lives
    pub fn subscribe(&self, listener: SharedListener) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        debug!("input listener {:?} registered", id);

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver an event to every listener in registration order
    pub fn dispatch(&self, event: &InputEvent) -> Propagation {
        // Snapshot so listeners may (un)subscribe while handling the event
        let listeners: Vec<SharedListener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        listeners
            .iter()
            .fold(Propagation::Continue, |propagation, listener| {
                propagation.merge(listener.borrow_mut().on_event(event))
            })
    }

    /// Number of attached listeners
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle to a registered listener; deregisters it when cancelled or dropped
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Explicitly deregister the listener
    pub fn cancel(self) {
        // Drop does the work
    }

    fn release(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                debug!("input listener {:?} removed", self.id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{ArrowKey, PointerButton};

    struct Recorder {
        seen: Vec<InputEvent>,
    }

    impl InputListener for Recorder {
        fn on_event(&mut self, event: &InputEvent) -> Propagation {
            self.seen.push(*event);
            event.propagation()
        }
    }

    fn recorder() -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder { seen: Vec::new() }))
    }

    #[test]
    fn test_dispatch_reaches_all_listeners() {
        let dispatcher = InputDispatcher::new();
        let first = recorder();
        let second = recorder();
        let _a = dispatcher.subscribe(first.clone());
        let _b = dispatcher.subscribe(second.clone());

        dispatcher.dispatch(&InputEvent::KeyDown(ArrowKey::Up));

        assert_eq!(first.borrow().seen.len(), 1);
        assert_eq!(second.borrow().seen.len(), 1);
        assert_eq!(dispatcher.listener_count(), 2);
    }

    #[test]
    fn test_dispatch_propagation() {
        let dispatcher = InputDispatcher::new();
        let listener = recorder();
        let _sub = dispatcher.subscribe(listener);

        assert_eq!(
            dispatcher.dispatch(&InputEvent::PointerDown(PointerButton::Secondary)),
            Propagation::Stop
        );
        assert_eq!(
            dispatcher.dispatch(&InputEvent::KeyUp(ArrowKey::Left)),
            Propagation::Continue
        );
    }

    #[test]
    fn test_no_listeners_continues() {
        let dispatcher = InputDispatcher::new();
        assert_eq!(
            dispatcher.dispatch(&InputEvent::ContextMenu),
            Propagation::Continue
        );
    }

    #[test]
    fn test_cancel_removes_listener() {
        let dispatcher = InputDispatcher::new();
        let listener = recorder();
        let sub = dispatcher.subscribe(listener.clone());

        sub.cancel();
        dispatcher.dispatch(&InputEvent::KeyDown(ArrowKey::Down));

        assert_eq!(dispatcher.listener_count(), 0);
        assert!(listener.borrow().seen.is_empty());
    }

    #[test]
    fn test_drop_removes_listener() {
        let dispatcher = InputDispatcher::new();
        let listener = recorder();
        {
            let _sub = dispatcher.subscribe(listener.clone());
            assert_eq!(dispatcher.listener_count(), 1);
        }
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outlives_dispatcher() {
        let dispatcher = InputDispatcher::new();
        let sub = dispatcher.subscribe(recorder());
        drop(dispatcher);
        // Registry is gone, releasing must be a no-op
        sub.cancel();
    }

    #[test]
    fn test_ids_are_unique() {
        let dispatcher = InputDispatcher::new();
        let a = dispatcher.subscribe(recorder());
        let b = dispatcher.subscribe(recorder());
        assert_ne!(a.id(), b.id());
    }
}

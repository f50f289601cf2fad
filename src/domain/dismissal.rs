//! Dismissal notifications (viewport scroll, backdrop click) with scoped
//! subscriptions.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;
type Listeners = RefCell<Vec<(u64, Listener)>>;

#[derive(Clone, Default)]
pub struct ScrollSignal {
    listeners: Rc<Listeners>,
    next_id: Rc<Cell<u64>>,
}

impl ScrollSignal {
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ScrollSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        ScrollSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
            active: Cell::new(true),
        }
    }

    /// Notifies every live subscriber in subscription order.
    pub fn emit(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Clicks that reach the page root without being claimed by a cell or
/// the popover. Same registry and guard as [`ScrollSignal`].
#[derive(Clone, Default)]
pub struct BackdropSignal(ScrollSignal);

impl BackdropSignal {
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ScrollSubscription {
        self.0.subscribe(listener)
    }

    pub fn emit(&self) {
        self.0.emit();
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.0.listener_count()
    }
}

/// Removes its listener when dropped or explicitly unsubscribed.
pub struct ScrollSubscription {
    id: u64,
    listeners: Weak<Listeners>,
    active: Cell<bool>,
}

impl ScrollSubscription {
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

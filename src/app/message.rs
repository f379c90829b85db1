// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Picker notifications and the subscribers that receive them.

use std::fmt;

use crate::domain::focal::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocalEvent {
    // Drag lifecycle.
    DragStart,
    Drag { point: Point },
    DragEnd,

    // Committed focus, in percent. Only sent when the focus moved.
    Change { x: f64, y: f64 },
}

/// Handle returned by `subscribe`, used to unsubscribe again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&FocalEvent)>;

#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listeners({})", self.entries.len())
    }
}

impl Listeners {
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FocalEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver `event` to every listener in subscription order.
    pub fn emit(&mut self, event: FocalEvent) {
        for (_, listener) in &mut self.entries {
            listener(&event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn delivers_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        let first = Rc::clone(&log);
        listeners.subscribe(move |e| first.borrow_mut().push((1, *e)));
        let second = Rc::clone(&log);
        listeners.subscribe(move |e| second.borrow_mut().push((2, *e)));

        listeners.emit(FocalEvent::DragStart);
        assert_eq!(
            *log.borrow(),
            vec![(1, FocalEvent::DragStart), (2, FocalEvent::DragStart)]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::default();

        let counter = Rc::clone(&count);
        let id = listeners.subscribe(move |_| *counter.borrow_mut() += 1);
        listeners.emit(FocalEvent::DragEnd);

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        assert!(listeners.is_empty());

        listeners.emit(FocalEvent::DragEnd);
        assert_eq!(*count.borrow(), 1);
    }
}

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::event::{EditorEvent, EventHandler};

/// Broadcasts editor events to every subscribed handler, in emission order.
///
/// Handlers may emit from inside `handle_event`. Such events are queued and delivered
/// once the current event has reached every handler.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
    queue: RefCell<VecDeque<EditorEvent>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.try_borrow().map(|h| h.len()).ok())
            .field("queued", &self.queue.borrow().len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to receive events.
    ///
    /// Must not be called from inside a handler.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn emit(&self, event: EditorEvent) {
        self.queue.borrow_mut().push_back(event);

        // Already dispatching further up the stack; that loop drains the queue
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            return;
        };
        loop {
            let Some(event) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            for handler in handlers.iter_mut() {
                handler.handle_event(&event);
            }
        }
    }
}

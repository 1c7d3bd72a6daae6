//! Event queue connecting the simulation to its consumers
//!
//! The simulation pushes events while it ticks; once the tick is over the
//! queue is drained into the registered handlers (sound, statistics, ...).
//! A handler returns `true` to consume an event and stop forwarding it.

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler<E> {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &E) -> bool;
}

/// FIFO queue of events raised during a frame
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    events: Vec<E>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventQueue<E> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Queue an event
    pub fn push(&mut self, event: E) {
        self.events.push(event);
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Peek at the queued events in order
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.events.iter()
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> std::vec::Drain<'_, E> {
        self.events.drain(..)
    }

    /// Drop every queued event
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Deliver every queued event to the handlers in order
    ///
    /// Returns how many events were delivered.
    pub fn dispatch(&mut self, handlers: &mut [&mut dyn EventHandler<E>]) -> usize {
        let mut delivered = 0;
        for event in self.events.drain(..) {
            for handler in handlers.iter_mut() {
                if handler.on_event(&event) {
                    break;
                }
            }
            delivered += 1;
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        seen: Vec<u32>,
        consume: bool,
    }

    impl EventHandler<u32> for Recorder {
        fn on_event(&mut self, event: &u32) -> bool {
            self.seen.push(*event);
            self.consume
        }
    }

    #[test]
    fn test_dispatch_in_order() {
        let mut queue = EventQueue::new();
        queue.push(1);
        queue.push(2);

        let mut first = Recorder { seen: Vec::new(), consume: false };
        let mut second = Recorder { seen: Vec::new(), consume: false };
        let delivered = queue.dispatch(&mut [&mut first, &mut second]);

        assert_eq!(delivered, 2);
        assert_eq!(first.seen, vec![1, 2]);
        assert_eq!(second.seen, vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_consumed_event_stops_forwarding() {
        let mut queue = EventQueue::new();
        queue.push(7);

        let mut first = Recorder { seen: Vec::new(), consume: true };
        let mut second = Recorder { seen: Vec::new(), consume: false };
        queue.dispatch(&mut [&mut first, &mut second]);

        assert_eq!(first.seen, vec![7]);
        assert!(second.seen.is_empty());
    }
}

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// Notification Fan-out
// ============================================================================
//
// Observers are informed of order status text, synchronously and in
// registration order. The tracker has no transition logic; the session reads
// `Order::status_text()` and pushes it here.
//
// Single-threaded: observers and inboxes are `Rc`-shared, not `Send`.
//
// ============================================================================

pub trait Observer {
    fn update(&mut self, status: &str);
}

#[derive(Default)]
pub struct OrderTracker {
    observers: Vec<Box<dyn Observer>>,
}

impl OrderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
        tracing::debug!(observers = self.observers.len(), "Observer registered");
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify_observers(&mut self, status: &str) {
        tracing::debug!(observers = self.observers.len(), status, "Notifying observers");
        for observer in &mut self.observers {
            observer.update(status);
        }
    }
}

/// A status update addressed to a named recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: String,
    pub status: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} notified: {}", self.recipient, self.status)
    }
}

/// Shared queue of delivered notifications, drained by whoever displays them.
#[derive(Debug, Clone, Default)]
pub struct Inbox(Rc<RefCell<VecDeque<Notification>>>);

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, notification: Notification) {
        self.0.borrow_mut().push_back(notification);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.0.borrow_mut().drain(..).collect()
    }
}

/// A customer watching their order.
pub struct Customer {
    name: String,
    inbox: Inbox,
}

impl Customer {
    pub fn new(name: impl Into<String>, inbox: &Inbox) -> Self {
        Self {
            name: name.into(),
            inbox: inbox.clone(),
        }
    }
}

impl Observer for Customer {
    fn update(&mut self, status: &str) {
        self.inbox.push(Notification {
            recipient: self.name.clone(),
            status: status.to_string(),
        });
    }
}

/// Mirrors every status update into the structured log.
pub struct LogObserver;

impl Observer for LogObserver {
    fn update(&mut self, status: &str) {
        tracing::info!(status, "Order status notification");
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Observer for Recorder {
        fn update(&mut self, status: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.tag, status));
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = OrderTracker::new();
        tracker.add_observer(Recorder { tag: "a", log: log.clone() });
        tracker.add_observer(Recorder { tag: "b", log: log.clone() });

        tracker.notify_observers("first");
        tracker.notify_observers("second");

        assert_eq!(
            *log.borrow(),
            vec!["a:first", "b:first", "a:second", "b:second"]
        );
    }

    #[test]
    fn test_notify_without_observers_is_noop() {
        let mut tracker = OrderTracker::new();
        tracker.notify_observers("nobody listens");
        assert_eq!(tracker.observer_count(), 0);
    }

    #[test]
    fn test_customer_receives_into_inbox() {
        let inbox = Inbox::new();
        let mut tracker = OrderTracker::new();
        tracker.add_observer(Customer::new("Jayan", &inbox));
        tracker.add_observer(LogObserver);

        tracker.notify_observers("Order is being prepared.");
        assert_eq!(inbox.len(), 1);

        let delivered = inbox.drain();
        assert_eq!(delivered[0].to_string(), "Jayan notified: Order is being prepared.");
        assert!(inbox.is_empty());
    }
}

use std::fmt;

/// Handle returned by [`SubscriberSet::subscribe`], used to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An ordered set of change callbacks.
///
/// Both stores notify through one of these. The delivery contract:
///
/// - callbacks run synchronously inside the mutating call, before it
///   returns;
/// - delivery is in registration order;
/// - every currently registered callback is invoked exactly once per
///   notification.
///
/// Callbacks receive a shared reference to the notification payload. A
/// callback therefore cannot mutate the notifying store from inside the
/// notification pass (that would need `&mut` access the callback cannot
/// hold), so the usual re-entrancy hazards of observer lists are ruled out
/// statically.
///
/// # Examples
///
/// ```
/// use daygrid::SubscriberSet;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut set: SubscriberSet<u32> = SubscriberSet::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let seen2 = Rc::clone(&seen);
/// let id = set.subscribe(move |value| seen2.set(*value));
///
/// set.notify(&7);
/// assert_eq!(seen.get(), 7);
///
/// assert!(set.unsubscribe(id));
/// set.notify(&8);
/// assert_eq!(seen.get(), 7);
/// ```
pub struct SubscriberSet<T: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Fn(&T)>)>,
}

impl<T: ?Sized> SubscriberSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        SubscriberSet {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback. Returns the id to pass to [`unsubscribe`].
    ///
    /// [`unsubscribe`]: SubscriberSet::unsubscribe
    pub fn subscribe(&mut self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Deregister a callback. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invoke every registered callback with `value`, in registration order.
    pub fn notify(&self, value: &T) {
        for (_, callback) in &self.entries {
            callback(value);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> Default for SubscriberSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for SubscriberSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("len", &self.entries.len())
            .finish()
    }
}

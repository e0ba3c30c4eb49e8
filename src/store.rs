use crate::conflict::overlaps;
use crate::date_key::DateKey;
use crate::event::{Event, EventPatch};
use crate::subscribe::{SubscriberSet, SubscriptionId};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// The full event collection, indexed by id and by day.
///
/// Two structures are kept in lockstep: a primary `id -> Event` map and a
/// secondary `DateKey -> {id}` partition index used for day-column queries.
/// The invariant is that after every mutation each event's id appears in
/// exactly the partition matching its current `date_key` and in no other,
/// and every indexed id resolves to an event. All index writes go through
/// one internal link/unlink pair, so the two structures cannot be updated
/// independently.
///
/// Mutations referencing an unknown id are silent no-ops: nothing changes
/// and no notification fires. They return `false` so callers that need to
/// distinguish "did nothing" from "succeeded" can.
///
/// Subscribers are handed `&EventStore` itself; the store is the query
/// surface a change handler needs, and a shared reference keeps the
/// notification pass read-only.
///
/// # Examples
///
/// ```
/// use daygrid::{DateKey, Event, EventStore};
///
/// let day: DateKey = "2024-03-05".parse().unwrap();
/// let mut store = EventStore::new();
/// store.upsert_event(Event::new("a", "Standup", day.clone(), 60, 30));
///
/// assert_eq!(store.events_for_date(&day).count(), 1);
/// assert_eq!(store.conflicts_same_day(&day, 75, 30, None).len(), 1);
/// assert_eq!(store.conflicts_same_day(&day, 90, 30, None).len(), 0);
/// ```
#[derive(Default)]
pub struct EventStore {
    events: HashMap<String, Event>,
    by_day: HashMap<DateKey, HashSet<String>>,
    subscribers: SubscriberSet<EventStore>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        EventStore::default()
    }

    /// Insert a new event or fully replace an existing one by id.
    ///
    /// If the day changed (or the event is new), the partition index is
    /// relinked in the same call. Always notifies.
    pub fn upsert_event(&mut self, event: Event) {
        debug!("events: upsert {} on {}", event.id, event.date_key);
        self.link(event);
        self.notify();
    }

    /// Move an event to another day, optionally merging a patch.
    ///
    /// Unknown ids are a silent no-op returning `false`. Otherwise the
    /// patch is applied, the day is forced to `day`, the partition index is
    /// relinked exactly as in [`upsert_event`](EventStore::upsert_event),
    /// and subscribers are notified.
    pub fn move_event_to_day(&mut self, id: &str, day: DateKey, patch: Option<EventPatch>) -> bool {
        let Some(mut event) = self.events.get(id).cloned() else {
            trace!("events: move ignored, unknown id {id}");
            return false;
        };
        if let Some(patch) = patch {
            patch.apply(&mut event);
        }
        debug!("events: move {} {} -> {}", id, event.date_key, day);
        event.date_key = day;
        self.link(event);
        self.notify();
        true
    }

    /// Update an event's timing without touching the partition index.
    ///
    /// Unknown ids are a silent no-op returning `false`. The optional patch
    /// covers the non-timing fields; it cannot change the day.
    pub fn update_event_time(
        &mut self,
        id: &str,
        start_minutes: u32,
        duration: u32,
        patch: Option<EventPatch>,
    ) -> bool {
        let Some(event) = self.events.get_mut(id) else {
            trace!("events: time update ignored, unknown id {id}");
            return false;
        };
        event.start_minutes = start_minutes;
        event.duration = duration;
        if let Some(patch) = patch {
            patch.apply(event);
        }
        debug!("events: retime {id} to {start_minutes}+{duration}");
        self.notify();
        true
    }

    /// Remove an event from both indexes.
    ///
    /// Unknown ids are a silent no-op returning `false`.
    pub fn remove_event(&mut self, id: &str) -> bool {
        let Some(event) = self.events.remove(id) else {
            trace!("events: remove ignored, unknown id {id}");
            return false;
        };
        debug!("events: remove {} from {}", id, event.date_key);
        self.unlink(&event.date_key, id);
        self.notify();
        true
    }

    /// Look up a single event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    /// All events on one day. Empty for unknown days; iteration order is
    /// not specified.
    pub fn events_for_date(&self, day: &DateKey) -> impl Iterator<Item = &Event> {
        self.by_day
            .get(day)
            .into_iter()
            .flatten()
            .filter_map(|id| self.events.get(id))
    }

    /// Number of events linked to one day's partition.
    pub fn day_len(&self, day: &DateKey) -> usize {
        self.by_day.get(day).map_or(0, HashSet::len)
    }

    /// Days that currently have at least one event. Empty partitions are
    /// pruned on unlink, so this never yields a day with `day_len` 0.
    pub fn days(&self) -> impl Iterator<Item = &DateKey> {
        self.by_day.keys()
    }

    /// Every event on `day` whose half-open interval overlaps the query
    /// interval, excluding `exclude` (the event being dragged or resized).
    ///
    /// Touching intervals do not conflict; see [`overlaps`](crate::overlaps)
    /// for the exact rule. This is a pure query: the caller's policy decides
    /// whether the answer blocks, informs, or is ignored.
    pub fn conflicts_same_day(
        &self,
        day: &DateKey,
        start_minutes: u32,
        duration: u32,
        exclude: Option<&str>,
    ) -> Vec<&Event> {
        self.events_for_date(day)
            .filter(|event| exclude != Some(event.id.as_str()))
            .filter(|event| overlaps(start_minutes, duration, event.start_minutes, event.duration))
            .collect()
    }

    /// Every event in the store, any order.
    pub fn all_events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    /// Total number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Register a callback invoked once per successful mutation. No-op
    /// mutations (unknown id) do not notify. See [`SubscriberSet`] for the
    /// delivery contract.
    pub fn subscribe(&mut self, callback: impl Fn(&EventStore) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Deregister a callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // The only way anything enters the indexes. Removes the id from its
    // previous partition when the day changed, then writes both structures.
    fn link(&mut self, event: Event) {
        let previous_day = self.events.get(&event.id).map(|e| e.date_key.clone());
        if let Some(previous_day) = previous_day {
            if previous_day != event.date_key {
                self.unlink(&previous_day, &event.id);
            }
        }
        self.by_day
            .entry(event.date_key.clone())
            .or_default()
            .insert(event.id.clone());
        self.events.insert(event.id.clone(), event);
    }

    // The only way an id leaves a partition. Prunes emptied partitions so
    // `days()` stays an occupancy list.
    fn unlink(&mut self, day: &DateKey, id: &str) {
        if let Some(ids) = self.by_day.get_mut(day) {
            ids.remove(id);
            if ids.is_empty() {
                self.by_day.remove(day);
            }
        }
    }

    fn notify(&self) {
        self.subscribers.notify(self);
    }
}

impl fmt::Debug for EventStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStore")
            .field("events", &self.events.len())
            .field("days", &self.by_day.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

use crate::date_key::DateKey;
use crate::subscribe::{SubscriberSet, SubscriptionId};
use chrono::{Local, NaiveDate, Weekday};
use log::debug;
use std::sync::Arc;

/// The week-start convention for the whole grid. Monday, fixed.
pub const WEEK_STARTS_ON: Weekday = Weekday::Mon;

/// An immutable view of the date store's state.
///
/// Snapshots are shared via [`Arc`]: as long as no mutation happens, every
/// call to [`DateStore::snapshot`] returns the same allocation, which lets
/// change-detecting consumers compare identity (`Arc::ptr_eq`) instead of
/// contents to skip redundant re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSnapshot {
    /// The currently viewed day. Always present; there is no "no selection"
    /// state.
    pub selected: NaiveDate,
    /// Always [`WEEK_STARTS_ON`]; carried in the snapshot so consumers can
    /// lay out week headers without reaching back into the store.
    pub week_starts_on: Weekday,
}

/// Holds the single "currently viewed" date and its navigation actions.
///
/// Construct one at startup and pass it through the composition root; the
/// crate keeps no global instance. Every mutating action installs a fresh
/// snapshot and synchronously notifies subscribers, exactly once each.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daygrid::DateStore;
///
/// let mut store = DateStore::starting_at(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
/// store.next_day();
/// assert_eq!(store.date_key().as_str(), "2024-03-06");
/// ```
#[derive(Debug)]
pub struct DateStore {
    snapshot: Arc<DateSnapshot>,
    subscribers: SubscriberSet<DateSnapshot>,
}

impl DateStore {
    /// Create a store viewing today (local wall-clock date).
    pub fn new() -> Self {
        Self::starting_at(Local::now().date_naive())
    }

    /// Create a store viewing a specific date. Deterministic constructor
    /// for tests and for restoring a previous session's view.
    pub fn starting_at(date: NaiveDate) -> Self {
        DateStore {
            snapshot: Arc::new(DateSnapshot {
                selected: date,
                week_starts_on: WEEK_STARTS_ON,
            }),
            subscribers: SubscriberSet::new(),
        }
    }

    /// The current snapshot. Referentially stable between mutations.
    pub fn snapshot(&self) -> Arc<DateSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// The currently viewed date.
    pub fn selected(&self) -> NaiveDate {
        self.snapshot.selected
    }

    /// Replace the viewed date.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.replace(date);
    }

    /// Shift the viewed date forward one calendar day. Saturates at the
    /// last representable date.
    pub fn next_day(&mut self) {
        let selected = self.snapshot.selected;
        self.replace(selected.succ_opt().unwrap_or(selected));
    }

    /// Shift the viewed date back one calendar day. Saturates at the first
    /// representable date.
    pub fn prev_day(&mut self) {
        let selected = self.snapshot.selected;
        self.replace(selected.pred_opt().unwrap_or(selected));
    }

    /// Jump back to today (local wall-clock date).
    pub fn go_today(&mut self) {
        self.replace(Local::now().date_naive());
    }

    /// First day of the Monday-based week containing the viewed date.
    pub fn week_start(&self) -> NaiveDate {
        self.snapshot
            .selected
            .week(self.snapshot.week_starts_on)
            .first_day()
    }

    /// Canonical day-partition key for the viewed date.
    pub fn date_key(&self) -> DateKey {
        DateKey::from(self.snapshot.selected)
    }

    /// Register a callback invoked with the new snapshot after every
    /// mutating action. See [`SubscriberSet`] for the delivery contract.
    pub fn subscribe(&mut self, callback: impl Fn(&DateSnapshot) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Deregister a callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // Every mutating action funnels through here: new snapshot, one
    // notification pass.
    fn replace(&mut self, date: NaiveDate) {
        debug!("date store: select {date}");
        self.snapshot = Arc::new(DateSnapshot {
            selected: date,
            week_starts_on: self.snapshot.week_starts_on,
        });
        self.subscribers.notify(self.snapshot.as_ref());
    }
}

impl Default for DateStore {
    fn default() -> Self {
        Self::new()
    }
}

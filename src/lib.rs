mod clock;
mod conflict;
mod date;
mod date_key;
mod event;
mod policy;
mod store;
mod subscribe;

pub use clock::{format_clock, format_date, ClockTime, DateOrder, TimeFormat, DEFAULT_CLOCK};
pub use conflict::{overlap_minutes, overlaps};
pub use date::{DateSnapshot, DateStore, WEEK_STARTS_ON};
pub use date_key::{DateKey, ParseDateKeyError};
pub use event::{Event, EventPatch, EventType};
pub use policy::{CommitPolicy, ConflictBehavior, SchedulingPolicy};
pub use store::EventStore;
pub use subscribe::{SubscriberSet, SubscriptionId};

use crate::date_key::DateKey;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scheduled event on one calendar day.
///
/// Events are the unit of state exchanged with rendering and drag-and-drop
/// collaborators. Timing is wall-clock: `start_minutes` is an offset in
/// minutes from the grid's day-start hour, and `duration` is a length in
/// minutes (expected to be positive for a well-formed event, but not
/// enforced at the type level; a zero-length event conflicts with nothing).
///
/// The serialized form uses camelCase field names (`dateKey`,
/// `startMinutes`, `typeId`) because that is the convention of the UI layer
/// consuming the boundary. Optional decorative fields (`color`, `type_id`,
/// `meta`) are omitted from output when absent.
///
/// # Examples
///
/// ```
/// use daygrid::Event;
///
/// let event = Event::new("evt-1", "Standup", "2024-03-05".parse().unwrap(), 30, 15)
///     .with_color("#7aa2f7")
///     .with_type("meeting");
/// assert_eq!(event.id, "evt-1");
/// assert_eq!(event.date_key.as_str(), "2024-03-05");
/// assert_eq!(event.type_id.as_deref(), Some("meeting"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique, stable identifier. Assigned at creation and never changed.
    pub id: String,

    /// Display text.
    pub label: String,

    /// The day partition this event belongs to. Exactly one per event;
    /// changed only through [`EventStore::move_event_to_day`] or a
    /// replacing upsert, which relink the date index atomically.
    ///
    /// [`EventStore::move_event_to_day`]: crate::EventStore::move_event_to_day
    pub date_key: DateKey,

    /// Minutes from the grid's day-start hour to the event's start.
    pub start_minutes: u32,

    /// Event length in minutes.
    pub duration: u32,

    /// Display color, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Reference to an [`EventType`] by id. The store does not resolve or
    /// validate the reference; type entities live with the UI layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,

    /// Extensible metadata bag for collaborator-defined extras. The core
    /// never interprets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Event {
    /// Create an event with the required fields. Optional fields default to
    /// `None`; use the builder methods to set them.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        date_key: DateKey,
        start_minutes: u32,
        duration: u32,
    ) -> Self {
        Event {
            id: id.into(),
            label: label.into(),
            date_key,
            start_minutes,
            duration,
            color: None,
            type_id: None,
            meta: None,
        }
    }

    /// Set the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the event-type reference.
    pub fn with_type(mut self, type_id: impl Into<String>) -> Self {
        self.type_id = Some(type_id.into());
        self
    }

    /// Set the metadata bag.
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// End of the event's half-open interval, in minutes from day start.
    pub fn end_minutes(&self) -> u32 {
        self.start_minutes + self.duration
    }
}

/// A merge-patch applied alongside a move or timing update.
///
/// `None` fields leave the event untouched. The patch carries no day or
/// timing fields: partitioning and timing are owned by the store operations
/// themselves, so a patch cannot desynchronize the date index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl EventPatch {
    pub(crate) fn apply(self, event: &mut Event) {
        if let Some(label) = self.label {
            event.label = label;
        }
        if let Some(color) = self.color {
            event.color = Some(color);
        }
        if let Some(type_id) = self.type_id {
            event.type_id = Some(type_id);
        }
        if let Some(meta) = self.meta {
            event.meta = Some(meta);
        }
    }
}

/// A category of events, exchanged with the modal collaborators that manage
/// them. The core stores only the [`Event::type_id`] foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: String,
    pub name: String,
    pub color: String,
}

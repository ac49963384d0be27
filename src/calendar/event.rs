use serde::{Deserialize, Serialize};

/// A calendar entry in the display-ready shape the rendering widget consumes.
///
/// `start` and `end` carry the remote timestamp strings verbatim: either an
/// RFC 3339 date-time ("2024-06-01T10:00:00Z") or a date-only value
/// ("2024-06-01") for all-day entries. `start <= end` is not enforced here;
/// whoever supplies the dates is responsible for their ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
}

impl CalendarEvent {
    pub fn is_all_day(&self) -> bool {
        !self.start.contains('T')
    }
}

/// The four prompted inputs of an add-event action, collected before any
/// remote call is made.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl EventDraft {
    pub fn new(title: &str, date: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    /// A draft is complete when every field has content. An incomplete draft
    /// is a user cancellation, not an error.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.date.trim().is_empty()
            && !self.start_time.trim().is_empty()
            && !self.end_time.trim().is_empty()
    }
}

pub mod event_sync;
pub mod google_api;

pub use event_sync::{EventSynchronizer, SyncError};
pub use google_api::{CalendarApi, GoogleCalendarClient};

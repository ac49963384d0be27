pub mod app;
pub mod calendar;
pub mod input;
pub mod session;
pub mod storage;
pub mod sync;
pub mod view;

pub use app::{AppState, Controller};
pub use calendar::{CalendarEvent, EventDraft};
pub use session::{LoginOutcome, Session, SessionManager, SessionState};
pub use view::{CalendarWidget, TextWidget, ViewController, ViewMode};

pub use input::{Command, parse_command};

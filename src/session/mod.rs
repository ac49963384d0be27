pub mod manager;

pub use manager::{AuthError, LoginOutcome, Session, SessionManager, SessionState};

use crate::calendar::{CalendarEvent, EventDraft};
use crate::session::{LoginOutcome, SessionManager, SessionState};
use crate::sync::EventSynchronizer;
use crate::view::{CalendarWidget, ViewController, ViewMode};

/// Application state: the in-memory event list. Replaced wholesale on each
/// fetch, appended to on each successful add, cleared on logout. Order is
/// fetch order followed by locally appended events; no re-sorting.
#[derive(Debug, Default)]
pub struct AppState {
    events: Vec<CalendarEvent>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn replace_events(&mut self, events: Vec<CalendarEvent>) {
        self.events = events;
    }

    pub fn append_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

/// Top-level controller wiring the session manager, the event synchronizer
/// and the view controller together. All failure recovery is local: errors
/// are logged, add-event failures additionally raise a generic alert, and
/// the process never dies over a failed call.
pub struct Controller<W: CalendarWidget> {
    state: AppState,
    session: SessionManager,
    sync: EventSynchronizer,
    view: ViewController<W>,
}

impl<W: CalendarWidget> Controller<W> {
    pub fn new(session: SessionManager, sync: EventSynchronizer, view: ViewController<W>) -> Self {
        Self {
            state: AppState::new(),
            session,
            sync,
            view,
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        self.state.events()
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn login_url(&self) -> String {
        self.session.login_url()
    }

    pub fn print_login_instructions(&self) {
        self.session.print_login_instructions();
    }

    /// Consumes the login widget's outcome. A successful exchange triggers
    /// exactly one event fetch; every failure leaves the session logged out
    /// and fetches nothing.
    pub async fn handle_login(&mut self, outcome: LoginOutcome) -> SessionState {
        match outcome {
            LoginOutcome::Failed { reason } => {
                tracing::error!("Login failed: {}", reason);
            }
            LoginOutcome::Succeeded { assertion } => match self.session.login(&assertion).await {
                Ok(_) => {
                    self.refresh_events().await;
                }
                Err(e) => {
                    tracing::error!("Token exchange failed: {}", e);
                }
            },
        }

        self.session.state()
    }

    /// Refetches the calendar and replaces the list wholesale. A failed
    /// refresh is logged and leaves the previous list untouched.
    pub async fn refresh_events(&mut self) {
        let Some(token) = self.session.token().map(str::to_owned) else {
            return;
        };

        match self.sync.fetch_events(&token).await {
            Ok(events) => {
                self.state.replace_events(events);
                self.view.data_changed(self.state.events());
            }
            Err(e) => {
                tracing::error!("Failed to fetch events: {}", e);
            }
        }
    }

    /// Creates an event from the prompted draft and appends it at the end of
    /// the list. Cancellation is silent; failure raises a generic alert and
    /// leaves the list unchanged.
    pub async fn add_event(&mut self, draft: &EventDraft) {
        let Some(token) = self.session.token().map(str::to_owned) else {
            self.view.notify("Please log in first.");
            return;
        };

        match self.sync.add_event(&token, draft).await {
            Ok(Some(event)) => {
                self.state.append_event(event);
                self.view.data_changed(self.state.events());
                self.view.notify("Event added!");
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Failed to add event: {}", e);
                self.view.notify("Failed to add event.");
            }
        }
    }

    /// Clears the session and the event list. Safe to call in any state.
    pub fn logout(&mut self) {
        self.session.logout();
        self.state.clear_events();
        self.view.data_changed(self.state.events());
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.set_mode(mode, self.state.events());
    }
}

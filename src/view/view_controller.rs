use crate::calendar::CalendarEvent;
use crate::view::widget::CalendarWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Day,
    Month,
    Year,
}

impl ViewMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "day" => Some(ViewMode::Day),
            "month" => Some(ViewMode::Month),
            "year" => Some(ViewMode::Year),
            _ => None,
        }
    }

    /// Lookup with the Month fallback, for config values.
    pub fn get_by_name(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Month => "month",
            ViewMode::Year => "year",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Month
    }
}

/// Owns the selected view mode and hands the current event list and mode to
/// the rendering widget. Rendering is always a full replace; the widget is
/// driven by explicit data-changed notifications, never by identity checks.
pub struct ViewController<W: CalendarWidget> {
    mode: ViewMode,
    widget: W,
}

impl<W: CalendarWidget> ViewController<W> {
    pub fn new(widget: W, mode: ViewMode) -> Self {
        Self { mode, widget }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switches the view mode, taking effect immediately with a full
    /// re-render. Any mode may follow any mode.
    pub fn set_mode(&mut self, mode: ViewMode, events: &[CalendarEvent]) {
        self.mode = mode;
        self.widget.display(events, mode);
    }

    /// The data-changed notification: re-renders the whole list in the
    /// current mode.
    pub fn data_changed(&mut self, events: &[CalendarEvent]) {
        self.widget.display(events, self.mode);
    }

    pub fn notify(&mut self, message: &str) {
        self.widget.notify(message);
    }
}

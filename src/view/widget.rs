use crate::calendar::CalendarEvent;
use crate::view::view_controller::ViewMode;

/// The rendering boundary. The real calendar widget is an external
/// collaborator; this crate only hands it the full event list and the mode
/// and never patches its dataset incrementally.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarWidget {
    /// Replaces the widget's dataset wholesale and renders it in `mode`.
    fn display(&mut self, events: &[CalendarEvent], mode: ViewMode);

    /// Generic user-facing alert, e.g. for add-event failures.
    fn notify(&mut self, message: &str);
}

/// Minimal built-in widget: prints a text agenda to stdout.
pub struct TextWidget;

impl CalendarWidget for TextWidget {
    fn display(&mut self, events: &[CalendarEvent], mode: ViewMode) {
        println!("\n── Calendar ({} view) ──", mode.name());
        if events.is_empty() {
            println!("No events scheduled.");
        } else {
            for event in events {
                println!("- {}", agenda_line(event));
            }
        }
        println!();
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

fn agenda_line(event: &CalendarEvent) -> String {
    let time_label = if event.is_all_day() {
        format!("{} (all day)", event.start)
    } else if event.start == event.end {
        event.start.clone()
    } else {
        format!("{} – {}", event.start, event.end)
    };

    format!("{:<45} {}", time_label, event.title)
}

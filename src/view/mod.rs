pub mod view_controller;
pub mod widget;

pub use view_controller::{ViewController, ViewMode};
pub use widget::{CalendarWidget, TextWidget};

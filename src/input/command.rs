use crate::view::ViewMode;

#[derive(Debug, PartialEq)]
pub enum Command {
    AddEvent,
    View(ViewMode),
    Refresh,
    Logout,
    Help,
    Quit,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let parts: Vec<&str> = input.trim().split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "add" | "a" => Command::AddEvent,
        "view" | "v" => {
            if parts.len() < 2 {
                Command::Error("view requires a mode: day, month or year".to_string())
            } else if let Some(mode) = ViewMode::from_name(parts[1]) {
                Command::View(mode)
            } else {
                Command::Error(format!("Unknown view mode: {}", parts[1]))
            }
        }
        "refresh" | "r" => Command::Refresh,
        "logout" => Command::Logout,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

use std::io::{self, Write};

use calview::{
    app::Controller,
    calendar::EventDraft,
    input::{Command, is_valid_date, is_valid_time, parse_command},
    session::{LoginOutcome, SessionState},
    view::CalendarWidget,
};

/// The blocking console conversation. While logged out the user pastes an
/// identity assertion; while logged in they issue commands. All network
/// calls run sequentially inside the controller, so the loop never needs
/// coordination.
pub async fn run_shell<W: CalendarWidget>(mut controller: Controller<W>) -> anyhow::Result<()> {
    let mut show_instructions = true;

    loop {
        match controller.session_state() {
            SessionState::LoggedOut => {
                if show_instructions {
                    controller.print_login_instructions();
                    show_instructions = false;
                }

                let Some(line) = prompt_line("assertion (or 'q' to quit)> ")? else {
                    return Ok(());
                };

                match line.as_str() {
                    "" => continue,
                    "q" | "quit" => return Ok(()),
                    assertion => {
                        let state = controller
                            .handle_login(LoginOutcome::Succeeded {
                                assertion: assertion.to_string(),
                            })
                            .await;

                        match state {
                            SessionState::LoggedIn => {
                                println!(
                                    "Signed in. {} events loaded. Type 'help' for commands.",
                                    controller.events().len()
                                );
                            }
                            SessionState::LoggedOut => {
                                println!("Login failed. See the log for details.");
                            }
                        }
                    }
                }
            }
            SessionState::LoggedIn => {
                let Some(line) = prompt_line("calview> ")? else {
                    return Ok(());
                };
                if line.is_empty() {
                    continue;
                }

                match parse_command(&line) {
                    Command::AddEvent => {
                        if let Some(draft) = prompt_event_draft()? {
                            controller.add_event(&draft).await;
                        }
                    }
                    Command::View(mode) => controller.set_view_mode(mode),
                    Command::Refresh => {
                        controller.refresh_events().await;
                        println!("{} events loaded.", controller.events().len());
                    }
                    Command::Logout => {
                        controller.logout();
                        println!("Logged out.");
                        show_instructions = true;
                    }
                    Command::Help => print_help(),
                    Command::Quit => return Ok(()),
                    Command::Error(message) => println!("{}", message),
                }
            }
        }
    }
}

/// Four sequential prompts for a new event. Leaving any answer empty aborts
/// the whole add with no side effects; a malformed date or time is rejected
/// before any remote call.
fn prompt_event_draft() -> io::Result<Option<EventDraft>> {
    let Some(title) = prompt_line("Event title: ")? else {
        return Ok(None);
    };
    if title.is_empty() {
        return Ok(None);
    }

    let Some(date) = prompt_line("Event date (YYYY-MM-DD): ")? else {
        return Ok(None);
    };
    if date.is_empty() {
        return Ok(None);
    }
    if !is_valid_date(&date) {
        println!("Invalid date '{}', expected YYYY-MM-DD.", date);
        return Ok(None);
    }

    let Some(start_time) = prompt_line("Start time (HH:MM, 24-hour): ")? else {
        return Ok(None);
    };
    if start_time.is_empty() {
        return Ok(None);
    }
    if !is_valid_time(&start_time) {
        println!("Invalid time '{}', expected HH:MM.", start_time);
        return Ok(None);
    }

    let Some(end_time) = prompt_line("End time (HH:MM, 24-hour): ")? else {
        return Ok(None);
    };
    if end_time.is_empty() {
        return Ok(None);
    }
    if !is_valid_time(&end_time) {
        println!("Invalid time '{}', expected HH:MM.", end_time);
        return Ok(None);
    }

    Ok(Some(EventDraft::new(&title, &date, &start_time, &end_time)))
}

/// Reads one trimmed line; None on end of input.
fn prompt_line(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn print_help() {
    println!("Commands:");
    println!("  add            Create a new event (prompts for details)");
    println!("  view <mode>    Switch the calendar view: day, month or year");
    println!("  refresh        Refetch events from the calendar");
    println!("  logout         Sign out and clear the event list");
    println!("  help           Show this help");
    println!("  quit           Exit");
}

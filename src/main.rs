mod cli;
mod shell;

use calview::{
    app::Controller,
    session::SessionManager,
    storage::config::Config,
    sync::EventSynchronizer,
    view::{TextWidget, ViewController, ViewMode},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let options = match cli::parse_cli_args() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("Usage: calview [--view day|month|year]");
            return Ok(());
        }
    };

    let config = Config::load_or_create()?;

    if config.google.client_id.is_empty() {
        println!("Configuration incomplete. Please edit the config file at:");
        println!("{}", Config::config_path().display());
        println!("\nYou need to set:");
        println!("  - google.client_id: Your OAuth2 client ID");
        println!("\nGet this from: https://console.cloud.google.com/apis/credentials");
        return Ok(());
    }

    let initial_view = options
        .view
        .unwrap_or_else(|| ViewMode::get_by_name(&config.ui.default_view));

    let session = SessionManager::new(config.google.client_id.clone());
    let sync = EventSynchronizer::new(config.calendar.id.clone(), &config.calendar.time_zone)?;
    let view = ViewController::new(TextWidget, initial_view);
    let controller = Controller::new(session, sync, view);

    shell::run_shell(controller).await
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("calview"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "calview.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("calview started");
}

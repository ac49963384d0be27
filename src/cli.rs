use std::env;

use calview::view::ViewMode;

pub struct CliOptions {
    pub view: Option<ViewMode>,
}

pub fn parse_cli_args() -> Result<CliOptions, String> {
    let mut view = None;
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--view" => {
                let name = args
                    .next()
                    .ok_or_else(|| "--view requires a mode: day, month or year".to_string())?;
                view = Some(
                    ViewMode::from_name(&name)
                        .ok_or_else(|| format!("Unknown view mode: {}", name))?,
                );
            }
            "--help" => {
                println!("Usage: calview [--view day|month|year]");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliOptions { view })
}

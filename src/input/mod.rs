pub mod command;
pub mod validate;

pub use command::{Command, parse_command};
pub use validate::{is_valid_date, is_valid_time};

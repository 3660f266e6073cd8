//! CLI domain: parse, route, output, and presentation only.
//! The route table dispatches to the loader and the evaluator.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{parse_condition, Cli, Commands, OutputFormat};
pub use presentation::{format_inspect_text, format_records_json, format_records_text};
pub use route::RunContext;

//! Command-line interface for argot
//! This binary classifies its trailing arguments, validates them against a demo grammar and
//! prints what was collected.
//!
//! Usage:
//!   argot [--config `<file>`] [--format text|json] `<args>`...   - Parse and dispatch
//!   argot --tokens `<args>`...                                   - Print the classified stream
//!
//! Exit status is 0 on success, 2 when the input is rejected and 1 on any other failure.

mod demo;

use std::process::ExitCode;

use argot_config::{ArgotConfig, ConfigError, Loader, OutputFormat};
use argot_parser::argot::token::render_tokens;
use argot_parser::argot::{Function, GrammarNode, Outcome};
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = Command::new("argot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify, validate and dispatch command-line arguments against a demo grammar")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file layered over the defaults and ./argot.toml"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["text", "json"])
                .help("Output format (default: cli.format from the configuration)"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the classified token stream instead of dispatching")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Log parser decisions to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("args")
                .help("Arguments handed to the demo grammar")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .get_matches();

    let config = match load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::from(1);
        }
    };
    init_tracing(matches.get_flag("debug"), &config.cli.log_level);

    let args: Vec<&str> = matches
        .get_many::<String>("args")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();

    let mut parser = match demo::parser(&config.tokens) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("Grammar error: {}", err);
            return ExitCode::from(1);
        }
    };

    if matches.get_flag("tokens") {
        let tokens = parser.table().classify(&args);
        return match config.cli.format {
            OutputFormat::Text => {
                println!("{}", render_tokens(&tokens));
                ExitCode::SUCCESS
            }
            OutputFormat::Json => print_json(&tokens),
        };
    }

    match parser.parse(&args) {
        Ok(Outcome::Ready(function)) => {
            function.run();
            match config.cli.format {
                OutputFormat::Text => {
                    print!("{}", render_values(function));
                    ExitCode::SUCCESS
                }
                OutputFormat::Json => print_json(&serde_json::json!({
                    "function": function.key().primary(),
                    "values": function.values(),
                })),
            }
        }
        Ok(Outcome::Rejected(message)) => {
            match config.cli.format {
                OutputFormat::Text => eprintln!("{}", message),
                OutputFormat::Json => match serde_json::to_string_pretty(&message) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("{}", message),
                },
            }
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Parser error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn load_config(
    path: Option<&String>,
    format: Option<&String>,
) -> Result<ArgotConfig, ConfigError> {
    let mut loader = Loader::new().with_project_file(".");
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader.with_format(format)?;
    }
    loader.build()
}

fn init_tracing(debug: bool, level: &str) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The function name followed by one `key=value` line per collected value.
fn render_values(function: &Function) -> String {
    let mut out = format!("{}\n", function.key().primary());
    for (key, value) in function.values().iter() {
        out.push_str(&format!("{}={}\n", key, value));
    }
    out
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error formatting output: {}", err);
            ExitCode::from(1)
        }
    }
}

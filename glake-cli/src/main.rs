//! Command-line interface for glake toolbar parsing
//! This binary exposes the toolbar tokenizer, var ref scanner, home var encoding and UTF-16
//! offset translation for inspection and scripting.
//!
//! Usage:
//!   glake tokens `<text>`                           - List parts and args with byte spans
//!   glake varrefs `<text>`                          - List `$name` / `~name` references
//!   glake vars `<text>`                             - List `$name=value` declarations
//!   glake expand `<text>` [--var `NAME=VALUE`]...   - Substitute variable references
//!   glake encode `<path>` / decode `<name>`         - Apply home var abbreviations
//!   glake position `<file>` `<offset>`              - Byte offset to line:character
//!   glake offset `<file>` `<line>` `<character>`    - line:character to byte offset
//!   glake range `<file>` `<l1>` `<c1>` `<l2>` `<c2>`      - Range to byte offset and length
//!
//! A `<text>` of `-` is read from stdin. Set `RUST_LOG` to see tracing output on stderr.

mod commands;
mod error;
mod output;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use glake_config::Loader;
use glake_parser::position::{Position, Range};
use tracing::debug;

use crate::commands::Session;
use crate::error::CliError;
use crate::output::{Format, AVAILABLE_FORMATS};

fn main() {
    init_tracing();
    let matches = build_cli().get_matches();
    match run(&matches) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Tracing goes to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn build_cli() -> Command {
    let text = || Arg::new("text").help("Toolbar text, or - for stdin").required(true);
    let file = || {
        Arg::new("file")
            .help("File holding the buffer")
            .required(true)
            .value_parser(value_parser!(PathBuf))
    };
    let number = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .help(help)
            .required(true)
            .value_parser(value_parser!(usize))
    };

    Command::new("glake")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect glake toolbar parsing and offset translation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Extra configuration file layered over the defaults and the user file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("escape")
                .long("escape")
                .global(true)
                .help("Escape rune, overriding the configuration")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format")
                .value_parser(AVAILABLE_FORMATS.to_vec())
                .default_value("tag"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Split toolbar text into parts and args")
                .arg(text()),
        )
        .subcommand(
            Command::new("varrefs")
                .about("List variable references")
                .arg(text()),
        )
        .subcommand(
            Command::new("vars")
                .about("List variable declarations")
                .arg(text()),
        )
        .subcommand(
            Command::new("expand")
                .about("Substitute variable references")
                .arg(text())
                .arg(
                    Arg::new("var")
                        .long("var")
                        .help("Variable as NAME=VALUE, e.g. '$font=mono'")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("toolbar")
                        .long("toolbar")
                        .help("Toolbar text whose declarations are also used"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Abbreviate a path with the home vars")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(
            Command::new("decode")
                .about("Expand a home var abbreviated name")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(
            Command::new("position")
                .about("Translate a byte offset into a 0-based line and UTF-16 character")
                .arg(file())
                .arg(number("offset", "Byte offset")),
        )
        .subcommand(
            Command::new("offset")
                .about("Translate a 0-based line and UTF-16 character into a byte offset")
                .arg(file())
                .arg(number("line", "Line"))
                .arg(number("character", "UTF-16 character")),
        )
        .subcommand(
            Command::new("range")
                .about("Translate a range into a byte offset and length")
                .arg(file())
                .arg(number("start-line", "Start line"))
                .arg(number("start-character", "Start UTF-16 character"))
                .arg(number("end-line", "End line"))
                .arg(number("end-character", "End UTF-16 character")),
        )
}

fn run(matches: &ArgMatches) -> Result<String, CliError> {
    let session = session(matches)?;
    let Some((name, sub)) = matches.subcommand() else {
        return Ok(String::new());
    };
    debug!(command = name, format = ?session.format, "running");
    match name {
        "tokens" => session.tokens(&text_arg(sub)?),
        "varrefs" => session.varrefs(&text_arg(sub)?),
        "vars" => session.vars(&text_arg(sub)?),
        "expand" => {
            let vars: Vec<String> = sub
                .get_many::<String>("var")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            let toolbar = sub.get_one::<String>("toolbar").map(String::as_str);
            session.expand(&text_arg(sub)?, &vars, toolbar)
        }
        "encode" => session.encode(string_arg(sub, "path")),
        "decode" => session.decode(string_arg(sub, "name")),
        "position" => session.position(&read_file(sub)?, number_arg(sub, "offset")),
        "offset" => {
            let pos = Position::new(number_arg(sub, "line"), number_arg(sub, "character"));
            session.offset(&read_file(sub)?, pos)
        }
        "range" => {
            let range = Range::new(
                Position::new(
                    number_arg(sub, "start-line"),
                    number_arg(sub, "start-character"),
                ),
                Position::new(number_arg(sub, "end-line"), number_arg(sub, "end-character")),
            );
            session.range(&read_file(sub)?, range)
        }
        _ => unreachable!("subcommand_required"),
    }
}

fn session(matches: &ArgMatches) -> Result<Session, CliError> {
    let mut loader = Loader::new().with_user_file();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(escape) = matches.get_one::<char>("escape") {
        debug!(%escape, "escape rune from the command line");
        loader = loader.set_override("scan.escape_rune", escape.to_string())?;
    }
    let config = loader.build()?;
    debug!(
        escape = %config.scan_options().escape,
        home_vars = config.home_vars.entries.len(),
        "configuration loaded"
    );
    let format = matches
        .get_one::<String>("format")
        .map_or(Format::Tag, |f| Format::from_name(f));
    Ok(Session {
        options: config.scan_options(),
        home_vars: config.home_vars(),
        format,
    })
}

fn string_arg<'a>(sub: &'a ArgMatches, name: &str) -> &'a str {
    sub.get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn number_arg(sub: &ArgMatches, name: &str) -> usize {
    sub.get_one::<usize>(name).copied().unwrap_or_default()
}

fn text_arg(sub: &ArgMatches) -> Result<String, CliError> {
    match string_arg(sub, "text") {
        "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
        }
        text => Ok(text.to_string()),
    }
}

fn read_file(sub: &ArgMatches) -> Result<Vec<u8>, CliError> {
    let path = sub
        .get_one::<PathBuf>("file")
        .map_or(Path::new(""), PathBuf::as_path);
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

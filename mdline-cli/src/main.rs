//! Command-line interface for mdline
//! This binary reads a markdown file and renders it to html or terminal escapes.
//!
//! Usage:
//!   mdline `<path>` [--out `<file>`] [--format `<format>`]   - Render a file
//!   mdline `<path>` --inspect                              - Dump line classification as JSON
//!   mdline --list-formats                                  - List all available formats

mod command;
mod error;
mod selection;

use clap::ArgMatches;
use error::CliError;
use log::{debug, info, LevelFilter};
use mdline_config::{Loader, MdlineConfig};
use mdline_parser::{inspect, FormatRegistry, RenderError};
use std::io::Write;
use std::path::PathBuf;

fn main() {
    let matches = command::build_command().get_matches();
    let registry = FormatRegistry::with_defaults();

    if let Err(err) = run(&matches, &registry) {
        eprintln!("Error: {}", err);
        if let CliError::Render(RenderError::UnknownFormat(_)) = &err {
            eprintln!("\nAvailable formats:");
            for name in registry.list_formats() {
                eprintln!("  {}", name);
            }
        }
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches, registry: &FormatRegistry) -> Result<(), CliError> {
    let config = load_config(matches)?;
    init_logging(config.log.level.into());

    if matches.get_flag("list-formats") {
        handle_list_formats_command(registry);
        return Ok(());
    }

    let path = matches
        .get_one::<String>("path")
        .map(PathBuf::from)
        .ok_or(CliError::MissingInput)?;
    let source = std::fs::read_to_string(&path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;

    if matches.get_flag("inspect") {
        return handle_inspect_command(&source);
    }

    let out = matches.get_one::<String>("out").map(PathBuf::from);
    let format = selection::select_format(
        matches.get_one::<String>("format").map(String::as_str),
        config.render.format,
        out.is_some(),
    );
    handle_render_command(registry, &config, &source, &format, out)
}

fn load_config(matches: &ArgMatches) -> Result<MdlineConfig, CliError> {
    let mut loader = Loader::new().with_user_file();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        loader = loader.set_override("log.level", level.as_str())?;
    }
    Ok(loader.build()?)
}

/// Logs go to stderr; the configured level is the default and RUST_LOG overrides it
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Handle the render command
fn handle_render_command(
    registry: &FormatRegistry,
    config: &MdlineConfig,
    source: &str,
    format: &str,
    out: Option<PathBuf>,
) -> Result<(), CliError> {
    info!("rendering with format '{}'", format);
    let rendered = registry.render(source, format)?;

    match out {
        Some(path) => {
            debug!("writing {} bytes to {}", rendered.len(), path.display());
            std::fs::write(&path, rendered).map_err(|source| CliError::Write { path, source })
        }
        None => write_stdout(&rendered, config.output.trailing_newline).map_err(CliError::Stdout),
    }
}

fn write_stdout(rendered: &str, trailing_newline: bool) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if trailing_newline {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}

/// Handle the inspect command
fn handle_inspect_command(source: &str) -> Result<(), CliError> {
    let records = inspect(source)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Ok(format) = registry.get(&name) {
            println!("    {}", format.description());
        }
        println!();
    }
}

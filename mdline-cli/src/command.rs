// Shared with build.rs (via include!) so completions match the real parser.
use clap::{Arg, ArgAction, Command, ValueHint};

pub fn build_command() -> Command {
    Command::new("mdline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render mdline markdown to html or terminal escapes")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the markdown file")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Write output to this file instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'html', 'ansi'). Default: html with --out, ansi otherwise"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter (off, error, warn, info, debug, trace); RUST_LOG wins"),
        )
        .arg(
            Arg::new("inspect")
                .long("inspect")
                .help("Print each line's classification as JSON instead of rendering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

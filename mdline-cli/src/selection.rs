//! Output format selection
//!
//! An explicit `--format` always wins. Otherwise a configured format is used, and with
//! `auto` the destination decides: a file gets html, the terminal gets ansi.

use mdline_config::FormatChoice;
use mdline_parser::Representation;

pub fn select_format(flag: Option<&str>, configured: FormatChoice, writes_to_file: bool) -> String {
    if let Some(name) = flag {
        return name.to_string();
    }
    let representation = configured.representation().unwrap_or(if writes_to_file {
        Representation::StructuredMarkup
    } else {
        Representation::TerminalEscape
    });
    representation.name().to_string()
}

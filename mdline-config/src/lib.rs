//! Shared configuration loader for the mdline tools.
//!
//! `defaults/mdline.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdlineConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use log::{debug, LevelFilter};
use mdline_parser::Representation;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/mdline.default.toml");

/// Top-level configuration consumed by mdline applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdlineConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub format: FormatChoice,
}

/// Which representation to use when the command line does not say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatChoice {
    /// Infer from the output destination
    Auto,
    Html,
    Ansi,
}

impl FormatChoice {
    /// `None` means infer
    pub fn representation(self) -> Option<Representation> {
        match self {
            FormatChoice::Auto => None,
            FormatChoice::Html => Some(Representation::StructuredMarkup),
            FormatChoice::Ansi => Some(Representation::TerminalEscape),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Layers configuration sources over the embedded defaults, last one wins.
///
/// The CLI stacks them as: defaults, the per-user file, `--config`, then flag overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file, skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// Layer the per-user file at [`user_config_path`] when the platform has a config dir.
    pub fn with_user_file(self) -> Self {
        match user_config_path() {
            Some(path) => self.with_optional_file(path),
            None => {
                debug!("no user config directory, skipping user config");
                self
            }
        }
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        debug!("config layer {} (required: {})", path.display(), required);
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `log.level` from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MdlineConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone
pub fn load_defaults() -> Result<MdlineConfig, ConfigError> {
    Loader::new().build()
}

/// Per-user config file: `<config dir>/mdline/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mdline").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.format, FormatChoice::Auto);
        assert!(config.output.trailing_newline);
        assert_eq!(config.log.level, LogLevel::Warn);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.format", "html")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(
            config.render.format.representation(),
            Some(Representation::StructuredMarkup)
        );
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[render]\nformat = \"ansi\"\n\n[output]\ntrailing_newline = false")
            .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.render.format, FormatChoice::Ansi);
        assert!(!config.output.trailing_newline);
        assert_eq!(config.log.level, LogLevel::Warn);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/definitely/not/here/mdline.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/mdline.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.render.format, FormatChoice::Auto);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn layers_user_file_from_config_dir() {
        let home = tempfile::tempdir().expect("temp dir");
        let dir = home.path().join("mdline");
        std::fs::create_dir_all(&dir).expect("config dir");
        std::fs::write(dir.join("config.toml"), "[log]\nlevel = \"debug\"\n").expect("write config");
        std::env::set_var("XDG_CONFIG_HOME", home.path());

        assert_eq!(user_config_path(), Some(dir.join("config.toml")));
        let config = Loader::new().with_user_file().build().expect("config to build");
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.render.format, FormatChoice::Auto);
    }

    #[test]
    fn rejects_unknown_format_choice() {
        let result = Loader::new()
            .set_override("render.format", "pdf")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn auto_has_no_representation() {
        assert_eq!(FormatChoice::Auto.representation(), None);
    }

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::Off);
    }
}

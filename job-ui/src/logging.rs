use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal},
    path::PathBuf,
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVE: &str = "info,job_ui=debug,job_core=debug";

/// Where log records go and how verbose they are.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive from the command line; wins over `RUST_LOG`.
    pub level: Option<String>,
    /// Append plain-text records to this file. The directory must exist.
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            stdout: true,
        }
    }
}

impl LoggingConfig {
    /// Picks the filter directive: command line, then `env`, then the default.
    pub fn filter_directive(
        &self,
        env: Option<&str>,
    ) -> String {
        self.level
            .as_deref()
            .or(env)
            .filter(|directive| !directive.trim().is_empty())
            .unwrap_or(DEFAULT_DIRECTIVE)
            .to_string()
    }
}

// --- Formatter ---

/// `<local time> <LEVEL> <file:line> <fields>`, coloured when ANSI is on.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let color = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{color}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .rsplit_once("src/")
                .or_else(|| file.rsplit_once("src\\"))
                .map_or(file, |(_, rest)| rest);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber. Call once, before the UI starts.
///
/// - Stdout: coloured when attached to a terminal, plain when piped, omitted
///   when `config.stdout` is false.
/// - File: plain text appended to `config.file` when set.
/// - Level: see [`LoggingConfig::filter_directive`].
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = config.filter_directive(env.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;

    let stdout_layer = config.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(io::stdout().is_terminal())
    });

    let file_layer = match &config.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LocalFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn command_line_level_wins_over_env() {
        let config = LoggingConfig {
            level: Some("trace".into()),
            ..Default::default()
        };
        assert_eq!(config.filter_directive(Some("warn")), "trace");
    }

    #[test]
    fn env_is_used_without_command_line_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter_directive(Some("warn")), "warn");
    }

    #[test]
    fn falls_back_to_default_directive() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter_directive(None), DEFAULT_DIRECTIVE);
        assert_eq!(config.filter_directive(Some("  ")), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn default_directive_parses() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVE).is_ok());
    }

    #[test]
    fn missing_log_directory_is_reported() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/definitely/not/here/job.log")),
            stdout: false,
            ..Default::default()
        };
        let error = init_logging(&config).unwrap_err();
        assert!(error.to_string().contains("cannot open log file"));
    }
}

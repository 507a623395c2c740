//! Logging setup for the CLI.

use std::path::Path;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Configures the logger.
///
/// Logs go to stderr unless `log_path` is given, in which case they go to a
/// daily-rotated file and warnings from the appender itself go to a sibling
/// `.err.log` file.
///
/// # Errors
///
/// - If `level` is not a valid log level.
/// - If the logger could not be initialized.
pub fn configure_logger(level: &str, log_path: Option<&Path>) -> Result<LoggerGuard, String> {
    let level = level
        .parse::<LevelFilter>()
        .map_err(|e| format!("Invalid log level {level:?}: {e}"))?;

    let builder = ftlog::Builder::new().max_log_level(level);

    let builder = match log_path {
        Some(path) => {
            let writer = FileAppender::builder().path(path).rotate(Period::Day).build();
            let err_path = path.with_extension("err.log");
            builder
                // define root appender, pass None would write to stderr
                .root(writer)
                // write `Warn` and `Error` logs in ftlog::appender to `err_path` instead of `log_path`
                .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
                .appender("ftlog-appender", FileAppender::new(err_path))
        }
        None => builder,
    };

    builder.try_init().map_err(|e| e.to_string())
}

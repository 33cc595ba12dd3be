use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow the requested level; everything else stays at `warn`.
const LOGGED_CRATES: [&str; 2] = ["students_api", "tower_http"];

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "students-api.log";

/// Turns a bare level into a directive scoped to this service and its HTTP tracing.
///
/// A string that already holds directives (`target=level` or a list) is used as-is.
fn filter_directive(log_level: &str) -> String {
    let log_level = log_level.trim();
    if log_level.contains('=') || log_level.contains(',') {
        return log_level.to_string();
    }

    let scoped: Vec<String> = LOGGED_CRATES
        .iter()
        .map(|target| format!("{target}={log_level}"))
        .collect();
    format!("warn,{}", scoped.join(","))
}

/// Initialize the logging system with the specified filter.
///
/// # Arguments
///
/// * `log_level` - A bare level ("info", "debug") applied to this service and
///   request tracing, or a full filter directive
/// * `with_file` - Whether to also log to a daily rotating file in the "logs" directory.
///
/// # Example
///
/// ```no_run
/// students_api::utils::init_logging("info", false);
/// ```
pub fn init_logging(log_level: &str, with_file: bool) {
    let filter = match EnvFilter::try_new(filter_directive(log_level)) {
        Ok(f) => f,
        Err(_) => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
            EnvFilter::new(filter_directive("info"))
        }
    };

    let stdout_layer = fmt::layer().with_line_number(true).with_target(true);

    if with_file {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE);

        let file_layer = fmt::layer()
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_service_crates() {
        assert_eq!(
            filter_directive("debug"),
            "warn,students_api=debug,tower_http=debug"
        );
        assert_eq!(
            filter_directive(" info "),
            "warn,students_api=info,tower_http=info"
        );
    }

    #[test]
    fn explicit_directives_are_kept() {
        assert_eq!(filter_directive("students_api=trace"), "students_api=trace");
        assert_eq!(filter_directive("info,hyper=debug"), "info,hyper=debug");
    }

    #[test]
    fn expanded_directive_parses() {
        assert!(EnvFilter::try_new(filter_directive("debug")).is_ok());
    }
}

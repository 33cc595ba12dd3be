use clap::Parser;

/// Command line interface for the application
#[derive(Parser, Debug)]
#[command(name = "students-api", version, about)]
pub struct Cli {
    /// Path to a YAML configuration file; defaults and environment variables apply without it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Port to listen on, overrides the configured value
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Sets the logging verbosity level for the application
    /// A bare level ("error", "warn", "info", "debug", "trace") applies to this
    /// service and request tracing; a full filter directive is used as given
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file under ./logs
    #[arg(long)]
    pub log_to_file: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["students-api"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.port.is_none());
        assert_eq!(cli.logging_level, "info");
        assert!(!cli.log_to_file);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "students-api",
            "--config",
            "api.yaml",
            "-p",
            "8081",
            "--logging-level",
            "debug",
            "--log-to-file",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("api.yaml"));
        assert_eq!(cli.port, Some(8081));
        assert_eq!(cli.logging_level, "debug");
        assert!(cli.log_to_file);
    }
}

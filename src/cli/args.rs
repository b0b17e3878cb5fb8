//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments. Values left unset fall back to the
/// config file, then to built-in defaults.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "watchsac-tui")]
#[command(version, about = "Watchsac TUI - manage keyword alerts from the terminal", long_about = None)]
#[command(after_help = "Examples:\n  \
    watchsac-tui                                  # Use config file / defaults\n  \
    watchsac-tui --api-url https://watchsac.com   # Talk to a specific service\n  \
    watchsac-tui --log-level debug                # Verbose log file")]
pub struct CliConfig {
    /// Base URL of the Watchsac service (default: http://localhost:8080)
    #[arg(long, env = "WATCHSAC_API_URL")]
    pub api_url: Option<String>,

    /// Path to a TOML config file (default: <config dir>/watchsac/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path of the log file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `watchsac_tui=debug`
    #[arg(long, env = "WATCHSAC_LOG")]
    pub log_level: Option<String>,
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliConfig::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliConfig::try_parse_from([
            "watchsac-tui",
            "--api-url",
            "https://watchsac.com",
            "-c",
            "/tmp/watchsac.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.api_url.as_deref(), Some("https://watchsac.com"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/watchsac.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliConfig::try_parse_from(["watchsac-tui", "--iterations", "5"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        CliConfig::command().debug_assert();
    }
}

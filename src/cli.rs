use clap::Parser;
use std::path::PathBuf;

/// Demo host for the picklist select dropdown
#[derive(Parser, Debug, Clone)]
#[command(name = "picklist", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "PICKLIST_CONFIG", default_value = "picklist.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "PICKLIST_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "PICKLIST_PORT")]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["picklist"]);
        assert_eq!(cli.config, PathBuf::from("picklist.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "picklist",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.port, Some(8080));
    }
}

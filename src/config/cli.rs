use crate::config::toml_config::ServiceConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "word-lookup")]
#[command(about = "Look up English words through a public dictionary API")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "word-lookup.toml")]
    pub config: String,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Base URL of the dictionary API; the word is appended as a path segment
    #[arg(long)]
    pub upstream_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Applies flags on top of values loaded from the config file.
    pub fn apply_overrides(&self, config: &mut ServiceConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.upstream_url {
            config.upstream.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.upstream.timeout_seconds = timeout;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_untouched() {
        let args = CliArgs::parse_from(["word-lookup"]);
        let mut config = ServiceConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(args.config, "word-lookup.toml");
        assert_eq!(config.server.port, 3000);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_flags_override_file_values() {
        let args = CliArgs::parse_from([
            "word-lookup",
            "--port",
            "8081",
            "--upstream-url",
            "http://127.0.0.1:9999/en",
            "--timeout",
            "3",
            "--json-logs",
            "-v",
        ]);
        let mut config = ServiceConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999/en");
        assert_eq!(config.upstream.timeout_seconds, 3);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "debug");
    }
}

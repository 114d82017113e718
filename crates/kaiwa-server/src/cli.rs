use std::path::PathBuf;

use clap::Parser;

/// kaiwa: a small web chat that relays messages to an LLM completion API.
#[derive(Parser, Debug)]
#[command(name = "kaiwa", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides `server.port`).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter override, e.g. `kaiwa_server=debug`.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "kaiwa",
            "--config",
            "/tmp/kaiwa.toml",
            "--host",
            "0.0.0.0",
            "-p",
            "8080",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/kaiwa.toml")));
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(8080));
        assert!(args.log_level.is_none());
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let args = Args::parse_from(["kaiwa"]);
        assert!(args.config.is_none());
        assert!(args.port.is_none());
    }
}

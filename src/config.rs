//! Command-line configuration for the demo binary.
//!
//! There are no configuration files or environment variables; everything is
//! selected through flags with sensible defaults.

use clap::{Parser, Subcommand};

/// Command-line arguments for the utilikit demo binary
#[derive(Parser, Debug)]
#[command(name = "utilikit")]
#[command(version = "0.1.0")]
#[command(about = "Utility module demos: text, files, and a blocking TCP echo pair", long_about = None)]
pub struct CliArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: DemoCommand,
}

/// Which demo to run
#[derive(Subcommand, Debug)]
pub enum DemoCommand {
    /// Exercise the printing, text, and file modules sequentially
    Demo,

    /// Run the echo server: accept one client and echo its messages
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },

    /// Run the echo client against a running server
    Connect {
        /// Server hostname or IP address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Server port
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let args = CliArgs::try_parse_from(["utilikit", "serve"]).unwrap();
        assert_eq!(args.log_level, "info");
        assert!(matches!(args.command, DemoCommand::Serve { port: 8080 }));
    }

    #[test]
    fn test_connect_overrides() {
        let args = CliArgs::try_parse_from([
            "utilikit",
            "--log-level",
            "debug",
            "connect",
            "--host",
            "10.0.0.1",
            "--port",
            "9000",
        ])
        .unwrap();

        assert_eq!(args.log_level, "debug");
        match args.command {
            DemoCommand::Connect { host, port } => {
                assert_eq!(host, "10.0.0.1");
                assert_eq!(port, 9000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(CliArgs::try_parse_from(["utilikit"]).is_err());
    }
}

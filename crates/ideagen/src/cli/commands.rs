//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use ideagen_core::{Capability, LogFormat};
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable selecting the log format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "IDEAGEN_LOG_FORMAT";

/// Ideagen - titles, descriptions, keywords and hashtags from a single idea
#[derive(Parser, Debug)]
#[command(name = "ideagen")]
#[command(about = "Turn a short idea into post-ready content with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log format from `--json-logs`, then `IDEAGEN_LOG_FORMAT`, then pretty.
    pub fn log_format(&self) -> LogFormat {
        if self.json_logs {
            return LogFormat::Json;
        }
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|value| LogFormat::from_str(value.trim()).ok())
            .unwrap_or_default()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long, env = "IDEAGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Interface to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding configuration
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate content for one idea and print it as JSON
    Generate {
        /// The idea to write about
        idea: String,

        /// Which field to generate
        #[arg(long, value_enum, default_value_t = CapabilityArg::All)]
        capability: CapabilityArg,

        /// Path to a TOML configuration file
        #[arg(short, long, env = "IDEAGEN_CONFIG")]
        config: Option<PathBuf>,
    },
}

/// Field selection for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CapabilityArg {
    /// Post title
    Title,
    /// Post description
    Description,
    /// SEO keywords
    Keywords,
    /// Hashtags
    Tags,
    /// All four, requested concurrently
    All,
}

impl CapabilityArg {
    /// The single capability selected, or `None` for all of them.
    pub fn capability(self) -> Option<Capability> {
        match self {
            CapabilityArg::Title => Some(Capability::Title),
            CapabilityArg::Description => Some(Capability::Description),
            CapabilityArg::Keywords => Some(Capability::Keywords),
            CapabilityArg::Tags => Some(Capability::Tags),
            CapabilityArg::All => None,
        }
    }
}

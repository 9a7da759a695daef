//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kyp_core::KypConfig;

/// KYP - product catalog with completion-assisted search
#[derive(Parser, Debug)]
#[command(name = "kyp", version)]
#[command(about = "Product catalog service with completion-assisted search", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings that override the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Completion service API key
    #[arg(long, env = "KYP_OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Completion service base URL
    #[arg(long, env = "KYP_OPENAI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Completion model
    #[arg(long, env = "KYP_MODEL", global = true)]
    pub model: Option<String>,

    /// JSON catalog file; in-memory when unset
    #[arg(long, env = "KYP_STORE_PATH", global = true)]
    pub store_path: Option<PathBuf>,
}

impl Overrides {
    /// Apply every override that is set.
    pub fn apply(&self, config: &mut KypConfig) {
        if let Some(key) = &self.api_key {
            config.completion.api_key = Some(key.clone());
        }
        if let Some(url) = &self.base_url {
            config.completion.base_url = url.clone();
        }
        if let Some(model) = &self.model {
            config.completion.model = model.clone();
        }
        if let Some(path) = &self.store_path {
            config.store.path = Some(path.clone());
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Bind host, overriding config
        #[arg(long)]
        host: Option<String>,
        /// Bind port, overriding config
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Search the catalog
    Search {
        /// Query text; empty lists everything
        query: Vec<String>,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the keywords extracted for a query
    Keywords {
        /// Query text
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `kyp config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print one value by dotted key, e.g. `completion.model`
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Target file instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

//! KYP CLI
//!
//! Runs the catalog API and offers one-shot search from the terminal.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use kyp_cli::config_handlers::handle_config_command;
use kyp_cli::{Args, Command, app, logging};
use kyp_core::KypConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config_path = args.config.as_deref();
    match args.command {
        Command::Config { action } => {
            handle_config_command(config_path, &args.overrides, action)?;
            Ok(())
        }
        command => {
            let config = app::load_config(config_path, &args.overrides)?;
            tracing::debug!(?config, "Configuration loaded");
            run(command, &config).await
        }
    }
}

async fn run(command: Command, config: &KypConfig) -> Result<()> {
    match command {
        Command::Serve { host, port } => app::serve(config, host, port).await,
        Command::Search { query, json } => {
            let outcome = app::search(config, &query.join(" ")).await?;
            eprintln!("{} result(s) via {}", outcome.records().len(), outcome.label());
            let rendered = app::render_records(outcome.records(), json)?;
            if !rendered.is_empty() {
                println!("{rendered}");
            }
            Ok(())
        }
        Command::Keywords { query } => {
            let keywords = app::keywords(config, &query.join(" ")).await?;
            println!("{}", serde_json::to_string(&keywords)?);
            Ok(())
        }
        Command::Config { .. } => Ok(()),
    }
}

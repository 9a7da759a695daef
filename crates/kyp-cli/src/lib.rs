//! # kyp-cli
//!
//! Command-line entry point for KYP.
//!
//! - [`cli`]: argument definitions
//! - [`app`]: wiring configuration into stores, pipelines and the server
//! - [`config_handlers`]: `kyp config` subcommands
//! - [`logging`]: tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod app;
pub mod cli;
pub mod config_handlers;
pub mod logging;

pub use cli::{Args, Command, ConfigAction, Overrides};

//! # greynoise-cli
//!
//! Command-line interface for the GreyNoise threat intelligence API.
//!
//! ## Features
//!
//! - **Noise lookups**: quick checks, bulk quick checks, full IP context
//! - **Research**: actor profiles, GNQL queries and statistics
//! - **Input files**: read IP addresses one per line from a file or stdin
//! - **Multiple output formats**: JSON, XML and plain text summaries

pub mod cli;
pub mod config;
pub mod input;
pub mod output;

pub use cli::run;

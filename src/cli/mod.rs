//! CLI module
//!
//! Subcommands:
//! - `serve`: run the web server
//! - `seed`: populate the database with baseline rows
//! - `post:import`: import posts from the old website

pub mod import;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// Modular admin starter
#[derive(Parser)]
#[command(name = "starter-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve,

    /// Populate the database with baseline rows
    Seed(seed::SeedArgs),

    /// Import posts from the old website
    #[command(name = "post:import")]
    PostImport,
}

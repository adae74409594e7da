// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod invoke;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Image recognition blocks CLI
#[derive(Parser, Debug)]
#[command(name = "imagerec-cli")]
#[command(version = "0.1.0")]
#[command(about = "Invoke image recognition blocks from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke one block operation and print its display value
    Invoke(invoke::InvokeArgs),

    /// Print the block descriptors as JSON
    Info,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Invoke(args) => invoke::run_invoke(args).await,
        Commands::Info => invoke::print_info(),
    }
}

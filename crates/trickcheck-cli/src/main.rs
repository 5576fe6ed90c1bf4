//! Trickcheck CLI: the `trickcheck` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::SheetToJson {
            tricks_csv,
            tags_csv,
            out,
            out_min,
            columns,
            json,
        } => commands::sheet_to_json::run(commands::sheet_to_json::Args {
            tricks_csv,
            tags_csv,
            out,
            out_min,
            columns,
            json,
        }),

        Commands::Validate { input, out, json } => commands::validate::run(input, out, json),

        Commands::Explain { rule, input, json } => commands::explain::run(rule, input, json),
    }
}

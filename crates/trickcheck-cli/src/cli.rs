use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "trickcheck",
    about = "Trickcheck: convert trick sheets to JSON and validate trick logic",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the tricks and tags sheets into pretty and compact rule documents
    SheetToJson {
        /// Path to the tricks sheet CSV
        #[arg(long, default_value = "sheets/Pseudoregalia Tricks - Tricks.csv")]
        tricks_csv: String,

        /// Path to the tag hierarchy sheet CSV
        #[arg(long, default_value = "sheets/Pseudoregalia Tricks - Tags.csv")]
        tags_csv: String,

        /// Output path for the pretty rule document
        #[arg(long, default_value = "tricks/tricks.json")]
        out: String,

        /// Output path for the compact rule document
        #[arg(long, default_value = "tricks/tricks.min.json")]
        out_min: String,

        /// Optional TOML file overriding sheet column names
        #[arg(long)]
        columns: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a rule document and write one diagnostic per line
    Validate {
        /// Path to the rule document
        #[arg(long, default_value = "tricks/tricks.json")]
        input: String,

        /// Output path for the diagnostics file
        #[arg(long, default_value = "results/validate_json.txt")]
        out: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the tricks of one rule with expanded tags and loadout summaries
    Explain {
        /// Entrance ("Region -> Region") or location rule name
        rule: String,

        /// Path to the rule document
        #[arg(long, default_value = "tricks/tricks.json")]
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

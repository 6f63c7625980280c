mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mongel",
    version,
    about = "Monotonic hyperrectangle rule induction and classification"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Induce a rule set from a normalized JSON training dataset
    Induce {
        /// Path to the training dataset (JSON)
        train_file: PathBuf,

        /// Write the induced rule set to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Score the rule set on a test dataset (JSON)
        #[arg(short, long, value_name = "FILE")]
        test: Option<PathBuf>,

        /// Classification strategy used with --test: nearest (default) or ordered
        #[arg(short, long, default_value = "nearest")]
        strategy: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show every merge and removal decision
        #[arg(long)]
        verbose: bool,
    },
    /// Classify a dataset against a saved rule set
    Classify {
        /// Path to a rule set written by `mongel induce --out`
        rules_file: PathBuf,

        /// Path to the dataset to classify (JSON)
        input_file: PathBuf,

        /// Classification strategy: nearest (default) or ordered
        #[arg(short, long, default_value = "nearest")]
        strategy: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show the prediction for every instance, not just misclassifications
        #[arg(long)]
        show_all: bool,
    },
    /// Print the rules of a saved rule set in plain language
    Describe {
        /// Path to a rule set written by `mongel induce --out`
        rules_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Validate a dataset file
    Validate {
        /// Path to the dataset (JSON)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Induce {
            train_file,
            out,
            test,
            strategy,
            output,
            verbose,
        } => commands::induce::run(train_file, out, test, &strategy, &output, verbose),
        Commands::Classify {
            rules_file,
            input_file,
            strategy,
            output,
            show_all,
        } => commands::classify::run(rules_file, input_file, &strategy, &output, show_all),
        Commands::Describe { rules_file, output } => commands::describe::run(&rules_file, &output),
        Commands::Validate { file } => commands::validate::run(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

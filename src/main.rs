use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use linegrade::cli::{self, Style};

/// linegrade — Line-by-line grading of submitted answers against reference texts.
#[derive(Parser)]
#[command(name = "linegrade", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a submission file against a reference answer file.
    Grade {
        /// Path to the reference answer file.
        expected: PathBuf,

        /// Path to the submitted answer file.
        actual: PathBuf,

        /// Report output style.
        #[arg(long, value_enum, default_value = "text")]
        style: Style,
    },

    /// Grade a submission against a template from a templates JSON file.
    Check {
        /// Path to a JSON file containing an array of templates.
        templates: PathBuf,

        /// Path to the submitted answer file.
        submission: PathBuf,

        /// Id of the template to grade against.
        #[arg(long)]
        id: String,

        /// Report output style.
        #[arg(long, value_enum, default_value = "text")]
        style: Style,

        /// Print the submission-store record as JSON instead of a report.
        #[arg(long)]
        submission_record: bool,
    },

    /// List templates in a templates JSON file.
    Templates {
        /// Path to a JSON file containing an array of templates.
        file: PathBuf,

        /// Only show templates in this category (algorithm, english, cs, interview).
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Grade {
            expected,
            actual,
            style,
        } => cli::cmd_grade(&expected, &actual, &style)?,
        Commands::Check {
            templates,
            submission,
            id,
            style,
            submission_record,
        } => cli::cmd_check(&templates, &id, &submission, &style, submission_record)?,
        Commands::Templates { file, category } => {
            cli::cmd_templates(&file, category.as_deref())?
        }
    };

    print!("{output}");
    Ok(())
}

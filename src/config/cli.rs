use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    Create,
    Update,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a guest payload (JSON) from a file or stdin
    Validate {
        #[arg(value_enum)]
        kind: PayloadKind,
        /// JSON file; reads stdin when omitted or "-"
        input: Option<String>,
    },
    /// Validate a CSV guest roster
    Import {
        input: String,
        /// Write accepted records as JSON to this file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the resolved API base URL
    ResolveUrl {
        /// Append the server-side /api segment
        #[arg(long)]
        server: bool,
    },
    /// Fetch the backend health report
    Health,
    /// Create a guest through the API after local validation
    Add {
        /// JSON file; reads stdin when omitted or "-"
        input: Option<String>,
    },
    /// Send a validated update for one guest
    Update {
        id: String,
        /// JSON file; reads stdin when omitted or "-"
        input: Option<String>,
    },
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::Validate { input: Some(path), .. } | Command::Add { input: Some(path) }
                if path != "-" =>
            {
                validate_path("input", path)
            }
            Command::Import { input, output } => {
                validate_path("input", input)?;
                if let Some(output) = output {
                    validate_path("output", output)?;
                }
                Ok(())
            }
            Command::Update { id, input } => {
                validate_non_empty_string("id", id)?;
                match input {
                    Some(path) if path != "-" => validate_path("input", path),
                    _ => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

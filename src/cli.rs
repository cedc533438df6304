use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tipuy", version, about = "TIPUY university portal CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Portal API base URL (overrides config.toml)"
    )]
    pub api: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one of the external verifications feeding the generation gate
    Validate {
        #[command(subcommand)]
        command: ValidateCommands,
    },
    /// Show both verification slots and whether generation is unlocked
    Status,
    /// Generate a constancia from the two validated records
    Generate {
        #[arg(long)]
        carrera: String,
        #[arg(long)]
        ciclo: String,
    },
    /// Clear both verification slots (keeps the session)
    Reset,
    /// List the document-tracking table
    Track {
        #[arg(long, default_value_t = false, help = "Only rows awaiting signature")]
        pending: bool,
    },
    /// Ask the authority endpoint to sign a generated document
    Sign { registro_id: String },
    /// Download a generated document
    Download {
        id: String,
        #[arg(long, help = "Target file (defaults to the configured download dir)")]
        out: Option<PathBuf>,
    },
    /// Manage the stored auth-portal profile
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ValidateCommands {
    /// Verify a national identity document (8 digits)
    Dni { dni: String },
    /// Verify a university student code (8 digits + uppercase letter)
    Uni { codigo: String },
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    Login {
        #[arg(long)]
        id: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
    },
    Show,
    Logout,
}

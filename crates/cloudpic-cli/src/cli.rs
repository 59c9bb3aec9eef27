use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cloudpic")]
#[command(about = "Upload and delete images on a hosted media API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload an image file
    Upload {
        /// Image file to upload (prompted for when omitted)
        #[arg(value_name = "PATH")]
        file: Option<PathBuf>,
        /// Public id to store the image under (defaults to the file name before its first '.')
        #[arg(long, value_name = "ID")]
        public_id: Option<String>,
        /// Output the full upload payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an uploaded image
    #[command(alias = "delete")]
    Destroy {
        /// Public id of the image
        public_id: String,
    },
    /// Print a fresh timestamp and signature for a public id
    Sign {
        /// Public id to sign
        public_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

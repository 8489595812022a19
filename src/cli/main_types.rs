use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// One entry of a comma separated `--accept` list, surrounding spaces dropped
fn parse_accept_entry(raw: &str) -> Result<String, String> {
    Ok(raw.trim().to_string())
}

#[derive(Parser)]
#[command(name = "signed-upload")]
#[command(about = "Upload files through backend-signed URLs and check them before upload")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true, env = "SIGNED_UPLOAD_URL")]
    pub url: Option<String>,

    /// Bearer token for the signing endpoint
    #[arg(long, global = true, env = "SIGNED_UPLOAD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check and upload files
    Upload(UploadArgs),
    /// Upload images, using the detected image format as suffix
    Image(ImageArgs),
    /// Check file names against accepted extensions
    Check(CheckArgs),
    /// Print a file as a base64 data URL
    Base64 {
        /// File to convert
        file: PathBuf,
    },
    /// Print the accept string and help text for an upload widget
    Accept(AcceptArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Upload type sent to the signing endpoint
    #[arg(long = "type")]
    pub upload_type: Option<String>,
    /// Accepted extensions, comma separated
    #[arg(long, value_delimiter = ',', value_parser = parse_accept_entry)]
    pub accept: Vec<String>,
    /// Maximum file size in MB
    #[arg(long)]
    pub max_size: Option<f64>,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Images to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Upload type sent to the signing endpoint
    #[arg(long = "type")]
    pub upload_type: Option<String>,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File names or paths
    #[arg(required = true)]
    pub files: Vec<String>,
    /// Accepted extensions, comma separated (defaults apply when omitted)
    #[arg(long, value_delimiter = ',', value_parser = parse_accept_entry)]
    pub accept: Vec<String>,
    /// Use the picture defaults instead of the document defaults
    #[arg(long)]
    pub picture: bool,
}

#[derive(Args, Debug)]
pub struct AcceptArgs {
    /// Accepted extensions or MIME types, comma separated
    #[arg(long, value_delimiter = ',', value_parser = parse_accept_entry)]
    pub accept: Vec<String>,
    /// Maximum file size in MB
    #[arg(long)]
    pub max_size: Option<f64>,
    /// Maximum number of files
    #[arg(long)]
    pub max_number: Option<u32>,
    /// Explicit help text
    #[arg(long)]
    pub help_text: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    Set {
        /// Backend base URL
        #[arg(long)]
        url: Option<String>,
        /// Default upload type
        #[arg(long)]
        upload_type: Option<String>,
        /// Default maximum file size in MB
        #[arg(long)]
        max_size: Option<f64>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Accepted extensions, comma separated
        #[arg(long)]
        accept: Option<String>,
    },
}

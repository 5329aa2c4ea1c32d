use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

#[derive(Parser)]
#[command(name = "lenswork")]
#[command(version, about = "Lenswork - Morocco photography portfolio engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (defaults to ~/.lenswork/lenswork.db)
    #[arg(long, global = true, env = "LENSWORK_DB_PATH")]
    pub db_path: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show catalog and session status
    Status,

    /// List the composed photo catalog
    Gallery {
        /// Filter by city name or id ("all" lists everything)
        #[arg(long, default_value = "all")]
        city: String,

        /// Show only the landing-page highlight strip
        #[arg(long)]
        highlights: bool,
    },

    /// List map markers: all cities, or one city's photos
    Map {
        /// City id or name
        city: Option<String>,
    },

    /// Publish a photo into the gallery (owner session required)
    Upload(UploadArgs),

    /// Delete a photo: uploads are removed, built-ins are masked
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Mask every built-in photo in one sweep (owner session required)
    HideBuiltins {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// License a photo, unlocking its clean download
    Buy { id: String },

    /// Open the owner session
    Login {
        /// Owner key; prompted for interactively when omitted
        #[arg(long)]
        key: Option<String>,
    },

    /// Close the owner session
    Logout {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Set the interface language
    Lang {
        #[arg(value_parser = ["en", "ar", "fr"])]
        language: String,
    },

    /// Fetch the AI-curator description for a photo
    Describe {
        id: String,

        /// Override the preferred language for this call
        #[arg(long, value_parser = ["en", "ar", "fr"])]
        lang: Option<String>,
    },
}

#[derive(Args)]
pub struct UploadArgs {
    /// Image file to ingest
    #[arg(long)]
    pub file: PathBuf,

    /// Photo title
    #[arg(long)]
    pub title: Option<String>,

    /// City id or name the photo belongs to
    #[arg(long)]
    pub city: Option<String>,

    /// Latitude override (defaults to the city center)
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude override (defaults to the city center)
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,
}

//! CLI entry point for cms-helpers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cms_helpers::commands;
use cms_helpers::commands::video::Lookup;

#[derive(Parser)]
#[command(name = "cms-helpers")]
#[command(version)]
#[command(about = "Template helpers for CMS-driven sites", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Return the first present value of a lookup sequence
    Resolve {
        /// Values or container/key pairs, as JSON (bare words are strings)
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Read a CSV file
    Csv {
        /// CSV file
        file: PathBuf,

        /// Field delimiter (defaults to csv_delimiter from _config.yml)
        #[arg(short = 'D', long)]
        delimiter: Option<char>,
    },

    /// Parse pasted CSV table text from a file
    Table {
        /// File holding the table text
        file: PathBuf,
    },

    /// Video URL lookups
    Video {
        #[command(subcommand)]
        lookup: VideoCommand,
    },

    /// Print the value of a node field
    Field {
        /// Node ID
        nid: u64,

        /// Field name
        field: String,

        /// View mode used for rendered values
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Print the aliased path of a node
    Alias {
        /// Node ID
        nid: u64,
    },

    /// Print <option> markup for a taxonomy vocabulary
    Options {
        /// Vocabulary machine name
        vocabulary: String,

        /// Selected value
        #[arg(long, default_value = "")]
        default: String,

        /// Use term names instead of term IDs as option values
        #[arg(long)]
        by_name: bool,
    },

    /// Print navigation markup for a menu
    Nav {
        /// Menu name
        menu: String,

        /// Classes for the list element
        #[arg(long)]
        class: Option<String>,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum VideoCommand {
    /// Print the video ID
    Id { url: String },
    /// Print the thumbnail URL
    #[command(alias = "thumbnail")]
    Thumb { url: String },
    /// Print the video title
    Title { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "cms_helpers=debug,info"
    } else {
        "cms_helpers=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Resolve { args } => {
            commands::resolve::run(&args)?;
        }

        Commands::Csv { file, delimiter } => {
            let site = cms_helpers::Site::new(&base_dir)?;
            tracing::info!("Reading CSV file {:?}", file);
            commands::table::run_file(&site, &file, delimiter)?;
        }

        Commands::Table { file } => {
            let site = cms_helpers::Site::new(&base_dir)?;
            commands::table::run_text(&site, &file)?;
        }

        Commands::Video { lookup } => {
            let site = cms_helpers::Site::new(&base_dir)?;
            let (lookup, url) = match lookup {
                VideoCommand::Id { url } => (Lookup::Id, url),
                VideoCommand::Thumb { url } => (Lookup::Thumbnail, url),
                VideoCommand::Title { url } => (Lookup::Title, url),
            };
            commands::video::run(&site, lookup, &url).await?;
        }

        Commands::Field { nid, field, mode } => {
            let site = cms_helpers::Site::new(&base_dir)?;
            commands::content::field(&site, nid, &field, mode.as_deref())?;
        }

        Commands::Alias { nid } => {
            let site = cms_helpers::Site::new(&base_dir)?;
            commands::content::alias(&site, nid)?;
        }

        Commands::Options {
            vocabulary,
            default,
            by_name,
        } => {
            let site = cms_helpers::Site::new(&base_dir)?;
            commands::content::options(&site, &vocabulary, &default, by_name)?;
        }

        Commands::Nav { menu, class } => {
            let site = cms_helpers::Site::new(&base_dir)?;
            commands::content::nav(&site, &menu, class.as_deref())?;
        }

        Commands::Version => {
            println!("cms-helpers version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

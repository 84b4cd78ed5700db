//! CLI entry point for espresso

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "espresso")]
#[command(version)]
#[command(about = "A fast static blog generator with a built-in espresso theme", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post or page
    New {
        /// Kind of document to create (post, page)
        #[arg(short, long, default_value = "post")]
        kind: String,

        /// Title of the new document
        title: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (post, page)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "espresso=debug,info"
    } else {
        "espresso=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            espresso::commands::init::init_site(&target_dir)?;
            println!("Initialized empty espresso site in {:?}", target_dir);
        }

        Commands::New { kind, title } => {
            let app = espresso::Espresso::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            espresso::commands::new::run(&app, &title, &kind)?;
        }

        Commands::Generate => {
            let app = espresso::Espresso::new(&base_dir)?;
            tracing::info!("Generating static files...");
            espresso::commands::generate::run(&app)?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let app = espresso::Espresso::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let app = espresso::Espresso::new(&base_dir)?;
            espresso::commands::list::run(&app, &r#type)?;
        }

        Commands::Version => {
            println!("espresso version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

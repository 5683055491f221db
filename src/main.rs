//! CLI entry point for mdblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdblog")]
#[command(version)]
#[command(about = "A markdown blog content pipeline", long_about = None)]
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
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Use the extended-markdown extension
        #[arg(long)]
        mdx: bool,
    },

    /// List posts or tags
    List {
        /// Type of content to list (posts, tags)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Page of the listing to print
        #[arg(short, long)]
        page: Option<usize>,

        /// Only posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Print a single post
    Show {
        /// Slug of the post
        slug: String,

        /// Print only the metadata, not the rendered body
        #[arg(long)]
        meta: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdblog=debug,info"
    } else {
        "mdblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
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
            tracing::info!("Initializing blog in {:?}", target_dir);
            mdblog::commands::init::run(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New { title, mdx } => {
            let blog = mdblog::Blog::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            mdblog::commands::new::run(&blog, &title, mdx)?;
        }

        Commands::List { r#type, page, tag } => {
            let blog = mdblog::Blog::new(&base_dir)?;
            mdblog::commands::list::run(&blog, &r#type, page, tag.as_deref()).await?;
        }

        Commands::Show { slug, meta } => {
            let blog = mdblog::Blog::new(&base_dir)?;
            mdblog::commands::show::run(&blog, &slug, meta).await?;
        }
    }

    Ok(())
}

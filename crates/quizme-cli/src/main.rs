//! quizme CLI: runs the flashcard server and a terminal study front end.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quizme", version, about = "Flashcard study server and CLI")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Server base URL (overrides config)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create a starter quizme.toml
    Init,

    /// Create a flashcard set from `front|back` lines
    Create {
        /// Name of the new set
        #[arg(long)]
        name: String,

        /// File with one `front|back` card per line
        #[arg(long, conflicts_with = "cards")]
        file: Option<PathBuf>,

        /// Cards inline, one `front|back` per line
        #[arg(long)]
        cards: Option<String>,
    },

    /// List flashcard sets
    List,

    /// Show the cards of a set
    Show {
        /// Set name
        #[arg(long)]
        name: String,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Practice a set interactively and save the score
    Practice {
        /// Set name
        #[arg(long)]
        name: String,

        /// Name to record the score under (prompted if omitted)
        #[arg(long)]
        username: Option<String>,
    },

    /// Show saved scores
    Scores,

    /// Delete all flashcard sets
    Clear,

    /// Delete all saved scores
    ClearScores,

    /// Interactive study app
    App,
}

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizme=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let conn = commands::Connection {
        config: cli.config,
        server: cli.server,
    };

    let result = match cli.command {
        Commands::Serve { host, port } => commands::serve::execute(&conn, host, port).await,
        Commands::Init => commands::init::execute(),
        Commands::Create { name, file, cards } => {
            commands::sets::create(&conn, name, file, cards).await
        }
        Commands::List => commands::sets::list(&conn).await,
        Commands::Show { name, json } => commands::sets::show(&conn, name, json).await,
        Commands::Practice { name, username } => {
            commands::practice::execute(&conn, name, username).await
        }
        Commands::Scores => commands::scores::list(&conn).await,
        Commands::Clear => commands::sets::clear(&conn).await,
        Commands::ClearScores => commands::scores::clear(&conn).await,
        Commands::App => commands::app::execute(&conn).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

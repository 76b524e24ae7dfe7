use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cinematch::omdb::OmdbClient;
use cinematch_core::DEFAULT_MAX_FEATURES;
use cinematch_engine::{Indexer, Session};
use cinematch_storage::ArtifactStore;

/// Content-based movie recommender
#[derive(Parser, Debug)]
#[command(name = "cinematch")]
#[command(about = "Content-based movie recommender", long_about = None)]
struct Args {
    /// Path to the artifact data directory
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build and persist the record table and similarity matrix
    Index {
        /// Path to the catalog CSV (columns: title, genres, keywords, overview)
        #[arg(short, long, default_value = "movies.csv")]
        catalog: PathBuf,

        /// Vocabulary ceiling for the TF-IDF representation
        #[arg(long, default_value_t = DEFAULT_MAX_FEATURES)]
        max_features: usize,
    },

    /// Print the selectable titles, one per line
    Titles,

    /// Recommend titles similar to the given one
    Recommend {
        /// Title to find neighbors for (case-insensitive)
        title: String,

        /// Number of recommendations
        #[arg(short = 'n', long, default_value_t = 5)]
        top_n: usize,

        /// Enrich each result with plot/poster/IMDb link from OMDB
        /// (reads the OMDB_API_KEY environment variable)
        #[arg(long)]
        details: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = ArtifactStore::new(&args.data_dir);

    match args.command {
        Command::Index {
            catalog,
            max_features,
        } => {
            info!("Starting cinematch indexer v{}", env!("CARGO_PKG_VERSION"));
            info!("Catalog: {:?}", catalog);
            info!("Data directory: {:?}", args.data_dir);

            let (table, _) = Indexer::new()
                .with_max_features(max_features)
                .run(&catalog, &store)?;
            println!("Indexed {} records into {:?}", table.len(), args.data_dir);
        }

        Command::Titles => {
            let session = Session::load(&store)?;
            for title in session.selectable_titles() {
                println!("{title}");
            }
        }

        Command::Recommend {
            title,
            top_n,
            details,
        } => {
            let session = Session::load(&store)?;

            let Some(recommendations) = session.recommend(&title, top_n) else {
                println!("No recommendations found for '{title}'.");
                return Ok(());
            };

            let omdb = if details {
                match std::env::var("OMDB_API_KEY") {
                    Ok(key) => Some(OmdbClient::new(key)),
                    Err(_) => {
                        eprintln!("OMDB_API_KEY not set; printing results without details");
                        None
                    }
                }
            } else {
                None
            };

            println!("Top similar titles for '{title}':");
            for rec in &recommendations {
                println!("{:>3}. {}  (score {:.4})", rec.rank, rec.title, rec.score);
                if let Some(client) = &omdb {
                    let d = client.lookup(&rec.title);
                    println!("      plot:  {}", d.plot);
                    println!("      poster: {}", d.poster);
                    if let Some(link) = &d.imdb_link {
                        println!("      imdb:  {link}");
                    }
                }
            }
        }
    }

    Ok(())
}

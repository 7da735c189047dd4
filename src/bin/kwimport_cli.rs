//! kwimport_cli - Import spreadsheet keywords without the desktop window
//!
//! Usage:
//!   kwimport_cli preview a.xlsx b.csv
//!   kwimport_cli --column kw_phrase import a.xlsx b.csv
//!   kwimport_cli stats --limit 20 --json

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;

use kwimport::config::Config;
use kwimport::import::{DatabaseOverview, ImportPipeline, ImportSession, ProgressReporter};
use kwimport::store::MongoKeywordStore;

#[derive(Parser)]
#[command(version, about = "Import keyword columns from spreadsheets into MongoDB")]
struct Cli {
    /// Column holding the keywords (defaults to KWIMPORT_DEFAULT_COLUMN)
    #[arg(short, long)]
    column: Option<String>,

    /// MongoDB connection string
    #[arg(long, value_name = "URL")]
    mongodb_url: Option<String>,

    /// Database name
    #[arg(long, value_name = "NAME")]
    database: Option<String>,

    /// Collection name
    #[arg(long, value_name = "NAME")]
    collection: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the unique keywords of the given files without touching the database
    Preview {
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
    },
    /// Insert keywords of the given files that are not stored yet
    Import {
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
    },
    /// Show usage counts and the newest stored keywords
    Stats {
        /// Number of recent keywords to list
        #[arg(short, long)]
        limit: Option<i64>,

        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::load();
        if let Some(url) = &self.mongodb_url {
            config.mongodb_url = url.clone();
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(collection) = &self.collection {
            config.collection = collection.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine readable
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let column = cli
        .column
        .clone()
        .unwrap_or_else(|| config.default_column.clone());

    let pipeline = ImportPipeline::new(ProgressReporter::silent());
    let mut session = ImportSession::new(column);

    match cli.command {
        Command::Preview { files } => {
            session.select_files(files);
            let report = pipeline.preview(&session)?;
            for keyword in report.batch.sorted() {
                println!("{}", keyword);
            }
            eprintln!(
                "{} keywords extracted, {} unique, {} files skipped",
                report.extracted,
                report.unique(),
                report.skipped_files()
            );
        }
        Command::Import { files } => {
            session.select_files(files);
            session.set_store(Some(connect(&config).await?));

            let outcome = pipeline.import(&session).await?;
            println!(
                "Imported {} new keywords ({} unique, {} already stored, {} files skipped)",
                outcome.inserted,
                outcome.unique,
                outcome.unique.saturating_sub(outcome.new),
                outcome.files_skipped
            );
        }
        Command::Stats { limit, json } => {
            session.set_store(Some(connect(&config).await?));

            let limit = limit.filter(|l| *l > 0).unwrap_or(config.recent_limit);
            let overview = pipeline.view_database(&session, limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                print_overview(&overview);
            }
        }
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<Arc<MongoKeywordStore>, Box<dyn std::error::Error>> {
    MongoKeywordStore::connect(config)
        .await
        .map(Arc::new)
        .map_err(|e| {
            error!("Failed to connect to {}: {}", config.mongodb_url, e);
            e.into()
        })
}

fn print_overview(overview: &DatabaseOverview) {
    println!(
        "Total: {}  Used: {}  Unused: {}",
        overview.total, overview.used, overview.unused
    );
    for record in &overview.recent {
        let mark = if record.is_used() { "✅" } else { "⭕" };
        println!(
            "{} {}  ({})",
            mark,
            record.keyword,
            record.first_created_time.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

use bookstore_report::config::{self, FailurePolicy, OutputFormat, Settings};
use bookstore_report::report::{self, render};
use bookstore_report::store::MongoBookStore;
use clap::Parser;

/// Runs the bookstore query, aggregation and indexing report against MongoDB.
#[derive(Parser, Debug, Clone)]
#[command(version)]
struct Args {
    /// MongoDB connection string
    #[arg(long, env = config::URI_ENV_VAR, default_value = config::DEFAULT_URI)]
    uri: String,

    /// Database holding the books collection
    #[arg(long, default_value = config::DEFAULT_DATABASE)]
    database: String,

    /// Collection of book documents
    #[arg(long, default_value = config::DEFAULT_COLLECTION)]
    collection: String,

    /// Run the remaining steps after a step fails instead of stopping
    #[arg(long)]
    keep_going: bool,

    /// Print the report as a single JSON document
    #[arg(long)]
    json: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            uri: self.uri.clone(),
            database: self.database.clone(),
            collection: self.collection.clone(),
            failure_policy: if self.keep_going {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Abort
            },
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

fn init_tracing(quiet: bool) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let default = if quiet {
        "bookstore_report=warn,mongodb=warn"
    } else {
        "bookstore_report=info,mongodb=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet);
    let settings = args.settings();

    // Failures are logged and the process still exits cleanly.
    let store = match MongoBookStore::connect(&settings).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "could not connect to MongoDB");
            return Ok(());
        }
    };
    tracing::info!(database = %settings.database, collection = %settings.collection, "connected");

    let report = report::run(store, settings.failure_policy).await;

    let stdout = std::io::stdout();
    let rendered = match settings.output {
        OutputFormat::Text => render::render_text(&report, &mut stdout.lock(), &mut std::io::stderr()),
        OutputFormat::Json => render::render_json(&report, &mut stdout.lock()),
    };
    if let Err(err) = rendered {
        tracing::error!(error = %format!("{err:#}"), "failed to write report");
    }

    if let Some(reason) = &report.aborted {
        tracing::error!(run_id = %report.run_id, %reason, "report aborted");
    }

    Ok(())
}

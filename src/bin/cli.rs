use anyhow::Context;
use clap::{Parser, Subcommand};
use namescreen::{best_score, to_json_rows, Query, RankOptions, Record, Screener};

#[derive(Parser)]
#[command(name = "namescreen-cli")]
#[command(about = "Fuzzy name screening CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a candidate file against a name
    Rank {
        /// Name to screen
        query: String,

        /// JSON array of records with `name` and optional `alt_names`
        #[arg(short, long)]
        candidates: String,

        /// Known aliases of the query name
        #[arg(short, long)]
        alias: Vec<String>,

        /// Maximum results
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,

        /// Minimum score (0.0 - 1.0)
        #[arg(short, long, default_value = "0.0")]
        min_match: f64,

        /// Scoring threads (defaults to one per core)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Score two names and show which metric won
    Score {
        a: String,
        b: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            query,
            candidates,
            alias,
            limit,
            min_match,
            threads,
        } => {
            let options = RankOptions {
                limit: RankOptions::limit_from_signed(limit)?,
                min_match,
                threads,
            };

            let records = Record::load_list(&candidates)
                .with_context(|| format!("loading candidates from {candidates}"))?;
            let pool = records.into_iter().map(Record::into_candidate).collect();

            let screener = Screener::new(pool, options)?;
            let results = screener.search(&Query::new(&query, &alias))?;

            println!("{}", serde_json::to_string_pretty(&to_json_rows(&results))?);
        }

        Commands::Score { a, b } => {
            let a = namescreen::normalize::precompute(&a);
            let b = namescreen::normalize::precompute(&b);
            let score = best_score(&a, &b);

            println!("{:.4} ({})", score.value, score.metric);
        }
    }

    Ok(())
}

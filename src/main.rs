use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use tscatalog::{
    run_contexts, run_merge, run_prune, run_query, run_stats, MergeRequest, QueryRequest,
    StatsFormatter, StatsRequest,
};

/// Translation Catalog - query, merge and maintain Qt Linguist TS catalogs
#[derive(Parser, Debug)]
#[command(name = "tc")]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a string through a catalog, falling back to the source text
    Query {
        /// Catalog file (.ts)
        catalog: PathBuf,

        /// Context (originating UI component) of the string
        context: String,

        /// Source text to resolve
        source: String,

        /// Disambiguation comment distinguishing identical sources
        #[arg(long)]
        comment: Option<String>,

        /// Plural count for numerus entries (also substituted for %n)
        #[arg(short = 'n', long)]
        count: Option<i64>,

        /// Trust any non-empty translation, not just finished ones
        #[arg(long)]
        any_status: bool,
    },

    /// Merge a scanned source inventory into a catalog
    Merge {
        /// Catalog file (.ts) to update
        catalog: PathBuf,

        /// JSON inventory produced by the source scanner
        inventory: PathBuf,

        /// Write the merged catalog here instead of updating in place
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drop entries missing from the inventory instead of marking them obsolete
        #[arg(long)]
        prune: bool,

        /// Discard existing translations and start every entry unfinished
        #[arg(long)]
        reset_translations: bool,

        /// Start a new catalog when the file does not exist yet
        #[arg(long)]
        create: bool,
    },

    /// Remove obsolete and vanished entries from a catalog
    Prune {
        /// Catalog file (.ts)
        catalog: PathBuf,

        /// Write the pruned catalog here instead of updating in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report completion statistics for catalogs
    Stats {
        /// Catalog files or directories to scan for catalogs
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Only count contexts matching this regex
        #[arg(long)]
        context: Option<String>,

        /// Emit machine-readable JSON instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// List the contexts of a catalog in document order
    Contexts {
        /// Catalog file (.ts)
        catalog: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> tscatalog::Result<()> {
    match cli.command {
        Commands::Query {
            catalog,
            context,
            source,
            comment,
            count,
            any_status,
        } => {
            let outcome = run_query(
                QueryRequest::new(catalog, context, source)
                    .with_comment(comment)
                    .with_count(count)
                    .with_any_status(any_status),
            )?;
            println!("{}", outcome.text);
            if !outcome.translated {
                eprintln!("{}", "(no trusted translation; source text returned)".dimmed());
            }
        }

        Commands::Merge {
            catalog,
            inventory,
            output,
            prune,
            reset_translations,
            create,
        } => {
            let summary = run_merge(
                MergeRequest::new(catalog, inventory)
                    .with_output(output)
                    .with_prune(prune)
                    .with_reset_translations(reset_translations)
                    .with_create(create),
            )?;
            println!(
                "Merged: {} added, {} carried, {} obsoleted, {} pruned",
                summary.added, summary.carried, summary.obsoleted, summary.pruned
            );
        }

        Commands::Prune { catalog, output } => {
            let removed = run_prune(&catalog, output.as_ref())?;
            println!("Pruned {} retired entries", removed);
        }

        Commands::Stats {
            paths,
            context,
            json,
        } => {
            let reports = run_stats(StatsRequest::new(paths).with_context_filter(context))?;
            if json {
                let payload: Vec<serde_json::Value> = reports
                    .iter()
                    .map(|(path, stats)| {
                        serde_json::json!({
                            "catalog": path.display().to_string(),
                            "stats": stats,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&payload)
                        .map_err(|e| tscatalog::CatalogError::Generic(e.to_string()))?
                );
            } else {
                let formatter = StatsFormatter::new();
                for (path, stats) in &reports {
                    println!("{}", path.display().to_string().bold());
                    print!("{}", formatter.format(stats));
                }
            }
        }

        Commands::Contexts { catalog } => {
            for name in run_contexts(&catalog)? {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use crate::app::AppContext;
use crate::app::commands::{audit, check, cluster, list, locate, verify};
use crate::domain::{AppError, Cluster, DatasetId, StorageCheck};
use crate::ports::Environment;

#[derive(Parser)]
#[command(name = "dsroot")]
#[command(version)]
#[command(about = "Locate datasets on known HPC clusters", long_about = None)]
struct Cli {
    /// TOML registry overlaid on the builtin one
    #[arg(long, global = true, value_name = "FILE")]
    registry: Option<PathBuf>,
    /// Print debug logs (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cluster this process runs on
    #[clap(visible_alias = "c")]
    Cluster {
        /// Also print the scratch and fast directories
        #[arg(long)]
        dirs: bool,
    },
    /// Print the root directory of a dataset
    #[clap(visible_alias = "l")]
    Locate {
        dataset: DatasetId,
        /// Cluster to look on (default: detected)
        #[arg(long)]
        cluster: Option<Cluster>,
        /// Root to fall back to when the dataset has no entry
        #[arg(long, value_name = "PATH")]
        default: Option<PathBuf>,
    },
    /// Check that a dataset's files are present (exit 1 if not)
    Check {
        dataset: DatasetId,
        #[arg(long)]
        cluster: Option<Cluster>,
    },
    /// Check that files exist under an arbitrary root (exit 1 if not)
    Verify {
        root: PathBuf,
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// List datasets registered on a cluster
    #[clap(visible_alias = "ls")]
    List {
        #[arg(long)]
        cluster: Option<Cluster>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report registry inconsistencies (exit 1 if any)
    Audit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = AppContext::from_process(cli.registry.as_deref())
        .and_then(|ctx| dispatch(&ctx, cli.command));

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn dispatch<E: Environment>(ctx: &AppContext<E>, command: Commands) -> Result<i32, AppError> {
    match command {
        Commands::Cluster { dirs } => run_cluster(ctx, dirs).map(|_| 0),
        Commands::Locate { dataset, cluster, default } => {
            let root = locate::execute(ctx, &dataset, cluster, default.as_deref())?;
            println!("{}", root.display());
            Ok(0)
        }
        Commands::Check { dataset, cluster } => run_check(ctx, &dataset, cluster),
        Commands::Verify { root, files } => {
            let outcome = verify::execute(&root, &files);
            for missing in &outcome.missing {
                println!("missing: {}", missing.display());
            }
            Ok(outcome.exit_code())
        }
        Commands::List { cluster, format } => run_list(ctx, cluster, format).map(|_| 0),
        Commands::Audit => {
            let issues = audit::execute(ctx);
            if issues.is_empty() {
                println!("✅ Registry is consistent");
                return Ok(0);
            }
            for issue in &issues {
                println!("  • {}", issue);
            }
            Ok(1)
        }
    }
}

fn run_cluster<E: Environment>(ctx: &AppContext<E>, dirs: bool) -> Result<(), AppError> {
    let report = cluster::execute(ctx, dirs)?;
    match report.cluster {
        Some(cluster) => println!("{}", cluster),
        None => println!("none"),
    }
    if let Some(directories) = report.directories {
        println!("scratch: {}", directories.scratch.display());
        println!("fast_dir: {}", directories.fast_dir.display());
    }
    Ok(())
}

fn run_check<E: Environment>(
    ctx: &AppContext<E>,
    dataset: &DatasetId,
    cluster: Option<Cluster>,
) -> Result<i32, AppError> {
    let outcome = check::execute(ctx, dataset, cluster)?;
    debug!("check {} on {}: {:?}", outcome.dataset, outcome.cluster, outcome.storage);

    match &outcome.storage {
        StorageCheck::Stored { root } => {
            println!("✅ {} is stored on {} at {}", outcome.dataset, outcome.cluster, root.display());
        }
        StorageCheck::NotRegistered => {
            println!("❌ {} has no registered root on {}", outcome.dataset, outcome.cluster);
        }
        StorageCheck::UnknownFiles { root } => {
            println!(
                "❌ {} has a root on {} ({}) but no required files are registered",
                outcome.dataset,
                outcome.cluster,
                root.display()
            );
        }
        StorageCheck::Incomplete { root, missing } => {
            println!(
                "❌ {} is incomplete on {} at {}",
                outcome.dataset,
                outcome.cluster,
                root.display()
            );
            for path in missing {
                println!("  missing: {}", path.display());
            }
        }
    }

    Ok(outcome.exit_code())
}

fn run_list<E: Environment>(
    ctx: &AppContext<E>,
    cluster: Option<Cluster>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let listing = list::execute(ctx, cluster)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&listing).map_err(|err| {
                AppError::Io(std::io::Error::other(format!("Failed to serialize listing: {}", err)))
            })?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for entry in &listing.datasets {
                let mark = if entry.stored { "✅" } else { "❌" };
                println!("{} {:<16} {}", mark, entry.dataset.as_str(), entry.root.display());
            }
        }
    }
    Ok(())
}

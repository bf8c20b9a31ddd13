//! CLI Adapter.

mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, LatestOptions, ListOptions, SkinPackOptions};
use crate::app::logging;
use crate::domain::{AppError, TieBreak};

use output::{LatestOutput, write_json};

#[derive(Parser)]
#[command(name = "vpack")]
#[command(version)]
#[command(about = "Find the latest _vNNN versioned file and name the next one", long_about = None)]
struct Cli {
    /// Log lookup details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Workspace root (default: current directory)
    #[arg(short = 'w', long, global = true)]
    workspace: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List entries of a directory ending with an extension
    #[clap(visible_alias = "ls")]
    List {
        /// Directory to scan
        dir: PathBuf,
        /// Extension suffix, e.g. .gSkinPack (case-sensitive)
        extension: String,
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the highest-versioned file of a directory
    #[clap(visible_alias = "l")]
    Latest {
        /// Directory to scan
        dir: PathBuf,
        /// Extension suffix (default: locator.extension from vpack.toml)
        extension: Option<String>,
        /// Print the full path instead of the file name
        #[arg(short = 'f', long)]
        full_path: bool,
        /// Resolution of equal versions (first-seen or lexicographic)
        #[arg(long)]
        tie_break: Option<TieBreak>,
        /// Print a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Print the version number of a <name>_vNNN.<ext> file
    #[clap(visible_alias = "v")]
    Version {
        /// File name or path
        file: String,
    },
    /// Print the name of the next version of a <name>_vNNN.<ext> file
    #[clap(visible_alias = "n")]
    Next {
        /// File name or path
        file: String,
    },
    /// Print the path for the next skin pack in <workspace>/data/skinPacks
    #[clap(visible_alias = "sp")]
    SkinPack {
        /// Create the skin pack folder when it is missing
        #[arg(short, long)]
        create: bool,
        /// Print a JSON object
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.workspace {
        Some(workspace) => dispatch(workspace, cli.command),
        None => std::env::current_dir()
            .map_err(AppError::from)
            .and_then(|cwd| dispatch(cwd, cli.command)),
    };

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

fn dispatch(workspace: PathBuf, command: Commands) -> Result<i32, AppError> {
    match command {
        Commands::List { dir, extension, json } => {
            run_list(workspace, ListOptions { dir, extension }, json).map(|_| 0)
        }
        Commands::Latest { dir, extension, full_path, tie_break, json } => {
            run_latest(workspace, LatestOptions { dir, extension, tie_break }, full_path, json)
        }
        Commands::Version { file } => {
            println!("{}", api::version_of(&file)?);
            Ok(0)
        }
        Commands::Next { file } => {
            println!("{}", api::next_version_name(&file)?);
            Ok(0)
        }
        Commands::SkinPack { create, json } => {
            run_skin_pack(workspace, SkinPackOptions { create }, json).map(|_| 0)
        }
    }
}

fn run_list(workspace: PathBuf, options: ListOptions, json: bool) -> Result<(), AppError> {
    let names = api::list_at(workspace, &options)?;
    if json {
        return write_json(&names);
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn run_latest(
    workspace: PathBuf,
    options: LatestOptions,
    full_path: bool,
    json: bool,
) -> Result<i32, AppError> {
    let Some(latest) = api::latest_at(workspace, &options)? else {
        eprintln!("No versioned files found in {}", options.dir.display());
        return Ok(1);
    };

    if json {
        write_json(&LatestOutput::from(&latest))?;
    } else if full_path {
        println!("{}", latest.full_path().display());
    } else {
        println!("{}", latest.name);
    }
    Ok(0)
}

fn run_skin_pack(workspace: PathBuf, options: SkinPackOptions, json: bool) -> Result<(), AppError> {
    let outcome = api::skin_pack_at(workspace, options)?;
    if json {
        return write_json(&outcome);
    }
    println!("{}", outcome.next.display());
    Ok(())
}

//! CLI Adapter.

mod locate;
mod scaffold;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{AppError, SettingsOverrides};

#[derive(Parser)]
#[command(name = "zonedir")]
#[command(version)]
#[command(about = "Scaffold one layout-image directory per catalog zone", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct SettingsArgs {
    /// Directory the zone directories are created in
    #[arg(short, long, global = true, value_name = "PATH")]
    base: Option<PathBuf>,
    /// Catalog file (.json, .yml, .yaml or .toml); defaults to the built-in catalog
    #[arg(short, long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,
    /// Profile sub-directory under the base (e.g. poe2)
    #[arg(short, long, global = true, value_name = "ID")]
    profile: Option<String>,
    /// Config file; defaults to ./zonedir.toml when present
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl From<SettingsArgs> for SettingsOverrides {
    fn from(args: SettingsArgs) -> Self {
        SettingsOverrides {
            base_path: args.base,
            catalog: args.catalog,
            profile: args.profile,
            config: args.config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create one directory per zone under the base directory
    #[clap(visible_alias = "s")]
    Scaffold {
        /// Show the directories that would be created without creating them
        #[arg(long)]
        dry_run: bool,
        /// Exit with status 1 when any zone directory could not be created
        #[arg(long)]
        strict: bool,
    },
    /// Print the catalog with each zone's directory name
    #[clap(visible_alias = "ls")]
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find a zone's layout directory by code and list its files
    #[clap(visible_alias = "l")]
    Locate {
        /// Zone code, e.g. G1_1
        code: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let overrides = SettingsOverrides::from(cli.settings);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Scaffold { dry_run, strict } => {
            scaffold::run_scaffold(&overrides, scaffold::ScaffoldFlags { dry_run, strict })
        }
        Commands::List { json } => run_list(&overrides, json).map(|_| 0),
        Commands::Locate { code } => locate::run_locate(&overrides, &code),
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

fn run_list(overrides: &SettingsOverrides, json: bool) -> Result<(), AppError> {
    let catalog = crate::app::api::catalog_at(overrides, std::env::current_dir()?)?;
    if json {
        println!("{}", crate::app::commands::list::render_json(&catalog)?);
    } else {
        print!("{}", crate::app::commands::list::render_text(&catalog));
    }
    Ok(())
}

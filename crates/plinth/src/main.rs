//! Plinth - Entry Point
//!
//! Loads configuration, initializes logging and bootstraps the process-wide
//! engine over every plugin module linked into the binary.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `plinth` | Bootstrap and report what ran |
//! | `plinth --list-plugins` | List discovered modules and registered data providers |
//! | `plinth --print-config` | Print the effective configuration as TOML |

// Force-link plinth-providers to ensure linkme registrations are included
extern crate plinth_providers;

use std::path::PathBuf;

use clap::Parser;
use plinth::launcher::{LaunchOptions, run};

/// Command line interface for Plinth
#[derive(Parser, Debug)]
#[command(name = "plinth")]
#[command(about = "Plinth - plugin discovery and composition root bootstrap")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Build the dependency graph without running startup tasks
    #[arg(long)]
    pub skip_startup_tasks: bool,

    /// List discovered plugin modules and data providers, then exit
    #[arg(long)]
    pub list_plugins: bool,

    /// Print the effective configuration, then exit
    #[arg(long)]
    pub print_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let options = LaunchOptions {
        config_path: cli.config,
        skip_startup_tasks: cli.skip_startup_tasks,
        list_plugins: cli.list_plugins,
        print_config: cli.print_config,
    };
    let output = run(&options)?;
    print!("{output}");
    Ok(())
}

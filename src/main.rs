//! Fleet Dashboard - CLI entry point
//!
//! Manages which dashboard widgets are shown on this device, and in what
//! order, and renders the visible ones against a CRM record snapshot.

use clap::{Parser, Subcommand};
use fleet_dashboard::{
    commands::{self, CommandError},
    config::{default, loader, schema::Config, xdg},
    logging,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Fleet CRM dashboard
#[derive(Parser)]
#[command(name = "fleetdash")]
#[command(version, about = "Fleet CRM dashboard widgets")]
struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/fleet-dashboard/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for widget preferences (overrides [dashboard] storage_dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the fleetdash CLI
#[derive(Subcommand)]
enum Commands {
    /// Inspect or change widget visibility and order
    Widgets {
        #[command(subcommand)]
        action: WidgetsAction,
    },

    /// Render the visible widgets
    Show {
        /// Record-count snapshot (JSON)
        #[arg(long)]
        snapshot: Option<PathBuf>,
        /// Render width in columns
        #[arg(long)]
        width: Option<u16>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `widgets` subcommand.
#[derive(Subcommand)]
enum WidgetsAction {
    /// List widgets in order with their visibility
    List {
        /// Print the stored preference record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or hide a widget
    Toggle {
        /// Widget id (e.g. tasks, fleet-status)
        id: String,
    },
    /// Move a widget to a new position
    Move {
        /// Current position (0-based)
        from: usize,
        /// Target position (0-based)
        to: usize,
    },
    /// Restore the default widgets
    Reset,
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::Config { action } => run_config_command(action, config_path),
        Commands::Widgets { action } => run_board_command(config_path, data_dir, |_, board| {
            match action {
                WidgetsAction::List { json } => commands::run_list(board, json),
                WidgetsAction::Toggle { id } => commands::run_toggle(board, &id),
                WidgetsAction::Move { from, to } => commands::run_move(board, from, to),
                WidgetsAction::Reset => commands::run_reset(board),
            }
        }),
        Commands::Show { snapshot, width } => {
            run_board_command(config_path, data_dir, |config, board| {
                commands::run_show(config, board, snapshot.as_deref(), width)
            })
        }
    }
}

/// Loads config, starts logging, opens the board and runs `f` against it.
fn run_board_command<F>(config_path: Option<&Path>, data_dir: Option<&Path>, f: F) -> ExitCode
where
    F: FnOnce(&Config, &mut commands::Board) -> Result<(), CommandError>,
{
    let config = match loader::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging);

    let mut board = commands::open_board(&config, data_dir);
    if let Err(e) = f(&config, &mut board) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_config_command(action: ConfigAction, path: Option<&Path>) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => match default::create_default_config(path, force) {
            Ok(path) => {
                println!("Created configuration at {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
        ConfigAction::Path => {
            match path {
                Some(path) => println!("{}", path.display()),
                None => println!("{}", xdg::config_path().display()),
            }
            Ok(())
        }
        ConfigAction::Validate => match loader::load(path) {
            Ok(config) => {
                println!("Configuration is valid");
                println!("{config:#?}");
                Ok(())
            }
            Err(e) => Err(e),
        },
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

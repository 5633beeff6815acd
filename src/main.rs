use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use menubuilder::{config, Menu, ProductionMenu};

#[derive(Parser, Debug)]
#[command(name = "menubuilder", version, about = "Assemble menus with a fluent builder")]
struct Cli {
    /// Log builder steps to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Builds the main menu, shows it and selects option 1.
    Demo,
    /// Prints the assembled menu as JSON.
    Describe {
        /// Menu definition file. Falls back to `MENUBUILDER_CONFIG` / default locations,
        /// then to the demo menu.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Selects an option by index (no bounds are enforced).
    Select {
        #[arg(allow_negative_numbers = true)]
        index: i32,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Prints the definition path that would be used (if any).
    ConfigPath,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Demo => {
            let menu = menubuilder::demo_menu();
            menu.show();
            menu.select(1);
            println!(
                "{}: \"{}\" with {} options",
                menu.id(),
                menu.title(),
                menu.options().len()
            );
        }
        Command::Describe { config } => {
            let menu = load_menu(config)?;
            let json = serde_json::to_string_pretty(&menu).context("serialize menu")?;
            println!("{json}");
        }
        Command::Select { index, config } => {
            let menu = load_menu(config)?;
            menu.select(index);
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn load_menu(path: Option<PathBuf>) -> Result<ProductionMenu> {
    let cfg = config::load_optional(path.as_deref()).context("load menu definition")?;
    Ok(cfg.map_or_else(menubuilder::demo_menu, |c| c.apply()))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

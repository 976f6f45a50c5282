mod pages;
mod schema;
mod setup;
mod shell;
mod tree;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wayfinder",
    version,
    about = "Declarative page navigation: menus, history and breadcrumbs from page metadata",
    long_about = "Wayfinder discovers pages that describe their own place in the navigation, \
                  builds the menu from that metadata, and drives navigation with back-history, \
                  breadcrumbs and a searchable menu. This tool explores a page catalog from the terminal."
)]
pub struct Cli {
    /// Page manifest (JSON). Defaults to the bundled sample catalog.
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Navigation options (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only discover pages whose module starts with this prefix (repeatable)
    #[arg(long = "namespace", global = true, value_name = "PREFIX")]
    pub namespaces: Vec<String>,

    /// Do not install the search box on the menu
    #[arg(long, global = true)]
    pub no_search: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive shell driving the navigation system
    #[command(
        long_about = "Connects a terminal menu to the navigation system and opens the default page. \
                            Open pages, go back, inspect breadcrumbs and search the menu."
    )]
    Shell,
    /// Print the built menu
    Tree,
    /// List discovered pages
    Pages,
    /// Print the JSON schema of the page manifest
    Schema {
        /// Print the schema of the navigation options instead
        #[arg(long)]
        options: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Shell => "shell",
        _ => "cli",
    };
    let _guard = wayfinder_runtime::init_logging(component, false);

    match &cli.command {
        Commands::Shell => shell::run(setup::registry(&cli)?),
        Commands::Tree => tree::run(&setup::registry(&cli)?),
        Commands::Pages => pages::run(&setup::registry(&cli)?),
        Commands::Schema { options } => schema::run(*options),
    }
}

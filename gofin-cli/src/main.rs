use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gofin_client::{
    DashboardLoader, DashboardView, ImportUploader, Navigator, SubmitOutcome, UploadedFile,
};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

mod config;
mod logging;
mod render;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "gofin",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GOFIN_BUILD_SHA"), ")"),
    about = "Personal finance dashboard and CSV import client"
)]
struct Cli {
    /// Backend base URL (overrides [api].base_url)
    #[arg(long, env = "GOFIN_API_URL", global = true)]
    api_url: Option<String>,

    /// tracing filter, e.g. "debug" (overrides [log].level)
    #[arg(long, env = "GOFIN_LOG", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show balances and the transaction list
    Dashboard {
        /// Print the formatted view as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Import transactions from a CSV file (only the first file is used)
    Import {
        /// CSV file to send; extra files are ignored
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Fail immediately instead of offering to retry
        #[arg(long)]
        no_retry: bool,

        /// Do not show the dashboard after a successful import
        #[arg(long)]
        no_dashboard: bool,
    },

    /// Manage ~/.gofinances/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

/// Records the uploader's request to go back to the dashboard.
#[derive(Debug, Default)]
struct DashboardRoute {
    requested: bool,
}

impl Navigator for DashboardRoute {
    fn to_dashboard(&mut self) {
        self.requested = true;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config()?;
    if let Some(url) = cli.api_url {
        cfg.api.base_url = url;
    }
    logging::init(cli.log_level.as_deref().unwrap_or(&cfg.log.level));
    debug!(base_url = %cfg.api.base_url, locale = %cfg.locale.tag, "configuration loaded");

    match cli.command {
        Command::Dashboard { json } => dashboard(&cfg, json).await?,

        Command::Import {
            files,
            no_retry,
            no_dashboard,
        } => {
            let navigated = import(&cfg, &files, !no_retry).await?;
            if navigated && !no_dashboard {
                println!();
                dashboard(&cfg, false).await?;
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

async fn dashboard(cfg: &Config, json: bool) -> Result<()> {
    let mut loader = DashboardLoader::new(cfg.http_api()?, cfg.value_formatter()?);

    let mut view = loader.activate().await;
    while let DashboardView::Failed(err) = &view {
        eprintln!("{err}");
        if !confirm("Retry?")? {
            break;
        }
        view = loader.retry().await;
    }

    match view {
        DashboardView::Ready(data) if json => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        DashboardView::Ready(data) => print!("{}", render::render_dashboard(&data)),
        DashboardView::Failed(err) => {
            return Err(err).with_context(|| format!("is the API running at {}?", cfg.api.base_url));
        }
        DashboardView::Loading => bail!("dashboard did not finish loading"),
    }
    Ok(())
}

/// Returns whether the uploader asked to go back to the dashboard.
async fn import(cfg: &Config, files: &[PathBuf], allow_retry: bool) -> Result<bool> {
    let picked = pick_csv_files(files)?;

    let mut uploader = ImportUploader::new(cfg.http_api()?, DashboardRoute::default());
    let selection = uploader.select(picked);
    for extra in &selection.discarded {
        eprintln!("Only one file is imported at a time; ignoring {}", extra.name);
    }
    if let Some(file) = uploader.selected() {
        print!("{}", render::render_file_list(file));
    }

    loop {
        match uploader.submit().await {
            Ok(SubmitOutcome::Imported { name }) => {
                println!("Imported {name}");
                break;
            }
            Ok(SubmitOutcome::NothingSelected) => {
                println!("No file selected.");
                break;
            }
            Err(e) => {
                eprintln!("{}", e.user_message());
                if !allow_retry || !confirm("Retry?")? {
                    return Err(e).context("import failed");
                }
            }
        }
    }

    Ok(uploader.navigator().requested)
}

/// Only CSV files may be picked. Every path is checked even though just the first is sent.
fn pick_csv_files(paths: &[PathBuf]) -> Result<Vec<UploadedFile>> {
    paths
        .iter()
        .map(|p| {
            if !is_csv(p) {
                bail!("only CSV files are allowed: {}", p.display());
            }
            UploadedFile::from_path(p).with_context(|| format!("open {}", p.display()))
        })
        .collect()
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Yes/no prompt; answers "no" without asking when stdin is not a terminal.
fn confirm(label: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Ok(false);
    }
    print!("{label} [y/N]: ");
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
}

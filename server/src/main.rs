mod config;
mod http;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use platform_db::connect;
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{
    EmployeeRepository, EmployeeService, InMemoryEmployeeRepository, SeaOrmEmployeeRepository,
};
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "employee-directory", version, about = "Employee directory lookup service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeCommand),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StoreKind {
    /// Read the `employees` table at DATABASE_URL.
    Database,
    /// Serve a fixed list held in memory.
    Memory,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
    #[arg(long, value_enum, default_value_t = StoreKind::Database)]
    store: StoreKind,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON array of employees to load into the memory store"
    )]
    fixtures: Option<PathBuf>,
}

impl From<&ServeCommand> for ServeConfig {
    fn from(value: &ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::from_env()?)?;
    let cli = Cli::parse();
    let app_config = Arc::new(AppConfig::load()?);
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, app_config).await,
    }
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let (repo, db) = match cmd.store {
        StoreKind::Database => {
            if cmd.fixtures.is_some() {
                bail!("--fixtures only applies to --store memory");
            }
            let pool = connect(&config.database).await?;
            let repo: Arc<dyn EmployeeRepository> =
                Arc::new(SeaOrmEmployeeRepository::new(pool.clone()));
            (repo, Some(pool))
        }
        StoreKind::Memory => {
            let repo: Arc<dyn EmployeeRepository> =
                Arc::new(load_memory_store(cmd.fixtures.as_deref())?);
            (repo, None)
        }
    };
    let state = AppState {
        employees: EmployeeService::new(repo),
        db,
        config,
    };
    http::serve((&cmd).into(), state).await
}

fn load_memory_store(fixtures: Option<&Path>) -> Result<InMemoryEmployeeRepository> {
    let Some(path) = fixtures else {
        warn!("memory store started without fixtures; every lookup will miss");
        return Ok(InMemoryEmployeeRepository::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixtures {}", path.display()))?;
    let repo = InMemoryEmployeeRepository::from_json(&raw)
        .with_context(|| format!("failed to load fixtures {}", path.display()))?;
    info!(path = %path.display(), employees = repo.len(), "memory store loaded");
    Ok(repo)
}

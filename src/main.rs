use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kpi_tracker::cli::{
    ImportCommands, ReportCommands, StaffCommands, run_import_budget, run_import_roster,
    run_report_day, run_report_month, run_report_tracker, run_staff_add, run_staff_list,
    run_staff_remove,
};
use kpi_tracker::config::ServerConfig;
use kpi_tracker::server::{AppState, create_router};
use kpi_tracker::store::{SqliteStore, Store};

#[derive(Parser)]
#[command(name = "kpi-tracker")]
#[command(about = "Retail KPI tracker: rosters, budgets, sales targets and rollups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and optionally seed staff
    Init {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Staff member to seed; repeat for several. Ignored once staff exist.
        #[arg(long = "staff")]
        staff: Vec<String>,
    },

    /// Start the HTTP server
    Serve {
        /// TOML config file; flags below override its values
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short)]
        port: Option<u16>,

        /// Data directory for the database
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Manage staff members
    Staff {
        #[command(subcommand)]
        command: StaffCommands,
    },

    /// Import roster or budget CSV files
    Import {
        #[command(subcommand)]
        command: ImportCommands,
    },

    /// Print day, month or tracker reports
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
    config.validate()?;
    fs::create_dir_all(&config.data_dir)?;

    let store = SqliteStore::new(config.db_path())?;
    store.initialize()?;

    let seeded = store.seed_staff(&config.seed_staff)?;
    if seeded > 0 {
        info!("Seeded {} staff members", seeded);
    }
    Ok(store)
}

fn run_init(data_dir: String, staff: Vec<String>) -> anyhow::Result<()> {
    let config = ServerConfig {
        data_dir: data_dir.into(),
        seed_staff: staff,
        ..Default::default()
    };
    open_store(&config)?;

    println!("Initialized database at {}", config.db_path().display());
    Ok(())
}

async fn run_serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }

    let store = open_store(&config)?;
    info!("Using database at {}", config.db_path().display());

    let state = Arc::new(AppState::new(Arc::new(store)));
    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kpi_tracker=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { data_dir, staff } => run_init(data_dir, staff)?,
        Commands::Serve {
            config,
            host,
            port,
            data_dir,
        } => run_serve(config, host, port, data_dir).await?,
        Commands::Staff { command } => match command {
            StaffCommands::Add { data_dir, name } => run_staff_add(data_dir, name)?,
            StaffCommands::List { data_dir, json } => run_staff_list(data_dir, json)?,
            StaffCommands::Remove { data_dir, id } => run_staff_remove(data_dir, id)?,
        },
        Commands::Import { command } => match command {
            ImportCommands::Roster { data_dir, file } => run_import_roster(data_dir, &file)?,
            ImportCommands::Budget { data_dir, file } => run_import_budget(data_dir, &file)?,
        },
        Commands::Report { command } => match command {
            ReportCommands::Day {
                data_dir,
                date,
                json,
            } => run_report_day(data_dir, date, json)?,
            ReportCommands::Month {
                data_dir,
                year,
                month,
                json,
            } => run_report_month(data_dir, year, month, json)?,
            ReportCommands::Tracker {
                data_dir,
                staff_id,
                year,
                month,
                json,
            } => run_report_tracker(data_dir, staff_id, year, month, json)?,
        },
    }

    Ok(())
}

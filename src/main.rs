// src/main.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use hotel_inventory::application::{self, AppState, CatalogExport, RustylineConsole};
use hotel_inventory::config::AppConfig;
use hotel_inventory::db::{get_database_stats, verify_database_integrity, FlagEncoding};
use hotel_inventory::domain::ActingUser;

#[derive(Parser, Debug)]
#[command(name = "hotel-inventory")]
#[command(about = "Console management of hotel rooms and services", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file, overrides the configuration
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Boolean column encoding: numeric (1/0) or text (true/false)
    #[arg(long, global = true)]
    flag_encoding: Option<FlagEncoding>,

    /// User id recorded by service procedures
    #[arg(long, global = true)]
    acting_user: Option<ActingUser>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive role-based menus (default)
    Menu,

    /// Create the schema if missing and exit
    Init,

    /// Integrity check and record counts
    Status,

    /// Dump rooms and services as JSON to stdout
    Export {
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // 1. CONFIGURATION
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(path) = cli.database {
        config.store.database_path = path;
    }
    if let Some(encoding) = cli.flag_encoding {
        config.store.flag_encoding = encoding;
    }
    if let Some(user) = cli.acting_user {
        config.session.acting_user = user;
    }
    log::debug!("Effective configuration: {:?}", config);

    // 2. APPLICATION STATE (schema is created here)
    let state = AppState::open(&config).with_context(|| {
        format!(
            "Failed to open database {}",
            config.store.database_path.display()
        )
    })?;

    // 3. DISPATCH
    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let mut console = RustylineConsole::new().context("Failed to start console")?;
            application::run(&state, &mut console)?;
        }
        Command::Init => {
            println!(
                "Database ready at {}",
                config.store.database_path.display()
            );
        }
        Command::Status => {
            let conn = state.connections.connect()?;
            verify_database_integrity(&conn).context("Integrity check failed")?;
            let stats = get_database_stats(&conn)?;

            println!("Database:          {}", config.store.database_path.display());
            println!("Schema version:    {}", stats.schema_version);
            println!("Size:              {} bytes", stats.size_bytes);
            println!("Flag encoding:     {}", config.store.flag_encoding);
            println!(
                "Rooms:             {} ({} available)",
                stats.room_count, stats.available_room_count
            );
            println!("Services:          {}", stats.service_count);
            println!("Audit entries:     {}", stats.audit_count);
            println!("Acting user:       {}", state.service_catalog.acting_user());
        }
        Command::Export { pretty } => {
            let export = CatalogExport::new(
                state.room_service.list_rooms(),
                state.service_catalog.list(),
            );
            let json = if pretty {
                serde_json::to_string_pretty(&export)?
            } else {
                serde_json::to_string(&export)?
            };
            println!("{}", json);
        }
    }

    Ok(())
}

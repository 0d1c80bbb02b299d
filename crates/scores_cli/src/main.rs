//! Command-line front end for the students scores pages.
//!
//! # Responsibility
//! - Map subcommands onto page routes and print the rendered result.
//! - Provide a data-loading path for new score rows.

mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{RuntimeConfig, DB_PATH_ENV, DEFAULT_DB_FILE_NAME, LOG_DIR_ENV, LOG_LEVEL_ENV};
use log::error;
use scores_core::db::open_db;
use scores_core::{
    DebtService, LookupKind, NewScore, Pages, Request, Route, ScoreService, SqliteDebtRepository,
    SqliteScoreRepository,
};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every score row
    List,
    /// Show the lookup form hint
    Form,
    /// Show scores and statistics for one student
    Student {
        /// Exact student name
        name: String,
    },
    /// Show scores and statistics for one discipline
    Discipline {
        /// Exact discipline name
        name: String,
    },
    /// Run a lookup selected by handler type (`student` or `discipline`)
    Lookup {
        kind: String,
        key: String,
    },
    /// Sync academic debts and list failing students
    Debts {
        /// Print the stored debt records instead of current failing scores
        #[arg(long)]
        stored: bool,
    },
    /// Add one score row
    Add {
        name: String,
        discipline: String,
        score: u32,
    },
}

#[derive(Parser, Debug)]
#[command(name = "students-scores")]
#[command(about = "Student exam scores, statistics and academic debts", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = DB_PATH_ENV, default_value = DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = LOG_LEVEL_ENV)]
    log_level: Option<String>,

    /// Directory for rolling log files; logging is off when omitted
    #[arg(long, global = true, env = LOG_DIR_ENV)]
    log_dir: Option<PathBuf>,

    /// Print render payloads as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let config = match RuntimeConfig::resolve(
        cli.db.clone(),
        cli.log_level.clone(),
        cli.log_dir.clone(),
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Config error: {err:#}");
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(err) = config.init_logging() {
        eprintln!("Logging error: {err:#}");
        std::process::exit(EXIT_CONFIG);
    }

    let code = match run(&cli, &config) {
        Ok(code) => code,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err:#}");
            eprintln!("Error: {err:#}");
            EXIT_RUNTIME
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli, config: &RuntimeConfig) -> Result<i32> {
    let conn = open_db(&config.db_path)
        .with_context(|| format!("cannot open database `{}`", config.db_path.display()))?;
    let pages = Pages::new(&conn);

    let (route, request) = match &cli.command {
        Commands::List => (Route::Index, Request::get()),
        Commands::Form => (Route::GetInfo, Request::get()),
        Commands::Student { name } => lookup_request(LookupKind::Student, name),
        Commands::Discipline { name } => lookup_request(LookupKind::Discipline, name),
        Commands::Lookup { kind, key } => match LookupKind::from_discriminator(kind) {
            Ok(kind) => lookup_request(kind, key),
            Err(err) => {
                eprintln!("{err}");
                return Ok(EXIT_CONFIG);
            }
        },
        Commands::Debts { stored: false } => (Route::StudentsWithDebts, Request::get()),
        Commands::Debts { stored: true } => {
            let service = DebtService::new(
                SqliteScoreRepository::try_new(&conn)?,
                SqliteDebtRepository::try_new(&conn)?,
            );
            service.sync_debts()?;
            println!(
                "{}",
                output::render_debt_records(&service.list_debt_records()?, cli.json)
            );
            return Ok(EXIT_SUCCESS);
        }
        Commands::Add {
            name,
            discipline,
            score,
        } => {
            let service = ScoreService::new(SqliteScoreRepository::try_new(&conn)?);
            let created =
                service.add_score(NewScore::new(name.as_str(), discipline.as_str(), *score))?;
            if cli.json {
                println!("{}", serde_json::to_string(&created)?);
            } else {
                println!(
                    "#{} {} / {} / {}",
                    created.id, created.name, created.discipline, created.score
                );
            }
            return Ok(EXIT_SUCCESS);
        }
    };

    let page = pages.handle(route, &request)?;
    println!("{}", output::render_page(&page, cli.json));
    Ok(if page.is_error() {
        EXIT_NOT_FOUND
    } else {
        EXIT_SUCCESS
    })
}

fn lookup_request(kind: LookupKind, key: &str) -> (Route, Request) {
    (
        Route::for_lookup(kind),
        Request::post([(kind.form_field(), key)]),
    )
}

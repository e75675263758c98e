//! Terminal client for f1-season-proxy.
//!
//! Runs the same services as the HTTP API, without starting a server, and
//! prints the result as a table or as the API's JSON body.
//!
//! # Usage
//!
//! ```bash
//! # Season calendar with session times
//! cargo run --bin f1ctl -- calendar 2024
//!
//! # Entry lists
//! cargo run --bin f1ctl -- drivers current
//! cargo run --bin f1ctl -- constructors 1998
//!
//! # Championship tables, as JSON
//! cargo run --bin f1ctl -- --json standings drivers 2023
//!
//! # Validate configuration / check both upstreams
//! cargo run --bin f1ctl -- config check
//! cargo run --bin f1ctl -- upstream ping
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `f1_season_proxy::config`.

use f1_season_proxy::AppError;
use f1_season_proxy::api::dto::calendar::CalendarResponse;
use f1_season_proxy::api::dto::season::{ConstructorsResponse, DriversResponse};
use f1_season_proxy::api::dto::standings::StandingsResponse;
use f1_season_proxy::application::services::{CalendarService, SeasonService};
use f1_season_proxy::config::{self, Config};
use f1_season_proxy::domain::endpoints::UpstreamEndpoints;
use f1_season_proxy::domain::entities::Race;
use f1_season_proxy::domain::{Clock, SystemClock, UpstreamClient, YearToken};
use f1_season_proxy::infrastructure::upstream::HttpUpstreamClient;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Terminal client for F1 season data.
#[derive(Parser)]
#[command(name = "f1ctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the API's JSON body instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show the race calendar of a season
    Calendar {
        /// Four-digit year or "current"
        year: String,
    },

    /// List the drivers of a season
    Drivers {
        /// Four-digit year or "current"
        year: String,
    },

    /// List the constructors of a season
    Constructors {
        /// Four-digit year or "current"
        year: String,
    },

    /// Show a championship table
    Standings {
        #[command(subcommand)]
        table: StandingsTable,
    },

    /// Configuration tools
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Upstream diagnostics
    Upstream {
        #[command(subcommand)]
        action: UpstreamAction,
    },
}

/// Championship table subcommands.
#[derive(Subcommand)]
enum StandingsTable {
    /// Drivers' championship
    Drivers {
        /// Four-digit year or "current"
        year: String,
    },

    /// Constructors' championship
    Constructors {
        /// Four-digit year or "current"
        year: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate environment configuration
    Check,
}

#[derive(Subcommand)]
enum UpstreamAction {
    /// Fetch the current season from both sources and report latency
    Ping,
}

/// Services wired the same way the server wires them.
struct Services {
    upstream: Arc<HttpUpstreamClient>,
    clock: Arc<dyn Clock>,
    endpoints: UpstreamEndpoints,
    calendar: CalendarService<HttpUpstreamClient>,
    season: SeasonService<HttpUpstreamClient>,
}

impl Services {
    fn from_env() -> Result<Self> {
        let config = config::load_from_env().context("Invalid configuration")?;

        let upstream =
            Arc::new(HttpUpstreamClient::new().context("Failed to build upstream HTTP client")?);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let endpoints = UpstreamEndpoints::new(&config.primary_api_url, &config.optional_api_url);

        let calendar = CalendarService::new(upstream.clone(), clock.clone(), endpoints.clone())
            .with_optional_timeout(config.optional_source_timeout());
        let season = SeasonService::new(upstream.clone(), clock.clone(), endpoints.clone());

        Ok(Self {
            upstream,
            clock,
            endpoints,
            calendar,
            season,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calendar { year } => {
            handle_calendar(&Services::from_env()?, &year, cli.json).await?
        }
        Commands::Drivers { year } => {
            handle_drivers(&Services::from_env()?, &year, cli.json).await?
        }
        Commands::Constructors { year } => {
            handle_constructors(&Services::from_env()?, &year, cli.json).await?
        }
        Commands::Standings { table } => {
            handle_standings(&Services::from_env()?, table, cli.json).await?
        }
        Commands::Config {
            action: ConfigAction::Check,
        } => check_config()?,
        Commands::Upstream {
            action: UpstreamAction::Ping,
        } => handle_ping(&Services::from_env()?).await?,
    }

    Ok(())
}

/// Turns a service error into the same one-line message the API would return.
fn api_error(e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{} ({})", e, e.status_code())
}

fn print_json<T: Serialize>(body: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}

/// Prints the calendar of a season.
///
/// # Output Format
///
/// ```text
/// 🏁 2024 calendar (24 races)
///
///   Rnd Race                            Circuit                         Date
///   ──────────────────────────────────────────────────────────────────────────
///   1   Bahrain Grand Prix              Bahrain International Circuit   2024-03-02 15:00:00Z
/// ```
async fn handle_calendar(ctx: &Services, year: &str, json: bool) -> Result<()> {
    let result = ctx.calendar.calendar(year).await.map_err(api_error)?;

    if json {
        return print_json(&CalendarResponse::from(result));
    }

    println!(
        "{}",
        format!("🏁 {} calendar ({} races)", result.requested_year, result.total_races())
            .bright_blue()
            .bold()
    );
    println!();
    println!(
        "  {:<3} {:<31} {:<31} {}",
        "Rnd".bright_white().bold(),
        "Race".bright_white().bold(),
        "Circuit".bright_white().bold(),
        "Date".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for race in &result.races {
        println!(
            "  {:<3} {:<31} {:<31} {}",
            race.round.bright_black(),
            race.race_name.cyan(),
            race.circuit.circuit_name,
            race_start(race).bright_black()
        );
        if race.sessions.sprint.is_some() {
            println!("      {}", "sprint weekend".yellow());
        }
    }

    println!();
    match (&result.sources.optional, &result.supplemental) {
        (Some(_), Some(_)) => println!("  {}", "Live-timing meetings merged".green()),
        (Some(_), None) => println!("  {}", "Live-timing source unavailable".yellow()),
        (None, _) => println!("  {}", "No live-timing data for this season".bright_black()),
    }
    println!();

    Ok(())
}

fn race_start(race: &Race) -> String {
    match &race.time {
        Some(time) => format!("{} {}", race.date, time),
        None => race.date.clone(),
    }
}

async fn handle_drivers(ctx: &Services, year: &str, json: bool) -> Result<()> {
    let roster = ctx.season.drivers(year).await.map_err(api_error)?;

    if json {
        return print_json(&DriversResponse::from(roster));
    }

    println!(
        "{}",
        format!("🧑 {} drivers ({})", roster.season, roster.total())
            .bright_blue()
            .bold()
    );
    println!();

    for driver in &roster.entries {
        println!(
            "  {:<4} {:<4} {:<28} {}",
            driver.permanent_number.as_deref().unwrap_or("-").bright_black(),
            driver.code.as_deref().unwrap_or("-").bright_white(),
            driver.full_name().cyan(),
            driver.nationality.as_deref().unwrap_or("")
        );
    }
    println!();

    Ok(())
}

async fn handle_constructors(ctx: &Services, year: &str, json: bool) -> Result<()> {
    let roster = ctx.season.constructors(year).await.map_err(api_error)?;

    if json {
        return print_json(&ConstructorsResponse::from(roster));
    }

    println!(
        "{}",
        format!("🏎  {} constructors ({})", roster.season, roster.total())
            .bright_blue()
            .bold()
    );
    println!();

    for constructor in &roster.entries {
        println!(
            "  {:<28} {}",
            constructor.name.cyan(),
            constructor.nationality.as_deref().unwrap_or("")
        );
    }
    println!();

    Ok(())
}

/// Prints a championship table.
async fn handle_standings(ctx: &Services, table: StandingsTable, json: bool) -> Result<()> {
    match table {
        StandingsTable::Drivers { year } => {
            let standings = ctx.season.driver_standings(&year).await.map_err(api_error)?;

            if json {
                return print_json(&StandingsResponse::from(standings));
            }

            print_standings_header("Drivers", &standings.season, standings.round.as_deref());
            for entry in &standings.entries {
                let team = entry
                    .constructors
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" / ");
                println!(
                    "  {:<4} {:<28} {:<24} {:>7} {:>4}",
                    entry.position_text.as_deref().unwrap_or("-").bright_black(),
                    entry.driver.full_name().cyan(),
                    team,
                    entry.points.bright_green().bold(),
                    entry.wins
                );
            }
        }
        StandingsTable::Constructors { year } => {
            let standings = ctx
                .season
                .constructor_standings(&year)
                .await
                .map_err(api_error)?;

            if json {
                return print_json(&StandingsResponse::from(standings));
            }

            print_standings_header("Constructors", &standings.season, standings.round.as_deref());
            for entry in &standings.entries {
                println!(
                    "  {:<4} {:<28} {:>7} {:>4}",
                    entry.position_text.as_deref().unwrap_or("-").bright_black(),
                    entry.constructor.name.cyan(),
                    entry.points.bright_green().bold(),
                    entry.wins
                );
            }
        }
    }

    println!();
    Ok(())
}

fn print_standings_header(kind: &str, season: &str, round: Option<&str>) {
    let after = round.map(|r| format!(" after round {}", r)).unwrap_or_default();
    println!(
        "{}",
        format!("🏆 {} {} championship{}", season, kind, after)
            .bright_blue()
            .bold()
    );
    println!();
}

/// Validates configuration without touching the network.
fn check_config() -> Result<()> {
    println!("{}", "🔍 Checking configuration...".bright_blue());

    let config = Config::from_env()?;
    match config.validate() {
        Ok(()) => {
            println!("  Primary source:  {}", config.primary_api_url.bright_white());
            println!("  Optional source: {}", config.optional_api_url.bright_white());
            println!(
                "  Optional timeout: {}",
                format!("{}ms", config.optional_source_timeout_ms).bright_white()
            );
            println!("  Static dir:      {}", config.static_dir.bright_white());
            println!("{}", "✅ Configuration OK".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Err(e)
        }
    }
}

/// Fetches the current season from each source and reports the outcome.
async fn handle_ping(ctx: &Services) -> Result<()> {
    println!("{}", "📡 Pinging upstreams...".bright_blue());
    println!();

    let primary = ctx.endpoints.season(YearToken::Current);
    let optional = ctx.endpoints.meetings(ctx.clock.current_year());

    let primary_ok = ping(ctx, "primary", &primary).await;
    ping(ctx, "optional", &optional).await;
    println!();

    if !primary_ok {
        anyhow::bail!("Primary source is unreachable");
    }

    Ok(())
}

async fn ping(ctx: &Services, label: &str, url: &str) -> bool {
    let started = Instant::now();
    let result = ctx.upstream.fetch_json(url).await;
    let elapsed = started.elapsed().as_millis();

    match result {
        Ok(_) => {
            println!(
                "  {:<9} {} {} ({}ms)",
                label,
                "OK".green().bold(),
                url.bright_black(),
                elapsed
            );
            true
        }
        Err(e) => {
            println!(
                "  {:<9} {} {} ({})",
                label,
                "FAIL".red().bold(),
                url.bright_black(),
                e
            );
            false
        }
    }
}

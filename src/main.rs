//! fuelsplit - split a trip's fuel cost fairly
//!
//! Starts an interactive terminal form by default. Passing `--print`,
//! `--json` or `--copy` computes the split once from the command line and
//! exits instead.
//!
//! # Architecture
//!
//! - `splitter` - Sanitization and the cost calculation
//! - `utils` - Numeric coercion, currency formatting, summary text
//! - `app` / `input` - Form state and key handling
//! - `ui` - Terminal UI rendering with ratatui
//! - `config` - Form defaults and fuel presets (YAML)
//! - `stores` / `traits` - Clipboard access
//! - `logging` - File based tracing

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, poll, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fuelsplit::input::handle_key_event;
use fuelsplit::ui::ui;
use fuelsplit::{logging, App, Config, FuelType, RoundingUnit, SystemClipboard, TripInput, TripResult};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long to wait for input before redrawing (drives the copy indicator timeout)
const POLL_INTERVAL_MS: u64 = 100;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fuelsplit", author, version, about = "Split a trip's fuel cost fairly", long_about = None)]
struct Args {
    #[arg(short, long, allow_hyphen_values = true, help = "Trip distance in km")]
    distance: Option<String>,

    #[arg(short, long, allow_hyphen_values = true, help = "Fuel mileage in km per litre")]
    mileage: Option<String>,

    #[arg(short, long, allow_hyphen_values = true, help = "People in the vehicle")]
    people: Option<String>,

    #[arg(short, long, value_enum, help = "Fuel preset")]
    fuel: Option<FuelType>,

    #[arg(long, allow_hyphen_values = true, help = "Custom fuel price per litre (implies --fuel custom)")]
    price: Option<String>,

    #[arg(long, help = "Split among passengers only")]
    exclude_owner: bool,

    #[arg(long, conflicts_with = "exclude_owner", help = "Include the owner in the split")]
    include_owner: bool,

    #[arg(short, long, value_name = "1|5|10", help = "Round each share to this unit")]
    round_to: Option<RoundingUnit>,

    #[arg(long, help = "Print the summary and exit")]
    print: bool,

    #[arg(long, help = "Output machine-readable JSON and exit")]
    json: bool,

    #[arg(long, help = "Copy the summary to the clipboard and exit")]
    copy: bool,

    #[arg(long, global = true, help = "Use this config file instead of the default location")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Write the default configuration file
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct SplitReport {
    input: TripInput,
    result: TripResult,
    summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    copied: Option<bool>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let logging_status = logging::init_logging();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    if let Some(Commands::Config { command }) = &args.command {
        return handle_config_command(command, &config_path);
    }

    let interactive = !(args.print || args.json || args.copy);
    let mut startup_errors = Vec::new();

    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) if interactive => {
            startup_errors.push(format!("{:#}", e));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let mut app = App::new(&config);
    apply_args(&mut app, &args);

    if !interactive {
        if let Err(e) = logging_status {
            eprintln!("Logging disabled: {:#}", e);
        }
        return run_once(&mut app, &args);
    }

    if let Err(e) = logging_status {
        startup_errors.push(format!("Logging disabled: {:#}", e));
    }
    for error in startup_errors {
        app.log_error(error);
        app.show_errors = true;
    }

    tracing::info!("starting interactive form");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Applies command-line overrides on top of the configured defaults
fn apply_args(app: &mut App, args: &Args) {
    if let Some(distance) = &args.distance {
        app.distance = distance.clone();
    }
    if let Some(mileage) = &args.mileage {
        app.mileage = mileage.clone();
    }
    if let Some(people) = &args.people {
        app.people = people.clone();
    }
    if let Some(fuel) = args.fuel {
        app.select_fuel(fuel);
    }
    if let Some(price) = &args.price {
        app.set_custom_price(price.clone());
    }
    if args.exclude_owner {
        app.include_owner = false;
    } else if args.include_owner {
        app.include_owner = true;
    }
    if let Some(unit) = args.round_to {
        app.rounding_unit = unit;
    }
    app.recalculate();
}

/// Computes the split once and reports it on stdout
fn run_once(app: &mut App, args: &Args) -> Result<()> {
    let copied = if args.copy {
        Some(app.copy_summary(&mut SystemClipboard))
    } else {
        None
    };

    if args.json {
        let report = SplitReport {
            input: app.trip_input(),
            result: app.result(),
            summary: app.share_text(),
            copied,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
        return Ok(());
    }

    if args.print {
        println!("{}", app.share_text());
    }
    match copied {
        Some(true) => println!("copied summary to clipboard"),
        Some(false) => println!("clipboard unavailable, summary not copied"),
        None => {}
    }
    Ok(())
}

fn handle_config_command(command: &ConfigCommands, path: &Path) -> Result<()> {
    match command {
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(path)?;
            println!("wrote {}", path.display());
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut clipboard = SystemClipboard;
    terminal.clear()?;

    loop {
        app.expire_copied_indicator(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        if poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(app, key, &mut clipboard) {
                    tracing::info!("quitting");
                    return Ok(());
                }
            }
        }
    }
}

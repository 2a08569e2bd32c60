//! `stride` - CLI for stridelog
//!
//! This binary provides the command-line interface for recording walks and
//! viewing the derived statistics.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use stridelog::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, ListCommand, OutputFormat,
    ShowCommand, SummaryCommand,
};
use stridelog::draft::{parse_date, AddWalkFlow};
use stridelog::walk::{Mood, Walk};
use stridelog::{format, init_logging, Config, Error, Store, Summary};

/// Application state, constructed once at startup and passed by reference
/// to the command handlers.
#[derive(Debug)]
struct App {
    config: Config,
    store: Store,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Config inspection doesn't need (and shouldn't create) the database
    if let Some(Command::Config(config_cmd)) = &cli.command {
        return handle_config(&config, config_cmd);
    }

    let store = Store::open(config.database_path())?;
    let app = App { config, store };

    // A bare `stride` lands on the walk list
    let command = cli
        .command
        .unwrap_or_else(|| Command::List(ListCommand::default()));

    match command {
        Command::List(cmd) => handle_list(&app, &cmd),
        Command::Add(cmd) => handle_add(&app, &cmd),
        Command::Show(cmd) => handle_show(&app, &cmd),
        Command::Summary(cmd) => handle_summary(&app, &cmd),
        Command::Delete(cmd) => handle_delete(&app, &cmd),
        // Handled before the store was opened
        Command::Config(_) => Ok(()),
    }
}

fn handle_list(app: &App, cmd: &ListCommand) -> anyhow::Result<()> {
    let walks = app.store.all()?;

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&walks)?);
        }
        OutputFormat::Table => {
            if walks.is_empty() {
                println!("No walks recorded yet. Try `stride add`.");
                return Ok(());
            }
            println!(
                "{:>4}  {:<14} {:>8} {:>8} {:>8}  {}",
                "ID", "DATE", "KM", "MIN", "KM/H", "MOOD"
            );
            for walk in &walks {
                println!(
                    "{:>4}  {:<14} {:>8} {:>8} {:>8}  {}",
                    id_display(walk),
                    date_display(app, walk),
                    format::fixed_decimal(walk.distance_km),
                    format::fixed_decimal(walk.minutes_taken),
                    format::fixed_decimal(walk.speed_kmh()),
                    mood_display(app, walk),
                );
            }
        }
        OutputFormat::Plain => {
            for walk in &walks {
                println!(
                    "{} {} {} km in {} min ({} km/h, {})",
                    id_display(walk),
                    date_display(app, walk),
                    format::fixed_decimal(walk.distance_km),
                    format::fixed_decimal(walk.minutes_taken),
                    format::fixed_decimal(walk.speed_kmh()),
                    walk.mood,
                );
            }
        }
    }
    Ok(())
}

fn handle_add(app: &App, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut flow = AddWalkFlow::new();

    if let Err(err) = populate_draft(&mut flow, cmd) {
        flow.abandon();
        return Err(err.into());
    }

    match flow.submit(&app.store) {
        Ok(walk) => {
            println!("Saved walk {}.", id_display(&walk));
            println!();
            print_walk_detail(app, &walk);
            Ok(())
        }
        Err(err) => {
            // Leaving the add flow without a save discards the draft
            flow.abandon();
            Err(err.into())
        }
    }
}

/// Copy the command-line options into the flow's draft.
///
/// Absent options stay unset so the flow's own presence check reports them;
/// only a present-but-unparseable date fails here.
fn populate_draft(flow: &mut AddWalkFlow, cmd: &AddCommand) -> Result<(), Error> {
    if let Some(input) = &cmd.date {
        flow.draft.date_walked = Some(parse_date(input)?);
    }
    flow.draft.distance_km = cmd.distance;
    flow.draft.minutes_taken = cmd.minutes;
    flow.draft.mood = cmd.mood.as_deref().map(Mood::parse);
    Ok(())
}

fn handle_show(app: &App, cmd: &ShowCommand) -> anyhow::Result<()> {
    let walk = app
        .store
        .get(cmd.id)?
        .ok_or(Error::WalkNotFound { id: cmd.id })?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&walk)?);
    } else {
        print_walk_detail(app, &walk);
    }
    Ok(())
}

fn handle_summary(app: &App, cmd: &SummaryCommand) -> anyhow::Result<()> {
    let walks = app.store.all()?;
    let summary = Summary::compute(&walks);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("stride summary");
        println!("--------------");
        println!("Walks:               {}", summary.walk_count);
        println!(
            "Good walks:          {} ({})",
            summary.good_count,
            summary.percent_good_display()
        );
        println!(
            "Average speed:       {} km/h",
            summary.average_speed_display()
        );
        println!(
            "Average good speed:  {} km/h",
            summary.average_good_speed_display()
        );
    }
    Ok(())
}

fn handle_delete(app: &App, cmd: &DeleteCommand) -> anyhow::Result<()> {
    if app.store.delete(cmd.id)? {
        println!("Deleted walk {}.", cmd.id);
        Ok(())
    } else {
        Err(Error::WalkNotFound { id: cmd.id }.into())
    }
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:   {}", config.database_path().display());
                println!();
                println!("[Display]");
                println!("  Color:           {}", config.display.color);
                println!("  Relative dates:  {}", config.display.relative_dates);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}

fn print_walk_detail(app: &App, walk: &Walk) {
    println!("Walk {}", id_display(walk));
    println!("---------");
    println!(
        "Date:      {} ({})",
        walk.date_walked,
        format::relative_date(walk.date_walked)
    );
    println!("Distance:  {} km", format::fixed_decimal(walk.distance_km));
    println!(
        "Time:      {} minutes",
        format::fixed_decimal(walk.minutes_taken)
    );
    println!("Speed:     {} km/h", format::fixed_decimal(walk.speed_kmh()));
    println!(
        "Mood:      {} [{}]",
        mood_display(app, walk),
        walk.mood.image_ref()
    );
}

/// Display a walk's id, falling back to `-` for an unsaved record.
fn id_display(walk: &Walk) -> String {
    walk.id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

/// Display a walk's date per the display configuration.
fn date_display(app: &App, walk: &Walk) -> String {
    if app.config.display.relative_dates {
        format::relative_date(walk.date_walked)
    } else {
        walk.date_walked.to_string()
    }
}

/// Display a walk's mood, striking through bad-mood walks in color mode.
fn mood_display(app: &App, walk: &Walk) -> String {
    let name = walk.mood.to_string();
    if app.config.display.color && walk.mood == Mood::Bad {
        format::strikethrough(&name)
    } else {
        name
    }
}

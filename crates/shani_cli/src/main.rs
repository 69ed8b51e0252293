use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use shani_ephemeris::{EphemerisTable, Rashi};
use shani_sade_sati::{
    SadeSatiPhase, SadeSatiResult, SadeSatiWindow, calculate_sade_sati, sade_sati_timeline,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shani", version, about = "Sade Sati and Saturn transit calculator")]
struct Cli {
    /// JSON transit table replacing the built-in one
    #[arg(long, global = true, env = "SHANI_EPHEMERIS")]
    ephemeris: Option<PathBuf>,
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log lookups to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sade Sati status for a natal Moon sign
    Check {
        /// Moon sign, English or Sanskrit (e.g. Aries, Mesha)
        moon_sign: String,
        /// Date to check (YYYY-MM-DD, default today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Saturn's sign on a date
    Position {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Every Sade Sati window for a Moon sign within the table
    Timeline {
        /// Moon sign, English or Sanskrit
        moon_sign: String,
    },
    /// Print the transit table in use
    Table,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {s}: {e}"))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_table(path: Option<&PathBuf>) -> EphemerisTable {
    match path {
        Some(p) => EphemerisTable::from_path(p).unwrap_or_else(|e| {
            eprintln!("Failed to load ephemeris {}: {e}", p.display());
            std::process::exit(1);
        }),
        None => EphemerisTable::reference(),
    }
}

fn parse_rashi(s: &str) -> Rashi {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: Aries..Pisces or Mesha..Meena");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn print_report(r: &SadeSatiResult) {
    println!("Moon sign:  {}", r.moon_sign);
    println!(
        "Saturn:     {} (house {} from Moon) on {}",
        r.saturn_sign, r.house_from_moon, r.check_date
    );
    println!("Phase:      {} (impact {})", r.phase.name(), r.impact.name());
    if let (Some(s), Some(e)) = (r.current_phase_start, r.current_phase_end) {
        println!("Current:    {s} to {e}");
    }
    if let (Some(s), Some(e)) = (r.sade_sati_start, r.sade_sati_end) {
        println!("Sade Sati:  {s} to {e}");
    }
    if r.phase == SadeSatiPhase::NotActive {
        match (r.next_sade_sati_start, r.next_sade_sati_end, r.years_until_start) {
            (Some(s), Some(e), Some(y)) => println!("Next:       {s} to {e} (in {y:.1} years)"),
            _ => println!("Next:       beyond ephemeris coverage"),
        }
    }
    println!();
    println!("{}", r.description);
    if !r.life_areas.is_empty() {
        println!("Affected:   {}", r.life_areas.join(", "));
    }
    if let Some(dh) = r.dhaiya {
        println!();
        println!("{} (house {}): {}", dh.name(), dh.house(), dh.description());
    }
    println!();
    println!("Remedies:");
    for remedy in r.remedies {
        println!("  - {remedy}");
    }
}

fn print_window(w: &SadeSatiWindow, today: NaiveDate) {
    let marker = if w.contains(today) { "  <- current" } else { "" };
    println!(
        "{} to {}  (rising {}, peak {}, setting {}){marker}",
        w.full_start(),
        w.full_end(),
        w.rising_start,
        w.peak_start,
        w.setting_start
    );
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let table = load_table(cli.ephemeris.as_ref());
    debug!(
        records = table.len(),
        start = %table.start(),
        end = %table.end(),
        "ephemeris ready"
    );
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Check { moon_sign, date } => {
            let date = date.unwrap_or(today);
            match calculate_sade_sati(&table, &moon_sign, date) {
                Ok(r) if cli.json => print_json(&r),
                Ok(r) => print_report(&r),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Position { date } => {
            let date = date.unwrap_or(today);
            let Some((_, t)) = table.resolve(date) else {
                eprintln!(
                    "Error: {date} outside ephemeris coverage ({} to {})",
                    table.start(),
                    table.end()
                );
                std::process::exit(1);
            };
            if cli.json {
                print_json(t);
            } else {
                println!("Saturn in {} on {date} ({} to {})", t.rashi, t.entry, t.exit);
            }
        }
        Commands::Timeline { moon_sign } => {
            let moon = parse_rashi(&moon_sign);
            let windows = sade_sati_timeline(&table, moon);
            if cli.json {
                print_json(&windows);
            } else if windows.is_empty() {
                println!("No complete Sade Sati for {moon} within the table");
            } else {
                println!("Sade Sati windows for {moon}:");
                for w in &windows {
                    print_window(w, today);
                }
            }
        }
        Commands::Table => {
            if cli.json {
                print_json(table.transits());
            } else {
                for t in table.transits() {
                    println!("{:<24} {} to {}", t.rashi.to_string(), t.entry, t.exit);
                }
            }
        }
    }
}

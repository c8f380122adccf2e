//! Symtrack CLI
//!
//! Usage:
//!   symtrack --file entries.json                 # Patterns for the last 30 days
//!   symtrack --file entries.json --days 90       # Wider window
//!   symtrack --file entries.json --summary       # Patterns + dashboard summary
//!   symtrack --interactive                       # Log entries line by line
//!   symtrack --serve                             # HTTP API server
//!   symtrack --file entries.json --json          # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use symtrack::core::{
    load_entries, parse_date, parse_entry_line, run_server, EntryLog, PatternEngine,
};
use symtrack::types::{Pattern, Summary, Symptom, SymptomRecord};
use symtrack::{Config, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "symtrack",
    version = VERSION,
    about = "Symtrack - find patterns in daily symptom logs",
    long_about = "Symtrack analyzes daily self-reported pain, mood, energy and sleep\n\
                  scores plus trigger labels, and reports:\n\n  \
                  correlation  - symptoms that move together\n  \
                  trend        - symptoms drifting up or down over time\n  \
                  trigger      - labels that co-occur with high pain or low mood\n\n\
                  At least 7 entries in the window are needed for any finding."
)]
struct Args {
    /// JSON file with an array of entries
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Analyze the last N days (default from config: 30)
    #[arg(short, long)]
    days: Option<u32>,

    /// Window end date, YYYY-MM-DD (default: today)
    #[arg(long)]
    until: Option<String>,

    /// Show only the first N patterns
    #[arg(short, long)]
    limit: Option<usize>,

    /// Also print the dashboard summary
    #[arg(long)]
    summary: bool,

    /// Interactive mode - log entries from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides config)
    #[arg(long)]
    addr: Option<String>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args).await {
        error!(error = %e, "symtrack failed");
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> symtrack::Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(days) = args.days {
        config.window_days = days;
    }
    if let Some(ref addr) = args.addr {
        config.addr = addr.clone();
    }

    if args.serve {
        run_server(&config).await
    } else if args.interactive {
        run_interactive(args, &config)
    } else if let Some(ref path) = args.file {
        run_file(path, args, &config)
    } else {
        // Default to interactive if no mode specified
        run_interactive(args, &config)
    }
}

/// Analyze a file of entries
fn run_file(path: &Path, args: &Args, config: &Config) -> symtrack::Result<()> {
    let log = load_entries(path)?;
    let until = match args.until {
        Some(ref s) => parse_date(s)?,
        None => today(),
    };

    let entries = log.window(until, config.window_days);
    if entries.len() < log.len() {
        warn!(
            kept = entries.len(),
            total = log.len(),
            days = config.window_days,
            "entries outside the window were skipped"
        );
    }

    let engine = PatternEngine::with_thresholds(config.thresholds);
    let patterns = engine.analyze(&entries);

    if args.json {
        let mut out = serde_json::json!({ "patterns": shown(&patterns, args.limit) });
        if args.summary {
            out["summary"] = serde_json::to_value(Summary::build(&entries, until))?;
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_header(&format!("{} entries, last {} days", entries.len(), config.window_days));
    print_patterns(&patterns, &entries, engine.thresholds().min_entries, args);
    if args.summary {
        print_summary(&Summary::build(&entries, until));
    }
    Ok(())
}

/// Interactive mode: each line is one entry, analysis re-runs after each
fn run_interactive(args: &Args, config: &Config) -> symtrack::Result<()> {
    let engine = PatternEngine::with_thresholds(config.thresholds);
    let mut log = match args.file {
        Some(ref path) => load_entries(path)?,
        None => EntryLog::new(),
    };

    print_header("Interactive Mode");
    println!("One entry per line:");
    println!("  2024-03-01 pain=7 mood=4 energy=5 sleep=6 triggers=Stress,Weather notes=\"...\"");
    println!("A line for an already logged day replaces it. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", format!("[{} entries]>", log.len()).dimmed());
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Entries: {}", log.len());
            break;
        }
        if line.is_empty() {
            continue;
        }

        let record = match parse_entry_line(line) {
            Ok(record) => record,
            Err(e) => {
                println!("{} {}", "⚠".yellow(), e.to_string().yellow());
                continue;
            }
        };
        let date = record.date;
        if log.upsert(record)?.is_some() {
            println!("{}", format!("Replaced entry for {}", date).dimmed());
        }

        let entries: Vec<SymptomRecord> = log.iter().cloned().collect();
        let patterns = engine.analyze(&entries);

        if args.json {
            println!("{}", serde_json::to_string(&shown(&patterns, args.limit))?);
        } else {
            print_patterns(&patterns, &entries, engine.thresholds().min_entries, args);
        }
    }

    Ok(())
}

/// First N patterns, or all
fn shown(patterns: &[Pattern], limit: Option<usize>) -> &[Pattern] {
    &patterns[..limit.unwrap_or(patterns.len()).min(patterns.len())]
}

fn print_patterns(
    patterns: &[Pattern],
    entries: &[SymptomRecord],
    min_entries: usize,
    args: &Args,
) {
    if entries.len() < min_entries {
        println!(
            "{}",
            format!(
                "Need at least {} entries for pattern analysis ({} so far)",
                min_entries,
                entries.len()
            )
            .dimmed()
        );
        return;
    }
    if patterns.is_empty() {
        println!("{}", "No patterns found yet".dimmed());
        return;
    }

    for pattern in shown(patterns, args.limit) {
        if args.no_color {
            println!("{}", pattern.to_parseable_string());
        } else {
            println!("{}", pattern.to_terminal_string());
        }
    }

    let hidden = patterns.len() - shown(patterns, args.limit).len();
    if hidden > 0 {
        println!("{}", format!("... {} more (raise --limit)", hidden).dimmed());
    }
}

fn print_summary(summary: &Summary) {
    println!();
    println!("{}", "Summary".bold());
    println!("  Logging streak: {} day(s)", summary.streak);

    let directions = [
        summary.directions.pain,
        summary.directions.mood,
        summary.directions.energy,
        summary.directions.sleep,
    ];
    for (symptom, direction) in Symptom::ALL.into_iter().zip(directions) {
        println!(
            "  {:<14} avg {:>4.1}  {}",
            symptom.label(),
            summary.averages.get(symptom),
            direction
        );
    }

    if !summary.common_triggers.is_empty() {
        let triggers: Vec<String> = summary
            .common_triggers
            .iter()
            .map(|t| format!("{} ({})", t.trigger, t.count))
            .collect();
        println!("  Common triggers: {}", triggers.join(", "));
    }
    if let Some(worst) = summary.worst_days.first() {
        println!("  Hardest day: {}", worst.date);
    }
    if let Some(best) = summary.best_days.first() {
        println!("  Best day: {}", best.date);
    }
}

fn print_header(subtitle: &str) {
    println!();
    println!("{}", format!("Symtrack v{} - {}", VERSION, subtitle).cyan().bold());
    println!();
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

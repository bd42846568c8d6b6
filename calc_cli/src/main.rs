//! # Tally CLI
//!
//! Command line host over the calculator hub. Every command builds a
//! [`Hub`], applies edits through it and prints the formatted outputs, so
//! results match the GUI exactly.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use calc_core::form::FieldKind;
use calc_core::formulas::{generate_formulas_markdown, metadata};
use calc_core::{filter, CalcError, CalcResult, CalculatorId, Evaluation, Hub, HubSettings, REGISTRY};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(about = "Tally CLI - Everyday calculators from the terminal", long_about = None)]
struct Cli {
    /// JSON settings file (decimals, start_calculator)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Fractional digits in outputs (0-10), overrides the settings file
    #[arg(long, global = true)]
    decimals: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every calculator in display order
    List,
    /// List calculators whose title or keywords match a query
    Search {
        /// Case-insensitive search text
        query: String,
    },
    /// Show the input fields of a calculator
    Fields {
        /// Calculator id (e.g., emi, base-converter)
        id: String,
    },
    /// Evaluate a calculator
    Calc {
        /// Calculator id (e.g., emi, base-converter)
        id: String,
        /// Field edits as key=value; unset fields keep their defaults
        assignments: Vec<String>,
        /// Print typed input and output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the formula reference as Markdown
    Catalog,
    /// Interactive search / open / set / show session
    Shell,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    let settings = load_settings(cli.settings.as_deref(), cli.decimals)?;
    tracing::debug!(decimals = settings.decimals, start = %settings.start_calculator, "settings loaded");

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Search { query } => cmd_search(&query),
        Commands::Fields { id } => cmd_fields(&id),
        Commands::Calc { id, assignments, json } => cmd_calc(settings, &id, &assignments, json),
        Commands::Catalog => cmd_catalog(),
        Commands::Shell => cmd_shell(settings),
    }
}

fn load_settings(path: Option<&Path>, decimals: Option<usize>) -> CalcResult<HubSettings> {
    let settings = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                CalcError::invalid_input("settings", path.display().to_string(), e.to_string())
            })?;
            HubSettings::from_json(&json)?
        }
        None => HubSettings::default(),
    };
    Ok(match decimals {
        Some(d) => settings.with_decimals(d),
        None => settings,
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn cmd_list() -> CalcResult<()> {
    for entry in REGISTRY.iter() {
        println!("{:<18} {}", entry.id, entry.title);
    }
    Ok(())
}

fn cmd_search(query: &str) -> CalcResult<()> {
    let hits = filter(query);
    if hits.is_empty() {
        println!("No calculators match '{}'", query);
        return Ok(());
    }
    for entry in hits {
        println!("{:<18} {}", entry.id, entry.title);
    }
    Ok(())
}

fn cmd_fields(id: &str) -> CalcResult<()> {
    let id = CalculatorId::from_str(id)?;
    print_fields(&Hub::new(), id);
    Ok(())
}

fn print_fields(hub: &Hub, id: CalculatorId) {
    for (spec, value) in hub.form(id).entries() {
        let kind = match spec.kind {
            FieldKind::Number => "number".to_string(),
            FieldKind::Date => "date".to_string(),
            FieldKind::Text => "text".to_string(),
            FieldKind::Choice(options) => options.join(" | "),
        };
        println!("  {:<12} {:<26} = {:<12} [{}]", spec.key, spec.label, value, kind);
    }
}

/// Split `key=value`
fn parse_assignment(assignment: &str) -> CalcResult<(&str, &str)> {
    assignment
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| CalcError::invalid_input("assignment", assignment, "Expected key=value"))
}

fn cmd_calc(settings: HubSettings, id: &str, assignments: &[String], json: bool) -> CalcResult<()> {
    let id = CalculatorId::from_str(id)?;
    let mut hub = Hub::with_settings(settings);
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        hub.set_field(id, key, value)?;
    }

    let eval = hub.evaluate(id, today());
    if json {
        let doc = serde_json::json!({
            "calculator": id,
            "lines": eval.lines,
            "detail": eval.detail,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_evaluation(&eval);
    }
    Ok(())
}

fn print_evaluation(eval: &Evaluation) {
    let width = eval.lines.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);
    for line in &eval.lines {
        println!("  {:<width$}  {}", line.label, line.value, width = width);
    }
}

fn cmd_catalog() -> CalcResult<()> {
    print!("{}", generate_formulas_markdown());
    Ok(())
}

// ============================================================================
// Interactive shell
// ============================================================================

const SHELL_HELP: &str = "\
Commands:
  search <text>      Narrow the tab list (empty text clears)
  open <id>          Select a calculator
  set <key> <value>  Edit a field of the active calculator
  reset              Restore the active calculator's defaults
  show               Print fields and results of the active calculator
  formula            Print the formula of the active calculator
  help               This text
  quit               Leave the shell";

fn print_tabs(hub: &Hub) {
    let active = hub.active_entry().id;
    let visible = hub.visible_entries();
    if visible.is_empty() {
        println!("(no calculators match '{}')", hub.query());
    }
    for entry in visible {
        let marker = if entry.id == active { '>' } else { ' ' };
        println!("{} {:<18} {}", marker, entry.id, entry.title);
    }
}

fn print_active(hub: &Hub) {
    let entry = hub.active_entry();
    println!("[{}]", entry.title);
    print_fields(hub, entry.id);
    println!();
    print_evaluation(&hub.evaluate(entry.id, today()));
}

/// Handle one shell line. Returns `false` when the session should end.
fn shell_command(hub: &mut Hub, line: &str) -> CalcResult<bool> {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').map(|(c, r)| (c, r.trim())).unwrap_or((line, ""));

    match command {
        "" => {}
        "quit" | "exit" | "q" => return Ok(false),
        "help" | "?" => println!("{}", SHELL_HELP),
        "search" => {
            hub.set_query(rest);
            print_tabs(hub);
        }
        "open" => {
            hub.select(CalculatorId::from_str(rest)?);
            print_active(hub);
        }
        "set" => {
            let id = hub.active_entry().id;
            let (key, value) = match rest.split_once('=') {
                Some((k, v)) => (k.trim(), v.trim()),
                None => rest.split_once(' ').map(|(k, v)| (k, v.trim())).unwrap_or((rest, "")),
            };
            hub.set_field(id, key, value)?;
            print_evaluation(&hub.evaluate(id, today()));
        }
        "reset" => {
            let id = hub.active_entry().id;
            hub.reset(id);
            print_active(hub);
        }
        "show" => print_active(hub),
        "formula" => {
            let meta = metadata(hub.active_entry().id);
            println!("{}", meta.formula);
            for note in meta.notes {
                println!("  - {}", note);
            }
        }
        other => println!("Unknown command '{}'. Type 'help'.", other),
    }
    Ok(true)
}

fn cmd_shell(settings: HubSettings) -> CalcResult<()> {
    let mut hub = Hub::with_settings(settings);
    println!("Tally shell. Type 'help' for commands.");
    print_tabs(&hub);

    let stdin = io::stdin();
    loop {
        print!("{}> ", hub.active_entry().id);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match shell_command(&mut hub, &line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    Ok(())
}

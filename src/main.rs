use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use planetsieve::cli_error::{hint, CliError};
use planetsieve::{
    validate_parent, write_results, Config, Engine, Lexicon, PatpCodec, RunStats, SieveError,
    Strategy, WordListPaths,
};

/// List the planets of a star, sorted into files by how recognisable their names are.
#[derive(Parser)]
#[command(name = "planetsieve", version)]
struct Cli {
    /// Star to sieve, e.g. ~marzod. Prompted for when omitted.
    star: Option<String>,

    /// Strategy to run; repeat for several. Defaults to every filtered list.
    #[arg(short, long = "strategy", value_enum)]
    strategies: Vec<Strategy>,

    /// Pick one strategy from a list instead
    #[arg(long, conflicts_with = "strategies")]
    choose: bool,

    /// Directory containing english-single.txt, english-double.txt,
    /// approx-single.txt and approx-double.txt
    #[arg(short, long)]
    wordlists: Option<PathBuf>,

    /// Root directory for result files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON summary to stdout
    #[arg(long)]
    json: bool,

    /// Classify without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli);
    let start_time = Instant::now();

    let mut config = match &cli.config {
        Some(path) => Config::load(path).map_err(|e| CliError::new("loading config", e))?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.wordlists {
        config.wordlists = WordListPaths::in_dir(dir);
    }
    if let Some(dir) = &cli.output {
        config.output_dir = dir.clone();
    }
    if !cli.strategies.is_empty() {
        config.strategies = cli.strategies.clone();
    }
    if cli.choose {
        config.strategies = vec![choose_strategy().map_err(|e| CliError::new("bad input", e))?];
    }

    let codec = PatpCodec;
    let star = match &cli.star {
        Some(star) => star.clone(),
        None => prompt_star(&codec).map_err(|e| CliError::new("bad input", e))?,
    };
    let parent = validate_parent(&codec, &star).map_err(|e| CliError::new("bad input", e))?;

    let (lexicon, failures) = Lexicon::load(&config.wordlists);
    for failure in &failures {
        warn!("{}; using an empty list", hint(failure));
    }
    info!(%parent, words = lexicon.total_words(), "making planet lists");

    let engine = Engine::new(&codec, &lexicon);
    let show_progress = !cli.json && !cli.quiet;
    let mut stats = RunStats::new();
    let mut write_failures = 0usize;

    for &strategy in &config.strategies {
        let spinner = if show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::with_template("{spinner:.blue} {msg}")?);
            pb.set_message(format!("Sieving {} ...", strategy.label()));
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let run = engine
            .enumerate(&parent, strategy)
            .map_err(|e| CliError::new("enumeration failed", e))?;

        let path = if cli.dry_run {
            None
        } else {
            match write_results(&config.output_dir, &parent, strategy, &run.matches) {
                Ok(path) => Some(path.display().to_string()),
                Err(e) => {
                    error!("{}", hint(&e));
                    write_failures += 1;
                    None
                }
            }
        };

        if let Some(pb) = spinner {
            pb.finish_with_message(format!("{}: {} planets", strategy.label(), run.matches.len()));
        }
        stats.record(&run, path);
    }

    stats.report();

    if cli.json {
        let summary = serde_json::json!({
            "parent": parent.as_str(),
            "dry_run": cli.dry_run,
            "wordlist_failures": failures.len(),
            "elapsed_ms": start_time.elapsed().as_millis() as u64,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if write_failures > 0 {
        return Err(CliError::Message(format!(
            "Failed to write {write_failures} result file(s)"
        ))
        .into());
    }
    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt_star(codec: &PatpCodec) -> Result<String, SieveError> {
    if !std::io::stdin().is_terminal() {
        return Err(SieveError::Prompt("no star given and stdin is not a terminal".into()));
    }
    Input::<String>::new()
        .with_prompt("Which star? (e.g., ~marzod)")
        .validate_with(|input: &String| -> Result<(), String> {
            validate_parent(codec, input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| SieveError::Prompt(e.to_string()))
}

fn choose_strategy() -> Result<Strategy, SieveError> {
    if !std::io::stdin().is_terminal() {
        return Err(SieveError::Prompt("--choose needs a terminal".into()));
    }
    let labels: Vec<&str> = Strategy::ALL.iter().map(|s| s.label()).collect();
    let picked = Select::new()
        .with_prompt("Which strategy?")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| SieveError::Prompt(e.to_string()))?;
    Ok(Strategy::ALL[picked])
}

// Sortty: step-by-step sorting algorithm visualizer

use std::fs::File;
use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use sortty::cli::Cli;
use sortty::config::Config;
use sortty::error::{AppError, Result};
use sortty::input;
use sortty::ui::App;

fn main() {
    let config = Cli::parse().into_config();

    if let Err(e) = run(config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    // Flushes buffered log lines when dropped
    let _log_guard = init_logging(&config)?;

    if config.summary {
        return print_summary(&config);
    }

    let mut app = App::new(&config)?;
    info!(
        algorithm = config.algorithm.name(),
        kind = config.kind.name(),
        len = app.initial_array.len(),
        "starting tui"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(AppError::from)
}

/// Send logs to the configured file. Without one, logs only go to stderr in
/// summary mode since the TUI owns the terminal otherwise.
fn init_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    if let Some(path) = &config.log_file {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let file = File::create(path).map_err(|e| AppError::Logging {
            message: format!("{}: {}", path.display(), e),
        })?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(writer)
            .try_init()
            .map_err(|e| AppError::Logging {
                message: e.to_string(),
            })?;
        return Ok(Some(guard));
    }

    if config.summary {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| AppError::Logging {
                message: e.to_string(),
            })?;
    }

    Ok(None)
}

fn print_summary(config: &Config) -> Result<()> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let array = input::build_array(config.kind, config.size, &config.custom_input, &mut rng)?;
    let run = config.algorithm.generate(&array);

    let seconds = run.len() as f64 / f64::from(config.speed);
    println!(
        "{} on {} elements ({})",
        config.algorithm.name(),
        array.len(),
        config.kind.name()
    );
    println!(
        "Steps: {} (comparisons: {}, mutations: {})",
        run.len(),
        run.comparisons(),
        run.mutations()
    );
    println!("Input:  {:?}", array);
    if let Some(last) = run.last() {
        println!("Output: {:?}", last.array);
    }
    println!("Playback at {}/s: {:.1}s", config.speed, seconds);

    Ok(())
}

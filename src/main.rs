use clap::Parser;
use log::{error, info};
use rsvp_reader::app::{EndReason, Session};
use rsvp_reader::engine::{load_file_safe, Config};
use rsvp_reader::reading::{Document, HeuristicSyllables};
use rsvp_reader::ui::TuiManager;
use std::fs::OpenOptions;
use std::path::PathBuf;

const LOG_FILE: &str = "rsvp-reader.log";

#[derive(Parser)]
#[command(name = "rsvp-reader", version)]
#[command(about = "Speed-read a text file one word at a time", long_about = None)]
struct Cli {
    /// Text file to read
    file: PathBuf,

    /// Starting speed in words per minute
    #[arg(short, long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    wpm: u32,

    /// Line to start reading from (0-based)
    #[arg(short, long, default_value_t = 0)]
    line: usize,

    /// Start in distraction-free mode
    #[arg(short, long)]
    focus: bool,

    /// Write debug logs to rsvp-reader.log
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    // The terminal belongs to the reader, so debug output goes to a file
    if debug {
        match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
                info!("{} {} starting (debug mode)", rsvp_reader::APP_NAME, rsvp_reader::VERSION);
                return;
            }
            Err(e) => {
                eprintln!("Warning: Failed to open {} for debug logging: {}", LOG_FILE, e);
            }
        }
    }
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Error)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let text = load_file_safe(&cli.file)?;
    let document = Document::from_text(&text);
    info!("Loaded {} ({} lines)", cli.file.display(), document.len());

    let mut config = Config::default();
    config.timing.wpm = cli.wpm;
    config.display.distraction_free = cli.focus;

    let mut session = Session::new(&document, &config, HeuristicSyllables, cli.line)?;
    let end = {
        let mut tui = TuiManager::new()?;
        session.run(&mut tui)
    };

    // Terminal is restored by now
    let end = end.inspect_err(|e| error!("Reading session failed: {}", e))?;
    match end.reason {
        EndReason::Finished => println!("Finished {}", cli.file.display()),
        EndReason::Quit | EndReason::Abandoned => {
            println!("Stopped at line {} (resume with --line {})", end.line, end.line)
        }
    }

    Ok(())
}

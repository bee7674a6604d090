// ABOUTME: Main entry point for the poseur program.
// ABOUTME: Provides the CLI and wires input, segmentation and the viewer.

use clap::Parser;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

use poseur::{Navigator, ViewerConfig, load_lines, segment, viewer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Slide source files, shown in order; stdin when none are given
    files: Vec<PathBuf>,

    /// Clear the terminal before every redraw
    #[arg(short, long)]
    fullscreen: bool,

    /// Display width in columns, used for centered lines
    #[arg(short = 'W', long, default_value_t = 80)]
    width: usize,

    /// Print extra information to the console
    #[arg(short, long)]
    verbose: bool,

    /// Print extra debugging information to the console
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        LevelFilter::Debug
    } else if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let lines = load_lines(&cli.files)?;
    let presentation = segment(&lines);

    let config = ViewerConfig {
        width: cli.width,
        fullscreen: cli.fullscreen,
        ..ViewerConfig::default()
    };

    let mut navigator = Navigator::new(presentation);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    if cli.files.is_empty() {
        // The slides came from stdin, so there is no interactive channel
        // left; print the whole deck instead of paging through it.
        viewer::print_all(navigator.presentation(), &config, &mut output)?;
    } else {
        let stdin = io::stdin();
        viewer::run(&mut navigator, &config, stdin.lock(), &mut output)?;
    }

    Ok(())
}

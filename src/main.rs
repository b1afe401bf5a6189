use clap::Parser;
use ebook_reader::book::check_book_file;
use ebook_reader::cli::Cli;
use ebook_reader::config::ConfigStore;
use ebook_reader::error::{ReaderError, Result};
use ebook_reader::logging::init_logging;
use ebook_reader::report::{ErrorReport, exit_code, report};
use ebook_reader::terminal;

fn main() {
    let cli = Cli::parse();

    let status = start(&cli);
    if status != 0 {
        std::process::exit(status);
    }
}

// Returns the process exit status. The log guard lives only inside this
// function so buffered events are flushed before the process exits.
fn start(cli: &Cli) -> i32 {
    let _log_guard = match cli.log_file.as_deref().map(init_logging).transpose() {
        Ok(guard) => guard,
        Err(e) => return handle_error(cli, &e),
    };

    tracing::info!("=== ebook-reader starting ===");
    if let Some(file) = &cli.file {
        tracing::info!("Checking file: {}", file.display());
    }

    match run(cli) {
        Ok(()) => {
            tracing::info!("Preflight passed");
            0
        }
        Err(e) => handle_error(cli, &e),
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Validate CLI arguments
    cli.validate()?;

    let store = match &cli.config_dir {
        Some(dir) => ConfigStore::at(dir)?,
        None => ConfigStore::new()?,
    };
    // Stored values are validated by load, overrides by cli.validate
    let config = cli.apply_overrides(store.load()?);

    let (width, height) = terminal::check_current(config.limits())?;

    match &cli.file {
        Some(file) => {
            check_book_file(file)?;
            println!(
                "{}: ready ({}x{} terminal)",
                file.display(),
                width,
                height
            );
        }
        None => println!("Terminal ready ({}x{})", width, height),
    }

    Ok(())
}

fn handle_error(cli: &Cli, e: &ReaderError) -> i32 {
    let disposition = report(e);

    if cli.json {
        println!("{}", ErrorReport::from(e).to_json());
    } else {
        eprintln!("Error: {}", e);
    }

    exit_code(disposition)
}

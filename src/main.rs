use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use dupe_video_cleaner::cli::Cli;
use dupe_video_cleaner::component::DuplicationChecker;
use dupe_video_cleaner::config::types::Config;
use dupe_video_cleaner::signal::setup_shutdown_signal;
use dupe_video_cleaner::{init, pause};
use log::{info, warn};
use rust_i18n::t;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let cli = Cli::parse();
    let term = Term::stdout();
    let shutdown_signal = setup_shutdown_signal()?;

    // Load config and set locale
    let config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    let mut checker = DuplicationChecker::new(config, shutdown_signal);
    let outcome = checker.run(cli.directory, &cli.extensions);

    match &outcome {
        Ok(result) => info!("Program exited normally: {result:?}"),
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!("{} {e:#}", style(t!("main.error_prefix")).red().bold());
        }
    }

    if !cli.no_pause {
        pause(&term)?;
    }

    if outcome.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

//! Command-line tool for data-driven permutation puzzles.

#[macro_use]
extern crate lazy_static;

mod cli;
mod document;
mod prefs;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install()?;

    let prefs = prefs::ViewPreferences::load(args.prefs.as_deref());
    cli::exec(args.subcommand, &prefs)
}

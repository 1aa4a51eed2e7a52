use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use test_toggle::cli::{Cli, Command};
use test_toggle::logging::{self, Verbosity};
use test_toggle::lookup::{self, Outcome};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Command::Lookup(args) => {
            logging::init(Verbosity::from_flags(args.verbose, args.quiet));

            let config = args.into_config().context("Invalid arguments")?;
            match lookup::run(&config)
                .with_context(|| format!("Failed to toggle {}", config.path))?
            {
                Outcome::Printed(text) => println!("{text}"),
                Outcome::Opened(_) | Outcome::NotFound => {}
            }
        }
    }

    Ok(())
}

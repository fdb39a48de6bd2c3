use clap::Parser;
use fmedit::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rewrite(args) => fmedit::cli::rewrite::run(args)?,
        Commands::Check(args) => fmedit::cli::check::run(args)?,
        Commands::Show(args) => fmedit::cli::show::run(args)?,
        Commands::Completions(args) => fmedit::cli::completions::run(args)?,
    }

    Ok(())
}

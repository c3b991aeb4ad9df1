use clap::Parser;
use miette::Result;
use signgrid::cli::{Cli, Commands};
use signgrid::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Commands::Generate(args) => {
            signgrid::cli::generate::run(args, &printer)?;
        }
        Commands::Preview(args) => {
            signgrid::cli::preview::run(args, &printer)?;
        }
        Commands::Inspect(args) => {
            signgrid::cli::inspect::run(args, &printer)?;
        }
        Commands::Init(args) => signgrid::cli::init::run(args, &printer)?,
        Commands::Completions(args) => signgrid::cli::completions::run(args)?,
    }

    Ok(())
}

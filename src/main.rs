use clap::Parser;
use miette::Result;
use chalk::cli::{Cli, Commands};
use chalk::discovery::resolve_config;
use chalk::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let config = || resolve_config(cli.config.as_deref());

    match cli.command {
        Commands::New(args) => chalk::cli::new::run(args, &printer)?,
        Commands::Draw(args) => chalk::cli::draw::run(args, &config()?, &printer)?,
        Commands::Render(args) => chalk::cli::render::run(args, &config()?, &printer)?,
        Commands::Import(args) => chalk::cli::import::run(args, &config()?, &printer)?,
        Commands::Check(args) => chalk::cli::check::run(args, &config()?, &printer)?,
        Commands::Migrate(args) => {
            chalk::cli::migrate::run(args, &config()?, &printer)?;
        }
        Commands::Palette(args) => chalk::cli::palette::run(args, &config()?, &printer)?,
        Commands::Completions(args) => chalk::cli::completions::run(args)?,
    }

    Ok(())
}

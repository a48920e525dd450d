use clap::{Parser, Subcommand};

use takehome::cmd::{CategoriesCommand, GrossCommand, NetCommand};

#[derive(Parser, Debug)]
#[command(
    name = "takehome",
    version,
    about = "Estimate UK take-home pay for the 2025/26 tax year"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate take-home pay from gross pay
    Net(NetCommand),
    /// Estimate the gross pay required for a target take-home
    Gross(GrossCommand),
    /// List employee National Insurance categories and rates
    Categories(CategoriesCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Net(cmd) => cmd.exec(),
        Command::Gross(cmd) => cmd.exec(),
        Command::Categories(cmd) => cmd.exec(),
    }
}

mod commands;
mod terminal;

use commands::{CommandLine, Commands, interfaces, show, watch};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.quiet);

    match commands.command {
        Commands::Show { .. } => show::show(&cfg),
        Commands::Watch { .. } => watch::watch(&cfg).await,
        Commands::Interfaces => interfaces::interfaces(&cfg),
    }
}

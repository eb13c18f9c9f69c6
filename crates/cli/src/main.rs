use anyhow::Context;
use clap::{Parser, Subcommand};

use saga_kernel::settings::Settings;

#[derive(Parser)]
#[command(name = "saga-cli", about = "Operational entrypoint for the SAGA story service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Print the resolved configuration and exit
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().with_context(|| "failed to load SAGA settings")?;

    match cli.command {
        Command::Serve => saga_app::run(settings).await,
        Command::Config => {
            println!("{settings:#?}");
            Ok(())
        }
    }
}

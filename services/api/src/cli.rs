use crate::report::{run_faq, run_quote, run_region, FaqArgs, QuoteArgs, RegionArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ecopick::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EcoPick",
    about = "Run the EcoPick pickup intake service or price a pickup from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate the settlement for a set of quantities
    Quote(QuoteArgs),
    /// Check whether an address is inside the pickup service area
    Region(RegionArgs),
    /// Search the frequently asked questions
    Faq(FaqArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Region(args) => run_region(args),
        Command::Faq(args) => run_faq(args),
    }
}

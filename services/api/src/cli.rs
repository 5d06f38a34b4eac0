use crate::commands::{
    run_classify, run_conflict_check, run_package, ClassifyArgs, ConflictCheckArgs, PackageArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use filing_copilot::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "IP Filing Co-Pilot (ZA)",
    about = "Prepare CIPC trademark filing packages from the command line or over HTTP. Not a law firm.",
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
    /// Suggest NICE classes for a business description
    Classify(ClassifyArgs),
    /// Run the basic name check for a mark
    ConflictCheck(ConflictCheckArgs),
    /// Generate the filing package ZIP from an intake JSON file
    Package(PackageArgs),
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
        Command::Classify(args) => run_classify(args),
        Command::ConflictCheck(args) => run_conflict_check(args),
        Command::Package(args) => run_package(args),
    }
}

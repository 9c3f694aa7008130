use crate::commands::{run_evaluate, run_scenarios, run_self_test, EvaluateArgs, SelfTestArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vawa_screener::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "VAWA Self-Petition Screener",
    about = "Screen self-petition eligibility from the command line or over HTTP",
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
    /// Evaluate an answer record stored as JSON
    Evaluate(EvaluateArgs),
    /// List the built-in regression scenarios
    Scenarios,
    /// Run every built-in scenario and compare against its expected verdict
    SelfTest(SelfTestArgs),
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Scenarios => run_scenarios(),
        Command::SelfTest(args) => run_self_test(args),
    }
}

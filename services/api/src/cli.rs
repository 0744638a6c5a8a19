use crate::demo::{run_demo, run_team_report, DemoArgs, TeamReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use teampulse::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "TeamPulse",
    about = "Score team assessments and generate insight reports from the command line",
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
    /// Generate a team report from a survey export
    Team {
        #[command(subcommand)]
        command: TeamCommand,
    },
    /// Run an end-to-end CLI demo covering intake, scoring, and reporting
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TeamCommand {
    /// Aggregate the latest submission per participant into a team report
    Report(TeamReportArgs),
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
        Command::Team {
            command: TeamCommand::Report(args),
        } => run_team_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
